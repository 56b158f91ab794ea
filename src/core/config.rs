use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Print the effective configuration, defaults included.
    pub fn print_effective(cfg: &Config) -> AppResult<()> {
        print!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Editor precedence: `--editor`, `$EDITOR`, then a platform default.
    pub fn resolve_editor(editor: Option<&str>) -> String {
        editor
            .map(str::to_string)
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            })
    }

    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let ed = Self::resolve_editor(editor);

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }
        Ok(())
    }
}
