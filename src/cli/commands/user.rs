use crate::cli::parser::Commands;
use crate::config::{Config, UserInfo};
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::table::Table;

fn set_if(target: &mut String, value: &Option<String>) -> bool {
    match value {
        Some(v) => {
            *target = v.clone();
            true
        }
        None => false,
    }
}

fn print_user(user: &UserInfo) {
    header("User");
    let mut t = Table::new(&["Field", "Value"]);
    for (k, v) in [
        ("Name", &user.name),
        ("User ID", &user.user_id),
        ("Birth date", &user.birth_date),
        ("Department", &user.department),
        ("Position", &user.position),
        ("SAP ID", &user.sap_id),
    ] {
        t.add_row(vec![k.to_string(), v.clone()]);
    }
    print!("{}", t.render());
}

/// Show the user section, or update the given fields and save.
pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::User {
        name,
        user_id,
        birth_date,
        department,
        position,
        sap_id,
    } = cmd
    {
        let mut updated = cfg.clone();
        let u = &mut updated.user;
        let changed = [
            set_if(&mut u.name, name),
            set_if(&mut u.user_id, user_id),
            set_if(&mut u.birth_date, birth_date),
            set_if(&mut u.department, department),
            set_if(&mut u.position, position),
            set_if(&mut u.sap_id, sap_id),
        ]
        .contains(&true);

        if changed {
            if !is_test {
                updated.save()?;
            }
            success("User information saved.");
        }
        print_user(&updated.user);
    }
    Ok(())
}
