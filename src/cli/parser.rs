use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for timereport
#[derive(Parser)]
#[command(
    name = "timereport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily arrival, leaving and break times; chart worked time and overtime",
    long_about = None
)]
pub struct Cli {
    /// Override the record store file (useful for tests or a second store)
    #[arg(global = true, long = "records")]
    pub records: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Date range selection shared by the range commands.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First date (YYYY.MM.DD., YYYY-MM-DD or "today"); default today-30
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Last date, inclusive; default today
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Whole period instead of --from/--to: YYYY, YYYY-MM or YYYY-MM-DD
    #[arg(long, short, conflicts_with_all = ["from", "to"])]
    pub period: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty record store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or update the user information
    User {
        #[arg(long)]
        name: Option<String>,

        #[arg(long = "user-id")]
        user_id: Option<String>,

        #[arg(long = "birth-date")]
        birth_date: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long = "sap-id")]
        sap_id: Option<String>,
    },

    /// Add or replace the record of a day
    Add {
        /// Date of the record (YYYY.MM.DD., YYYY-MM-DD or "today")
        date: String,

        /// Arrival time (HH:MM)
        #[arg(long = "from", help = "Arrival time (HH:MM)")]
        from: String,

        /// Leaving time (HH:MM)
        #[arg(long = "to", help = "Leaving time (HH:MM)")]
        to: String,

        /// Break taken during the day (HH:MM)
        #[arg(long = "break", help = "Break duration (HH:MM), default 00:00")]
        break_time: Option<String>,
    },

    /// Show the record of one day and its overtime
    Show {
        /// Date (YYYY.MM.DD., YYYY-MM-DD or "today")
        date: String,
    },

    /// List every day of a range (at most 31 days)
    List {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Print the aggregate metrics of a range (at most 31 days)
    Metrics {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, help = "Print the metrics as JSON")]
        json: bool,
    },

    /// Draw the working time chart of a range (at most 31 days)
    Chart {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, help = "Print the draw plan as JSON instead of drawing it")]
        json: bool,

        #[arg(
            long,
            default_value_t = 10,
            value_name = "MINUTES",
            help = "Axis minutes per character column"
        )]
        scale: u16,

        #[arg(long = "no-color", help = "Draw without ANSI colors")]
        no_color: bool,
    },

    /// Inspect or regenerate the time axis cache
    Axis {
        #[arg(long, help = "Rewrite the cache file even when it is valid")]
        rebuild: bool,

        #[arg(long, help = "Print the tick labels of the configured window")]
        print: bool,
    },

    /// Export the records of a range to a JSON report
    Export {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
