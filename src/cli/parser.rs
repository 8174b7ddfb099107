use crate::export::ExportFormat;
use crate::models::preset::{PatternPreset, RangePreset};
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftplanner
#[derive(Parser)]
#[command(
    name = "shiftplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan shift work with repeating patterns, keep a daily diary and estimate monthly salary",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Assign a shift type to a single day
    Shift {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Shift type: day, night, evening or off
        shift: String,
    },

    /// Apply, edit and inspect repeating shift patterns
    Pattern {
        #[command(subcommand)]
        action: PatternAction,
    },

    /// Write, show or remove diary entries
    Diary {
        #[command(subcommand)]
        action: DiaryAction,
    },

    /// List days with their shift and diary entry
    List {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD or a range like YYYY-MM:YYYY-MM (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "all", help = "Also list days without shift or diary entry")]
        all: bool,
    },

    /// Show the salary estimate of a month
    Salary {
        #[arg(long, short, help = "Month (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long = "daily", help = "Show the per-day breakdown")]
        daily: bool,
    },

    /// View or change the salary rules
    Rules {
        #[arg(long = "print", help = "Print the current salary rules")]
        print: bool,

        #[arg(
            long = "set",
            value_name = "KEY=VALUE",
            num_args = 1..,
            help = "Change rules, e.g. --set hourly_wage=12000 night_rate=50 (rates in percent)"
        )]
        set: Vec<String>,

        #[arg(long = "reset", help = "Restore the default salary rules")]
        reset: bool,
    },

    /// Remove every shift and pattern (diary entries are kept)
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the salary breakdown of a month
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Month (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

#[derive(Subcommand)]
pub enum PatternAction {
    /// Expand a repeating sequence over a date range
    Apply {
        #[arg(
            long,
            value_enum,
            conflicts_with = "sequence",
            required_unless_present = "sequence"
        )]
        preset: Option<PatternPreset>,

        #[arg(
            long,
            value_name = "SHIFTS",
            help = "Comma separated shift types, e.g. day,day,night,night,off,off"
        )]
        sequence: Option<String>,

        #[arg(long, value_enum, help = "Date range (default: custom when --from/--to are given, otherwise today)")]
        range: Option<RangePreset>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,
    },

    /// Move a pattern to new start/end dates
    Edit {
        /// Pattern id (or a unique prefix of it)
        id: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: String,
    },

    /// Show the pattern covering a date
    Show {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// List every stored pattern
    List,
}

#[derive(Subcommand)]
pub enum DiaryAction {
    /// Write the entry of a day (replaces any previous text)
    Set {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Entry text
        text: String,
    },

    /// Print the entry of a day
    Show {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Delete the entry of a day
    Remove {
        /// Date (YYYY-MM-DD)
        date: String,
    },
}
