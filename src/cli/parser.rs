use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for workledger
/// CLI application to track working hours, overtime and leave with SQLite
#[derive(Parser)]
#[command(
    name = "workledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track working hours, overtime balance and vacation days using SQLite",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
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

    /// Add or update the work log entry for a date
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,

        /// Break duration in minutes
        #[arg(long = "break", help = "Break duration in minutes")]
        break_minutes: Option<i64>,

        /// Free-text note, not used in any calculation
        #[arg(long = "notes", help = "Free-text note for the day")]
        notes: Option<String>,
    },

    /// Delete the work log entry for a date
    Del {
        date: String,
    },

    /// List per-day reports (worked, norm, delta)
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, A:B)"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's record")]
        now: bool,
    },

    /// Show the ISO week aggregate containing a date
    Week {
        #[arg(long, help = "Any date inside the week (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Show the yearly report: weekly aggregates and cumulative balance
    Year {
        #[arg(long, help = "Calendar year (default: current year)")]
        year: Option<i32>,
    },

    /// Show or set the overtime carry-over for a year
    Carryover {
        #[arg(long, help = "Calendar year (default: current year)")]
        year: Option<i32>,

        #[arg(
            long = "set",
            allow_hyphen_values = true,
            help = "Set the carry-over in signed minutes (e.g. -120)"
        )]
        set: Option<i64>,

        #[arg(
            long = "set-time",
            allow_hyphen_values = true,
            conflicts_with = "set",
            help = "Set the carry-over as signed H:MM (e.g. -2:00)"
        )]
        set_time: Option<String>,
    },

    /// Manage the leave balance and leave entries
    Leave {
        #[command(subcommand)]
        action: LeaveCommands,
    },

    /// Export work log data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the internal audit log table
    Audit {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum LeaveCommands {
    /// Create or update the leave balance for a year
    Set {
        #[arg(long, help = "Calendar year (default: current year)")]
        year: Option<i32>,

        #[arg(long = "base-days", help = "Base entitlement in days")]
        base_days: Option<f64>,

        #[arg(long = "purchased-days", help = "Additional purchased days")]
        purchased_days: Option<f64>,

        #[arg(
            long = "carry-over-hours",
            allow_hyphen_values = true,
            help = "Signed hours carried over from previous years"
        )]
        carry_over_hours: Option<f64>,

        #[arg(
            long = "adjustment-hours",
            allow_hyphen_values = true,
            help = "Signed manual correction in hours"
        )]
        adjustment_hours: Option<f64>,

        #[arg(long = "hours-per-day", help = "Hours/days conversion factor (default 8)")]
        hours_per_day: Option<f64>,
    },

    /// Log a leave absence
    Add {
        /// Date of the absence (YYYY-MM-DD)
        date: String,

        /// Hours of absence (positive decimal)
        #[arg(allow_hyphen_values = true)]
        hours: f64,

        #[arg(long, help = "Optional description")]
        description: Option<String>,
    },

    /// Delete a leave entry by id
    Del {
        id: i64,
    },

    /// List leave entries for a year
    List {
        #[arg(long, help = "Calendar year (default: current year)")]
        year: Option<i32>,
    },

    /// Show the leave statistics for a year
    Stats {
        #[arg(long, help = "Calendar year (default: current year)")]
        year: Option<i32>,
    },
}
