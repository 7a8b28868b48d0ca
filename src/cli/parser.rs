use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ponto
/// CLI punch clock over a local JSON key-value store
#[derive(Parser)]
#[command(
    name = "ponto",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch-clock CLI: check in and out, track lunch breaks, manage a demo roster",
    long_about = None
)]
pub struct Cli {
    /// Override storage directory (useful for tests or portable setups)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, storage and seed roster
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Log in with email and password
    Login {
        /// Registered email
        email: String,

        /// Password (seeded demo users accept 123456)
        password: String,
    },

    /// Log out, clearing the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Record the next punch of the workday cycle
    Punch {
        #[arg(long, help = "Punch location (defaults to the configured one)")]
        location: Option<String>,

        /// Latitude of the punch
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the punch
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },

    /// Show today's punches and the next expected action
    Status,

    /// List recent punch records
    History {
        #[arg(long, help = "Show every user's records (admin only)")]
        all: bool,

        #[arg(long, help = "Maximum rows to show (default from config)")]
        limit: Option<usize>,
    },

    /// View or manage the roster
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show the course catalogue
    Courses,

    /// Show a teaching schedule
    Schedule {
        #[arg(long = "user", help = "User id (defaults to the logged-in user)")]
        user: Option<String>,
    },

    /// Export punch history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export every user's records (admin only)")]
        all: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file if present")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// List all roster entries
    List,

    /// Add a user to the roster (admin only)
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        department: String,

        /// Access level: admin or user
        #[arg(long, default_value = "user")]
        role: String,

        #[arg(long)]
        password: Option<String>,

        /// Comma-separated course names
        #[arg(long, value_delimiter = ',')]
        courses: Option<Vec<String>>,
    },
}
