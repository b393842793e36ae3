use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::location::Coordinate;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for geotask:
/// pin to-dos to places and get told when you are close to one.
#[derive(Parser)]
#[command(
    name = "geotask",
    version = env!("CARGO_PKG_VERSION"),
    about = "A location-aware to-do CLI: pin tasks to places and get notified when you are nearby",
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

/// `--lat/--lon` pair shared by several commands.
#[derive(Args, Debug, Clone, Default)]
pub struct LatLon {
    #[arg(long, allow_hyphen_values = true, requires = "lon", help = "Latitude in decimal degrees")]
    pub lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true, requires = "lat", help = "Longitude in decimal degrees")]
    pub lon: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a task pinned to a place
    Add {
        /// What needs doing, e.g. "Buy milk at the grocery store"
        text: String,

        #[command(flatten)]
        at: LatLon,

        #[arg(
            long = "at",
            value_name = "BOOKMARK",
            conflicts_with_all = ["lat", "lon", "here"],
            help = "Pin the task to a saved place"
        )]
        bookmark: Option<String>,

        #[arg(
            long,
            conflicts_with_all = ["lat", "lon"],
            help = "Pin the task to the current position"
        )]
        here: bool,

        #[arg(long, short = 'c', help = "Category: shopping, work, health, errand, home, social, personal")]
        category: Option<String>,

        #[arg(long, short = 'p', help = "Priority: low, medium, high (or l/m/h)")]
        priority: Option<String>,

        #[arg(long = "no-suggest", help = "Do not derive category/priority from the text")]
        no_suggest: bool,

        #[arg(long, help = "Position source used with --here (file path or '-')")]
        source: Option<String>,
    },

    /// List tasks (open ones by default)
    List {
        #[arg(long, short = 'a', conflicts_with = "completed", help = "Include completed tasks")]
        all: bool,

        #[arg(long, help = "Show only completed tasks")]
        completed: bool,

        #[arg(
            long,
            value_name = "LAT,LON",
            allow_hyphen_values = true,
            help = "Add a distance column and sort by distance from this point"
        )]
        near: Option<String>,
    },

    /// Mark a task as done
    Done {
        id: i64,

        #[arg(long, help = "Reopen the task instead")]
        undo: bool,
    },

    /// Change a task
    Edit {
        id: i64,

        #[arg(long)]
        text: Option<String>,

        #[command(flatten)]
        at: LatLon,

        #[arg(long, short = 'c')]
        category: Option<String>,

        #[arg(long, short = 'p')]
        priority: Option<String>,
    },

    /// Delete a task by ID
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Manage saved places
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },

    /// Show open tasks near a position
    Nearby {
        #[command(flatten)]
        at: LatLon,

        #[arg(long, conflicts_with_all = ["lat", "lon"], help = "Use the current position")]
        here: bool,

        #[arg(long, short = 'r', help = "Search radius in meters (default from config)")]
        radius: Option<f64>,

        #[arg(long, help = "Also send a notification for each match")]
        notify: bool,

        #[arg(long, help = "Position source used with --here (file path or '-')")]
        source: Option<String>,
    },

    /// Print the current position
    Locate {
        #[arg(long, help = "Position source (file path or '-' for stdin)")]
        source: Option<String>,
    },

    /// Track the position and get notified when a task is nearby
    Watch {
        #[arg(long, help = "Position source (file path or '-' for stdin)")]
        source: Option<String>,

        #[arg(long, help = "Replay samples spaced by their timestamps")]
        realtime: bool,
    },

    /// Show the category, priority and next steps derived from a task text
    Suggest {
        text: String,

        #[arg(long, help = "Print the suggestion as JSON")]
        json: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'y', help = "Overwrite an existing file without asking")]
        yes: bool,
    },

    /// Export tasks
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'a', help = "Include completed tasks")]
        all: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum BookmarkAction {
    /// Save a named place
    Add {
        name: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// List saved places
    List,

    /// Remove a saved place
    Del { name: String },
}

impl LatLon {
    /// The validated coordinate, if both values were given.
    pub fn coordinate(&self) -> AppResult<Option<Coordinate>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Coordinate::validated(lat, lon).map(Some),
            _ => Ok(None),
        }
    }
}
