use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tallyapp::model::Category;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    bin_name = "tally",
    version,
    about = "Exercise log and weighted decision picker",
    long_about = None,
    after_help = "Running `tally` with no command lists the exercise log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $TALLY_DATA_DIR, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Log(LogCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Picker(PickerCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// Log an exercise session
    #[command(alias = "a", display_order = 1)]
    Add(AddArgs),

    /// List logged sessions, newest first
    #[command(alias = "ls", display_order = 2)]
    Log(FilterArgs),

    /// Change fields of a logged session
    #[command(display_order = 3)]
    Edit(EditArgs),

    /// Delete a logged session
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Entry id (a unique prefix is enough)
        id: String,
    },

    /// Today, the last days and personal bests
    #[command(display_order = 5)]
    Stats {
        /// Number of days in the chart (default from config)
        #[arg(short, long)]
        days: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export all sessions to a JSON file
    #[command(display_order = 20)]
    Export {
        /// Destination file (default: exercise-tracker-export-<today>.json)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Merge sessions from a JSON export, skipping ids already present
    #[command(display_order = 21)]
    Import {
        /// File to import
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum PickerCommands {
    /// Show or edit the saved choices
    #[command(display_order = 30)]
    Choices {
        #[command(subcommand)]
        action: Option<ChoiceCommands>,
    },

    /// Pick one saved choice at random, by weight
    #[command(display_order = 31)]
    Spin,

    /// Show recent picks
    #[command(display_order = 32)]
    History {
        /// How many picks to show (default from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List or load built-in choice presets
    #[command(display_order = 33)]
    Presets {
        #[command(subcommand)]
        action: Option<PresetCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show, set or toggle the color theme
    #[command(display_order = 40)]
    Theme {
        #[arg(value_enum)]
        value: Option<ThemeArg>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChoiceCommands {
    /// List saved choices
    List,

    /// Append a choice
    Add {
        label: String,

        /// Relative weight, greater than 0
        #[arg(default_value_t = 1.0)]
        weight: f64,
    },

    /// Remove the choice at a position (as shown by `choices list`)
    Remove { position: usize },

    /// Replace all choices with LABEL=WEIGHT pairs; invalid pairs are dropped
    Save {
        #[arg(required = true, num_args = 1.., value_name = "LABEL=WEIGHT")]
        pairs: Vec<String>,
    },

    /// Remove all choices and forget the loaded preset
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// List built-in presets
    List,

    /// Overwrite the saved choices with a preset
    Use {
        /// Preset name (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// What you did
    #[arg(short, long)]
    pub activity: String,

    /// Duration in minutes
    #[arg(short = 'm', long = "duration")]
    pub duration: u32,

    /// Strength, Cardio, Mobility or Other
    #[arg(short, long, default_value = "Other")]
    pub category: Category,

    /// Day of the session, YYYY-MM-DD (default: today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    #[arg(long)]
    pub sets: Option<u32>,

    #[arg(long)]
    pub reps: Option<u32>,

    /// Weight lifted, in lbs
    #[arg(short, long)]
    pub weight: Option<f64>,

    #[arg(short, long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive text in activity or notes
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(short, long)]
    pub category: Option<Category>,

    /// Earliest day, inclusive
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<NaiveDate>,

    /// Latest day, inclusive
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Entry id (a unique prefix is enough)
    pub id: String,

    #[arg(short, long)]
    pub activity: Option<String>,

    #[arg(short = 'm', long = "duration")]
    pub duration: Option<u32>,

    #[arg(short, long)]
    pub category: Option<Category>,

    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    #[arg(long, conflicts_with = "clear_sets")]
    pub sets: Option<u32>,

    #[arg(long, conflicts_with = "clear_reps")]
    pub reps: Option<u32>,

    #[arg(short, long, conflicts_with = "clear_weight")]
    pub weight: Option<f64>,

    #[arg(short, long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,

    #[arg(long)]
    pub clear_sets: bool,

    #[arg(long)]
    pub clear_reps: bool,

    #[arg(long)]
    pub clear_weight: bool,

    #[arg(long)]
    pub clear_notes: bool,
}
