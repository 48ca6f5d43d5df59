use crate::utils::date::MAX_EVENT_MINUTES;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Rendezvous
/// Plan dates, block out busy time and keep each other posted
#[derive(Parser)]
#[command(
    name = "rendezvous",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan dates, block out busy time, swap love notes and keep each other posted",
    long_about = None
)]
pub struct Cli {
    /// Use this SQLite database (selects the sqlite backend)
    #[arg(global = true, long = "db", conflicts_with = "blob")]
    pub db: Option<String>,

    /// Use this encoded state file (selects the blob backend)
    #[arg(global = true, long = "blob")]
    pub blob: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the storage and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Create a backup copy of the storage file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip instead of a plain copy")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Show or change the partner names
    Names {
        #[arg(
            long = "set",
            num_args = 2,
            value_names = ["FIRST", "SECOND"],
            help = "Save new partner names"
        )]
        set: Option<Vec<String>>,
    },

    /// Book a date (planned, or urgent with --urgent)
    Book {
        #[arg(long = "by", help = "Who is booking (one of the partner names)")]
        by: String,

        /// Date of the event (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long, default_value = "21:00")]
        time: String,

        /// Title of the date (required unless --urgent)
        #[arg(long)]
        title: Option<String>,

        #[arg(long, help = "Urgent booking, shown in its own list")]
        urgent: bool,

        #[arg(
            long,
            value_parser = clap::value_parser!(i64).range(1..=MAX_EVENT_MINUTES),
            help = "Duration in minutes (default from config)"
        )]
        minutes: Option<i64>,

        #[arg(long, help = "Free-text type, e.g. dinner, trip")]
        kind: Option<String>,
    },

    /// Edit a booked event
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New start time (HH:MM)")]
        time: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=MAX_EVENT_MINUTES))]
        minutes: Option<i64>,

        #[arg(long)]
        kind: Option<String>,
    },

    /// Toggle whether an event was attended
    Attend { id: i64 },

    /// Delete an event by id
    Del { id: i64 },

    /// Dashboard: upcoming urgent bookings and planned dates
    List {
        #[arg(long, help = "Include past events")]
        all: bool,
    },

    /// Everything on the calendar, blockouts included
    Calendar {
        #[arg(long, help = "Print the calendar feed as JSON")]
        json: bool,
    },

    /// Manage blocked-out time
    Block {
        #[command(subcommand)]
        action: BlockAction,
    },

    /// Send a love note
    Note {
        #[arg(long = "from")]
        from: String,

        message: String,
    },

    /// Read the love notes, newest first
    Notes,

    /// Send an emergency alert to your partner
    Alert {
        #[arg(long = "from")]
        from: String,

        message: Option<String>,
    },

    /// Show notifications (unread only unless --all)
    Inbox {
        #[arg(long, help = "Include notifications already read")]
        all: bool,

        #[arg(long = "for", value_name = "NAME", help = "Hide what NAME sent")]
        recipient: Option<String>,
    },

    /// Mark notifications as read
    Read {
        #[arg(required_unless_present = "all")]
        id: Option<i64>,

        #[arg(long, conflicts_with = "id", help = "Mark every unread notification")]
        all: bool,

        #[arg(long = "for", value_name = "NAME", requires = "all")]
        recipient: Option<String>,
    },

    /// Daily mood check-ins
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },

    /// Export or import the encoded state (blob backend)
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

#[derive(Subcommand)]
pub enum BlockAction {
    /// Block out time: a time range on one day, or whole days
    Add {
        title: String,

        #[arg(long, help = "Day the blockout starts (YYYY-MM-DD)")]
        date: String,

        #[arg(long, requires = "to", help = "Start time (HH:MM); omit for all-day")]
        from: Option<String>,

        #[arg(long, requires = "from", help = "End time (HH:MM)")]
        to: Option<String>,

        #[arg(
            long,
            conflicts_with = "from",
            help = "Last blocked day for all-day blockouts (YYYY-MM-DD)"
        )]
        until: Option<String>,

        #[arg(long, help = "Free-text type, e.g. work, travel")]
        kind: Option<String>,
    },

    /// List blockouts
    List,

    /// Delete a blockout by id
    Del { id: i64 },

    /// Check whether a slot is free
    Check {
        #[arg(long)]
        date: String,

        #[arg(long)]
        time: String,

        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=MAX_EVENT_MINUTES))]
        minutes: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum MoodAction {
    /// Log (or replace) today's check-in
    Add {
        #[arg(long)]
        partner: String,

        #[arg(long, help = "Day of the check-in (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        energy: u8,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        desire: u8,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        stress: u8,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Show check-ins
    List {
        #[arg(long, help = "Only this day (YYYY-MM-DD)")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum StateAction {
    /// Print the encoded state
    Export,

    /// Replace the state with an encoded string
    Import { data: String },
}
