use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "addrbook", version, about = "Contact book with pluggable storage")]
pub struct Cli {
    /// Storage medium (json, txt, mem) are available
    #[arg(long, env = "STORAGE_MEDIUM", default_value_t = String::from("json"))]
    pub storage: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact tag (school, work, gym)
        #[arg(long)]
        tag: Option<String>,
    },
    /// List contacts
    List {
        /// Sort ordering (default is unsorted)
        #[arg(long)]
        sort: Option<SortKey>,

        /// List only specific tags
        #[arg(long)]
        tag: Option<String>,

        /// Reverse order
        #[arg(short, long)]
        reverse: bool,
    },
    /// Delete a contact by name
    /// provide optional number in cases where name matches multiple contacts
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,

        /// Contact number to delete
        #[arg(long)]
        phone: Option<String>,
    },
    /// Print the path the current storage is bound to
    Path,
}

/// Supported sort keys
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SortKey {
    Name,
    Email,
    Created,
    Updated,
}
