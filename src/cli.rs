use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hbnb")]
#[command(about = "Create, inspect and edit HBnB objects kept in a JSON snapshot file")]
#[command(version)]
pub struct Cli {
    /// YAML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot file (overrides config and HBNB_FILE_PATH)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Create a new instance and print its id
    Create { class: String },

    /// Print one instance
    Show { class: String, id: String },

    /// Delete one instance
    Destroy { class: String, id: String },

    /// Print every instance, or every instance of one class
    All { class: Option<String> },

    /// Set one attribute on an instance
    Update {
        class: String,
        id: String,
        attribute: String,
        value: String,
    },

    /// Count the instances of a class
    Count { class: String },
}
