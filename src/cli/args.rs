//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb add --id <id> --name <name> --age <n> --math <f> --english <f> --chinese <f>
//! - rosterdb delete --id <id>
//! - rosterdb update --id <id> --field <field> --value <v>
//! - rosterdb list
//! - rosterdb find (--id <id> | --name <name>)
//! - rosterdb sort [--key <key>] [--direction <asc|desc>]
//! - rosterdb stats

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::record::Subject;
use crate::sorter::{SortDirection, SortKey};

/// rosterdb - A bounded student roster with a fixed-width binary store
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./rosterdb.json")]
    pub config: PathBuf,

    /// Data file, overriding the configured one
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Log verbosity on stderr (-v info, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new student record
    Add(AddArgs),

    /// Delete a student by id
    Delete {
        #[arg(long)]
        id: String,
    },

    /// Change one field of a student
    Update {
        #[arg(long)]
        id: String,

        #[arg(long, value_enum)]
        field: FieldArg,

        /// New value, parsed according to the field
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },

    /// List all students in roster order
    List,

    /// Find students by id or by name
    Find {
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Reorder the roster and save the new order
    Sort {
        #[arg(long, value_enum, default_value_t = KeyArg::Average)]
        key: KeyArg,

        #[arg(long, value_enum, default_value_t = DirectionArg::Asc)]
        direction: DirectionArg,
    },

    /// Print aggregate statistics
    Stats,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long, allow_hyphen_values = true)]
    pub age: i32,

    #[arg(long, allow_hyphen_values = true)]
    pub math: f32,

    #[arg(long, allow_hyphen_values = true)]
    pub english: f32,

    #[arg(long, allow_hyphen_values = true)]
    pub chinese: f32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArg {
    Name,
    Age,
    Math,
    English,
    Chinese,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyArg {
    Average,
    Math,
    English,
    Chinese,
    Age,
    Id,
    Name,
}

impl From<KeyArg> for SortKey {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Average => SortKey::Average,
            KeyArg::Math => SortKey::Score(Subject::Math),
            KeyArg::English => SortKey::Score(Subject::English),
            KeyArg::Chinese => SortKey::Score(Subject::Chinese),
            KeyArg::Age => SortKey::Age,
            KeyArg::Id => SortKey::Id,
            KeyArg::Name => SortKey::Name,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
