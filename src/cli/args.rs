//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterd init --config <path>
//! - rosterd serve --config <path>
//! - rosterd seed --config <path>
//! - rosterd student <action> --url <base>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterd - a self-hostable student records service
#[derive(Parser, Debug)]
#[command(name = "rosterd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file and create an empty data file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterd.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterd.json")]
        config: PathBuf,
    },

    /// Reset the store and load the sample records
    Seed {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterd.json")]
        config: PathBuf,
    },

    /// Talk to a running server
    Student {
        /// Base URL of the server
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,

        #[command(subcommand)]
        action: StudentAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum StudentAction {
    /// List all students
    List,

    /// Show one student
    Show { id: i64 },

    /// Create a student
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        student_id: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Update fields on a student. The student ID itself cannot change.
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a student
    Remove { id: i64 },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
