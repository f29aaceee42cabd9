//! CLI module - argument parsing, the menu loop, and the action handlers

use clap::Parser;
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub mod departments;
pub mod employees;
pub mod menu;
pub mod roles;

/// staffbook - employee, role, and department tracker
///
/// Interactive menu over an embedded SQLite database.
#[derive(Parser, Debug)]
#[command(name = "staffbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file path
    #[arg(long, env = "STAFFBOOK_DB")]
    pub db: Option<PathBuf>,

    /// Config file path
    #[arg(short, long, env = "STAFFBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port for the placeholder HTTP listener
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Do not start the HTTP listener
    #[arg(long)]
    pub no_server: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Render rows as a table. An empty listing still prints the header row.
pub(crate) fn print_table<T: Tabled>(rows: &[T]) {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("{table}");
}
