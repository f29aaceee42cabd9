//! Department handlers: View All Departments, Add Department

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::core::store::Store;

use super::print_table;

/// List every department
pub fn view_all(store: &Store) -> Result<()> {
    let departments = store.departments()?;
    print_table(&departments);
    Ok(())
}

/// Prompt for a new department and insert it.
/// Names are not checked for uniqueness; duplicates are accepted.
pub fn add(store: &Store) -> Result<()> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("What is the name of the new department?")
        .allow_empty(true)
        .interact_text()?;

    store.insert_department(&name)?;

    println!("{} Department {} added", "✓".green(), name);
    Ok(())
}
