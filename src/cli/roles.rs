//! Role handlers: View All Roles, Add Role

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::core::store::Store;

use super::print_table;

/// List every role with its department name
pub fn view_all(store: &Store) -> Result<()> {
    let roles = store.list_roles()?;
    print_table(&roles);
    Ok(())
}

/// Prompt for a new role and insert it
pub fn add(store: &Store) -> Result<()> {
    let departments = store.departments()?;
    if departments.is_empty() {
        bail!("No departments exist yet. Add a department first.");
    }

    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt("What is the title of the new role?")
        .allow_empty(true)
        .interact_text()?;

    // Invalid input re-prompts inline; only the parsed value leaves the prompt
    let salary_text: String = Input::with_theme(&theme)
        .with_prompt("What is the salary of this new role?")
        .validate_with(|input: &String| parse_salary(input).map(|_| ()))
        .interact_text()?;
    let salary = parse_salary(&salary_text).map_err(anyhow::Error::msg)?;

    let department_names: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
    let department_idx = Select::with_theme(&theme)
        .with_prompt("Which department is this role in?")
        .items(&department_names)
        .default(0)
        .interact()?;

    store.insert_role(&title, salary, departments[department_idx].id)?;

    println!("{} Role {} added", "✓".green(), title);
    Ok(())
}

/// Salary must be a finite, non-negative decimal
pub(crate) fn parse_salary(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| String::from("Please enter a valid number"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(String::from("Salary must be a non-negative number"));
    }

    Ok(value)
}
