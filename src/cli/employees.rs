//! Employee handlers: View All Employees, Add Employee, Update Employee Role

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::core::store::Store;

use super::print_table;

/// List every employee with role, department, salary, and manager resolved
pub fn view_all(store: &Store) -> Result<()> {
    let employees = store.list_employees()?;
    print_table(&employees);
    Ok(())
}

/// Prompt for a new employee and insert them
pub fn add(store: &Store) -> Result<()> {
    // Reference data first; the prompts below select from it
    let roles = store.role_choices()?;
    if roles.is_empty() {
        bail!("No roles exist yet. Add a role first.");
    }
    let managers = store.employee_choices()?;

    let theme = ColorfulTheme::default();

    let first_name: String = Input::with_theme(&theme)
        .with_prompt("What is the employee's first name?")
        .allow_empty(true)
        .interact_text()?;

    let last_name: String = Input::with_theme(&theme)
        .with_prompt("What is the employee's last name?")
        .allow_empty(true)
        .interact_text()?;

    let role_titles: Vec<&str> = roles.iter().map(|r| r.title.as_str()).collect();
    let role_idx = Select::with_theme(&theme)
        .with_prompt("What is the employee's role?")
        .items(&role_titles)
        .default(0)
        .interact()?;

    // "None" leads the list and maps to a null manager reference
    let mut manager_labels = vec!["None".to_string()];
    manager_labels.extend(managers.iter().map(|m| m.full_name()));
    let manager_idx = Select::with_theme(&theme)
        .with_prompt("Who is the employee's manager?")
        .items(&manager_labels)
        .default(0)
        .interact()?;
    let manager_id = if manager_idx == 0 {
        None
    } else {
        Some(managers[manager_idx - 1].id)
    };

    store.insert_employee(&first_name, &last_name, roles[role_idx].id, manager_id)?;

    println!(
        "{} Employee {} {} added",
        "✓".green(),
        first_name,
        last_name
    );
    Ok(())
}

/// Prompt for an employee and a role, then reassign
pub fn update_role(store: &Store) -> Result<()> {
    let employees = store.employee_choices()?;
    if employees.is_empty() {
        bail!("No employees exist yet. Add an employee first.");
    }
    let roles = store.role_choices()?;
    if roles.is_empty() {
        bail!("No roles exist yet. Add a role first.");
    }

    let theme = ColorfulTheme::default();

    let employee_names: Vec<String> = employees.iter().map(|e| e.full_name()).collect();
    let employee_idx = Select::with_theme(&theme)
        .with_prompt("Which employee's role do you want to update?")
        .items(&employee_names)
        .default(0)
        .interact()?;

    let role_titles: Vec<&str> = roles.iter().map(|r| r.title.as_str()).collect();
    let role_idx = Select::with_theme(&theme)
        .with_prompt("Which role do you want to assign the selected employee?")
        .items(&role_titles)
        .default(0)
        .interact()?;

    store.update_employee_role(employees[employee_idx].id, roles[role_idx].id)?;

    println!("{} Employee's role updated", "✓".green());
    Ok(())
}
