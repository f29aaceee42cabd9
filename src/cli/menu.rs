//! The menu loop
//!
//! One handler runs at a time; the menu is re-displayed after the handler
//! finishes, success or failure. Handler errors are logged at the loop
//! boundary and never stop the loop. The only way out is "Exit".

use std::fmt;

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::core::store::Store;

use super::{departments, employees, roles};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewEmployees,
    AddEmployee,
    UpdateEmployeeRole,
    ViewRoles,
    AddRole,
    ViewDepartments,
    AddDepartment,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewEmployees,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::ViewRoles,
        MenuAction::AddRole,
        MenuAction::ViewDepartments,
        MenuAction::AddDepartment,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ViewEmployees => "View All Employees",
            MenuAction::AddEmployee => "Add Employee",
            MenuAction::UpdateEmployeeRole => "Update Employee Role",
            MenuAction::ViewRoles => "View All Roles",
            MenuAction::AddRole => "Add Role",
            MenuAction::ViewDepartments => "View All Departments",
            MenuAction::AddDepartment => "Add Department",
            MenuAction::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Run the menu loop until the operator selects Exit
pub fn run(store: &Store) -> Result<()> {
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&MenuAction::ALL)
            .default(0)
            .interact()?;
        let action = MenuAction::ALL[choice];

        if action == MenuAction::Exit {
            println!("Goodbye!");
            return Ok(());
        }

        if let Err(e) = dispatch(action, store) {
            eprintln!("{} {e:#}", "Error:".red().bold());
        }
    }
}

fn dispatch(action: MenuAction, store: &Store) -> Result<()> {
    match action {
        MenuAction::ViewEmployees => employees::view_all(store),
        MenuAction::AddEmployee => employees::add(store),
        MenuAction::UpdateEmployeeRole => employees::update_role(store),
        MenuAction::ViewRoles => roles::view_all(store),
        MenuAction::AddRole => roles::add(store),
        MenuAction::ViewDepartments => departments::view_all(store),
        MenuAction::AddDepartment => departments::add(store),
        MenuAction::Exit => Ok(()),
    }
}
