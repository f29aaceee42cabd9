//! staffbook - employee, role, and department tracker
//!
//! Menu-driven CLI over an embedded SQLite database.
//!
//! # Key Concepts
//!
//! - **Three entities**: departments own roles, roles are held by employees,
//!   employees may report to another employee
//! - **One store handle**: the SQLite connection is opened once at startup
//!   and passed into every handler, never ambient
//! - **Menu loop**: an explicit `loop` that runs one handler at a time and
//!   re-displays the menu after each, until "Exit"

pub mod cli;
pub mod config;
pub mod core;
pub mod server;

pub use crate::core::record::{
    Department, EmployeeChoice, EmployeeDetails, RoleChoice, RoleDetails,
};
pub use crate::core::store::Store;
