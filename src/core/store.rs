//! Store - SQLite backend
//!
//! One connection, opened at startup and borrowed by every handler.
//!
//! # Key Points
//! - Foreign keys enforced: roles need a department, employees need a role
//! - Manager references are nullable; self-reference and cycles are allowed
//! - Department names and role titles are not required to be unique
//! - The only mutation is reassigning an employee's role

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OpenFlags};

use super::record::{Department, EmployeeChoice, EmployeeDetails, RoleChoice, RoleDetails};

/// Database storage
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create a database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open database")?;

        conn.execute_batch(
            "PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000; PRAGMA foreign_keys=ON;",
        )?;

        let store = Self { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS department (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS role (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                salary REAL NOT NULL,
                department_id INTEGER NOT NULL REFERENCES department(id)
            );

            CREATE TABLE IF NOT EXISTS employee (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                role_id INTEGER NOT NULL REFERENCES role(id),
                manager_id INTEGER REFERENCES employee(id)
            );
            "#,
        )?;

        Ok(())
    }

    /// All departments, for listing and selection prompts
    pub fn departments(&self) -> Result<Vec<Department>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM department")?;

        let departments = stmt
            .query_map([], |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(departments)
    }

    /// All roles, for selection prompts
    pub fn role_choices(&self) -> Result<Vec<RoleChoice>> {
        let mut stmt = self.conn.prepare("SELECT id, title FROM role")?;

        let roles = stmt
            .query_map([], |row| {
                Ok(RoleChoice {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(roles)
    }

    /// All employees, for selection prompts (manager candidates, role updates)
    pub fn employee_choices(&self) -> Result<Vec<EmployeeChoice>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, first_name, last_name FROM employee")?;

        let employees = stmt
            .query_map([], |row| {
                Ok(EmployeeChoice {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }

    /// Roles joined with their department name
    pub fn list_roles(&self) -> Result<Vec<RoleDetails>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT r.id, r.title, r.salary, d.name
            FROM role r
            JOIN department d ON r.department_id = d.id
            "#,
        )?;

        let roles = stmt
            .query_map([], |row| {
                Ok(RoleDetails {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    salary: row.get(2)?,
                    department: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(roles)
    }

    /// Employees with role, department, and manager names resolved.
    /// The manager column is NULL for employees without one.
    pub fn list_employees(&self) -> Result<Vec<EmployeeDetails>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT
                e.id,
                e.first_name,
                e.last_name,
                r.title,
                d.name,
                r.salary,
                m.first_name || ' ' || m.last_name
            FROM employee e
            LEFT JOIN role r ON e.role_id = r.id
            LEFT JOIN department d ON r.department_id = d.id
            LEFT JOIN employee m ON e.manager_id = m.id
            ORDER BY e.id
            "#,
        )?;

        let employees = stmt
            .query_map([], |row| {
                Ok(EmployeeDetails {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    title: row.get(3)?,
                    department: row.get(4)?,
                    salary: row.get(5)?,
                    manager: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }

    /// Insert a department, returning its id
    pub fn insert_department(&self, name: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO department (name) VALUES (?1)", params![name])
            .context("Failed to insert department")?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a role, returning its id
    pub fn insert_role(&self, title: &str, salary: f64, department_id: i64) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)",
                params![title, salary, department_id],
            )
            .context("Failed to insert role")?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Insert an employee, returning their id
    pub fn insert_employee(
        &self,
        first_name: &str,
        last_name: &str,
        role_id: i64,
        manager_id: Option<i64>,
    ) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO employee (first_name, last_name, role_id, manager_id) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![first_name, last_name, role_id, manager_id],
            )
            .context("Failed to insert employee")?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Reassign an employee's role, returning the affected-row count.
    /// Re-writing the same role is not treated as an error.
    pub fn update_employee_role(&self, employee_id: i64, role_id: i64) -> Result<usize> {
        let updated = self
            .conn
            .execute(
                "UPDATE employee SET role_id = ?1 WHERE id = ?2",
                params![role_id, employee_id],
            )
            .context("Failed to update employee role")?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list_departments() -> Result<()> {
        let store = Store::open_memory()?;

        store.insert_department("Engineering")?;

        let departments = store.departments()?;
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].name, "Engineering");

        Ok(())
    }

    #[test]
    fn test_role_round_trip() -> Result<()> {
        let store = Store::open_memory()?;

        let dept_id = store.insert_department("Engineering")?;
        store.insert_role("Engineer", 95000.0, dept_id)?;

        let roles = store.list_roles()?;
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].title, "Engineer");
        assert_eq!(roles[0].salary, 95000.0);
        assert_eq!(roles[0].department, "Engineering");

        Ok(())
    }

    #[test]
    fn test_employee_round_trip_without_manager() -> Result<()> {
        let store = Store::open_memory()?;

        let dept_id = store.insert_department("Engineering")?;
        let role_id = store.insert_role("Engineer", 95000.0, dept_id)?;
        store.insert_employee("Ada", "Lovelace", role_id, None)?;

        let employees = store.list_employees()?;
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].first_name, "Ada");
        assert_eq!(employees[0].last_name, "Lovelace");
        assert_eq!(employees[0].title, "Engineer");
        assert_eq!(employees[0].department, "Engineering");
        assert_eq!(employees[0].salary, 95000.0);
        assert_eq!(employees[0].manager, None);

        Ok(())
    }

    #[test]
    fn test_manager_name_resolved() -> Result<()> {
        let store = Store::open_memory()?;

        let dept_id = store.insert_department("Engineering")?;
        let role_id = store.insert_role("Engineer", 95000.0, dept_id)?;
        let manager_id = store.insert_employee("Grace", "Hopper", role_id, None)?;
        store.insert_employee("Ada", "Lovelace", role_id, Some(manager_id))?;

        let employees = store.list_employees()?;
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].first_name, "Ada");
        assert_eq!(employees[1].manager, Some("Grace Hopper".to_string()));

        Ok(())
    }

    #[test]
    fn test_update_employee_role_keeps_id() -> Result<()> {
        let store = Store::open_memory()?;

        let dept_id = store.insert_department("Engineering")?;
        let engineer = store.insert_role("Engineer", 95000.0, dept_id)?;
        let senior = store.insert_role("Senior Engineer", 120000.0, dept_id)?;
        let ada = store.insert_employee("Ada", "Lovelace", engineer, None)?;

        let updated = store.update_employee_role(ada, senior)?;
        assert_eq!(updated, 1);

        let employees = store.list_employees()?;
        assert_eq!(employees[0].id, ada);
        assert_eq!(employees[0].title, "Senior Engineer");

        Ok(())
    }

    #[test]
    fn test_reassigning_same_role_rewrites() -> Result<()> {
        let store = Store::open_memory()?;

        let dept_id = store.insert_department("Engineering")?;
        let role_id = store.insert_role("Engineer", 95000.0, dept_id)?;
        let ada = store.insert_employee("Ada", "Lovelace", role_id, None)?;

        // No no-op detection: same-role assignment still counts as one write
        let updated = store.update_employee_role(ada, role_id)?;
        assert_eq!(updated, 1);

        Ok(())
    }

    #[test]
    fn test_employees_ordered_by_id() -> Result<()> {
        let store = Store::open_memory()?;

        let dept_id = store.insert_department("Engineering")?;
        let role_id = store.insert_role("Engineer", 95000.0, dept_id)?;
        store.insert_employee("Ada", "Lovelace", role_id, None)?;
        store.insert_employee("Grace", "Hopper", role_id, None)?;
        store.insert_employee("Alan", "Turing", role_id, None)?;

        let employees = store.list_employees()?;
        let ids: Vec<i64> = employees.iter().map(|e| e.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);

        Ok(())
    }

    #[test]
    fn test_role_requires_existing_department() -> Result<()> {
        let store = Store::open_memory()?;

        let result = store.insert_role("Engineer", 95000.0, 999);
        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn test_employee_requires_existing_role() -> Result<()> {
        let store = Store::open_memory()?;

        let result = store.insert_employee("Ada", "Lovelace", 999, None);
        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn test_manager_self_reference_allowed() -> Result<()> {
        let store = Store::open_memory()?;

        let dept_id = store.insert_department("Engineering")?;
        let role_id = store.insert_role("Engineer", 95000.0, dept_id)?;
        let ada = store.insert_employee("Ada", "Lovelace", role_id, None)?;

        // Permissive by design decision: an employee may manage themselves
        let updated = store
            .conn
            .execute("UPDATE employee SET manager_id = id WHERE id = ?1", [ada])?;
        assert_eq!(updated, 1);

        let employees = store.list_employees()?;
        assert_eq!(employees[0].manager, Some("Ada Lovelace".to_string()));

        Ok(())
    }

    #[test]
    fn test_duplicate_department_names_allowed() -> Result<()> {
        let store = Store::open_memory()?;

        store.insert_department("Engineering")?;
        store.insert_department("Engineering")?;

        assert_eq!(store.departments()?.len(), 2);

        Ok(())
    }

    #[test]
    fn test_empty_listings() -> Result<()> {
        let store = Store::open_memory()?;

        assert!(store.list_employees()?.is_empty());
        assert!(store.list_roles()?.is_empty());
        assert!(store.departments()?.is_empty());
        assert!(store.role_choices()?.is_empty());
        assert!(store.employee_choices()?.is_empty());

        Ok(())
    }

    #[test]
    fn test_reopen_persists() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("staff.db");

        {
            let store = Store::open(&path)?;
            let dept_id = store.insert_department("Engineering")?;
            store.insert_role("Engineer", 95000.0, dept_id)?;
        }

        let store = Store::open(&path)?;
        assert_eq!(store.list_roles()?.len(), 1);

        Ok(())
    }
}
