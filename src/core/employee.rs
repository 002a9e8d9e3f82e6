use crate::core::validate::require_name;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::employees as q;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeeInput};
use crate::utils::time::created_at_stamp;
use chrono::FixedOffset;

const ENTITY: &str = "Employee";

pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn create(pool: &mut DbPool, input: &EmployeeInput, offset: &FixedOffset) -> AppResult<i64> {
        require_name("full_name", &input.full_name)?;

        pool.with_tx(|tx| {
            if q::employee_name_taken(tx, &input.full_name, None)? {
                return Err(AppError::DuplicateName {
                    entity: ENTITY,
                    name: input.full_name.clone(),
                });
            }

            let id = q::insert_employee(tx, input, &created_at_stamp(offset))?;
            audit(tx, "add", &format!("employee #{}", id), &input.full_name);
            Ok(id)
        })
    }

    pub fn get(pool: &mut DbPool, id: i64) -> AppResult<Option<Employee>> {
        q::find_employee(&pool.conn, id)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<Employee>> {
        q::load_employees(&pool.conn)
    }

    /// Full-field update; the name must stay unique among the other employees.
    pub fn update(pool: &mut DbPool, id: i64, input: &EmployeeInput) -> AppResult<()> {
        require_name("full_name", &input.full_name)?;

        pool.with_tx(|tx| {
            if !q::employee_exists(tx, id)? {
                return Err(AppError::NotFound { entity: ENTITY, id });
            }
            if q::employee_name_taken(tx, &input.full_name, Some(id))? {
                return Err(AppError::DuplicateName {
                    entity: ENTITY,
                    name: input.full_name.clone(),
                });
            }

            q::update_employee(tx, id, input)?;
            audit(tx, "edit", &format!("employee #{}", id), &input.full_name);
            Ok(())
        })
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        pool.with_tx(|tx| {
            if q::delete_employee(tx, id)? == 0 {
                return Err(AppError::NotFound { entity: ENTITY, id });
            }
            audit(tx, "del", &format!("employee #{}", id), "Employee deleted");
            Ok(())
        })
    }

    pub fn exists(pool: &mut DbPool, id: i64) -> AppResult<bool> {
        q::employee_exists(&pool.conn, id)
    }
}
