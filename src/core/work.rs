use crate::core::validate::require_name;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::bus_types::bus_type_exists;
use crate::db::queries::works as q;
use crate::errors::{AppError, AppResult};
use crate::models::work::{Work, WorkBrief, WorkInput};
use rusqlite::Connection;

const ENTITY: &str = "Work";

/// Name and bus-type checks shared by create and update.
fn check_work(conn: &Connection, input: &WorkInput, exclude_id: Option<i64>) -> AppResult<()> {
    if q::work_name_taken(conn, &input.work_name, exclude_id)? {
        return Err(AppError::DuplicateName {
            entity: ENTITY,
            name: input.work_name.clone(),
        });
    }
    if !bus_type_exists(conn, &input.bus_type)? {
        return Err(AppError::UnknownBusType(input.bus_type.clone()));
    }
    Ok(())
}

pub struct WorkLogic;

impl WorkLogic {
    pub fn create(pool: &mut DbPool, input: &WorkInput) -> AppResult<i64> {
        require_name("work_name", &input.work_name)?;

        pool.with_tx(|tx| {
            check_work(tx, input, None)?;
            let id = q::insert_work(tx, input)?;
            audit(
                tx,
                "add",
                &format!("work #{}", id),
                &format!("{} ({})", input.work_name, input.bus_type),
            );
            Ok(id)
        })
    }

    pub fn get(pool: &mut DbPool, id: i64) -> AppResult<Option<Work>> {
        q::find_work(&pool.conn, id)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<Work>> {
        q::load_works(&pool.conn)
    }

    pub fn list_brief(pool: &mut DbPool) -> AppResult<Vec<WorkBrief>> {
        q::load_works_brief(&pool.conn)
    }

    pub fn update(pool: &mut DbPool, id: i64, input: &WorkInput) -> AppResult<()> {
        require_name("work_name", &input.work_name)?;

        pool.with_tx(|tx| {
            if !q::work_exists(tx, id)? {
                return Err(AppError::NotFound { entity: ENTITY, id });
            }
            check_work(tx, input, Some(id))?;
            q::update_work(tx, id, input)?;
            audit(tx, "edit", &format!("work #{}", id), &input.work_name);
            Ok(())
        })
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        pool.with_tx(|tx| {
            if q::delete_work(tx, id)? == 0 {
                return Err(AppError::NotFound { entity: ENTITY, id });
            }
            audit(tx, "del", &format!("work #{}", id), "Work deleted");
            Ok(())
        })
    }

    pub fn exists(pool: &mut DbPool, id: i64) -> AppResult<bool> {
        q::work_exists(&pool.conn, id)
    }
}
