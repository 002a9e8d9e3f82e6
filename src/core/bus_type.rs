use crate::core::validate::require_name;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::bus_types as q;
use crate::errors::{AppError, AppResult};
use crate::models::bus_type::BusType;

const ENTITY: &str = "Bus type";

pub struct BusTypeLogic;

impl BusTypeLogic {
    pub fn create(pool: &mut DbPool, name: &str) -> AppResult<i64> {
        require_name("bus_type", name)?;

        pool.with_tx(|tx| {
            if q::bus_type_name_taken(tx, name, None)? {
                return Err(AppError::DuplicateName {
                    entity: ENTITY,
                    name: name.to_string(),
                });
            }

            let id = q::insert_bus_type(tx, name)?;
            audit(tx, "add", &format!("bus type #{}", id), name);
            Ok(id)
        })
    }

    pub fn get(pool: &mut DbPool, id: i64) -> AppResult<Option<BusType>> {
        q::find_bus_type(&pool.conn, id)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<BusType>> {
        q::load_bus_types(&pool.conn)
    }

    /// Renaming does not touch works that still reference the old name.
    pub fn update(pool: &mut DbPool, id: i64, name: &str) -> AppResult<()> {
        require_name("bus_type", name)?;

        pool.with_tx(|tx| {
            if !q::bus_type_id_exists(tx, id)? {
                return Err(AppError::NotFound { entity: ENTITY, id });
            }
            if q::bus_type_name_taken(tx, name, Some(id))? {
                return Err(AppError::DuplicateName {
                    entity: ENTITY,
                    name: name.to_string(),
                });
            }

            q::update_bus_type(tx, id, name)?;
            audit(tx, "edit", &format!("bus type #{}", id), name);
            Ok(())
        })
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        pool.with_tx(|tx| {
            if q::delete_bus_type(tx, id)? == 0 {
                return Err(AppError::NotFound { entity: ENTITY, id });
            }
            audit(tx, "del", &format!("bus type #{}", id), "Bus type deleted");
            Ok(())
        })
    }

    pub fn exists(pool: &mut DbPool, name: &str) -> AppResult<bool> {
        q::bus_type_exists(&pool.conn, name)
    }
}
