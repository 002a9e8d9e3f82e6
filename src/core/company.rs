use crate::core::validate::require_name;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::companies as q;
use crate::errors::{AppError, AppResult};
use crate::models::company::{CompanyInput, OwnCompany};
use crate::utils::time::created_at_stamp;
use chrono::FixedOffset;

const ENTITY: &str = "Company";

pub struct CompanyLogic;

impl CompanyLogic {
    pub fn create(pool: &mut DbPool, input: &CompanyInput, offset: &FixedOffset) -> AppResult<i64> {
        require_name("company_name", &input.company_name)?;

        pool.with_tx(|tx| {
            if q::company_name_taken(tx, &input.company_name, None)? {
                return Err(AppError::DuplicateName {
                    entity: ENTITY,
                    name: input.company_name.clone(),
                });
            }

            let id = q::insert_company(tx, input, &created_at_stamp(offset))?;
            audit(tx, "add", &format!("company #{}", id), &input.company_name);
            Ok(id)
        })
    }

    pub fn get(pool: &mut DbPool, id: i64) -> AppResult<Option<OwnCompany>> {
        q::find_company(&pool.conn, id)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<OwnCompany>> {
        q::load_companies(&pool.conn)
    }

    pub fn list_names(pool: &mut DbPool) -> AppResult<Vec<String>> {
        q::load_company_names(&pool.conn)
    }

    /// Existence check, then a full overwrite (bank lists included).
    ///
    /// Salary entries keep the company name they were written with; a
    /// rename leaves them pointing at the old name.
    pub fn update(pool: &mut DbPool, id: i64, input: &CompanyInput) -> AppResult<()> {
        require_name("company_name", &input.company_name)?;

        pool.with_tx(|tx| {
            if !q::company_id_exists(tx, id)? {
                return Err(AppError::NotFound { entity: ENTITY, id });
            }
            if q::company_name_taken(tx, &input.company_name, Some(id))? {
                return Err(AppError::DuplicateName {
                    entity: ENTITY,
                    name: input.company_name.clone(),
                });
            }

            q::update_company(tx, id, input)?;
            audit(tx, "edit", &format!("company #{}", id), &input.company_name);
            Ok(())
        })
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        pool.with_tx(|tx| {
            if q::delete_company(tx, id)? == 0 {
                return Err(AppError::NotFound { entity: ENTITY, id });
            }
            audit(tx, "del", &format!("company #{}", id), "Company deleted");
            Ok(())
        })
    }

    pub fn exists(pool: &mut DbPool, name: &str) -> AppResult<bool> {
        q::company_exists(&pool.conn, name)
    }
}
