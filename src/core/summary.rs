use crate::db::pool::DbPool;
use crate::db::queries::summary::payment_summary;
use crate::errors::AppResult;
use crate::models::summary::PaymentSummary;

pub struct SummaryLogic;

impl SummaryLogic {
    /// Aggregates over one company's entries; `None` when it has none.
    ///
    /// A company that does not exist is reported the same way as one with
    /// no entries.
    pub fn payment_summary(pool: &mut DbPool, company: &str) -> AppResult<Option<PaymentSummary>> {
        payment_summary(&pool.conn, company)
    }
}
