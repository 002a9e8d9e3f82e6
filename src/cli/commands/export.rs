use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};
use crate::ui::output::Output;

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        company,
        employee,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let req = ExportRequest {
            format: *format,
            file: file.clone(),
            company: company.clone(),
            employee_id: *employee,
            force: *force,
        };

        let (path, count) = ExportLogic::export(&mut pool, &req)?;

        if count == 0 {
            return out.done_with("exported", &count, "No salary entries match the selection; nothing written.");
        }

        audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} salary entries as {}", count, format.as_str()),
        );
        out.done_with(
            "exported",
            &count,
            &format!("{} export completed: {} ({} entries)", format.as_str().to_uppercase(), path.display(), count),
        )?;
    }
    Ok(())
}
