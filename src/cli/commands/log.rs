use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::output::Output;

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        let entries = LogLogic::entries(&mut pool)?;
        let rendered = LogLogic::render(&entries)?;

        out.emit("log", &entries, || {
            header("📜 Internal log:");
            print!("{}", rendered);
        })?;
    }

    Ok(())
}
