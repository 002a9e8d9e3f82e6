use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::output::Output;

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        match BackupLogic::backup(&cfg.database, file, *compress)? {
            Some(path) => {
                let shown = path.to_string_lossy().to_string();
                out.done_with("backup", &shown, &format!("Backup created: {}", shown))?;
            }
            None => out.done("Backup cancelled by user.")?,
        }
    }

    Ok(())
}
