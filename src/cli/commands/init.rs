use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::output::Output;
use serde::Serialize;

#[derive(Serialize)]
struct InitReport {
    config_file: String,
    database: String,
    created_tables: Vec<&'static str>,
}

/// Handle the `init` command
///
/// Creates the config directory and file (skipped with `--test`), the
/// database file, and every missing table.
pub fn handle(cli: &Cli, out: &Output) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    let mut pool = DbPool::open_raw(&db_path)?;
    let created = pool.init_schema()?;

    audit(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", db_path),
    );

    let report = InitReport {
        config_file: Config::config_file().to_string_lossy().to_string(),
        database: db_path,
        created_tables: created,
    };

    out.emit("init", &report, || {
        if !cli.test {
            info(format!("Config file : {}", report.config_file));
        }
        info(format!("Database    : {}", report.database));
        if report.created_tables.is_empty() {
            info("All tables already present.");
        } else {
            info(format!("Created tables: {}", report.created_tables.join(", ")));
        }
        success("rpayroll initialization completed!");
    })
}
