use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::stats::collect_db_info;
use crate::errors::AppResult;
use crate::ui::output::Output;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    if let Commands::Db { check, vacuum, info } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *info {
            let stats = collect_db_info(&mut pool, &cfg.database)?;
            out.emit("info", &stats, || {
                let mb = stats.size_bytes as f64 / (1024.0 * 1024.0);
                println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, stats.file, RESET);
                println!("{}• Size:{} {:.2} MB", CYAN, RESET, mb);
                println!("{}• Rows:{}", CYAN, RESET);
                for t in &stats.tables {
                    println!("    {:<14} {}{}{}", t.table, GREEN, t.rows, RESET);
                }
                let none = format!("{GREY}--{RESET}");
                println!("{}• Salary record dates:{}", CYAN, RESET);
                println!("    from: {}", stats.first_record_date.as_deref().unwrap_or(&none));
                println!("    to:   {}", stats.last_record_date.as_deref().unwrap_or(&none));
            })?;
        }

        if *check {
            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
            let ok = integrity == "ok";

            out.emit("integrity", &integrity, || {
                if ok {
                    println!("{}✔ Integrity check passed.{}", GREEN, RESET);
                } else {
                    println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
                }
            })?;
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            audit(&pool.conn, "vacuum", "database", "VACUUM completed");
            out.done("Vacuum completed.")?;
        }
    }

    Ok(())
}
