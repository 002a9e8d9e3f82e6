use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::amount;
use crate::ui::output::Output;

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    if let Commands::Summary { company } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let summary = SummaryLogic::payment_summary(&mut pool, company)?;

        out.emit("summary", &summary, || match &summary {
            None => warning(format!("No data for company '{}'", company)),
            Some(s) => {
                header(format!("Payment summary: {}", company));
                println!("  entries           : {}", s.total_entries);
                println!("  total payment     : {}", amount(s.total_payment));
                println!("  average payment   : {:.2}", s.average_payment);
                println!("  max / min payment : {} / {}", amount(s.max_payment), amount(s.min_payment));
                println!("  total work done   : {}", amount(s.total_work_done));
                println!("  average work done : {:.2}", s.average_work_done);
                println!(
                    "  max / min work    : {} / {}",
                    amount(s.max_work_done),
                    amount(s.min_work_done)
                );
            }
        })?;
    }
    Ok(())
}
