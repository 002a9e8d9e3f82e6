use crate::cli::commands::separator;
use crate::cli::parser::{Commands, WorkAction, WorkFields};
use crate::config::Config;
use crate::core::work::WorkLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::work::WorkInput;
use crate::ui::messages::info;
use crate::ui::output::Output;
use crate::utils::formatting::{amount, opt};
use crate::utils::table::Table;

impl From<&WorkFields> for WorkInput {
    fn from(f: &WorkFields) -> Self {
        Self {
            work_name: f.work_name.clone(),
            bus_type: f.bus_type.clone(),
            cost: f.cost,
            description: f.description.clone(),
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    let Commands::Work { action } = cmd else {
        return Ok(());
    };
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        WorkAction::Add(fields) => {
            let id = WorkLogic::create(&mut pool, &fields.into())?;
            out.done_with("work_id", &id, &format!("Work '{}' added with id {}", fields.work_name, id))
        }
        WorkAction::List { brief: true } => {
            let works = WorkLogic::list_brief(&mut pool)?;
            out.emit("works", &works, || {
                if works.is_empty() {
                    info("No works found.");
                    return;
                }
                let mut table = Table::new(&["ID", "WORK", "BUS TYPE", "COST"]);
                for w in &works {
                    table.add_row(vec![
                        w.work_id.to_string(),
                        w.work_name.clone(),
                        w.bus_type.clone(),
                        amount(w.cost),
                    ]);
                }
                print!("{}", table.render(separator(cfg)));
            })
        }
        WorkAction::List { brief: false } => {
            let works = WorkLogic::list(&mut pool)?;
            out.emit("works", &works, || {
                if works.is_empty() {
                    info("No works found.");
                    return;
                }
                let mut table = Table::new(&["ID", "WORK", "BUS TYPE", "COST", "DESCRIPTION"]);
                for w in &works {
                    table.add_row(vec![
                        w.work_id.to_string(),
                        w.work_name.clone(),
                        w.bus_type.clone(),
                        amount(w.cost),
                        opt(&w.description),
                    ]);
                }
                print!("{}", table.render(separator(cfg)));
            })
        }
        WorkAction::Update { id, fields } => {
            WorkLogic::update(&mut pool, *id, &fields.into())?;
            out.done(&format!("Work {} updated", id))
        }
        WorkAction::Del { id } => {
            WorkLogic::delete(&mut pool, *id)?;
            out.done(&format!("Work {} deleted", id))
        }
    }
}
