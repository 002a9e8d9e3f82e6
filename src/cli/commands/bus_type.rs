use crate::cli::commands::separator;
use crate::cli::parser::{BusTypeAction, Commands};
use crate::config::Config;
use crate::core::bus_type::BusTypeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::output::Output;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    let Commands::BusType { action } = cmd else {
        return Ok(());
    };
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        BusTypeAction::Add { name } => {
            let id = BusTypeLogic::create(&mut pool, name)?;
            out.done_with("bus_type_id", &id, &format!("Bus type '{}' added with id {}", name, id))
        }
        BusTypeAction::List => {
            let types = BusTypeLogic::list(&mut pool)?;
            out.emit("bus_types", &types, || {
                if types.is_empty() {
                    info("No bus types found.");
                    return;
                }
                let mut table = Table::new(&["ID", "BUS TYPE"]);
                for t in &types {
                    table.add_row(vec![t.bus_type_id.to_string(), t.bus_type.clone()]);
                }
                print!("{}", table.render(separator(cfg)));
            })
        }
        BusTypeAction::Update { id, name } => {
            BusTypeLogic::update(&mut pool, *id, name)?;
            out.done(&format!("Bus type {} renamed to '{}'", id, name))
        }
        BusTypeAction::Del { id } => {
            BusTypeLogic::delete(&mut pool, *id)?;
            out.done(&format!("Bus type {} deleted", id))
        }
    }
}
