use crate::cli::commands::separator;
use crate::cli::parser::{Commands, EmployeeAction, EmployeeFields};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeeInput};
use crate::ui::messages::info;
use crate::ui::output::Output;
use crate::utils::formatting::opt;
use crate::utils::table::Table;

impl From<&EmployeeFields> for EmployeeInput {
    fn from(f: &EmployeeFields) -> Self {
        Self {
            full_name: f.full_name.clone(),
            phone_no: f.phone_no.clone(),
            address: f.address.clone(),
            designation: f.designation.clone(),
            description: f.description.clone(),
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        EmployeeAction::Add(fields) => {
            let id = EmployeeLogic::create(&mut pool, &fields.into(), &cfg.offset()?)?;
            out.done_with("employee_id", &id, &format!("Employee '{}' added with id {}", fields.full_name, id))
        }
        EmployeeAction::Get { id } => {
            let employee = EmployeeLogic::get(&mut pool, *id)?.ok_or(AppError::NotFound {
                entity: "Employee",
                id: *id,
            })?;
            out.emit("employee", &employee, || print_table(&[employee.clone()], cfg))
        }
        EmployeeAction::List => {
            let employees = EmployeeLogic::list(&mut pool)?;
            out.emit("employees", &employees, || print_table(&employees, cfg))
        }
        EmployeeAction::Update { id, fields } => {
            EmployeeLogic::update(&mut pool, *id, &fields.into())?;
            out.done(&format!("Employee {} updated", id))
        }
        EmployeeAction::Del { id } => {
            EmployeeLogic::delete(&mut pool, *id)?;
            out.done(&format!("Employee {} deleted", id))
        }
    }
}

fn print_table(employees: &[Employee], cfg: &Config) {
    if employees.is_empty() {
        info("No employees found.");
        return;
    }

    let mut table = Table::new(&["ID", "NAME", "PHONE", "DESIGNATION", "ADDRESS", "CREATED"]);
    for e in employees {
        table.add_row(vec![
            e.employee_id.to_string(),
            e.full_name.clone(),
            opt(&e.phone_no),
            opt(&e.designation),
            opt(&e.address),
            e.created_at.clone(),
        ]);
    }
    print!("{}", table.render(separator(cfg)));
}
