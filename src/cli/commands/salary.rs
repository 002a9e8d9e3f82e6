use crate::cli::commands::separator;
use crate::cli::parser::{Commands, SalaryAction, SalaryFields};
use crate::config::Config;
use crate::core::salary::{AdvanceRule, SalaryLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::payment_type::PaymentType;
use crate::models::salary_entry::{SalaryEntry, SalaryEntryInput, SalaryEntryWithWorks};
use crate::ui::messages::{info, warning};
use crate::ui::output::Output;
use crate::utils::date::parse_date;
use crate::utils::formatting::{amount, list, opt};
use crate::utils::table::Table;

fn to_input(f: &SalaryFields) -> AppResult<SalaryEntryInput> {
    Ok(SalaryEntryInput {
        payment: f.payment,
        record_date: parse_date(&f.record_date)?,
        employee_id: f.employee_id,
        type_of_payment: PaymentType::from_db_str(&f.type_of_payment),
        mode_of_payment: f.mode_of_payment.clone(),
        company: f.company.clone(),
        work_ids: f.work_ids.clone(),
        costs: f.costs.clone(),
        quantities: f.quantities.clone(),
    })
}

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    let Commands::Salary { action } = cmd else {
        return Ok(());
    };
    let mut pool = DbPool::new(&cfg.database)?;
    let rule = AdvanceRule::from(cfg);

    match action {
        SalaryAction::Add(fields) => {
            let id = SalaryLogic::add(&mut pool, to_input(fields)?, rule, &cfg.offset()?)?;
            out.done_with("salary_entry_id", &id, &format!("Salary entry {} recorded", id))
        }
        SalaryAction::Get { id } => match SalaryLogic::get(&mut pool, *id)? {
            Some(entry) => out.emit("salary_entry", &entry, || print_entries(&[entry.clone()], cfg)),
            None => out.emit("salary_entry", &None::<SalaryEntry>, || {
                warning(format!("No salary entry with id {}", id))
            }),
        },
        SalaryAction::List { company, employee } => match (employee, company.as_deref()) {
            (None, None) => {
                let entries = SalaryLogic::list_all(&mut pool)?;
                out.emit("salary_entries", &entries, || print_with_works(&entries, cfg))
            }
            (Some(emp), Some(c)) => {
                let entries = SalaryLogic::list_employee_company(&mut pool, *emp, c)?;
                out.emit("salary_entries", &entries, || print_entries(&entries, cfg))
            }
            (Some(emp), None) => {
                let entries = SalaryLogic::list_employee(&mut pool, *emp)?;
                out.emit("salary_entries", &entries, || print_entries(&entries, cfg))
            }
            (None, Some(c)) => {
                let entries = SalaryLogic::list_company(&mut pool, c)?;
                out.emit("salary_entries", &entries, || print_entries(&entries, cfg))
            }
        },
        SalaryAction::Update { id, fields } => {
            let work_done = SalaryLogic::update(&mut pool, *id, to_input(fields)?, rule)?;
            out.done_with(
                "work_done",
                &work_done,
                &format!("Salary entry {} updated (work done {})", id, amount(work_done)),
            )
        }
        SalaryAction::Del { id, employee } => {
            let n = SalaryLogic::delete(&mut pool, *employee, *id)?;
            let msg = if n == 0 {
                format!("No salary entry {} for employee {}; nothing deleted", id, employee)
            } else {
                format!("Salary entry {} deleted", id)
            };
            out.done_with("rows_affected", &n, &msg)
        }
    }
}

const HEADERS: [&str; 10] = [
    "ID", "DATE", "EMP", "COMPANY", "TYPE", "MODE", "PAYMENT", "WORK IDS", "QTY", "WORK DONE",
];

fn entry_row(e: &SalaryEntry) -> Vec<String> {
    vec![
        e.salary_entry_id.to_string(),
        e.record_date.clone(),
        e.employee_id.to_string(),
        e.company.clone(),
        e.type_of_payment.to_string(),
        opt(&e.mode_of_payment),
        amount(e.payment),
        list(&e.work_ids),
        list(&e.quantities),
        amount(e.work_done),
    ]
}

fn print_entries(entries: &[SalaryEntry], cfg: &Config) {
    if entries.is_empty() {
        info("No salary entries found.");
        return;
    }

    let mut table = Table::new(&HEADERS);
    for e in entries {
        table.add_row(entry_row(e));
    }
    print!("{}", table.render(separator(cfg)));
}

fn print_with_works(entries: &[SalaryEntryWithWorks], cfg: &Config) {
    if entries.is_empty() {
        info("No salary entries found.");
        return;
    }

    let mut headers = HEADERS.to_vec();
    headers.push("WORKS");

    let mut table = Table::new(&headers);
    for e in entries {
        let mut row = entry_row(&e.entry);
        let works: Vec<String> = e
            .work_names
            .iter()
            .zip(&e.bus_types)
            .map(|(w, b)| format!("{} ({})", w, b))
            .collect();
        row.push(works.join(", "));
        table.add_row(row);
    }
    print!("{}", table.render(separator(cfg)));
}
