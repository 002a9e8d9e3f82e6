use crate::cli::commands::separator;
use crate::cli::parser::{CompanyAction, CompanyFields, Commands};
use crate::config::Config;
use crate::core::company::CompanyLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::company::{BankAccounts, CompanyInput, OwnCompany};
use crate::ui::messages::info;
use crate::ui::output::Output;
use crate::utils::date::parse_optional_date;
use crate::utils::formatting::opt;
use crate::utils::table::Table;

fn to_input(f: &CompanyFields) -> AppResult<CompanyInput> {
    let established = parse_optional_date(f.date_of_establishment.as_deref())?;

    Ok(CompanyInput {
        company_name: f.company_name.clone(),
        phone_no: f.phone_no.clone(),
        address: f.address.clone(),
        alternate_phone_no: f.alternate_phone_no.clone(),
        mail_id: f.mail_id.clone(),
        type_of_company: f.type_of_company.clone(),
        gst_no: f.gst_no.clone(),
        pan_no: f.pan_no.clone(),
        bank: BankAccounts {
            bank_name: f.bank_name.clone(),
            bank_branch: f.bank_branch.clone(),
            bank_ifsc_code: f.bank_ifsc_code.clone(),
            account_no: f.account_no.clone(),
            account_owner_name: f.account_owner_name.clone(),
        },
        date_of_establishment: established.map(|d| d.format("%Y-%m-%d").to_string()),
        description: f.description.clone(),
    })
}

pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    let Commands::Company { action } = cmd else {
        return Ok(());
    };
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        CompanyAction::Add(fields) => {
            let id = CompanyLogic::create(&mut pool, &to_input(fields)?, &cfg.offset()?)?;
            out.done_with("company_id", &id, &format!("Company '{}' added with id {}", fields.company_name, id))
        }
        CompanyAction::Get { id } => {
            let company = CompanyLogic::get(&mut pool, *id)?.ok_or(AppError::NotFound {
                entity: "Company",
                id: *id,
            })?;
            out.emit("company", &company, || print_detail(&company))
        }
        CompanyAction::List => {
            let companies = CompanyLogic::list(&mut pool)?;
            out.emit("companies", &companies, || print_table(&companies, cfg))
        }
        CompanyAction::Names => {
            let names = CompanyLogic::list_names(&mut pool)?;
            out.emit("company_names", &names, || {
                for n in &names {
                    println!("{}", n);
                }
            })
        }
        CompanyAction::Update { id, fields } => {
            CompanyLogic::update(&mut pool, *id, &to_input(fields)?)?;
            out.done(&format!("Company {} updated", id))
        }
        CompanyAction::Del { id } => {
            CompanyLogic::delete(&mut pool, *id)?;
            out.done(&format!("Company {} deleted", id))
        }
    }
}

fn print_table(companies: &[OwnCompany], cfg: &Config) {
    if companies.is_empty() {
        info("No companies found.");
        return;
    }

    let mut table = Table::new(&["ID", "NAME", "PHONE", "TYPE", "GST", "ACCOUNTS", "CREATED"]);
    for c in companies {
        table.add_row(vec![
            c.company_id.to_string(),
            c.company_name.clone(),
            opt(&c.phone_no),
            opt(&c.type_of_company),
            opt(&c.gst_no),
            c.bank.account_no.len().to_string(),
            c.created_at.clone(),
        ]);
    }
    print!("{}", table.render(separator(cfg)));
}

fn print_detail(c: &OwnCompany) {
    println!("{} (#{})", c.company_name, c.company_id);
    println!("  phone       : {}", opt(&c.phone_no));
    println!("  alt. phone  : {}", opt(&c.alternate_phone_no));
    println!("  mail        : {}", opt(&c.mail_id));
    println!("  address     : {}", opt(&c.address));
    println!("  type        : {}", opt(&c.type_of_company));
    println!("  GST / PAN   : {} / {}", opt(&c.gst_no), opt(&c.pan_no));
    println!("  established : {}", opt(&c.date_of_establishment));

    let b = &c.bank;
    let accounts = [
        b.bank_name.len(),
        b.bank_branch.len(),
        b.bank_ifsc_code.len(),
        b.account_no.len(),
        b.account_owner_name.len(),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);

    for i in 0..accounts {
        let at = |v: &Vec<String>| v.get(i).cloned().unwrap_or_default();
        println!(
            "  account {}   : {} {} {} {} ({})",
            i + 1,
            at(&b.bank_name),
            at(&b.bank_branch),
            at(&b.bank_ifsc_code),
            at(&b.account_no),
            at(&b.account_owner_name)
        );
    }
}
