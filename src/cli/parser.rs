use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rpayroll
/// Back-office payroll for a bus body works: employees, companies, works and salary entries
#[derive(Parser)]
#[command(
    name = "rpayroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small payroll CLI: employees, own companies, works and salary entries on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Print one JSON object per command instead of tables and messages
    #[arg(global = true, long = "json")]
    pub json: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Add missing keys to the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage own companies
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Manage bus types
    BusType {
        #[command(subcommand)]
        action: BusTypeAction,
    },

    /// Manage works (billable jobs)
    Work {
        #[command(subcommand)]
        action: WorkAction,
    },

    /// Manage salary entries
    Salary {
        #[command(subcommand)]
        action: SalaryAction,
    },

    /// Payment summary for one company
    Summary {
        #[arg(long, value_name = "COMPANY")]
        company: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export salary entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "COMPANY")]
        company: Option<String>,

        #[arg(long, value_name = "ID")]
        employee: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct EmployeeFields {
    #[arg(long = "name", help = "Full name (unique)")]
    pub full_name: String,

    #[arg(long = "phone")]
    pub phone_no: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub designation: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee
    Add(EmployeeFields),
    /// Show one employee
    Get { id: i64 },
    /// List employees
    List,
    /// Overwrite every field of an employee
    Update {
        id: i64,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Delete an employee
    Del { id: i64 },
}

#[derive(Args, Debug, Clone)]
pub struct CompanyFields {
    #[arg(long = "name", help = "Company name (unique)")]
    pub company_name: String,

    #[arg(long = "phone")]
    pub phone_no: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long = "alt-phone")]
    pub alternate_phone_no: Option<String>,

    #[arg(long = "mail")]
    pub mail_id: Option<String>,

    #[arg(long = "type")]
    pub type_of_company: Option<String>,

    #[arg(long = "gst")]
    pub gst_no: Option<String>,

    #[arg(long = "pan")]
    pub pan_no: Option<String>,

    #[arg(long = "bank-name", help = "Repeat once per account")]
    pub bank_name: Vec<String>,

    #[arg(long = "bank-branch")]
    pub bank_branch: Vec<String>,

    #[arg(long = "ifsc")]
    pub bank_ifsc_code: Vec<String>,

    #[arg(long = "account-no")]
    pub account_no: Vec<String>,

    #[arg(long = "account-owner")]
    pub account_owner_name: Vec<String>,

    #[arg(long = "established", value_name = "YYYY-MM-DD")]
    pub date_of_establishment: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum CompanyAction {
    /// Add a company
    Add(CompanyFields),
    /// Show one company
    Get { id: i64 },
    /// List companies
    List,
    /// List company names only
    Names,
    /// Overwrite every field of a company, bank lists included
    Update {
        id: i64,
        #[command(flatten)]
        fields: CompanyFields,
    },
    /// Delete a company
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum BusTypeAction {
    /// Add a bus type
    Add {
        #[arg(long)]
        name: String,
    },
    /// List bus types
    List,
    /// Rename a bus type
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Delete a bus type
    Del { id: i64 },
}

#[derive(Args, Debug, Clone)]
pub struct WorkFields {
    #[arg(long = "name", help = "Work name (unique)")]
    pub work_name: String,

    #[arg(long = "bus-type", help = "Name of an existing bus type")]
    pub bus_type: String,

    #[arg(long, default_value_t = 0)]
    pub cost: i64,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum WorkAction {
    /// Add a work
    Add(WorkFields),
    /// List works
    List {
        #[arg(long, help = "Only id, name, bus type and cost")]
        brief: bool,
    },
    /// Overwrite every field of a work
    Update {
        id: i64,
        #[command(flatten)]
        fields: WorkFields,
    },
    /// Delete a work
    Del { id: i64 },
}

#[derive(Args, Debug, Clone)]
pub struct SalaryFields {
    #[arg(long, allow_negative_numbers = true)]
    pub payment: i64,

    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub record_date: String,

    #[arg(long = "employee", value_name = "ID")]
    pub employee_id: i64,

    #[arg(long = "type", value_name = "TYPE", help = "Payment type; `advance` entries carry no work")]
    pub type_of_payment: String,

    #[arg(long = "mode")]
    pub mode_of_payment: Option<String>,

    #[arg(long)]
    pub company: String,

    #[arg(long = "work-ids", value_delimiter = ',', allow_negative_numbers = true)]
    pub work_ids: Vec<i64>,

    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub costs: Vec<i64>,

    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub quantities: Vec<i64>,
}

#[derive(Subcommand)]
pub enum SalaryAction {
    /// Validate and record a salary entry
    Add(SalaryFields),
    /// Show one salary entry
    Get { id: i64 },
    /// List salary entries, optionally filtered
    List {
        #[arg(long)]
        company: Option<String>,

        #[arg(long, value_name = "ID")]
        employee: Option<i64>,
    },
    /// Re-validate and overwrite a salary entry
    Update {
        id: i64,
        #[command(flatten)]
        fields: SalaryFields,
    },
    /// Delete the entry `id` of employee `--employee`
    Del {
        id: i64,
        #[arg(long, value_name = "ID")]
        employee: i64,
    },
}
