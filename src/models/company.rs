use serde::{Deserialize, Serialize};

/// Parallel lists describing the bank accounts of a company.
///
/// Position `i` of every list belongs to the same account; the lists are
/// stored and returned as given, without any length check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankAccounts {
    pub bank_name: Vec<String>,
    pub bank_branch: Vec<String>,
    pub bank_ifsc_code: Vec<String>,
    pub account_no: Vec<String>,
    pub account_owner_name: Vec<String>,
}

/// Row of the `own_companies` table with the bank columns decoded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OwnCompany {
    pub company_id: i64,
    pub company_name: String,
    pub created_at: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
    pub alternate_phone_no: Option<String>,
    pub mail_id: Option<String>,
    pub type_of_company: Option<String>,
    pub gst_no: Option<String>,
    pub pan_no: Option<String>,
    #[serde(flatten)]
    pub bank: BankAccounts,
    pub date_of_establishment: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInput {
    pub company_name: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
    pub alternate_phone_no: Option<String>,
    pub mail_id: Option<String>,
    pub type_of_company: Option<String>,
    pub gst_no: Option<String>,
    pub pan_no: Option<String>,
    #[serde(flatten)]
    pub bank: BankAccounts,
    pub date_of_establishment: Option<String>,
    pub description: Option<String>,
}

impl CompanyInput {
    pub fn named(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Self::default()
        }
    }
}
