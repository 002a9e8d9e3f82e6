use super::{id_exists, map_duplicate, name_taken};
use crate::errors::AppResult;
use crate::models::company::{BankAccounts, CompanyInput, OwnCompany};
use crate::models::list_codec::{decode_strings, encode_list};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn bank_column(row: &Row, col: &str) -> Result<Vec<String>> {
    let raw: Option<String> = row.get(col)?;
    Ok(decode_strings(raw.as_deref()))
}

pub fn map_company(row: &Row) -> Result<OwnCompany> {
    Ok(OwnCompany {
        company_id: row.get("company_id")?,
        company_name: row.get::<_, Option<String>>("company_name")?.unwrap_or_default(),
        created_at: row.get::<_, Option<String>>("created_at")?.unwrap_or_default(),
        phone_no: row.get("phone_no")?,
        address: row.get("address")?,
        alternate_phone_no: row.get("alternate_phone_no")?,
        mail_id: row.get("mail_id")?,
        type_of_company: row.get("type_of_company")?,
        gst_no: row.get("gst_no")?,
        pan_no: row.get("pan_no")?,
        bank: BankAccounts {
            bank_name: bank_column(row, "bank_name")?,
            bank_branch: bank_column(row, "bank_branch")?,
            bank_ifsc_code: bank_column(row, "bank_ifsc_code")?,
            account_no: bank_column(row, "account_no")?,
            account_owner_name: bank_column(row, "account_owner_name")?,
        },
        date_of_establishment: row.get("date_of_establishment")?,
        description: row.get("description")?,
    })
}

/// The five bank columns, JSON-encoded in column order.
struct EncodedBank([String; 5]);

impl EncodedBank {
    fn new(b: &BankAccounts) -> serde_json::Result<Self> {
        Ok(Self([
            encode_list(&b.bank_name)?,
            encode_list(&b.bank_branch)?,
            encode_list(&b.bank_ifsc_code)?,
            encode_list(&b.account_no)?,
            encode_list(&b.account_owner_name)?,
        ]))
    }
}

pub fn insert_company(conn: &Connection, c: &CompanyInput, created_at: &str) -> AppResult<i64> {
    let EncodedBank([bank_name, bank_branch, ifsc, account_no, owner]) = EncodedBank::new(&c.bank)?;

    conn.execute(
        "INSERT INTO own_companies (
            company_name, created_at, phone_no, address, alternate_phone_no, mail_id,
            type_of_company, gst_no, pan_no, bank_name, bank_branch, bank_ifsc_code,
            account_no, account_owner_name, date_of_establishment, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
        params![
            c.company_name,
            created_at,
            c.phone_no,
            c.address,
            c.alternate_phone_no,
            c.mail_id,
            c.type_of_company,
            c.gst_no,
            c.pan_no,
            bank_name,
            bank_branch,
            ifsc,
            account_no,
            owner,
            c.date_of_establishment,
            c.description,
        ],
    )
    .map_err(|e| map_duplicate(e, "Company", &c.company_name))?;
    Ok(conn.last_insert_rowid())
}

pub fn find_company(conn: &Connection, id: i64) -> AppResult<Option<OwnCompany>> {
    let company = conn
        .query_row(
            "SELECT * FROM own_companies WHERE company_id = ?1",
            [id],
            map_company,
        )
        .optional()?;
    Ok(company)
}

pub fn load_companies(conn: &Connection) -> AppResult<Vec<OwnCompany>> {
    let mut stmt = conn.prepare("SELECT * FROM own_companies ORDER BY company_id ASC")?;
    let rows = stmt.query_map([], map_company)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_company_names(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT company_name FROM own_companies ORDER BY company_id ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, Option<String>>(0))?;

    let mut out = Vec::new();
    for r in rows {
        if let Some(name) = r? {
            out.push(name);
        }
    }
    Ok(out)
}

/// Full overwrite of every user field; `created_at` is kept.
pub fn update_company(conn: &Connection, id: i64, c: &CompanyInput) -> AppResult<usize> {
    let EncodedBank([bank_name, bank_branch, ifsc, account_no, owner]) = EncodedBank::new(&c.bank)?;

    let n = conn
        .execute(
            "UPDATE own_companies
             SET company_name = ?1, phone_no = ?2, address = ?3, alternate_phone_no = ?4,
                 mail_id = ?5, type_of_company = ?6, gst_no = ?7, pan_no = ?8,
                 bank_name = ?9, bank_branch = ?10, bank_ifsc_code = ?11,
                 account_no = ?12, account_owner_name = ?13,
                 date_of_establishment = ?14, description = ?15
             WHERE company_id = ?16",
            params![
                c.company_name,
                c.phone_no,
                c.address,
                c.alternate_phone_no,
                c.mail_id,
                c.type_of_company,
                c.gst_no,
                c.pan_no,
                bank_name,
                bank_branch,
                ifsc,
                account_no,
                owner,
                c.date_of_establishment,
                c.description,
                id,
            ],
        )
        .map_err(|e| map_duplicate(e, "Company", &c.company_name))?;
    Ok(n)
}

pub fn delete_company(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM own_companies WHERE company_id = ?1", [id])?)
}

pub fn company_id_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    id_exists(conn, "own_companies", "company_id", id)
}

/// Salary entries reference companies by name.
pub fn company_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    name_taken(conn, "own_companies", "company_name", "company_id", name, None)
}

pub fn company_name_taken(conn: &Connection, name: &str, exclude_id: Option<i64>) -> AppResult<bool> {
    name_taken(conn, "own_companies", "company_name", "company_id", name, exclude_id)
}
