use serde::{Deserialize, Serialize};

/// Row of the `works` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Work {
    pub work_id: i64,
    pub work_name: String,
    pub bus_type: String,
    pub cost: i64,
    pub description: Option<String>,
}

/// Short projection used for listings and for naming the works of a salary entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkBrief {
    pub work_id: i64,
    pub work_name: String,
    pub bus_type: String,
    pub cost: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkInput {
    pub work_name: String,
    /// Name of an existing bus type.
    pub bus_type: String,
    pub cost: i64,
    pub description: Option<String>,
}
