use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BusType {
    pub bus_type_id: i64,
    pub bus_type: String,
}
