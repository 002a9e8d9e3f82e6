pub mod backup;
pub mod bus_type;
pub mod company;
pub mod config;
pub mod employee;
pub mod log;
pub mod salary;
pub mod summary;
pub mod validate;
pub mod work;
