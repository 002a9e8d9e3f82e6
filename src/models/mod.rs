pub mod bus_type;
pub mod company;
pub mod employee;
pub mod list_codec;
pub mod payment_type;
pub mod salary_entry;
pub mod summary;
pub mod work;
