pub mod backup;
pub mod bus_type;
pub mod company;
pub mod config;
pub mod db;
pub mod employee;
pub mod export;
pub mod init;
pub mod log;
pub mod salary;
pub mod summary;
pub mod work;

use crate::config::Config;

/// First character of `separator_char`, used under table headers.
pub(crate) fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}
