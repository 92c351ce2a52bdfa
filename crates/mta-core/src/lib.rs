pub mod config;
pub mod logging;

pub mod audit;
pub mod fetch;
pub mod join;
pub mod records;
pub mod report;
pub mod url_model;
