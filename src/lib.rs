pub mod allure;
pub mod config;
pub mod ctx;
pub mod error;
pub mod logging;
pub mod manager;
pub mod meta;
pub mod report;
pub mod time;

pub use ctx::{ExecutionContext, PhaseName};
pub use manager::ReportManager;
