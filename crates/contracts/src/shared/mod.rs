pub mod config;
pub mod field_validation;
pub mod file_staging;
pub mod table;
pub mod toast;
pub mod tooltip;
