pub mod athlete;
pub mod common;
pub mod import;
pub mod report;
pub mod settings;
