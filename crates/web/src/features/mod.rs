pub mod athletes;
pub mod health;
pub mod imports;
pub mod registration;
pub mod reports;
pub mod settings;
pub mod webhook;
