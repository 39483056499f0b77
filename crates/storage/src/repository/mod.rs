pub mod athlete;
pub mod settings;
