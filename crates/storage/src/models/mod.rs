pub mod athlete;
pub mod settings;

pub use athlete::{Athlete, AthleteChanges, NewAthlete, RegistrationSource};
pub use settings::SchoolSettings;
