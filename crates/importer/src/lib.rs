pub mod batch;
pub mod cell;
pub mod duplicate;
pub mod error;
pub mod intake;
pub mod profile;
pub mod row;
pub mod spreadsheet;
pub mod traits;

#[cfg(test)]
mod testing;

pub use batch::{commit_import, validate_batch};
pub use cell::{CellValue, RawRecord};
pub use error::{ImporterError, Result};
pub use intake::{prepare_athlete, prepare_changes, register_from_payload};
pub use profile::{PUBLIC_FORM, RowProfile, SPREADSHEET, WEBHOOK_FORM};
pub use row::RowProcessor;
pub use traits::{AthleteStore, ImportContext};
