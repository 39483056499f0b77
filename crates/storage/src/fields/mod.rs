//! Pure field logic shared by every entry point: normalization, validation
//! and age category classification.

pub mod category;
pub mod normalize;
pub mod validate;

pub use category::{CategoryTable, Classification, REGISTRATION, WEBHOOK};
pub use normalize::{RawDate, normalize_cpf, normalize_date, normalize_phone};
pub use validate::{
    MAX_NAME_LENGTH, Position, STATUS_ACTIVE, STATUS_INACTIVE, is_known_position,
    is_known_status, is_valid_cpf, is_valid_date_string, is_valid_phone,
};
