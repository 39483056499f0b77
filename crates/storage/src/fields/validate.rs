use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::normalize::{digits_only, is_digits};

pub const STATUS_ACTIVE: &str = "Ativo";
pub const STATUS_INACTIVE: &str = "Inativo";

/// Width of the name columns
pub const MAX_NAME_LENGTH: usize = 100;

/// Field roles an athlete can be registered with.
///
/// The Portuguese labels are what clients send and what gets stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Position {
    #[serde(rename = "Goleiro")]
    Goalkeeper,
    #[serde(rename = "Lateral Direito")]
    RightBack,
    #[serde(rename = "Lateral Esquerdo")]
    LeftBack,
    #[serde(rename = "Zagueiro")]
    CenterBack,
    #[serde(rename = "Volante")]
    DefensiveMidfielder,
    #[serde(rename = "Meio-campo")]
    Midfielder,
    #[serde(rename = "Meia Atacante")]
    AttackingMidfielder,
    #[serde(rename = "Ponta Direita")]
    RightWinger,
    #[serde(rename = "Ponta Esquerda")]
    LeftWinger,
    #[serde(rename = "Atacante")]
    Forward,
    #[serde(rename = "Centroavante")]
    Striker,
}

impl Position {
    pub const ALL: [Position; 11] = [
        Position::Goalkeeper,
        Position::RightBack,
        Position::LeftBack,
        Position::CenterBack,
        Position::DefensiveMidfielder,
        Position::Midfielder,
        Position::AttackingMidfielder,
        Position::RightWinger,
        Position::LeftWinger,
        Position::Forward,
        Position::Striker,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goleiro",
            Position::RightBack => "Lateral Direito",
            Position::LeftBack => "Lateral Esquerdo",
            Position::CenterBack => "Zagueiro",
            Position::DefensiveMidfielder => "Volante",
            Position::Midfielder => "Meio-campo",
            Position::AttackingMidfielder => "Meia Atacante",
            Position::RightWinger => "Ponta Direita",
            Position::LeftWinger => "Ponta Esquerda",
            Position::Forward => "Atacante",
            Position::Striker => "Centroavante",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// Checks the two mod-11 check digits of a CPF. Punctuation is ignored.
pub fn is_valid_cpf(value: &str) -> bool {
    let digits: Vec<u32> = digits_only(value)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 11 {
        return false;
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

// Weights run from len+1 down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();

    let rest = (sum * 10) % 11;
    if rest >= 10 { 0 } else { rest }
}

pub fn is_known_position(value: &str) -> bool {
    Position::from_label(value).is_some()
}

/// `YYYY-MM-DD` that names a real calendar day.
pub fn is_valid_date_string(value: &str) -> bool {
    let mut parts = value.split('-');
    let shape_ok = matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(y), Some(m), Some(d), None) if is_digits(y, 4) && is_digits(m, 2) && is_digits(d, 2)
    );

    shape_ok && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Landline (10 digits) or mobile (11 digits) number including the area code.
pub fn is_valid_phone(value: &str) -> bool {
    matches!(digits_only(value).len(), 10 | 11)
}

pub fn is_known_status(value: &str) -> bool {
    value == STATUS_ACTIVE || value == STATUS_INACTIVE
}
