//! Per entry point settings for the row processor: which header names map to
//! which field, which fields are mandatory, and which age table applies.

use storage::fields::{CategoryTable, REGISTRATION, WEBHOOK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    BirthDate,
    Position,
    SecondaryPosition,
    GuardianPhone,
    Cpf,
}

impl Field {
    /// Key used in JSON payloads and error responses
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::FirstName => "nome",
            Field::LastName => "sobrenome",
            Field::BirthDate => "data_nascimento",
            Field::Position => "posicao",
            Field::SecondaryPosition => "posicao_secundaria",
            Field::GuardianPhone => "telefone_responsavel",
            Field::Cpf => "cpf",
        }
    }

    pub fn missing_message(self) -> &'static str {
        match self {
            Field::FirstName => "Nome obrigatório",
            Field::LastName => "Sobrenome obrigatório",
            Field::BirthDate => "Data de nascimento obrigatória",
            Field::Position => "Posição obrigatória",
            Field::SecondaryPosition => "Posição secundária obrigatória",
            Field::GuardianPhone => "Telefone obrigatório",
            Field::Cpf => "CPF obrigatório",
        }
    }
}

/// Order in which presence errors are reported. The birth date is always
/// required and is checked on its own, after the identifier and position.
pub(crate) const PRESENCE_ORDER: [Field; 5] = [
    Field::FirstName,
    Field::LastName,
    Field::Cpf,
    Field::Position,
    Field::GuardianPhone,
];

#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pub first_name: &'static [&'static str],
    pub last_name: &'static [&'static str],
    pub birth_date: &'static [&'static str],
    pub position: &'static [&'static str],
    pub secondary_position: &'static [&'static str],
    pub guardian_phone: &'static [&'static str],
    pub cpf: &'static [&'static str],
}

impl FieldAliases {
    pub fn for_field(&self, field: Field) -> &'static [&'static str] {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::BirthDate => self.birth_date,
            Field::Position => self.position,
            Field::SecondaryPosition => self.secondary_position,
            Field::GuardianPhone => self.guardian_phone,
            Field::Cpf => self.cpf,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RowProfile {
    pub name: &'static str,
    pub aliases: FieldAliases,
    pub required: &'static [Field],
    /// Order in which missing fields are listed back to form callers
    pub missing_order: &'static [Field],
    pub categories: CategoryTable,
    /// "Maria Clara Souza" without a family name becomes "Maria" + "Clara Souza"
    pub split_full_name: bool,
    /// The position field is a comma separated list: first is primary,
    /// second is secondary
    pub split_positions: bool,
}

impl RowProfile {
    pub fn requires(&self, field: Field) -> bool {
        self.required.contains(&field)
    }

    /// Sorts wire names of missing fields into `missing_order`.
    pub fn order_missing(&self, missing: &mut [&'static str]) {
        missing.sort_by_key(|name| {
            self.missing_order
                .iter()
                .position(|field| field.wire_name() == *name)
                .unwrap_or(usize::MAX)
        });
    }
}

/// Column headers accepted in the Excel template
pub const SPREADSHEET: RowProfile = RowProfile {
    name: "spreadsheet",
    aliases: FieldAliases {
        first_name: &["Nome", "NOME"],
        last_name: &["Sobrenome", "SOBRENOME"],
        birth_date: &["Data de Nascimento", "DATA DE NASCIMENTO", "Data Nascimento"],
        position: &["Posição", "POSIÇÃO", "Posicao"],
        secondary_position: &["Posição Secundária", "POSIÇÃO SECUNDÁRIA", "Posicao Secundaria"],
        guardian_phone: &["Telefone", "TELEFONE", "Telefone Responsável"],
        cpf: &["CPF"],
    },
    required: &[
        Field::FirstName,
        Field::LastName,
        Field::Cpf,
        Field::Position,
        Field::GuardianPhone,
    ],
    missing_order: &[
        Field::FirstName,
        Field::LastName,
        Field::Cpf,
        Field::Position,
        Field::GuardianPhone,
        Field::BirthDate,
    ],
    categories: REGISTRATION,
    split_full_name: false,
    split_positions: false,
};

/// Keys sent by the form automation webhook
pub const WEBHOOK_FORM: RowProfile = RowProfile {
    name: "webhook",
    aliases: FieldAliases {
        first_name: &["nome", "Nome Completo", "Nome"],
        last_name: &["sobrenome", "Sobrenome"],
        birth_date: &["data_nascimento", "Data de Nascimento"],
        position: &["posicoes", "Posições de Jogo", "Posicoes"],
        secondary_position: &[],
        guardian_phone: &["telefone_responsavel", "Telefone do Responsável", "Telefone"],
        cpf: &["cpf", "CPF"],
    },
    required: &[Field::FirstName, Field::Cpf],
    missing_order: &[Field::FirstName, Field::Cpf, Field::BirthDate],
    categories: WEBHOOK,
    split_full_name: true,
    split_positions: true,
};

/// Fixed keys of the public self-registration form
pub const PUBLIC_FORM: RowProfile = RowProfile {
    name: "public",
    aliases: FieldAliases {
        first_name: &["nome"],
        last_name: &["sobrenome"],
        birth_date: &["data_nascimento"],
        position: &["posicao"],
        secondary_position: &["posicao_secundaria"],
        guardian_phone: &["telefone_responsavel"],
        cpf: &["cpf"],
    },
    required: &[
        Field::FirstName,
        Field::LastName,
        Field::Cpf,
        Field::Position,
        Field::GuardianPhone,
    ],
    missing_order: &[
        Field::FirstName,
        Field::LastName,
        Field::BirthDate,
        Field::Position,
        Field::GuardianPhone,
        Field::Cpf,
    ],
    categories: REGISTRATION,
    split_full_name: false,
    split_positions: false,
};
