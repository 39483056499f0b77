use std::collections::HashSet;
use std::sync::Mutex;

use chrono::NaiveDate;
use storage::error::{DUPLICATE_CPF_MESSAGE, StorageError};
use storage::models::{Athlete, NewAthlete};

use crate::traits::AthleteStore;
use crate::{ImporterError, Result};

/// In-memory store with a unique CPF rule, plus switches to simulate outages
/// and inserts that lose a race with a concurrent registration.
#[derive(Default)]
pub struct MemoryStore {
    athletes: Mutex<Vec<Athlete>>,
    fail_lookups: bool,
    taken_at_insert: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cpfs(cpfs: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut athletes = store.athletes.lock().unwrap();
            for (i, cpf) in cpfs.iter().enumerate() {
                athletes.push(stored_athlete(i as i32 + 1, cpf));
            }
        }
        store
    }

    pub fn failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    /// The CPF passes the pre-check but the insert is rejected as taken.
    pub fn taken_at_insert(mut self, cpf: &str) -> Self {
        self.taken_at_insert.insert(cpf.to_string());
        self
    }

    pub fn count(&self) -> usize {
        self.athletes.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl AthleteStore for MemoryStore {
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Athlete>> {
        if self.fail_lookups {
            return Err(ImporterError::ImportError("store unavailable".into()));
        }
        let athletes = self.athletes.lock().unwrap();
        Ok(athletes.iter().find(|a| a.cpf == cpf).cloned())
    }

    async fn insert(&self, athlete: &NewAthlete) -> Result<Athlete> {
        let mut athletes = self.athletes.lock().unwrap();
        if self.taken_at_insert.contains(&athlete.cpf) || athletes.iter().any(|a| a.cpf == athlete.cpf)
        {
            return Err(StorageError::ConstraintViolation(DUPLICATE_CPF_MESSAGE.into()).into());
        }

        let mut stored = stored_athlete(athletes.len() as i32 + 1, &athlete.cpf);
        stored.first_name = athlete.first_name.clone();
        stored.last_name = athlete.last_name.clone();
        stored.birth_date = athlete.birth_date;
        stored.position = athlete.position.clone();
        stored.secondary_position = athlete.secondary_position.clone();
        stored.guardian_phone = athlete.guardian_phone.clone();
        stored.category = athlete.category.clone();
        stored.age = athlete.age;
        stored.status = athlete.status.clone();
        stored.source = athlete.source.as_str().to_string();
        athletes.push(stored.clone());
        Ok(stored)
    }
}

fn stored_athlete(id: i32, cpf: &str) -> Athlete {
    let stamp = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    Athlete {
        id,
        first_name: "Existente".into(),
        last_name: "Cadastrado".into(),
        birth_date: NaiveDate::from_ymd_opt(2012, 1, 1).unwrap(),
        position: "Goleiro".into(),
        secondary_position: None,
        guardian_phone: "(11) 98765-4321".into(),
        cpf: cpf.to_string(),
        category: "Sub-13".into(),
        age: 12,
        status: "Ativo".into(),
        source: "manual".into(),
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}
