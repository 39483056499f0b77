use tracing::warn;

use crate::traits::AthleteStore;

/// Optimistic pre-check for an already registered CPF.
///
/// A failed lookup counts as "not registered" so a store hiccup never blocks a
/// registration; the unique constraint on `athletes.cpf` still rejects the
/// insert if the CPF was in fact taken.
pub struct DuplicateChecker<'a, S: AthleteStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: AthleteStore + ?Sized> DuplicateChecker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn exists(&self, cpf: &str) -> bool {
        match self.store.find_by_cpf(cpf).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!("Duplicate CPF lookup failed, treating {} as new: {}", cpf, e);
                false
            }
        }
    }
}
