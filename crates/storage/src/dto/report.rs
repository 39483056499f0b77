use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::athlete::AthleteResponse;
use crate::fields::{STATUS_ACTIVE, STATUS_INACTIVE};
use crate::models::Athlete;

/// Filters for the athlete report. A missing value or `all` disables a filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReportFilters {
    pub categoria: Option<String>,
    pub posicao: Option<String>,
    pub status: Option<String>,
}

impl ReportFilters {
    fn active(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty() && *v != "all")
    }

    pub fn matches(&self, athlete: &Athlete) -> bool {
        let by_category = Self::active(&self.categoria).is_none_or(|c| athlete.category == c);
        let by_position = Self::active(&self.posicao).is_none_or(|p| athlete.position == p);
        let by_status = Self::active(&self.status).is_none_or(|s| athlete.status == s);
        by_category && by_position && by_status
    }
}

/// Data behind the printable athlete report: totals over the whole registry
/// and the rows selected by the filters.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AthleteReport {
    #[serde(rename = "filtros")]
    pub filters: ReportFilters,
    #[serde(rename = "total_atletas")]
    pub total: usize,
    #[serde(rename = "ativos")]
    pub active: usize,
    #[serde(rename = "inativos")]
    pub inactive: usize,
    /// Distinct categories present in the registry, sorted
    #[serde(rename = "categorias")]
    pub categories: Vec<String>,
    #[serde(rename = "total_filtrado")]
    pub selected: usize,
    #[serde(rename = "atletas")]
    pub athletes: Vec<AthleteResponse>,
}

impl AthleteReport {
    pub fn build(athletes: Vec<Athlete>, filters: ReportFilters) -> Self {
        let total = athletes.len();
        let active = athletes.iter().filter(|a| a.status == STATUS_ACTIVE).count();
        let inactive = athletes
            .iter()
            .filter(|a| a.status == STATUS_INACTIVE)
            .count();
        let categories: BTreeSet<String> = athletes.iter().map(|a| a.category.clone()).collect();

        let selected: Vec<AthleteResponse> = athletes
            .into_iter()
            .filter(|a| filters.matches(a))
            .map(AthleteResponse::from)
            .collect();

        Self {
            filters,
            total,
            active,
            inactive,
            categories: categories.into_iter().collect(),
            selected: selected.len(),
            athletes: selected,
        }
    }
}
