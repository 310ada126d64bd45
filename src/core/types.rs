use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub name: String,
    // display only
    #[serde(default)]
    pub conversion: f64,
    // display only
    #[serde(default)]
    pub roi: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCoverage {
    pub id: &'static str,
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInput {
    pub vehicle_value: f64,
    pub client_age: u32,
    pub selected_coverage_ids: BTreeSet<String>,
}

impl SimulationInput {
    pub fn new(vehicle_value: f64, client_age: u32) -> Self {
        Self {
            vehicle_value,
            client_age,
            selected_coverage_ids: BTreeSet::new(),
        }
    }

    pub fn with_coverages<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_coverage_ids
            .extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn selected_count(&self) -> usize {
        self.selected_coverage_ids.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedPlan {
    #[serde(flatten)]
    pub plan: Plan,
    pub final_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileScore {
    pub age_risk: f64,
    pub vehicle_risk: f64,
    pub protection_interest: f64,
    pub score: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RecommendationTier {
    Basic,
    Standard,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    pub plans: Vec<CalculatedPlan>,
    pub recommended_plan: Option<String>,
    pub selected_plan: Option<String>,
    pub profile: ProfileScore,
}
