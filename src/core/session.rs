use super::coverages::is_known_coverage;
use super::engine::calculate_plans;
use super::recommender::recommend;
use super::risk::profile_score;
use super::types::{Plan, SimulationInput, SimulationOutcome};
use crate::error::InputError;

pub const DEFAULT_VEHICLE_VALUE: f64 = 50_000.0;
pub const DEFAULT_CLIENT_AGE: u32 = 30;

pub fn simulate(catalog: &[Plan], input: &SimulationInput) -> SimulationOutcome {
    let plans = calculate_plans(catalog, input);
    let recommended_plan = recommend(&plans, input);
    let profile = profile_score(
        input.client_age,
        input.vehicle_value,
        input.selected_count(),
    );
    SimulationOutcome {
        plans,
        selected_plan: recommended_plan.clone(),
        recommended_plan,
        profile,
    }
}

// Holds no derived values; `outcome` recomputes on every call.
#[derive(Debug, Clone)]
pub struct SimulationSession {
    catalog: Vec<Plan>,
    input: SimulationInput,
    selected_plan_name: Option<String>,
}

impl SimulationSession {
    pub fn new(catalog: Vec<Plan>) -> Self {
        Self {
            catalog,
            input: SimulationInput::new(DEFAULT_VEHICLE_VALUE, DEFAULT_CLIENT_AGE),
            selected_plan_name: None,
        }
    }

    pub fn input(&self) -> &SimulationInput {
        &self.input
    }

    pub fn catalog(&self) -> &[Plan] {
        &self.catalog
    }

    pub fn set_vehicle_value(&mut self, vehicle_value: f64) {
        self.input.vehicle_value = vehicle_value;
    }

    pub fn set_client_age(&mut self, client_age: u32) {
        self.input.client_age = client_age;
    }

    // Ok(true) when the coverage is now selected.
    pub fn toggle_coverage(&mut self, id: &str) -> Result<bool, InputError> {
        if !is_known_coverage(id) {
            return Err(InputError::UnknownCoverage(id.to_string()));
        }
        if self.input.selected_coverage_ids.remove(id) {
            Ok(false)
        } else {
            self.input.selected_coverage_ids.insert(id.to_string());
            Ok(true)
        }
    }

    pub fn select_plan(&mut self, name: &str) -> Result<(), InputError> {
        if !self.catalog.iter().any(|plan| plan.name == name) {
            return Err(InputError::UnknownPlan(name.to_string()));
        }
        self.selected_plan_name = Some(name.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_plan_name = None;
    }

    pub fn outcome(&self) -> SimulationOutcome {
        let mut outcome = simulate(&self.catalog, &self.input);
        if let Some(name) = &self.selected_plan_name {
            outcome.selected_plan = Some(name.clone());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str, value: f64) -> Plan {
        Plan {
            name: name.to_string(),
            conversion: 0.0,
            roi: 0.0,
            value,
        }
    }

    fn sample_session() -> SimulationSession {
        SimulationSession::new(vec![
            plan("Basic", 100.0),
            plan("Standard", 150.0),
            plan("Premium", 200.0),
        ])
    }

    #[test]
    fn new_session_starts_from_defaults() {
        let session = sample_session();
        assert_eq!(session.input().vehicle_value, DEFAULT_VEHICLE_VALUE);
        assert_eq!(session.input().client_age, DEFAULT_CLIENT_AGE);
        assert!(session.input().selected_coverage_ids.is_empty());
        assert_eq!(session.catalog().len(), 3);
    }

    #[test]
    fn selected_plan_defaults_to_recommendation() {
        let session = sample_session();
        let outcome = session.outcome();
        assert_eq!(outcome.selected_plan, outcome.recommended_plan);
        assert_eq!(outcome.plans.len(), 3);
    }

    #[test]
    fn outcome_follows_every_mutation() {
        let mut session = sample_session();
        session.set_vehicle_value(50_000.0);
        session.set_client_age(28);
        assert_eq!(session.outcome().recommended_plan.as_deref(), Some("Basic"));

        session.set_vehicle_value(450_000.0);
        session.set_client_age(70);
        for id in ["glass-protection", "rental-car", "roadside-24h"] {
            assert!(session.toggle_coverage(id).expect("known coverage"));
        }
        let outcome = session.outcome();
        assert_eq!(outcome.recommended_plan.as_deref(), Some("Premium"));
        assert!((outcome.plans[0].final_value - 267.5).abs() < 1e-9);
    }

    #[test]
    fn toggling_twice_restores_the_outcome() {
        let mut session = sample_session();
        let before = session.outcome();

        assert!(session.toggle_coverage("third-party-plus").expect("known"));
        assert_ne!(session.outcome(), before);
        assert!(!session.toggle_coverage("third-party-plus").expect("known"));
        assert_eq!(session.outcome(), before);
    }

    #[test]
    fn toggle_rejects_unknown_coverage() {
        let mut session = sample_session();
        let err = session.toggle_coverage("jetpack").expect_err("unknown id");
        assert_eq!(err, InputError::UnknownCoverage("jetpack".to_string()));
        assert!(session.input().selected_coverage_ids.is_empty());
    }

    #[test]
    fn explicit_selection_overrides_recommendation_until_cleared() {
        let mut session = sample_session();
        session.select_plan("Premium").expect("plan exists");
        let outcome = session.outcome();
        assert_eq!(outcome.selected_plan.as_deref(), Some("Premium"));
        assert_eq!(outcome.recommended_plan.as_deref(), Some("Basic"));

        session.clear_selection();
        assert_eq!(session.outcome().selected_plan.as_deref(), Some("Basic"));
    }

    #[test]
    fn select_rejects_unknown_plan() {
        let mut session = sample_session();
        let err = session.select_plan("Platinum").expect_err("no such plan");
        assert!(err.to_string().contains("Platinum"));
    }

    #[test]
    fn empty_catalog_yields_no_plans_and_no_selection() {
        let outcome = SimulationSession::new(Vec::new()).outcome();
        assert!(outcome.plans.is_empty());
        assert_eq!(outcome.recommended_plan, None);
        assert_eq!(outcome.selected_plan, None);
    }
}
