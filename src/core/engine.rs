use std::collections::BTreeSet;

use super::coverages::ADDITIONAL_COVERAGES;
use super::types::{AdditionalCoverage, CalculatedPlan, Plan, SimulationInput};

const VEHICLE_DOUBLING_VALUE: f64 = 800_000.0;

pub fn vehicle_multiplier(vehicle_value: f64) -> f64 {
    1.0 + vehicle_value / VEHICLE_DOUBLING_VALUE
}

pub fn age_factor(client_age: u32) -> f64 {
    if client_age < 25 {
        1.35
    } else if client_age < 35 {
        1.15
    } else if client_age > 65 {
        1.2
    } else {
        1.0
    }
}

// Unknown ids contribute nothing.
pub fn additional_coverages_sum(
    selected_ids: &BTreeSet<String>,
    coverages: &[AdditionalCoverage],
) -> f64 {
    coverages
        .iter()
        .filter(|coverage| selected_ids.contains(coverage.id))
        .map(|coverage| coverage.value)
        .sum()
}

pub fn final_value(plan: &Plan, input: &SimulationInput, coverages: &[AdditionalCoverage]) -> f64 {
    let loaded_base =
        plan.value * vehicle_multiplier(input.vehicle_value) * age_factor(input.client_age);
    loaded_base + additional_coverages_sum(&input.selected_coverage_ids, coverages)
}

pub fn calculate_plans(catalog: &[Plan], input: &SimulationInput) -> Vec<CalculatedPlan> {
    calculate_plans_with_coverages(catalog, input, &ADDITIONAL_COVERAGES)
}

pub fn calculate_plans_with_coverages(
    catalog: &[Plan],
    input: &SimulationInput,
    coverages: &[AdditionalCoverage],
) -> Vec<CalculatedPlan> {
    catalog
        .iter()
        .map(|plan| CalculatedPlan {
            plan: plan.clone(),
            final_value: final_value(plan, input, coverages),
        })
        .collect()
}
