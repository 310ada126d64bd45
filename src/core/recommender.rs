use super::risk::profile_score;
use super::types::{CalculatedPlan, RecommendationTier, SimulationInput};

pub fn recommend(plans: &[CalculatedPlan], input: &SimulationInput) -> Option<String> {
    if plans.is_empty() {
        return None;
    }

    let mut sorted: Vec<&CalculatedPlan> = plans.iter().collect();
    // Stable, so equal prices keep catalog order.
    sorted.sort_by(|a, b| a.final_value.total_cmp(&b.final_value));

    // Fewer than three tiers: second cheapest, whatever the profile.
    if sorted.len() < 3 {
        let idx = usize::min(1, sorted.len() - 1);
        return Some(sorted[idx].plan.name.clone());
    }

    let profile = profile_score(
        input.client_age,
        input.vehicle_value,
        input.selected_count(),
    );
    let tier = RecommendationTier::from_score(profile.score);
    // Plans past the third cheapest are never eligible.
    Some(sorted[tier.sorted_index()].plan.name.clone())
}
