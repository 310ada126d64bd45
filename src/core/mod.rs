mod coverages;
mod engine;
mod recommender;
mod risk;
mod session;
mod types;

pub use coverages::{ADDITIONAL_COVERAGES, find_coverage, is_known_coverage};
pub use engine::{
    additional_coverages_sum, age_factor, calculate_plans, calculate_plans_with_coverages,
    final_value, vehicle_multiplier,
};
pub use recommender::recommend;
pub use risk::{age_risk, profile_score, protection_interest, vehicle_risk};
pub use session::{DEFAULT_CLIENT_AGE, DEFAULT_VEHICLE_VALUE, SimulationSession, simulate};
pub use types::{
    AdditionalCoverage, CalculatedPlan, Plan, ProfileScore, RecommendationTier, SimulationInput,
    SimulationOutcome,
};
