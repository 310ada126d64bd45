use super::types::{ProfileScore, RecommendationTier};

const AGE_WEIGHT: f64 = 0.35;
const VEHICLE_WEIGHT: f64 = 0.40;
const PROTECTION_WEIGHT: f64 = 0.25;

const VEHICLE_RISK_CEILING: f64 = 500_000.0;

// Not tied to the coverage table and not clamped: five selections score 1.25.
const PROTECTION_SLOTS: f64 = 4.0;

const STANDARD_THRESHOLD: f64 = 0.33;
const PREMIUM_THRESHOLD: f64 = 0.60;

pub fn age_risk(client_age: u32) -> f64 {
    match client_age {
        0..=20 => 1.0,
        21..=24 => 0.8,
        25..=29 => 0.5,
        30..=55 => 0.2,
        56..=65 => 0.4,
        66..=75 => 0.7,
        _ => 0.9,
    }
}

pub fn vehicle_risk(vehicle_value: f64) -> f64 {
    (vehicle_value / VEHICLE_RISK_CEILING).min(1.0)
}

pub fn protection_interest(selected_count: usize) -> f64 {
    selected_count as f64 / PROTECTION_SLOTS
}

pub fn profile_score(client_age: u32, vehicle_value: f64, selected_count: usize) -> ProfileScore {
    let age_risk = age_risk(client_age);
    let vehicle_risk = vehicle_risk(vehicle_value);
    let protection_interest = protection_interest(selected_count);
    ProfileScore {
        age_risk,
        vehicle_risk,
        protection_interest,
        score: age_risk * AGE_WEIGHT
            + vehicle_risk * VEHICLE_WEIGHT
            + protection_interest * PROTECTION_WEIGHT,
    }
}

impl RecommendationTier {
    pub fn from_score(score: f64) -> Self {
        if score < STANDARD_THRESHOLD {
            RecommendationTier::Basic
        } else if score < PREMIUM_THRESHOLD {
            RecommendationTier::Standard
        } else {
            RecommendationTier::Premium
        }
    }

    pub fn sorted_index(self) -> usize {
        match self {
            RecommendationTier::Basic => 0,
            RecommendationTier::Standard => 1,
            RecommendationTier::Premium => 2,
        }
    }
}
