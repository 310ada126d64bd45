use super::types::AdditionalCoverage;

// Flat monthly add-ons, identical for every plan.
pub const ADDITIONAL_COVERAGES: [AdditionalCoverage; 4] = [
    AdditionalCoverage {
        id: "glass-protection",
        name: "Glass and headlight cover",
        value: 25.0,
    },
    AdditionalCoverage {
        id: "rental-car",
        name: "Rental car (15 days)",
        value: 30.0,
    },
    AdditionalCoverage {
        id: "roadside-24h",
        name: "24h roadside assistance",
        value: 25.0,
    },
    AdditionalCoverage {
        id: "third-party-plus",
        name: "Extended third-party damage",
        value: 40.0,
    },
];

pub fn find_coverage(id: &str) -> Option<&'static AdditionalCoverage> {
    ADDITIONAL_COVERAGES.iter().find(|coverage| coverage.id == id)
}

pub fn is_known_coverage(id: &str) -> bool {
    find_coverage(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coverage_ids_are_unique() {
        let ids: HashSet<_> = ADDITIONAL_COVERAGES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), ADDITIONAL_COVERAGES.len());
    }

    #[test]
    fn coverage_prices_are_non_negative() {
        assert!(ADDITIONAL_COVERAGES.iter().all(|c| c.value >= 0.0));
    }

    #[test]
    fn find_coverage_matches_exact_ids_only() {
        assert_eq!(find_coverage("rental-car").map(|c| c.value), Some(30.0));
        assert!(find_coverage("Rental-Car").is_none());
        assert!(!is_known_coverage(""));
    }
}
