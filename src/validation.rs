use crate::core::{SimulationInput, is_known_coverage};
use crate::error::InputError;

pub const MIN_VEHICLE_VALUE: f64 = 10_000.0;
pub const MAX_VEHICLE_VALUE: f64 = 500_000.0;
pub const MIN_CLIENT_AGE: u32 = 18;
pub const MAX_CLIENT_AGE: u32 = 90;

pub fn validate_input(input: &SimulationInput) -> Result<(), InputError> {
    let value = input.vehicle_value;
    if !value.is_finite() || !(MIN_VEHICLE_VALUE..=MAX_VEHICLE_VALUE).contains(&value) {
        return Err(InputError::VehicleValueOutOfRange {
            value,
            min: MIN_VEHICLE_VALUE,
            max: MAX_VEHICLE_VALUE,
        });
    }

    if !(MIN_CLIENT_AGE..=MAX_CLIENT_AGE).contains(&input.client_age) {
        return Err(InputError::ClientAgeOutOfRange {
            value: input.client_age,
            min: MIN_CLIENT_AGE,
            max: MAX_CLIENT_AGE,
        });
    }

    if let Some(unknown) = input
        .selected_coverage_ids
        .iter()
        .find(|id| !is_known_coverage(id))
    {
        return Err(InputError::UnknownCoverage(unknown.clone()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_endpoints() {
        validate_input(&SimulationInput::new(10_000.0, 18)).expect("lower bounds");
        validate_input(&SimulationInput::new(500_000.0, 90)).expect("upper bounds");
    }

    #[test]
    fn rejects_vehicle_value_outside_range() {
        for value in [9_999.0, 500_001.0, f64::NAN, f64::INFINITY] {
            let err = validate_input(&SimulationInput::new(value, 40)).expect_err("out of range");
            assert!(matches!(err, InputError::VehicleValueOutOfRange { .. }));
        }
    }

    #[test]
    fn rejects_client_age_outside_range() {
        let err = validate_input(&SimulationInput::new(50_000.0, 17)).expect_err("too young");
        assert!(err.to_string().contains("clientAge"));
        assert!(validate_input(&SimulationInput::new(50_000.0, 91)).is_err());
    }

    #[test]
    fn rejects_unknown_coverage_ids() {
        let input = SimulationInput::new(50_000.0, 40).with_coverages(["rental-car", "hovercraft"]);
        assert_eq!(
            validate_input(&input),
            Err(InputError::UnknownCoverage("hovercraft".to_string()))
        );
    }
}
