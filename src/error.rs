use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("vehicleValue must be between {min} and {max}, got {value}")]
    VehicleValueOutOfRange { value: f64, min: f64, max: f64 },
    #[error("clientAge must be between {min} and {max}, got {value}")]
    ClientAgeOutOfRange { value: u32, min: u32, max: u32 },
    #[error("unknown coverage id: {0}")]
    UnknownCoverage(String),
    #[error("unknown plan: {0}")]
    UnknownPlan(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("plan at position {0} has an empty name")]
    EmptyName(usize),
    #[error("duplicate plan name: {0}")]
    DuplicatePlan(String),
    #[error("plan {name} must have a positive base value, got {value}")]
    InvalidValue { name: String, value: f64 },
}
