use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::Plan;
use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorData {
    #[serde(default)]
    pub included_benefits: Vec<String>,
    pub plans_indicators: Vec<Plan>,
}

impl SimulatorData {
    pub fn builtin() -> Self {
        Self {
            included_benefits: vec![
                "Collision and theft cover".to_string(),
                "Fire and natural events".to_string(),
                "Third-party property damage".to_string(),
                "Online claims tracking".to_string(),
            ],
            plans_indicators: vec![
                Plan {
                    name: "Basic".to_string(),
                    conversion: 75.0,
                    roi: 5.0,
                    value: 100.0,
                },
                Plan {
                    name: "Standard".to_string(),
                    conversion: 48.0,
                    roi: 7.0,
                    value: 150.0,
                },
                Plan {
                    name: "Premium".to_string(),
                    conversion: 25.0,
                    roi: 9.0,
                    value: 200.0,
                },
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for (idx, plan) in self.plans_indicators.iter().enumerate() {
            if plan.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(idx));
            }
            if !seen.insert(plan.name.as_str()) {
                return Err(CatalogError::DuplicatePlan(plan.name.clone()));
            }
            if !plan.value.is_finite() || plan.value <= 0.0 {
                return Err(CatalogError::InvalidValue {
                    name: plan.name.clone(),
                    value: plan.value,
                });
            }
        }
        Ok(())
    }
}

pub fn load_catalog(path: &Path) -> Result<SimulatorData, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = SimulatorData::from_json(&json)?;
    info!(
        path = %path.display(),
        plans = data.plans_indicators.len(),
        "loaded plan catalog"
    );
    Ok(data)
}

pub fn resolve_catalog(path: Option<&Path>) -> Result<SimulatorData, CatalogError> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            info!("using built-in plan catalog");
            Ok(SimulatorData::builtin())
        }
    }
}
