//! Content-based hashing for analysis IDs.

use bc_model::PlantInputs;
use sha2::{Digest, Sha256};

pub fn compute_analysis_id(inputs: &PlantInputs, model_version: &str) -> String {
    let mut hasher = Sha256::new();

    let inputs_json = serde_json::to_string(inputs).unwrap_or_default();
    hasher.update(inputs_json.as_bytes());

    hasher.update(model_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
