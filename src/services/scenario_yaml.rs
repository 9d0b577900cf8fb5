use std::io;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Loads a scenario from a YAML file. Scenario types default every field, so
/// a file only needs to name the fields it overrides.
pub fn load_scenario_from_yaml_file<T: DeserializeOwned>(
    path: &str,
) -> Result<T, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}
