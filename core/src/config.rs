use std::io::ErrorKind;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, String> {
    serde_yaml_ng::to_string(value).map_err(|e| format!("Failed to serialize config: {}", e))
}

pub fn from_yaml_str<T: DeserializeOwned>(content: &str) -> Result<T, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
}

/// Reads and validates a YAML config file. A missing file is not an
/// error: the caller falls back to its defaults.
pub fn load_yaml_file<T>(path: &str) -> Result<Option<T>, String>
where
    T: DeserializeOwned + Validate,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            return match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            };
        }
    };

    let value: T = from_yaml_str(&content)?;
    value
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(Some(value))
}

pub fn save_yaml_file<T>(path: &str, value: &T) -> Result<(), String>
where
    T: Serialize + Validate,
{
    value
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    let content = to_yaml_string(value)?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
