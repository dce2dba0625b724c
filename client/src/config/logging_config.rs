use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}
