use super::errors::ConfigError;
use super::models::Config;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.port must be non-zero".to_string(),
            ));
        }

        if self.server.max_concurrent_requests == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.max_concurrent_requests must be at least 1".to_string(),
            ));
        }

        if self.resources.default_context.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "resources.default_context must not be empty".to_string(),
            ));
        }

        for (idx, context) in self.contexts.iter().enumerate() {
            if context.path.trim().trim_matches('/').is_empty() {
                return Err(ConfigError::InvalidConfig(format!(
                    "contexts[{}].path must name a context",
                    idx
                )));
            }
        }

        Ok(())
    }
}
