use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSettings,
    #[serde(default = "super::defaults::resource_settings")]
    pub resources: ResourceSettings,
    /// Extra servlet-context init parameters
    #[serde(default)]
    pub init_params: BTreeMap<String, String>,
    #[serde(default)]
    pub contexts: Vec<ContextConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Context path of the application the server stands in for
    #[serde(default = "super::defaults::context_path")]
    pub context_path: String,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceSettings {
    /// Value of the `resourceContextPath` init parameter, empty when unset
    #[serde(default)]
    pub context_path: String,
    #[serde(default = "super::defaults::default_context")]
    pub default_context: String,
}

impl ResourceSettings {
    pub fn override_context(&self) -> Option<&str> {
        let path = self.context_path.trim();
        (!path.is_empty()).then_some(path)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContextConfig {
    pub path: String,
    #[serde(default = "super::defaults::context_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
