use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String, context_path: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { contexts_count: usize },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },

    // Container
    ContextDeployed { path: String, name: Option<String> },
    ContextDisabled { path: String },
    ResourceContextSelected { path: String, source: String },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
