/// Default values for configuration fields

pub fn context_path() -> String {
    "/portal".to_string()
}

pub fn timeout_secs() -> u64 {
    30
}

pub fn max_concurrent_requests() -> usize {
    1000
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn default_context() -> String {
    resource_resolver::DEFAULT_RESOURCE_CONTEXT.to_string()
}

pub fn resource_settings() -> super::models::ResourceSettings {
    super::models::ResourceSettings {
        context_path: String::new(),
        default_context: default_context(),
    }
}

pub fn context_enabled() -> bool {
    true
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# Resource Server Utils Configuration
# ===============================================================================

[server]
# Network
host = "0.0.0.0"                     # Server bind address (0.0.0.0 = all interfaces)
port = 8080                          # Server port
context_path = "/portal"             # Context path of the current application

# Performance
timeout_secs = 30                    # Request timeout in seconds
max_concurrent_requests = 1000       # Max simultaneous connections

# CORS
allowed_origins = ["*"]              # "*" = all origins | ["https://example.com"] for production

# ===============================================================================
# RESOURCE RESOLUTION
# ===============================================================================
[resources]
context_path = ""                    # resourceContextPath init parameter (empty = unset)
default_context = "/ResourceServingWebapp"  # Resource serving webapp looked up when no override resolves

# Additional servlet-context init parameters
[init_params]

# ===============================================================================
# DEPLOYED CONTEXTS
# ===============================================================================
# Web applications reachable from the current context. Resources resolve to the
# first of: resources.context_path, resources.default_context, server.context_path
# that is deployed here.

[[contexts]]
path = "/ResourceServingWebapp"      # Context path
enabled = true                       # Reachable from the current context
name = "Resource Serving Webapp"     # Display name (optional)
"#;
