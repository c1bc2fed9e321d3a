// Re-export all public APIs from the workspace crates

pub use resource_resolver::*;
pub use resource_events::*;
pub use resource_config::*;
pub use resource_taglib::*;
pub use resource_container::*;
pub use resource_api::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Resolution
    pub use resource_resolver::{resolve, ResourceRequest, DEFAULT_RESOURCE_CONTEXT};

    // Tag
    pub use resource_taglib::{PageContext, ResourceIncludeTag, ServletContext};

    // Container
    pub use resource_container::{Container, RequestPage};

    // Configuration
    pub use resource_config::Config;

    // Events
    pub use resource_events::{AppEvent, EventBus};
}
