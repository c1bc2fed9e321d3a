/// Init parameter naming an alternative resource-serving context
pub const RESOURCE_CONTEXT_INIT_PARAM: &str = "resourceContextPath";

/// Well-known path of the resource-serving webapp
pub const DEFAULT_RESOURCE_CONTEXT: &str = "/ResourceServingWebapp";
