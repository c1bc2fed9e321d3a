use resource_config::Config;
use resource_resolver::{
    resolve_request, with_leading_slash, ContextSource, ResourceRequest,
    RESOURCE_CONTEXT_INIT_PARAM,
};
use resource_taglib::{ContextHandle, ServletContext};
use std::collections::{BTreeMap, HashMap};

/// Deployed web applications plus the current application's settings.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Container {
    context_path: String,
    default_context: String,
    init_params: HashMap<String, String>,
    contexts: BTreeMap<String, ContextHandle>,
}

impl Container {
    pub fn new(context_path: impl Into<String>) -> Self {
        Self {
            context_path: context_path.into(),
            default_context: resource_resolver::DEFAULT_RESOURCE_CONTEXT.to_string(),
            init_params: HashMap::new(),
            contexts: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut container = Self::new(config.server.context_path.as_str())
            .with_default_context(config.resources.default_context.as_str());

        for (name, value) in &config.init_params {
            container = container.with_init_param(name.as_str(), value.as_str());
        }

        if let Some(path) = config.resources.override_context() {
            container = container.with_init_param(RESOURCE_CONTEXT_INIT_PARAM, path);
        }

        for context in &config.contexts {
            if !context.enabled {
                continue;
            }
            let mut handle = ContextHandle::new(context.path.as_str());
            handle.name = context.name.clone();
            container = container.deploy(handle);
        }

        container
    }

    pub fn with_default_context(mut self, path: impl Into<String>) -> Self {
        self.default_context = path.into();
        self
    }

    pub fn with_init_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.init_params.insert(name.into(), value.into());
        self
    }

    /// Registers a context, keyed by its normalized path
    pub fn deploy(mut self, mut handle: ContextHandle) -> Self {
        handle.path = normalize_context_path(&handle.path);
        self.contexts.insert(handle.path.clone(), handle);
        self
    }

    pub fn default_context(&self) -> &str {
        &self.default_context
    }

    pub fn contexts(&self) -> impl Iterator<Item = &ContextHandle> {
        self.contexts.values()
    }

    /// Base path resources currently resolve against, and why; "/" for the root context
    pub fn resource_context(&self) -> (String, ContextSource) {
        let mut request = ResourceRequest::new("");
        request.override_context = self.init_parameter(RESOURCE_CONTEXT_INIT_PARAM);

        let lookup = |path: &str| self.context(path).is_some();
        let resolved = resolve_request(&request, &self.default_context, &self.context_path, &lookup);

        let base = match resolved.url.trim_end_matches('/') {
            "" => "/".to_string(),
            base => base.to_string(),
        };
        (base, resolved.source)
    }
}

impl ServletContext for Container {
    fn context_path(&self) -> &str {
        &self.context_path
    }

    fn init_parameter(&self, name: &str) -> Option<String> {
        self.init_params.get(name).cloned()
    }

    fn context(&self, path: &str) -> Option<ContextHandle> {
        self.contexts.get(&normalize_context_path(path)).cloned()
    }
}

fn normalize_context_path(path: &str) -> String {
    with_leading_slash(path.trim().trim_end_matches('/'))
}
