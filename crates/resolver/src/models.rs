use std::fmt;

/// A single resource URL lookup, built once per tag evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRequest {
    pub resource_path: String,
    pub override_context: Option<String>,
}

impl ResourceRequest {
    pub fn new(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            override_context: None,
        }
    }

    pub fn with_override(mut self, context: impl Into<String>) -> Self {
        self.override_context = Some(context.into());
        self
    }

    /// Override context, treating an empty string as unset
    pub fn override_param(&self) -> Option<&str> {
        self.override_context
            .as_deref()
            .filter(|context| !context.is_empty())
    }
}

/// Which base path a resolved URL was built on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSource {
    Override,
    Default,
    Current,
}

impl fmt::Display for ContextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContextSource::Override => "override",
            ContextSource::Default => "default",
            ContextSource::Current => "current",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub url: String,
    pub source: ContextSource,
}

/// Answers whether a web application is deployed at a context path
pub trait ContextLookup {
    fn context_exists(&self, path: &str) -> bool;
}

impl<F> ContextLookup for F
where
    F: Fn(&str) -> bool,
{
    fn context_exists(&self, path: &str) -> bool {
        self(path)
    }
}
