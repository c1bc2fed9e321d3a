use super::scope::Scope;
use std::io;

/// A web application reachable from the current one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextHandle {
    pub path: String,
    pub name: Option<String>,
}

impl ContextHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
        }
    }
}

/// The servlet container as seen from the current web application
pub trait ServletContext {
    /// Base path of the current application
    fn context_path(&self) -> &str;

    fn init_parameter(&self, name: &str) -> Option<String>;

    /// Cross-context lookup; `None` when nothing is deployed at `path`
    fn context(&self, path: &str) -> Option<ContextHandle>;
}

/// Per-request page state the tag writes its result into
pub trait PageContext {
    fn servlet_context(&self) -> &dyn ServletContext;

    fn set_attribute(&mut self, name: &str, value: String, scope: Scope);

    fn print(&mut self, text: &str) -> io::Result<()>;
}
