use super::context::PageContext;
use super::errors::TagError;
use super::scope::Scope;
use resource_resolver::{
    resolve_request, ContextSource, ResolvedUrl, ResourceRequest, DEFAULT_RESOURCE_CONTEXT,
    RESOURCE_CONTEXT_INIT_PARAM,
};

/// What the page should do after a tag callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAction {
    SkipBody,
    EvalPage,
}

/// Resolves a static resource URL, preferring a deployed resource-serving webapp.
///
/// Configure with the setters, then call [`do_start_tag`](Self::do_start_tag)
/// and [`do_end_tag`](Self::do_end_tag). With a `var` set the URL is stored as
/// a page attribute, otherwise it is printed. Exactly one of the two happens.
#[derive(Debug, Clone)]
pub struct ResourceIncludeTag {
    value: Option<String>,
    var: Option<String>,
    scope: Scope,
    default_context: String,
    resolved: Option<ResolvedUrl>,
}

impl Default for ResourceIncludeTag {
    fn default() -> Self {
        Self {
            value: None,
            var: None,
            scope: Scope::default(),
            default_context: DEFAULT_RESOURCE_CONTEXT.to_string(),
            resolved: None,
        }
    }
}

impl ResourceIncludeTag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource path, relative to the context it ends up served from
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn set_var(&mut self, var: impl Into<String>) {
        let var = var.into();
        self.var = (!var.is_empty()).then_some(var);
    }

    pub fn set_scope(&mut self, scope: Scope) {
        self.scope = scope;
    }

    pub fn set_default_context(&mut self, path: impl Into<String>) {
        self.default_context = path.into();
    }

    /// URL computed by the last start tag
    pub fn url(&self) -> Option<&str> {
        self.resolved.as_ref().map(|resolved| resolved.url.as_str())
    }

    pub fn source(&self) -> Option<ContextSource> {
        self.resolved.as_ref().map(|resolved| resolved.source)
    }

    pub fn do_start_tag<P>(&mut self, page: &P) -> Result<TagAction, TagError>
    where
        P: PageContext + ?Sized,
    {
        let value = self.value.as_deref().ok_or(TagError::MissingValue)?;
        let servlet = page.servlet_context();

        let mut request = ResourceRequest::new(value);
        request.override_context = servlet.init_parameter(RESOURCE_CONTEXT_INIT_PARAM);

        let lookup = |path: &str| servlet.context(path).is_some();
        let resolved = resolve_request(
            &request,
            &self.default_context,
            servlet.context_path(),
            &lookup,
        );

        tracing::debug!("resource include: '{}' -> '{}'", value, resolved.url);
        self.resolved = Some(resolved);

        Ok(TagAction::SkipBody)
    }

    pub fn do_end_tag<P>(&mut self, page: &mut P) -> Result<TagAction, TagError>
    where
        P: PageContext + ?Sized,
    {
        let url = self
            .resolved
            .as_ref()
            .map(|resolved| resolved.url.clone())
            .ok_or(TagError::NotStarted)?;

        match &self.var {
            Some(var) => page.set_attribute(var, url, self.scope),
            None => page.print(&url)?,
        }

        Ok(TagAction::EvalPage)
    }

    /// Runs start and end tag in order, returning the resolved URL
    pub fn evaluate<P>(&mut self, page: &mut P) -> Result<String, TagError>
    where
        P: PageContext + ?Sized,
    {
        self.do_start_tag(&*page)?;
        self.do_end_tag(page)?;
        self.url().map(str::to_string).ok_or(TagError::NotStarted)
    }

    /// Clears all state so the tag can be reused
    pub fn release(&mut self) {
        *self = Self::default();
    }
}
