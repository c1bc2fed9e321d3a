use super::models::{ContextLookup, ContextSource, ResolvedUrl, ResourceRequest};
use super::path::{join_context_path, with_leading_slash};

/// Resolves the URL of a static resource.
///
/// The base path is picked in priority order:
/// 1. `override_param`, when non-empty and `lookup` knows the context
/// 2. `default_base`, when `lookup` knows the context
/// 3. `current_base`
///
/// Never fails: an empty `resource_path` resolves to the chosen base plus "/".
pub fn resolve<L>(
    resource_path: &str,
    override_param: Option<&str>,
    default_base: &str,
    current_base: &str,
    lookup: &L,
) -> String
where
    L: ContextLookup + ?Sized,
{
    let request = ResourceRequest {
        resource_path: resource_path.to_string(),
        override_context: override_param.map(str::to_string),
    };
    resolve_request(&request, default_base, current_base, lookup).url
}

/// Same as [`resolve`], also reporting which base path was chosen
pub fn resolve_request<L>(
    request: &ResourceRequest,
    default_base: &str,
    current_base: &str,
    lookup: &L,
) -> ResolvedUrl
where
    L: ContextLookup + ?Sized,
{
    let (base, source) = choose_base(request.override_param(), default_base, current_base, lookup);
    let url = join_context_path(&base, &request.resource_path);

    tracing::debug!(
        "resolve: '{}' -> '{}' ({} context '{}')",
        request.resource_path,
        url,
        source,
        base
    );

    ResolvedUrl { url, source }
}

fn choose_base<L>(
    override_param: Option<&str>,
    default_base: &str,
    current_base: &str,
    lookup: &L,
) -> (String, ContextSource)
where
    L: ContextLookup + ?Sized,
{
    if let Some(param) = override_param {
        let candidate = with_leading_slash(param);
        if lookup.context_exists(&candidate) {
            return (candidate, ContextSource::Override);
        }
        tracing::warn!(
            "resolve: configured resource context '{}' is not deployed, falling back",
            candidate
        );
    }

    if lookup.context_exists(default_base) {
        return (default_base.to_string(), ContextSource::Default);
    }

    (current_base.to_string(), ContextSource::Current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_RESOURCE_CONTEXT;

    const CURRENT: &str = "/TestContext";

    fn nothing_deployed(_: &str) -> bool {
        false
    }

    #[test]
    fn falls_back_to_current_context() {
        let url = resolve("/test/resource", None, DEFAULT_RESOURCE_CONTEXT, CURRENT, &nothing_deployed);
        assert_eq!(url, "/TestContext/test/resource");
    }

    #[test]
    fn uses_default_context_when_deployed() {
        let lookup = |path: &str| path == DEFAULT_RESOURCE_CONTEXT;
        let url = resolve("/test/resource", None, DEFAULT_RESOURCE_CONTEXT, CURRENT, &lookup);
        assert_eq!(url, "/ResourceServingWebapp/test/resource");
    }

    #[test]
    fn override_wins_over_default() {
        let lookup = |path: &str| path == DEFAULT_RESOURCE_CONTEXT || path == "/OverrideResourceWebapp";
        let resolved = resolve_request(
            &ResourceRequest::new("/test/resource").with_override("/OverrideResourceWebapp"),
            DEFAULT_RESOURCE_CONTEXT,
            CURRENT,
            &lookup,
        );
        assert_eq!(resolved.url, "/OverrideResourceWebapp/test/resource");
        assert_eq!(resolved.source, ContextSource::Override);
    }

    #[test]
    fn unresolved_override_falls_through_to_default() {
        let lookup = |path: &str| path == DEFAULT_RESOURCE_CONTEXT;
        let resolved = resolve_request(
            &ResourceRequest::new("/test/resource").with_override("/Missing"),
            DEFAULT_RESOURCE_CONTEXT,
            CURRENT,
            &lookup,
        );
        assert_eq!(resolved.url, "/ResourceServingWebapp/test/resource");
        assert_eq!(resolved.source, ContextSource::Default);
    }

    #[test]
    fn empty_override_is_ignored() {
        let resolved = resolve_request(
            &ResourceRequest::new("/test/resource").with_override(""),
            DEFAULT_RESOURCE_CONTEXT,
            CURRENT,
            &nothing_deployed,
        );
        assert_eq!(resolved.source, ContextSource::Current);
    }

    #[test]
    fn empty_resource_path_is_root() {
        let url = resolve("", None, DEFAULT_RESOURCE_CONTEXT, CURRENT, &nothing_deployed);
        assert_eq!(url, "/TestContext/");
    }
}
