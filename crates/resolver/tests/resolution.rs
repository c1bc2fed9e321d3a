use resource_resolver::{
    resolve, resolve_request, ContextSource, ResourceRequest, DEFAULT_RESOURCE_CONTEXT,
};

const CURRENT_CONTEXT: &str = "/TestContext";

fn deployed(contexts: &'static [&'static str]) -> impl Fn(&str) -> bool {
    move |path: &str| contexts.iter().any(|context| *context == path)
}

#[test]
fn local_url_when_resource_webapp_unavailable() {
    let lookup = deployed(&[]);
    let url = resolve("/test/resource", None, DEFAULT_RESOURCE_CONTEXT, CURRENT_CONTEXT, &lookup);
    assert_eq!(url, "/TestContext/test/resource");
}

#[test]
fn resource_webapp_url_without_init_param() {
    let lookup = deployed(&["/ResourceServingWebapp"]);
    let url = resolve("/test/resource", None, DEFAULT_RESOURCE_CONTEXT, CURRENT_CONTEXT, &lookup);
    assert_eq!(url, "/ResourceServingWebapp/test/resource");
}

#[test]
fn overridden_resource_webapp_url() {
    let lookup = deployed(&["/OverrideResourceWebapp"]);
    let url = resolve(
        "/test/resource",
        Some("/OverrideResourceWebapp"),
        DEFAULT_RESOURCE_CONTEXT,
        CURRENT_CONTEXT,
        &lookup,
    );
    assert_eq!(url, "/OverrideResourceWebapp/test/resource");
}

#[test]
fn adds_slashes_as_necessary() {
    let lookup = deployed(&["/ResourceServingWebapp"]);
    let url = resolve(
        "test/resource",
        Some("ResourceServingWebapp"),
        DEFAULT_RESOURCE_CONTEXT,
        CURRENT_CONTEXT,
        &lookup,
    );
    assert_eq!(url, "/ResourceServingWebapp/test/resource");
}

#[test]
fn slash_variants_resolve_identically() {
    let lookup = deployed(&["/OverrideResourceWebapp"]);
    let expected = "/OverrideResourceWebapp/test/resource";

    for resource in ["test/resource", "/test/resource", "//test/resource"] {
        for context in ["OverrideResourceWebapp", "/OverrideResourceWebapp"] {
            let url = resolve(resource, Some(context), DEFAULT_RESOURCE_CONTEXT, CURRENT_CONTEXT, &lookup);
            assert_eq!(url, expected, "resource={resource:?} context={context:?}");
        }
    }

    let lookup = deployed(&[]);
    for current in ["/TestContext", "/TestContext/"] {
        let url = resolve("test/resource", None, DEFAULT_RESOURCE_CONTEXT, current, &lookup);
        assert_eq!(url, "/TestContext/test/resource");
    }
}

#[test]
fn resolved_url_reports_source() {
    let lookup = deployed(&["/ResourceServingWebapp"]);
    let resolved = resolve_request(
        &ResourceRequest::new("css/portal.css"),
        DEFAULT_RESOURCE_CONTEXT,
        CURRENT_CONTEXT,
        &lookup,
    );
    assert_eq!(resolved.url, "/ResourceServingWebapp/css/portal.css");
    assert_eq!(resolved.source, ContextSource::Default);
    assert_eq!(resolved.source.to_string(), "default");
}
