/// Ensures a path starts with exactly one '/'; an empty path becomes "/"
pub fn with_leading_slash(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Joins a context path and a resource path with exactly one '/' between them
pub fn join_context_path(base: &str, resource: &str) -> String {
    let base = base.trim_end_matches('/');
    let resource = with_leading_slash(resource);

    if base.is_empty() {
        // Root context
        return resource;
    }

    let mut url = String::with_capacity(base.len() + resource.len() + 1);
    if !base.starts_with('/') {
        url.push('/');
    }
    url.push_str(base);
    url.push_str(&resource);
    url
}
