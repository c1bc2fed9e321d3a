use super::models::AppState;
use crate::errors::ApiError;
use crate::models::AttributesResponse;
use resource_container::RequestPage;
use resource_resolver::ContextSource;
use resource_taglib::{ResourceIncludeTag, Scope};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceQuery {
    pub path: Option<String>,
    pub var: Option<String>,
    pub scope: Option<String>,
}

/// Evaluates the resource include tag for one resource path.
///
/// Without `var` the URL is the plain-text body; with `var` the body lists
/// the attributes the tag stored.
pub async fn include_resource(
    State(state): State<AppState>,
    Query(query): Query<ResourceQuery>,
) -> Result<Response, ApiError> {
    let path = query.path.ok_or(ApiError::MissingPath)?;
    let scope = match query.scope.as_deref() {
        Some(raw) => raw
            .parse::<Scope>()
            .map_err(|_| ApiError::InvalidScope(raw.to_string()))?,
        None => Scope::default(),
    };

    let mut tag = ResourceIncludeTag::new();
    tag.set_value(path);
    tag.set_scope(scope);
    tag.set_default_context(state.container.default_context());
    if let Some(var) = query.var {
        tag.set_var(var);
    }

    let mut page = RequestPage::new(&state.container);
    let url = tag.evaluate(&mut page)?;
    let source = tag.source().unwrap_or(ContextSource::Current);
    tracing::debug!("include_resource: resolved '{}' from {} context", url, source);

    let (attributes, output) = page.into_parts();
    if attributes.is_empty() {
        return Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            output,
        )
            .into_response());
    }

    Ok(Json(AttributesResponse {
        attributes: attributes
            .into_iter()
            .map(|(name, (value, _))| (name, value))
            .collect(),
        scope: scope.to_string(),
        source: source.to_string(),
    })
    .into_response())
}
