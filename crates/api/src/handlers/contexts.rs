use crate::models::{ContextInfo, ContextListResponse, ResourceContextInfo};
use resource_container::Container;
use resource_taglib::ServletContext;
use axum::{extract::State, response::Json};
use std::sync::Arc;

pub async fn list_contexts(State(container): State<Arc<Container>>) -> Json<ContextListResponse> {
    let (path, source) = container.resource_context();

    let contexts = container
        .contexts()
        .map(|handle| ContextInfo {
            path: handle.path.clone(),
            name: handle.name.clone(),
        })
        .collect();

    Json(ContextListResponse {
        current_context: container.context_path().to_string(),
        resource_context: ResourceContextInfo {
            path,
            source: source.to_string(),
        },
        contexts,
    })
}
