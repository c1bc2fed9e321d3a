use super::models::AppState;
use resource_container::Container;
use axum::extract::FromRef;
use std::sync::Arc;

impl AppState {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }
}

impl FromRef<AppState> for Arc<Container> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.container)
    }
}
