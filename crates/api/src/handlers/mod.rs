mod models;
mod state;
mod contexts;
mod resource;

pub use models::AppState;
pub use contexts::list_contexts;
pub use resource::{include_resource, ResourceQuery};
