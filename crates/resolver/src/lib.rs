mod consts;
mod models;
mod path;
mod resolve;

pub use consts::{DEFAULT_RESOURCE_CONTEXT, RESOURCE_CONTEXT_INIT_PARAM};
pub use models::{ContextLookup, ContextSource, ResolvedUrl, ResourceRequest};
pub use path::{join_context_path, with_leading_slash};
pub use resolve::{resolve, resolve_request};
