mod context;
mod errors;
mod scope;
mod tag;

pub use context::{ContextHandle, PageContext, ServletContext};
pub use errors::TagError;
pub use scope::Scope;
pub use tag::{ResourceIncludeTag, TagAction};
