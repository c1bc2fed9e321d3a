mod container;
mod page;

pub use container::Container;
pub use page::RequestPage;
