pub mod config;
pub mod container;
pub mod logging;
pub mod router;
