pub mod adjust;
pub mod config;
pub mod debounce;
pub mod endpoint;
pub mod scan;
pub mod session;
