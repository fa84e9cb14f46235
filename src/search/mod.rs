pub mod debounce;
pub mod results;
pub mod service;
