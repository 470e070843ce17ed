pub mod app;
pub mod config;
pub mod shared;
pub mod templates;
pub mod workflows;
