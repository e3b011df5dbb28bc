pub mod config;
pub mod logging;

// Core modules
pub mod naming;
pub mod params;
pub mod retry;
pub mod service;
