pub mod args;
pub mod http_error_stats;
pub mod outcome;
pub mod probe;
pub mod result;
pub mod run_config;
pub mod target;
