pub mod accumulator;
pub(crate) mod check_probe_catalog;
pub mod dispatcher;
pub mod error;
pub mod execute;
pub mod exit_code;
pub mod load_probe_catalog;
pub mod preflight;
pub(crate) mod probe_request;
pub mod selector;
pub mod show_result_with_table;
