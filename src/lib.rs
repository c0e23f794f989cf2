pub mod models;
pub mod core;

pub use crate::core::error::HarnessError;
pub use crate::core::execute::run;
pub use crate::core::exit_code::{run_exit_code, EXIT_CONFIG_ERROR, EXIT_FAILED, EXIT_PASSED, EXIT_UNREACHABLE};
pub use crate::core::load_probe_catalog::load_probe_catalog;
pub use crate::core::preflight::check_reachable;
pub use crate::core::show_result_with_table::show_result_with_table;
pub use crate::models::outcome::{OutcomeError, RequestOutcome};
pub use crate::models::probe::{Probe, SelectionMode, STOREFRONT_PAGES, STRESS_PAGES};
pub use crate::models::result::{ProbeResult, RunSummary};
pub use crate::models::run_config::RunConfig;
pub use crate::models::target::TargetDescriptor;
