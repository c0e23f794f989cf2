use std::collections::HashSet;

use crate::core::error::HarnessError;
use crate::models::probe::Probe;

pub(crate) fn check_probe_catalog(probes: &[Probe]) -> Result<(), HarnessError> {
    if probes.is_empty() {
        return Err(HarnessError::EmptyCatalog);
    }
    let mut names_set = HashSet::new();
    for probe in probes {
        if probe.name.is_empty() {
            return Err(HarnessError::EmptyProbeName {
                path: probe.path.clone(),
            });
        }
        if !probe.path.starts_with('/') {
            return Err(HarnessError::InvalidProbePath(probe.path.clone()));
        }
        if !names_set.insert(probe.name.as_str()) {
            return Err(HarnessError::DuplicateProbeName(probe.name.clone()));
        }
    }
    Ok(())
}
