use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::probe::{Probe, SelectionMode};

/// 把派发序号解析为具体的接口
pub struct ProbeSelector<'a> {
    probes: &'a [Probe],
    mode: SelectionMode,
    rng: Mutex<StdRng>,
}

impl<'a> ProbeSelector<'a> {
    pub fn new(probes: &'a [Probe], mode: SelectionMode, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ProbeSelector {
            probes,
            mode,
            rng: Mutex::new(rng),
        }
    }

    /// 返回目录下标；调用方保证目录非空
    fn select_index(&self, dispatch_index: usize) -> usize {
        match self.mode {
            SelectionMode::Exhaustive => dispatch_index % self.probes.len(),
            SelectionMode::Sampled => self.rng.lock().gen_range(0..self.probes.len()),
        }
    }

    pub fn select(&self, dispatch_index: usize) -> &'a Probe {
        &self.probes[self.select_index(dispatch_index)]
    }
}
