pub mod data;
pub mod layout_manager;
pub mod ticker;

use std::time::Instant;

use data::HistoryStore;
use layout_manager::GridLayout;
use ticker::RateCounter;

use crate::{
    collection::{harvest_cpu, CpuHarvest, CpuSource},
    utils::error::HistoryResult,
};

/// AppConfigFields covers the settings that come from the config file or
/// command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfigFields {
    pub update_rate: u64,
    pub history_len: usize,
    pub window_len: usize,
    pub max_cores: usize,
    pub total_from_counter: bool,
    pub use_dot: bool,
    pub hide_time: bool,
}

/// The state of the program: the sampled history, plus how to show it.
pub struct App {
    pub app_config_fields: AppConfigFields,
    pub history: HistoryStore,
    pub layout: GridLayout,
    rate_counter: RateCounter,
}

impl App {
    /// Create a new [`App`] for `discovered` cores.
    pub fn new(app_config_fields: AppConfigFields, discovered: usize) -> HistoryResult<Self> {
        let history = HistoryStore::new(
            app_config_fields.max_cores,
            discovered,
            app_config_fields.history_len,
            app_config_fields.window_len,
        )?;
        let layout = GridLayout::from_core_count(history.discovered_count());

        Ok(Self {
            app_config_fields,
            history,
            layout,
            rate_counter: RateCounter::new(Instant::now()),
        })
    }

    /// Sample `source` and record the result.
    pub fn tick<S: CpuSource + ?Sized>(&mut self, source: &mut S, now: Instant) {
        let harvest = harvest_cpu(source, self.history.slot_count());
        self.on_tick(&harvest, now);
    }

    /// Record one tick's readings.
    pub fn on_tick(&mut self, harvest: &CpuHarvest, now: Instant) {
        self.history.ingest(harvest);

        if let Some(rate) = self.rate_counter.record(now) {
            crate::trace!("Ticks in the last second: {rate}");
        }
    }

    /// The points drawn in the total graph, oldest first.
    pub fn total_sequence(&self) -> Vec<f64> {
        if self.app_config_fields.total_from_counter {
            self.history.read_total_sequence()
        } else {
            self.history.aggregate()
        }
    }

    /// The most recent total value.
    pub fn total_latest(&self) -> f64 {
        if self.app_config_fields.total_from_counter {
            self.history.latest_total()
        } else {
            self.history.latest_aggregate()
        }
    }
}
