//! Sampling of CPU counters.
//!
//! Everything that talks to the OS goes through [`CpuSource`], so the rest of
//! the program only ever sees a [`CpuHarvest`].

pub mod cpu;

pub use cpu::{CpuHarvest, SysinfoSource};

use crate::utils::error::CollectionResult;

/// A source of per-core CPU utilization readings.
pub trait CpuSource {
    /// The number of logical CPUs found at startup, already capped to the
    /// maximum number of sampled cores.
    fn core_count(&self) -> usize;

    /// Read one value per core slot for `slots` slots, plus the total counter.
    ///
    /// Slots with no backing CPU, or whose reading could not be produced, are
    /// returned as `None`.
    fn collect(&mut self, slots: usize) -> CollectionResult<CpuHarvest>;
}

/// Collect one tick's worth of readings from `source`.
///
/// A failed read never stops the caller: every slot is reported as
/// unavailable for this tick instead, and the history store carries each
/// core's previous value forward.
pub fn harvest_cpu<S: CpuSource + ?Sized>(source: &mut S, slots: usize) -> CpuHarvest {
    match source.collect(slots) {
        Ok(harvest) => harvest,
        Err(err) => {
            crate::debug!("Failed to read CPU counters, carrying values forward: {err}");
            CpuHarvest::unavailable(slots)
        }
    }
}


#[cfg(test)]
mod test {
    use super::{test_source::ScriptedSource, *};
    use crate::utils::error::CollectionError;

    #[test]
    fn harvest_passes_readings_through() {
        let mut source = ScriptedSource::new(
            2,
            [Ok(CpuHarvest {
                total: Some(30.0),
                cores: vec![Some(20.0), Some(40.0)],
            })],
        );

        let harvest = harvest_cpu(&mut source, 4);
        assert_eq!(harvest.total, Some(30.0));
        assert_eq!(harvest.cores, vec![Some(20.0), Some(40.0), None, None]);
    }

    #[test]
    fn harvest_failure_marks_everything_unavailable() {
        let mut source = ScriptedSource::new(
            2,
            [Err(CollectionError::other("test", "counter went away"))],
        );

        let harvest = harvest_cpu(&mut source, 3);
        assert_eq!(harvest, CpuHarvest::unavailable(3));
        assert!(harvest.cores.iter().all(Option::is_none));
        assert!(harvest.total.is_none());
    }
}
