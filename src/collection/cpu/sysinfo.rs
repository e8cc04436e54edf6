//! CPU stats through sysinfo.

use sysinfo::{CpuRefreshKind, RefreshKind, System};

use super::{sanitize_usage, CpuHarvest};
use crate::{
    collection::CpuSource,
    utils::{
        error::{CollectionError, CollectionResult},
        general::ClampExt,
    },
};

/// Reads per-core and total CPU usage through [`sysinfo::System`].
#[derive(Debug)]
pub struct SysinfoSource {
    system: System,
    core_count: usize,
}

impl SysinfoSource {
    /// Set up the counters and discover how many logical CPUs there are,
    /// capped to `max_cores`.
    ///
    /// This primes the counters once, since sysinfo needs two refreshes to
    /// compute a usage value. Fails if the platform is unsupported or no CPUs
    /// are reported at all.
    pub fn new(max_cores: usize) -> CollectionResult<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(CollectionError::Unsupported);
        }

        let mut system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );
        system.refresh_cpu_usage();

        let reported = system.cpus().len();
        if reported == 0 {
            return Err(CollectionError::other(
                "sysinfo",
                "no logical CPUs were reported",
            ));
        }

        let core_count = reported.clamp_upper(max_cores);
        crate::info!("Found {reported} logical CPUs, sampling {core_count} of them.");

        Ok(Self { system, core_count })
    }
}

impl CpuSource for SysinfoSource {
    fn core_count(&self) -> usize {
        self.core_count
    }

    fn collect(&mut self, slots: usize) -> CollectionResult<CpuHarvest> {
        self.system.refresh_cpu_usage();

        let cpus = self.system.cpus();
        if cpus.is_empty() {
            return Err(CollectionError::other("sysinfo", "the CPU list is empty"));
        }

        let cores = (0..slots)
            .map(|slot| cpus.get(slot).and_then(|cpu| sanitize_usage(cpu.cpu_usage())))
            .collect();
        let total = sanitize_usage(self.system.global_cpu_usage());

        Ok(CpuHarvest { total, cores })
    }
}
