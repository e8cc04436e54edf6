//! Data collection for CPU usage.

pub mod sysinfo;
pub use self::sysinfo::SysinfoSource;

/// One tick of raw CPU readings, in percent.
///
/// `None` means the reading was unavailable for this tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuHarvest {
    /// The OS-wide total counter.
    pub total: Option<f64>,

    /// One entry per core slot, indexed by core number.
    pub cores: Vec<Option<f64>>,
}

impl CpuHarvest {
    /// A harvest where nothing could be read.
    pub fn unavailable(slots: usize) -> Self {
        Self {
            total: None,
            cores: vec![None; slots],
        }
    }
}

/// Turn a raw counter value into a percentage, or `None` if it can't be used.
pub(crate) fn sanitize_usage(raw: f32) -> Option<f64> {
    let value = f64::from(raw);
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}
