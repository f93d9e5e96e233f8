//! Purpose labels for the sampler streams.

/// The four independent sampling purposes of a simulation run.
///
/// Each purpose owns its own stream so that, for example, drawing more
/// precipitation depths can never shift the wet/dry occurrence sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StreamPurpose {
    /// Wet-spell duration draws.
    WetSelector = 0,
    /// Dry-spell duration draws.
    DrySelector = 1,
    /// Precipitation depth draws on wet days.
    Depth = 2,
    /// Standard-normal shocks for the temperature residual process.
    Residual = 3,
}

impl StreamPurpose {
    /// All four purposes in index order.
    pub const ALL: [StreamPurpose; 4] = [
        Self::WetSelector,
        Self::DrySelector,
        Self::Depth,
        Self::Residual,
    ];

    /// Returns the zero-based index of this purpose (matches the
    /// `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns a short label for logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::WetSelector => "wet-selector",
            Self::DrySelector => "dry-selector",
            Self::Depth => "depth",
            Self::Residual => "residual",
        }
    }
}
