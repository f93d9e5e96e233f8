//! Binary wet/dry occupancy states for the spell alternator.

/// Two-state daily precipitation classification.
///
/// A day is either dry or wet; the spell machine alternates maximal
/// runs of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SpellState {
    /// No precipitation is generated.
    Dry = 0,
    /// A precipitation depth is drawn for the day.
    Wet = 1,
}

impl SpellState {
    /// Both states in index order.
    pub const ALL: [SpellState; 2] = [Self::Dry, Self::Wet];

    /// Returns the zero-based index of this state (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// The opposite state.
    pub fn other(self) -> SpellState {
        match self {
            SpellState::Dry => SpellState::Wet,
            SpellState::Wet => SpellState::Dry,
        }
    }

    /// Whether this state generates precipitation.
    pub fn is_wet(self) -> bool {
        matches!(self, SpellState::Wet)
    }

    /// Lowercase name used in output files and logs.
    pub fn label(self) -> &'static str {
        match self {
            SpellState::Dry => "dry",
            SpellState::Wet => "wet",
        }
    }
}
