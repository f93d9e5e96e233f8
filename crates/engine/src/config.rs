//! Run configuration for the weather engine.

use notus_spell::SpellState;
use notus_stream::StreamSeeds;

/// How a run obtains its four per-purpose stream seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Draw all four seeds from OS entropy when the engine is built.
    ///
    /// The drawn seeds are reported on the finished series, so an
    /// unseeded run can still be replayed afterwards.
    Entropy,
    /// Derive the four purpose seeds from one master seed.
    Master(u64),
    /// Use explicit per-purpose seeds.
    Explicit(StreamSeeds),
}

impl SeedMode {
    /// Resolves this mode to a concrete seed bundle.
    ///
    /// Only [`SeedMode::Entropy`] consults the operating system; the
    /// other two modes are pure functions of their input.
    pub fn resolve(self) -> StreamSeeds {
        match self {
            SeedMode::Entropy => StreamSeeds::random(),
            SeedMode::Master(master) => StreamSeeds::derive(master),
            SeedMode::Explicit(seeds) => seeds,
        }
    }
}

/// Configuration for a single simulation run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use notus_engine::EngineConfig;
/// use notus_spell::SpellState;
///
/// let config = EngineConfig::new()
///     .with_master_seed(42)
///     .with_initial_state(SpellState::Wet);
/// assert_eq!(config.initial_state(), SpellState::Wet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    seed_mode: SeedMode,
    initial_state: SpellState,
}

impl EngineConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `seed_mode = Entropy`, `initial_state = Dry`.
    pub fn new() -> Self {
        Self {
            seed_mode: SeedMode::Entropy,
            initial_state: SpellState::Dry,
        }
    }

    /// Derives all four purpose seeds from one master seed.
    pub fn with_master_seed(mut self, master: u64) -> Self {
        self.seed_mode = SeedMode::Master(master);
        self
    }

    /// Sets explicit per-purpose seeds.
    pub fn with_seeds(mut self, seeds: StreamSeeds) -> Self {
        self.seed_mode = SeedMode::Explicit(seeds);
        self
    }

    /// Sets the state the first spell starts in.
    pub fn with_initial_state(mut self, state: SpellState) -> Self {
        self.initial_state = state;
        self
    }

    // --- Accessors ---

    /// Returns the seed mode.
    pub fn seed_mode(&self) -> SeedMode {
        self.seed_mode
    }

    /// Returns the initial spell state.
    pub fn initial_state(&self) -> SpellState {
        self.initial_state
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = EngineConfig::new();
        assert_eq!(cfg.seed_mode(), SeedMode::Entropy);
        assert_eq!(cfg.initial_state(), SpellState::Dry);
    }

    #[test]
    fn builder_chaining() {
        let cfg = EngineConfig::new()
            .with_master_seed(7)
            .with_initial_state(SpellState::Wet);
        assert_eq!(cfg.seed_mode(), SeedMode::Master(7));
        assert_eq!(cfg.initial_state(), SpellState::Wet);
    }

    #[test]
    fn explicit_seeds_override_master() {
        let seeds = StreamSeeds::explicit(1, 2, 3, 4);
        let cfg = EngineConfig::new().with_master_seed(7).with_seeds(seeds);
        assert_eq!(cfg.seed_mode(), SeedMode::Explicit(seeds));
    }

    #[test]
    fn master_mode_resolves_to_derived_seeds() {
        assert_eq!(SeedMode::Master(42).resolve(), StreamSeeds::derive(42));
    }

    #[test]
    fn explicit_mode_resolves_to_itself() {
        let seeds = StreamSeeds::explicit(10, 20, 30, 40);
        assert_eq!(SeedMode::Explicit(seeds).resolve(), seeds);
    }

    #[test]
    fn entropy_mode_resolves_to_fresh_seeds() {
        assert_ne!(SeedMode::Entropy.resolve(), SeedMode::Entropy.resolve());
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(EngineConfig::default(), EngineConfig::new());
    }

    #[test]
    fn config_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<EngineConfig>();
        assert_copy::<SeedMode>();
    }
}
