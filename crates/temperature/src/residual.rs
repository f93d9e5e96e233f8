//! Autoregressive residual memory.

/// One day's pair of independent standard-normal shocks.
///
/// `x` drives the Tmax component and `y` the Tmin component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shock {
    /// Tmax shock.
    pub x: f64,
    /// Tmin shock.
    pub y: f64,
}

impl Shock {
    /// Creates a shock pair.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The residual process memory: yesterday's (Tmax, Tmin) anomaly pair
/// in standardized units.
///
/// A simulation starts from the zero vector and mutates this once per
/// day through the coefficient update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualState {
    x: f64,
    y: f64,
}

impl ResidualState {
    /// The zero anomaly, used at simulation start.
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Creates a residual state from standardized anomalies.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Standardized Tmax anomaly.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Standardized Tmin anomaly.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean norm of the anomaly pair, useful for boundedness
    /// diagnostics.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}
