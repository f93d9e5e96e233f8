//! Parametric distributions sampled by inverse-CDF quantile transforms.
//!
//! Every stochastic component of the weather generator draws variates
//! the same way: take one uniform from a purpose-bound stream and map
//! it through the inverse CDF of a calibrated distribution. This crate
//! provides the three families that calibration files can specify and
//! a tagged [`Distribution`] value that dispatches between them.
//!
//! # Families
//!
//! - [`NegBinom`] — negative binomial with a location shift, for
//!   spell lengths (real-valued `n` is allowed)
//! - [`Gamma2P`] — two-parameter generalised gamma with location and
//!   scale, for wet-day precipitation depths
//! - [`StdNormal`] — normal with location and scale, for the
//!   autoregressive temperature shocks
//!
//! # Glossary
//!
//! - **Quantile function**: inverse CDF; maps a probability in (0, 1)
//!   to a value on the distribution's support
//! - **One uniform per variate**: sampling never consumes more than a
//!   single stream draw, so components replay identically regardless
//!   of what the other streams do
//!
//! # Quick Start
//!
//! ```
//! use notus_dist::{Distribution, Gamma2P};
//! use notus_stream::{SamplerStream, StreamPurpose};
//!
//! let depth: Distribution = Gamma2P::new(0.93, 0.79, 0.255, 6.9)?.into();
//! let mut stream = SamplerStream::seeded(StreamPurpose::Depth, 42);
//!
//! let mm = depth.sample_one(&mut stream);
//! assert!(mm >= 0.255);
//! # Ok::<(), notus_dist::DistError>(())
//! ```

mod distribution;
mod error;
mod gamma2p;
mod negbinom;
mod normal;

pub use distribution::{Distribution, DistributionKind};
pub use error::DistError;
pub use gamma2p::Gamma2P;
pub use negbinom::NegBinom;
pub use normal::StdNormal;

/// Uniform draws are clamped to `[PROB_EPS, 1 - PROB_EPS]` before any
/// inverse CDF so tail evaluations stay finite.
pub(crate) const PROB_EPS: f64 = 1e-12;
