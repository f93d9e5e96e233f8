//! Seeded uniform sampler stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::purpose::StreamPurpose;

/// A named, independently seeded source of uniform draws in `[0, 1)`.
///
/// Two streams constructed with the same seed and queried with the same
/// call sequence produce bit-identical output. The purpose label does not
/// enter the generator state; independence between purposes comes from
/// seeding each stream differently (see
/// [`StreamSeeds`](crate::StreamSeeds)).
#[derive(Debug, Clone)]
pub struct SamplerStream {
    purpose: StreamPurpose,
    rng: StdRng,
}

impl SamplerStream {
    /// Creates a stream with an explicit seed.
    pub fn seeded(purpose: StreamPurpose, seed: u64) -> Self {
        Self {
            purpose,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a stream seeded from OS entropy (non-reproducible).
    pub fn from_entropy(purpose: StreamPurpose) -> Self {
        Self {
            purpose,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a stream from an optional seed; `None` falls back to OS
    /// entropy.
    pub fn new(purpose: StreamPurpose, seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(purpose, s),
            None => Self::from_entropy(purpose),
        }
    }

    /// Returns this stream's purpose label.
    pub fn purpose(&self) -> StreamPurpose {
        self.purpose
    }

    /// Returns one uniform value in `[0, 1)`, advancing the stream by one
    /// draw.
    pub fn next_uniform(&mut self) -> f64 {
        self.rng.random()
    }

    /// Returns `n` uniform values in draw order, advancing the stream by
    /// exactly `n` draws.
    pub fn uniforms(&mut self, n: usize) -> Vec<f64> {
        let mut out = vec![0.0; n];
        self.fill_uniforms(&mut out);
        out
    }

    /// Fills `out` with uniform values in draw order, advancing the stream
    /// by exactly `out.len()` draws.
    pub fn fill_uniforms(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.rng.random();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SamplerStream::seeded(StreamPurpose::Depth, 42);
        let mut b = SamplerStream::seeded(StreamPurpose::Depth, 42);
        for _ in 0..100 {
            assert_eq!(a.next_uniform().to_bits(), b.next_uniform().to_bits());
        }
    }

    #[test]
    fn purpose_does_not_enter_generator_state() {
        let mut a = SamplerStream::seeded(StreamPurpose::WetSelector, 7);
        let mut b = SamplerStream::seeded(StreamPurpose::Residual, 7);
        assert_eq!(a.next_uniform().to_bits(), b.next_uniform().to_bits());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SamplerStream::seeded(StreamPurpose::Depth, 1);
        let mut b = SamplerStream::seeded(StreamPurpose::Depth, 2);
        let same = (0..20).filter(|_| a.next_uniform() == b.next_uniform()).count();
        assert!(same < 20, "distinct seeds must not replay the sequence");
    }

    #[test]
    fn uniforms_in_unit_interval() {
        let mut stream = SamplerStream::seeded(StreamPurpose::Residual, 9);
        for u in stream.uniforms(10_000) {
            assert!((0.0..1.0).contains(&u), "uniform out of range: {u}");
        }
    }

    #[test]
    fn uniforms_match_repeated_next() {
        let mut a = SamplerStream::seeded(StreamPurpose::DrySelector, 5);
        let mut b = SamplerStream::seeded(StreamPurpose::DrySelector, 5);
        let batch = a.uniforms(16);
        for (i, u) in batch.iter().enumerate() {
            assert_eq!(u.to_bits(), b.next_uniform().to_bits(), "draw {i} differs");
        }
    }

    #[test]
    fn fill_matches_allocating() {
        let mut a = SamplerStream::seeded(StreamPurpose::Depth, 11);
        let mut b = SamplerStream::seeded(StreamPurpose::Depth, 11);
        let alloc = a.uniforms(8);
        let mut buf = [0.0; 8];
        b.fill_uniforms(&mut buf);
        assert_eq!(alloc, buf);
    }

    #[test]
    fn optional_seed_paths() {
        let mut seeded = SamplerStream::new(StreamPurpose::Depth, Some(3));
        let mut reference = SamplerStream::seeded(StreamPurpose::Depth, 3);
        assert_eq!(
            seeded.next_uniform().to_bits(),
            reference.next_uniform().to_bits()
        );

        // Entropy-seeded streams still produce in-range values.
        let mut entropy = SamplerStream::new(StreamPurpose::Depth, None);
        let u = entropy.next_uniform();
        assert!((0.0..1.0).contains(&u));
    }

    #[test]
    fn stream_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SamplerStream>();
    }
}
