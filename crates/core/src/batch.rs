//! Bulk magnitude evaluation over many vectors.
//!
//! Large inputs are split across the rayon thread pool; small inputs stay on
//! the calling thread where the pool overhead would dominate.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Vector3Error;
use crate::vector3::Vector3;

/// Tuning for [`magnitudes`] and [`magnitudes_from_flat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Inputs with at least this many vectors are evaluated in parallel.
    /// `0` always uses the thread pool.
    pub parallel_threshold: usize,
}

impl BatchConfig {
    /// Default cut-over point between sequential and parallel evaluation
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

    /// Config that never uses the thread pool
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Whether an input of `len` vectors should be evaluated in parallel
    #[inline]
    #[must_use]
    pub const fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Compute the magnitude of every vector, preserving input order.
///
/// Output index `n` holds `vectors[n].magnitude()` in both evaluation modes.
pub fn magnitudes(vectors: &[Vector3], config: &BatchConfig) -> Vec<f32> {
    let parallel = config.is_parallel(vectors.len());
    debug!(len = vectors.len(), parallel, "Computing vector magnitudes");

    if parallel {
        vectors.par_iter().copied().map(Vector3::magnitude).collect()
    } else {
        vectors.iter().copied().map(Vector3::magnitude).collect()
    }
}

/// Compute magnitudes for a flat buffer of consecutive `(i, j, k)` triples.
///
/// # Errors
/// Returns [`Vector3Error::FlatLength`] if `components.len()` is not a multiple of three.
pub fn magnitudes_from_flat(
    components: &[f32],
    config: &BatchConfig,
) -> Result<Vec<f32>, Vector3Error> {
    let vectors = Vector3::slice_from_flat(components).inspect_err(|e| {
        warn!("Rejected flat component buffer: {e}");
    })?;

    Ok(magnitudes(vectors, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: usize) -> Vec<Vector3> {
        (0..count)
            .map(|n| {
                let x = n as f32;
                Vector3::new(x, -0.5 * x, x.sin())
            })
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.parallel_threshold, 4096);
        assert!(!config.is_parallel(4095));
        assert!(config.is_parallel(4096));
        assert!(!BatchConfig::sequential().is_parallel(1_000_000));
    }

    #[test]
    fn test_empty_input() {
        assert!(magnitudes(&[], &BatchConfig::default()).is_empty());
        assert_eq!(
            magnitudes_from_flat(&[], &BatchConfig::default()),
            Ok(Vec::new())
        );
    }

    #[test]
    fn test_parallel_matches_sequential_bitwise() {
        let vectors = sample(10_000);
        let always = BatchConfig {
            parallel_threshold: 0,
        };

        let seq = magnitudes(&vectors, &BatchConfig::sequential());
        let par = magnitudes(&vectors, &always);

        assert_eq!(seq.len(), vectors.len());
        for (n, (a, b)) in seq.iter().zip(&par).enumerate() {
            assert_eq!(a.to_bits(), b.to_bits(), "mismatch at index {n}");
            assert_eq!(*a, vectors[n].magnitude());
        }
    }

    #[test]
    fn test_flat_buffer() {
        let flat = [3.0, 4.0, 0.0, 0.0, 0.0, 0.0, f32::NAN, 1.0, 1.0];
        let result = magnitudes_from_flat(&flat, &BatchConfig::default()).unwrap();
        assert_eq!(result[0], 5.0);
        assert_eq!(result[1], 0.0);
        assert!(result[2].is_nan());

        assert_eq!(
            magnitudes_from_flat(&flat[..4], &BatchConfig::default()),
            Err(Vector3Error::FlatLength { len: 4 })
        );
    }

    #[test]
    fn test_config_deserialize() {
        let config: BatchConfig = serde_json::from_str(r#"{"parallel_threshold": 16}"#).unwrap();
        assert_eq!(config.parallel_threshold, 16);

        let config: BatchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BatchConfig::default());
    }
}
