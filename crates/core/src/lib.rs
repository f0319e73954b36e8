//! Three-Component Vector Core Library
//!
//! A plain `f32` triple with value semantics and its Euclidean magnitude.
//! The magnitude is a total, pure function: it never fails, never mutates its
//! receiver, and follows IEEE-754 rules for NaN and infinite components.
//!
//! Around that contract the crate provides:
//! - Checked conversion from slices and zero-copy views over flat buffers
//! - Interop with `nalgebra::Vector3<f32>` and serde
//! - Bulk evaluation across the rayon thread pool

pub mod batch;
pub mod error;
pub mod vector3;

pub use batch::{magnitudes, magnitudes_from_flat, BatchConfig};
pub use error::Vector3Error;
pub use vector3::Vector3;

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
