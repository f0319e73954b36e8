//! Three-component vector value type and its Euclidean magnitude.
//!
//! # Design
//! - Components are `f32`, stored as a single `[f32; 3]` in `(i, j, k)` order
//! - `#[repr(transparent)]` so a vector is byte-identical to `[f32; 3]`
//! - Read-only: nothing on this type mutates a vector in place
//! - Serde support (serialized as a three-element sequence)
//! - Zero-copy casting from flat `f32` buffers via `bytemuck`
//!
//! # Usage
//! ```
//! use vector3_core::Vector3;
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.magnitude(), 5.0);
//! assert_eq!(v.i(), 3.0);
//! ```

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, Index};

use crate::error::Vector3Error;

/// An ordered triple of `f32` components labelled `i`, `j` and `k`.
///
/// Equality is structural: two vectors are equal iff all three components
/// compare equal under IEEE-754 rules (so a vector holding NaN is never equal
/// to anything, including itself).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Vector3([f32; 3]);

impl Vector3 {
    /// The zero vector
    pub const ZERO: Vector3 = Vector3([0.0, 0.0, 0.0]);

    /// Unit vector along `i`
    pub const I: Vector3 = Vector3([1.0, 0.0, 0.0]);

    /// Unit vector along `j`
    pub const J: Vector3 = Vector3([0.0, 1.0, 0.0]);

    /// Unit vector along `k`
    pub const K: Vector3 = Vector3([0.0, 0.0, 1.0]);

    /// Create a vector from its three components.
    #[inline]
    #[must_use]
    pub const fn new(i: f32, j: f32, k: f32) -> Self {
        Vector3([i, j, k])
    }

    #[inline]
    #[must_use]
    pub const fn i(self) -> f32 {
        self.0[0]
    }

    #[inline]
    #[must_use]
    pub const fn j(self) -> f32 {
        self.0[1]
    }

    #[inline]
    #[must_use]
    pub const fn k(self) -> f32 {
        self.0[2]
    }

    /// Copy the components out as a plain array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }

    /// Euclidean norm `sqrt(i² + j² + k²)`.
    ///
    /// Components are widened to `f64` before squaring so the sum of squares
    /// keeps full precision, then the root is narrowed back to `f32`. There is
    /// no rescaling: NaN propagates, an infinite component yields `+inf`, and
    /// the zero vector yields exactly `0.0`.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f32 {
        let [i, j, k] = self.0.map(f64::from);
        (i * i + j * j + k * k).sqrt() as f32
    }

    /// Reinterpret a flat buffer of `(i, j, k)` triples as a vector slice without copying.
    ///
    /// # Errors
    /// Returns [`Vector3Error::FlatLength`] if `components.len()` is not a multiple of three.
    pub fn slice_from_flat(components: &[f32]) -> Result<&[Self], Vector3Error> {
        bytemuck::try_cast_slice(components).map_err(|_| Vector3Error::FlatLength {
            len: components.len(),
        })
    }
}

impl Deref for Vector3 {
    type Target = [f32; 3];
    #[inline]
    fn deref(&self) -> &[f32; 3] {
        &self.0
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(components: [f32; 3]) -> Self {
        Vector3(components)
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((i, j, k): (f32, f32, f32)) -> Self {
        Vector3([i, j, k])
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.0
    }
}

impl TryFrom<&[f32]> for Vector3 {
    type Error = Vector3Error;

    fn try_from(components: &[f32]) -> Result<Self, Self::Error> {
        <[f32; 3]>::try_from(components)
            .map(Vector3)
            .map_err(|_| Vector3Error::ComponentCount {
                found: components.len(),
            })
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.i(), v.j(), v.k())
    }
}

impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vector3([v.x, v.y, v.z])
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accessors_follow_component_order() {
        let v = Vector3::new(1.5, -2.0, 8.25);
        assert_eq!(v.i(), 1.5);
        assert_eq!(v.j(), -2.0);
        assert_eq!(v.k(), 8.25);
        assert_eq!(v[0], 1.5);
        assert_eq!(v[2], 8.25);
        assert_eq!(v.to_array(), [1.5, -2.0, 8.25]);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_magnitude_known_values() {
        assert_eq!(Vector3::ZERO.magnitude(), 0.0);
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).magnitude(), 7.0);
        assert_eq!(Vector3::new(-3.0, 0.0, -4.0).magnitude(), 5.0);
        assert_relative_eq!(Vector3::new(1.0, 1.0, 1.0).magnitude(), 3.0_f32.sqrt());
    }

    #[test]
    fn test_magnitude_does_not_mutate() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        let before = v;
        assert_eq!(v.magnitude(), 3.0);
        assert_eq!(v, before);
    }

    #[test]
    fn test_magnitude_widens_before_squaring() {
        // i² overflows f32 but not f64; the narrowed root is still representable
        let v = Vector3::new(3.0e20, 4.0e20, 0.0);
        let m = v.magnitude();
        assert!(m.is_finite());
        assert_relative_eq!(m, 5.0e20, max_relative = 1e-6);
    }

    #[test]
    fn test_magnitude_special_values() {
        assert!(Vector3::new(f32::NAN, 1.0, 1.0).magnitude().is_nan());
        assert_eq!(Vector3::new(0.0, f32::NEG_INFINITY, 0.0).magnitude(), f32::INFINITY);
        // inf and NaN together: NaN wins through the sum
        assert!(Vector3::new(f32::INFINITY, f32::NAN, 0.0).magnitude().is_nan());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Vector3::new(1.0, 2.0, 3.0), Vector3::from([1.0, 2.0, 3.0]));
        assert_ne!(Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.5));
        let nan = Vector3::new(f32::NAN, 0.0, 0.0);
        assert_ne!(nan, Vector3::new(f32::NAN, 0.0, 0.0));
    }

    #[test]
    fn test_try_from_slice_requires_three_components() {
        let ok = Vector3::try_from(&[1.0_f32, 2.0, 3.0][..]);
        assert_eq!(ok, Ok(Vector3::new(1.0, 2.0, 3.0)));

        let short = Vector3::try_from(&[1.0_f32, 2.0][..]);
        assert_eq!(short, Err(Vector3Error::ComponentCount { found: 2 }));

        let long = Vector3::try_from(&[1.0_f32, 2.0, 3.0, 4.0][..]);
        assert_eq!(long, Err(Vector3Error::ComponentCount { found: 4 }));
    }

    #[test]
    fn test_slice_from_flat() {
        let flat = [3.0_f32, 4.0, 0.0, 0.0, 0.0, 1.0];
        let vectors = Vector3::slice_from_flat(&flat).unwrap();
        assert_eq!(vectors, &[Vector3::new(3.0, 4.0, 0.0), Vector3::K]);

        assert!(Vector3::slice_from_flat(&[]).unwrap().is_empty());
        assert_eq!(
            Vector3::slice_from_flat(&flat[..5]),
            Err(Vector3Error::FlatLength { len: 5 })
        );
    }

    #[test]
    fn test_nalgebra_interop_preserves_order() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        let na: nalgebra::Vector3<f32> = v.into();
        assert_eq!((na.x, na.y, na.z), (1.0, 2.0, 2.0));
        assert_eq!(na.norm(), v.magnitude());
        assert_eq!(Vector3::from(na), v);
    }

    #[test]
    fn test_serde_as_sequence() {
        let v = Vector3::new(1.0, -2.5, 0.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,-2.5,0.0]");
        let back: Vector3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        assert!(serde_json::from_str::<Vector3>("[1.0,2.0]").is_err());
        assert!(serde_json::from_str::<Vector3>("[1.0,2.0,3.0,4.0]").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(3.0, 4.5, -1.0).to_string(), "(3, 4.5, -1)");
    }
}
