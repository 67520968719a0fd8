//! Flat point buffer produced by one integration run.
//!
//! A [`Trajectory`] is immutable once built: parameter edits produce a whole
//! new buffer rather than patching the old one in place. Points are stored as
//! a flat `[x, y, z, x, y, z, ...]` run of f32 so the buffer walks the cache
//! linearly and uploads to a vertex buffer without conversion.

use glam::Vec3;

/// An ordered sequence of 3D points from one integration run.
///
/// Point `i` occupies slots `[3i, 3i+1, 3i+2]` of the flat buffer. The buffer
/// may contain non-finite values when the system diverged; consumers are
/// expected to tolerate them (queries never panic on NaN coordinates).
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    positions: Vec<f32>,
}

impl Trajectory {
    /// Wrap a flat `[x, y, z, ...]` buffer.
    ///
    /// The length must be a non-zero multiple of 3.
    pub fn from_flat(positions: Vec<f32>) -> Self {
        assert!(
            !positions.is_empty() && positions.len() % 3 == 0,
            "flat buffer length must be a non-zero multiple of 3, got {}",
            positions.len()
        );
        Self { positions }
    }

    /// Build a trajectory from discrete points.
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut positions = Vec::with_capacity(points.len() * 3);
        for p in points {
            positions.extend_from_slice(&[p.x, p.y, p.z]);
        }
        Self::from_flat(positions)
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    /// Always false: a trajectory has at least one point by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Point at `index`.
    ///
    /// Callers derive indices from the buffer's own length, so an
    /// out-of-range index is a bug rather than a runtime condition.
    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        debug_assert!(index < self.len(), "point index {} out of range", index);
        let i = index * 3;
        Vec3::new(self.positions[i], self.positions[i + 1], self.positions[i + 2])
    }

    /// The flat `[x, y, z, ...]` buffer.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// The buffer as raw bytes, for zero-copy vertex-buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Iterate the points in order.
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    /// Midpoint of the axis-aligned bounding box, skipping non-finite points.
    ///
    /// Renderers use this to recenter the curve at the origin. Falls back to
    /// the origin when no finite point exists.
    pub fn center(&self) -> Vec3 {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut any = false;
        for p in self.points() {
            if p.is_finite() {
                min = min.min(p);
                max = max.max(p);
                any = true;
            }
        }
        if any {
            (min + max) * 0.5
        } else {
            Vec3::ZERO
        }
    }
}
