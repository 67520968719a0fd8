//! Playback over an integrated trajectory.
//!
//! A [`Playback`] walks a [`Trajectory`] in wall-clock time: a fractional
//! cursor advances at a configurable rate, the marker position is read by
//! interpolating between neighboring points, and a fixed-size trail of
//! recently visited points hangs behind the marker.
//!
//! The sampler is bound to exactly one trajectory at a time through a shared
//! read-only handle. Rebinding swaps the handle and resets the cursor in the
//! same call, so a cursor can never be dereferenced against a buffer whose
//! length it was not issued for.
//!
//! # Example
//!
//! ```ignore
//! use aizawa::prelude::*;
//! use std::sync::Arc;
//!
//! let traj = Arc::new(integrate_default(&AizawaParams::default())?);
//! let mut playback = Playback::new(traj);
//!
//! // In your frame loop:
//! playback.advance(time.update());
//! let marker = playback.current_position();
//! let trail = playback.trail(DEFAULT_TRAIL_LEN);
//! ```

use crate::trajectory::Trajectory;
use glam::Vec3;
use std::sync::Arc;

/// Cursor advance rate at speed multiplier 1, in points per second.
pub const BASE_RATE: f64 = 1000.0;

/// Lower bound of the speed multiplier.
pub const MIN_SPEED: f64 = 0.1;

/// Upper bound of the speed multiplier.
pub const MAX_SPEED: f64 = 5.0;

/// Default trail window length, in points.
pub const DEFAULT_TRAIL_LEN: usize = 200;

/// Stateful sampler that animates a marker along a trajectory.
#[derive(Debug, Clone)]
pub struct Playback {
    trajectory: Arc<Trajectory>,
    /// Fractional index into the trajectory, always in `[0, len)`.
    cursor: f64,
    speed: f64,
    playing: bool,
    full_curve: bool,
}

impl Playback {
    /// Bind a sampler to a trajectory, with the cursor at the first point.
    ///
    /// Starts playing, at speed multiplier 1, with the full curve visible.
    pub fn new(trajectory: Arc<Trajectory>) -> Self {
        Self {
            trajectory,
            cursor: 0.0,
            speed: 1.0,
            playing: true,
            full_curve: true,
        }
    }

    /// Replace the bound trajectory and reset the cursor to 0.
    ///
    /// The swap and the reset are one operation: there is no state in which
    /// the new buffer is observed together with the old cursor.
    pub fn bind(&mut self, trajectory: Arc<Trajectory>) {
        self.trajectory = trajectory;
        self.cursor = 0.0;
    }

    /// Advance the cursor by `dt_seconds` of wall-clock time.
    ///
    /// No-op while paused. The cursor moves at
    /// [`BASE_RATE`]` * speed` points per second. A completed lap restarts
    /// from the first point: the cursor is hard-reset to 0, discarding any
    /// fractional overshoot past the end rather than carrying it into the
    /// next lap.
    pub fn advance(&mut self, dt_seconds: f64) {
        if !self.playing {
            return;
        }
        self.cursor += BASE_RATE * self.speed * dt_seconds;
        if self.cursor >= self.trajectory.len() as f64 {
            self.cursor = 0.0;
        }
    }

    /// Marker position at the current cursor.
    ///
    /// Interpolates linearly between the points on either side of the
    /// fractional cursor, so the marker moves smoothly between discrete
    /// samples. With the cursor exactly on a point, that point is returned
    /// unmodified. Non-finite coordinates pass through without panicking.
    pub fn current_position(&self) -> Vec3 {
        let (idx, frac) = self.split_cursor();
        let p0 = self.trajectory.point(idx);
        if frac == 0.0 {
            return p0;
        }
        let p1 = self.trajectory.point((idx + 1) % self.trajectory.len());
        p0.lerp(p1, frac as f32)
    }

    /// The `window_size` most recently visited points, newest first.
    ///
    /// Entry 0 is the point under the cursor, entry `i` the point `i` steps
    /// behind it, wrapping past the start of the buffer. The window length is
    /// always exactly `window_size`, even when it exceeds the trajectory
    /// length (the indices simply keep wrapping).
    pub fn trail(&self, window_size: usize) -> Vec<Vec3> {
        let n = self.trajectory.len();
        let (idx, _) = self.split_cursor();
        (0..window_size)
            .map(|i| {
                let wrapped = (idx as i64 - i as i64).rem_euclid(n as i64) as usize;
                self.trajectory.point(wrapped)
            })
            .collect()
    }

    /// Set the speed multiplier, clamped to the [`MIN_SPEED`]..[`MAX_SPEED`] range.
    pub fn set_speed(&mut self, multiplier: f64) {
        self.speed = multiplier.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Flip between playing and paused.
    ///
    /// Pausing freezes the cursor where it is; resuming continues from the
    /// same position. Queries remain valid in either state.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Store whether the full curve should be drawn.
    ///
    /// Pure bookkeeping for the renderer; playback behavior is unaffected.
    pub fn set_visible_full_curve(&mut self, visible: bool) {
        self.full_curve = visible;
    }

    /// The bound trajectory.
    #[inline]
    pub fn trajectory(&self) -> &Arc<Trajectory> {
        &self.trajectory
    }

    /// Current fractional cursor, in `[0, len)`.
    #[inline]
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Current speed multiplier.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the cursor advances on [`advance`](Self::advance).
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Last value passed to [`set_visible_full_curve`](Self::set_visible_full_curve).
    #[inline]
    pub fn full_curve_visible(&self) -> bool {
        self.full_curve
    }

    /// Whole-point index under the cursor plus the fractional remainder.
    ///
    /// The index is re-derived from the bound trajectory's length on every
    /// query, clamped as a guard against float edge cases at the buffer end.
    fn split_cursor(&self) -> (usize, f64) {
        let n = self.trajectory.len();
        debug_assert!(
            self.cursor >= 0.0 && self.cursor < n as f64,
            "cursor {} out of range for {} points",
            self.cursor,
            n
        );
        let idx = (self.cursor as usize).min(n - 1);
        (idx, self.cursor - idx as f64)
    }
}
