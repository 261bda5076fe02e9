//! Per-surface state: logical size, device pixel ratio, pointer and hover.

use crate::canvas::Canvas2d;
use crate::constants::{DPR_MAX, DPR_MIN, POINTER_IDLE};
use crate::preview::PreviewKind;
use glam::Vec2;

/// On-screen rectangle of a surface in CSS pixels (as from
/// `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Normalized position of a client-space point inside the rect, clamped to
    /// [0,1]. `None` when the rect has no area.
    #[inline]
    pub fn uv_of(&self, client_x: f64, client_y: f64) -> Option<Vec2> {
        if self.width > 0.0 && self.height > 0.0 {
            let u = ((client_x - self.left) / self.width).clamp(0.0, 1.0);
            let v = ((client_y - self.top) / self.height).clamp(0.0, 1.0);
            Some(Vec2::new(u as f32, v as f32))
        } else {
            None
        }
    }
}

/// Backing-store dimensions produced by a measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    pub width: u32,
    pub height: u32,
    pub dpr: f64,
    pub pointer: Vec2,
    pub active: bool,
    pub kind: Option<PreviewKind>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            dpr: DPR_MIN,
            pointer: Vec2::from_array(POINTER_IDLE),
            active: false,
            kind: None,
        }
    }
}

impl SurfaceState {
    pub fn new(kind: Option<PreviewKind>) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Re-measure from the on-screen rect and the host's raw device pixel
    /// ratio. Returns the backing-store size the host should apply; drawing
    /// stays in logical units via a `dpr` scale transform.
    pub fn measure(&mut self, rect: &SurfaceRect, raw_dpr: f64) -> BackingSize {
        self.dpr = clamp_dpr(raw_dpr);
        self.width = floor_dim(rect.width);
        self.height = floor_dim(rect.height);
        BackingSize {
            width: (self.width as f64 * self.dpr).floor() as u32,
            height: (self.height as f64 * self.dpr).floor() as u32,
        }
    }

    /// Pointer moved over the surface; a degenerate rect leaves the last
    /// position in place.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, rect: &SurfaceRect) {
        if let Some(uv) = rect.uv_of(client_x, client_y) {
            self.pointer = uv;
        }
    }

    pub fn pointer_entered(&mut self) {
        self.active = true;
    }

    pub fn pointer_left(&mut self) {
        self.active = false;
    }
}

#[inline]
pub fn clamp_dpr(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}

#[inline]
fn floor_dim(v: f64) -> u32 {
    if v.is_finite() {
        (v.floor() as u32).max(1)
    } else {
        1
    }
}

/// A drawable surface the scheduler can drive: the current state snapshot
/// plus the drawing primitives.
pub trait Surface: Canvas2d {
    fn state(&self) -> SurfaceState;
}
