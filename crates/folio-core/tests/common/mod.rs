// Recording surface shared by the host-side integration tests.

#![allow(dead_code)]

use folio_core::{Canvas2d, PreviewKind, Rgba, StrokeStyle, Surface, SurfaceState};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(f32, f32),
    FillRect(Vec2, Vec2, Rgba),
    FillCircle(Vec2, f32, Rgba),
    StrokeCircle(Vec2, f32, StrokeStyle),
    Polyline {
        len: usize,
        first: Vec2,
        closed: bool,
        style: StrokeStyle,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub state: SurfaceState,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(kind: Option<PreviewKind>, width: u32, height: u32) -> Self {
        Self {
            state: SurfaceState {
                width,
                height,
                kind,
                ..SurfaceState::default()
            },
            ops: Vec::new(),
        }
    }

    pub fn polylines(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Polyline { .. }))
            .collect()
    }
}

impl Canvas2d for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ops.push(Op::FillRect(origin, size, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::FillCircle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, style: StrokeStyle) {
        self.ops.push(Op::StrokeCircle(center, radius, style));
    }

    fn stroke_polyline(&mut self, points: &[Vec2], closed: bool, style: StrokeStyle) {
        self.ops.push(Op::Polyline {
            len: points.len(),
            first: points.first().copied().unwrap_or(Vec2::ZERO),
            closed,
            style,
        });
    }
}

impl Surface for RecordingSurface {
    fn state(&self) -> SurfaceState {
        self.state
    }
}

pub fn surface_state(width: u32, height: u32) -> SurfaceState {
    SurfaceState {
        width,
        height,
        ..SurfaceState::default()
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
