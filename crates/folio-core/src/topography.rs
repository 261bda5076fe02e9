//! Procedural tube/torus preview.
//!
//! Every frame the whole point cloud is rebuilt from closed-form functions of
//! ring/tube angle, time and three smoothed control scalars, rotated, then
//! perspective-projected into a parallel screen-space buffer. Both buffers are
//! sized once at construction and rewritten in place.

use crate::canvas::{wash, Canvas2d, Rgba, StrokeStyle};
use crate::constants::*;
use crate::palette::PaletteCycle;
use crate::preview::{Preview, PreviewKind};
use crate::surface::SurfaceState;
use glam::{Mat3, Vec2, Vec3};
use std::f32::consts::TAU;

const WASH_ALPHA: f32 = 0.02;
const FOCUS_ALPHA: f32 = 0.08;

/// How per-frame constants relate to real time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Timing {
    /// Flat per-frame smoothing factor and a fixed 1/60 s palette step.
    FrameLocked,
    /// Smoothing and palette phase scaled by the frame's `dt`, matching the
    /// frame-locked feel at `reference_hz`.
    TimeScaled { reference_hz: f32 },
}

impl Timing {
    #[inline]
    pub fn smoothing_factor(&self, per_frame: f32, dt: f32) -> f32 {
        match *self {
            Timing::FrameLocked => per_frame,
            Timing::TimeScaled { reference_hz } => {
                1.0 - (1.0 - per_frame).powf(dt.max(0.0) * reference_hz)
            }
        }
    }

    #[inline]
    pub fn palette_step(&self, dt: f32) -> f32 {
        match *self {
            Timing::FrameLocked => 1.0 / REFERENCE_HZ,
            Timing::TimeScaled { .. } => dt.max(0.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TopographyParams {
    pub rings: usize,
    pub tube: usize,
    pub smoothing: f32,
    pub timing: Timing,
}

impl Default for TopographyParams {
    fn default() -> Self {
        Self {
            rings: RINGS,
            tube: TUBE,
            smoothing: SMOOTHING,
            timing: Timing::FrameLocked,
        }
    }
}

/// First-order low-pass step toward `target`.
#[inline]
pub fn smooth(state: f32, target: f32, factor: f32) -> f32 {
    state + (target - state) * factor
}

/// The only state that survives between frames besides the palette.
/// Angles keep accumulating time drift, so they are held in f64.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlState {
    pub mode_transition: f32,
    pub angle_x: f64,
    pub angle_y: f64,
}

impl ControlState {
    pub fn targets(pointer: Vec2, t: f64) -> ControlState {
        let drift = t * ANGLE_DRIFT_PER_SEC as f64;
        ControlState {
            mode_transition: pointer.x * 2.0,
            angle_x: ((pointer.y - 0.5) * ANGLE_POINTER_GAIN) as f64 + drift,
            angle_y: ((pointer.x - 0.5) * ANGLE_POINTER_GAIN) as f64 + drift,
        }
    }

    pub fn update(&mut self, pointer: Vec2, t: f64, factor: f32) {
        let target = Self::targets(pointer, t);
        let k = factor as f64;
        self.mode_transition = smooth(self.mode_transition, target.mode_transition, factor);
        self.angle_x += (target.angle_x - self.angle_x) * k;
        self.angle_y += (target.angle_y - self.angle_y) * k;
    }
}

/// `t * rate` reduced to one turn, so long-running pages keep full f32
/// precision in the sinusoids.
#[inline]
fn phase(t: f64, rate: f64) -> f32 {
    (t * rate).rem_euclid(std::f64::consts::TAU) as f32
}

/// Weights of (twist, vertical wave, spiral flow) for a transition value in
/// [0,2]. Only one neighbouring pair is ever non-zero.
#[inline]
pub fn mode_weights(mode_transition: f32) -> [f32; 3] {
    let m = mode_transition.clamp(0.0, 2.0);
    if m < 1.0 {
        [1.0 - m, m, 0.0]
    } else {
        [0.0, 2.0 - m, m - 1.0]
    }
}

/// Perspective divide onto a `size` surface. Returns the screen point and the
/// scale factor; depth is floored at 1 so points at or behind the camera
/// plane cannot blow up.
#[inline]
pub fn project(p: Vec3, size: Vec2) -> (Vec2, f32) {
    let s = FOCAL_LENGTH / (p.z - CAMERA_Z).max(1.0);
    (
        Vec2::new(size.x * 0.5 + p.x * s, size.y * HORIZON + p.y * s),
        s,
    )
}

/// Ring-level terms: everything that depends on theta and time only.
struct RingTerms {
    theta: Vec2, // (cos, sin)
    breathing: f32,
    twist: Vec2, // (cos, sin) of blended twist angle
    wave: f32,
}

#[inline]
fn ring_terms(theta: f32, t: f64, w: [f32; 3]) -> RingTerms {
    let twist0 = phase(t, 0.5).sin() * 0.4;
    let twist1 = (phase(t, 0.6) + theta * 1.5).cos() * 0.35;
    let twist2 = (phase(t, 0.7) + theta).sin() * 0.45;
    let wave1 = (theta * 2.0 - phase(t, 0.8)).sin() * 8.0;
    RingTerms {
        theta: Vec2::from_angle(theta),
        breathing: 70.0 + (phase(t, 0.7) + theta * 2.0).sin() * 9.0,
        twist: Vec2::from_angle(twist0 * w[0] + twist1 * w[1] + twist2 * w[2]),
        wave: wave1 * w[1],
    }
}

#[inline]
fn tube_point(ring: &RingTerms, theta: f32, phi: f32, t: f64, w: [f32; 3]) -> Vec3 {
    let wobble = 14.0 + (phase(t, 1.2) + phi * 2.0 + theta).sin() * 3.2;
    let flow = (phi * 1.5 + phase(t, 0.9)).cos() * 6.0 * w[2];
    let rr = ring.breathing + wobble * phi.cos();
    let raw = Vec2::new(rr * ring.theta.x, rr * ring.theta.y + ring.wave);
    let twisted = ring.twist.rotate(raw);
    Vec3::new(twisted.x, twisted.y, wobble * phi.sin() + flow)
}

pub struct TopographyPreview {
    pub params: TopographyParams,
    controls: ControlState,
    palette: PaletteCycle,
    points: Vec<Vec3>,
    screen: Vec<Vec2>,
    last_dt: f32,
}

impl TopographyPreview {
    pub fn new(params: TopographyParams) -> Self {
        let n = params.rings * params.tube;
        Self {
            params,
            controls: ControlState::default(),
            palette: PaletteCycle::default(),
            points: vec![Vec3::ZERO; n],
            screen: vec![Vec2::ZERO; n],
            last_dt: 0.0,
        }
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn palette(&self) -> &PaletteCycle {
        &self.palette
    }

    /// Rotated 3D points, ring-major.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Projected screen points, parallel to [`Self::points`].
    pub fn screen(&self) -> &[Vec2] {
        &self.screen
    }

    /// Smooth the controls toward the pointer, then regenerate and project
    /// the whole cloud for time `t`.
    pub fn build_geometry(&mut self, surface: &SurfaceState, t: f64) -> &[Vec3] {
        let factor = self
            .params
            .timing
            .smoothing_factor(self.params.smoothing, self.last_dt);
        self.controls.update(surface.pointer, t, factor);

        let w = mode_weights(self.controls.mode_transition);
        let rot = Mat3::from_rotation_y(phase(self.controls.angle_y, 1.0))
            * Mat3::from_rotation_x(phase(self.controls.angle_x, 1.0));
        let size = surface.size();
        let (rings, tube) = (self.params.rings, self.params.tube);
        if self.points.len() != rings * tube {
            // params are public; follow a resolution change
            self.points.resize(rings * tube, Vec3::ZERO);
            self.screen.resize(rings * tube, Vec2::ZERO);
        }

        for i in 0..rings {
            let theta = i as f32 / rings as f32 * TAU;
            let ring = ring_terms(theta, t, w);
            for j in 0..tube {
                let phi = j as f32 / tube as f32 * TAU;
                let p = rot * tube_point(&ring, theta, phi, t, w);
                let k = i * tube + j;
                self.points[k] = p;
                self.screen[k] = project(p, size).0;
            }
        }
        &self.points
    }

    fn stroke_rings(&self, canvas: &mut dyn Canvas2d, style: StrokeStyle) {
        let tube = self.params.tube.max(1);
        for ring in self.screen.chunks_exact(tube) {
            canvas.stroke_polyline(ring, true, style);
        }
    }
}

impl Preview for TopographyPreview {
    fn kind(&self) -> PreviewKind {
        PreviewKind::Topography
    }

    fn step(&mut self, _surface: &SurfaceState, dt: f32) {
        self.last_dt = dt;
    }

    fn draw(&mut self, surface: &SurfaceState, canvas: &mut dyn Canvas2d, time_sec: f64) {
        self.build_geometry(surface, time_sec);

        self.palette
            .advance(self.params.timing.palette_step(self.last_dt));
        let rgb = self.palette.color();

        let size = surface.size();
        wash(canvas, size.x, size.y, WASH_ALPHA);

        self.stroke_rings(
            canvas,
            StrokeStyle {
                color: Rgba::from_rgb(rgb, GLOW_ALPHA),
                width: GLOW_WIDTH,
            },
        );
        self.stroke_rings(
            canvas,
            StrokeStyle {
                color: Rgba::from_rgb(rgb, CORE_ALPHA),
                width: CORE_WIDTH,
            },
        );

        let radius = if surface.active {
            FOCUS_RADIUS_ACTIVE
        } else {
            FOCUS_RADIUS_IDLE
        };
        canvas.stroke_circle(
            surface.pointer * size,
            radius,
            StrokeStyle {
                color: Rgba::white(FOCUS_ALPHA),
                width: 1.0,
            },
        );
    }
}
