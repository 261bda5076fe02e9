//! Bouncing-ball toy: gravity, inelastic wall bounce and cheap positional
//! overlap correction between bodies.

use crate::canvas::{wash, Canvas2d, Rgba, StrokeStyle};
use crate::constants::*;
use crate::preview::{Interaction, Preview, PreviewKind};
use crate::surface::SurfaceState;
use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;

const WASH_ALPHA: f32 = 0.03;
const BODY_ALPHA: f32 = 0.92;
const FILL_ALPHA: f32 = 0.78;
const RING_ALPHA: f32 = 0.14;
const RING_GAP: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Clone, Debug)]
pub struct PhysicsParams {
    pub gravity: f32,
    pub bounce: f32,
    pub max_bodies: usize,
    pub initial_bodies: usize,
    pub steer_force: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            bounce: BOUNCE,
            max_bodies: MAX_BODIES,
            initial_bodies: INITIAL_BODIES,
            steer_force: STEER_FORCE,
        }
    }
}

pub struct PhysicsPreview {
    pub params: PhysicsParams,
    bodies: VecDeque<Body>,
    rng: StdRng,
}

impl PhysicsPreview {
    /// Empty preview; no initial scatter.
    pub fn new(params: PhysicsParams, seed: u64) -> Self {
        let cap = params.max_bodies.max(1);
        Self {
            params,
            bodies: VecDeque::with_capacity(cap),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Preview with the initial random scatter near the top of the surface.
    pub fn with_scatter(params: PhysicsParams, seed: u64, surface: &SurfaceState) -> Self {
        let mut p = Self::new(params, seed);
        for _ in 0..p.params.initial_bodies {
            let u = p.rng.gen::<f32>();
            let v = INITIAL_SPAWN_Y_MIN + p.rng.gen::<f32>() * INITIAL_SPAWN_Y_SPAN;
            p.spawn(surface, Vec2::new(u, v));
        }
        p
    }

    pub fn bodies(&self) -> &VecDeque<Body> {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Spawn a body at normalized `uv` with random radius and velocity,
    /// evicting the oldest body when at capacity.
    pub fn spawn(&mut self, surface: &SurfaceState, uv: Vec2) {
        let radius = spawn_radius(&mut self.rng);
        let vel = Vec2::new(
            (self.rng.gen::<f32>() * 2.0 - 1.0) * SPAWN_SPEED_X,
            (self.rng.gen::<f32>() * 2.0 - 1.0) * SPAWN_SPEED_Y,
        );
        self.push(Body {
            pos: uv * surface.size(),
            vel,
            radius,
        });
    }

    /// Append a body, evicting the oldest when at capacity.
    pub fn push(&mut self, body: Body) {
        let cap = self.params.max_bodies.max(1);
        while self.bodies.len() >= cap {
            self.bodies.pop_front();
            log::trace!("[physics] evicted oldest body");
        }
        self.bodies.push_back(body);
    }

    pub fn integrate(&mut self, surface: &SurfaceState, dt: f32) {
        let size = surface.size();
        let tx = (surface.pointer.x - 0.5) * self.params.steer_force;
        for b in self.bodies.iter_mut() {
            b.vel.x += tx * dt;
            b.vel.y += self.params.gravity * dt;
            b.pos += b.vel * dt;
            bounce_walls(b, size, self.params.bounce);
        }
    }

    pub fn resolve_overlaps(&mut self) {
        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                separate(a, b);
            }
        }
    }
}

impl Preview for PhysicsPreview {
    fn kind(&self) -> PreviewKind {
        PreviewKind::Physics
    }

    fn step(&mut self, surface: &SurfaceState, dt: f32) {
        self.integrate(surface, dt);
        self.resolve_overlaps();
        let size = surface.size();
        for b in self.bodies.iter_mut() {
            b.pos = contain(b.pos, b.radius, size);
        }
    }

    fn draw(&mut self, surface: &SurfaceState, canvas: &mut dyn Canvas2d, _time_sec: f64) {
        let size = surface.size();
        wash(canvas, size.x, size.y, WASH_ALPHA);
        let fill = Rgba::white(FILL_ALPHA * BODY_ALPHA);
        let ring = StrokeStyle {
            color: Rgba::white(RING_ALPHA * BODY_ALPHA),
            width: 1.0,
        };
        for b in &self.bodies {
            canvas.fill_circle(b.pos, b.radius, fill);
            canvas.stroke_circle(b.pos, b.radius + RING_GAP, ring);
        }
    }

    fn on_press(&mut self, surface: &SurfaceState, uv: Vec2) -> Option<Interaction> {
        self.spawn(surface, uv);
        Some(Interaction::UserInteracted)
    }
}

/// Random body radius in `[BODY_RADIUS_MIN, BODY_RADIUS_MIN + BODY_RADIUS_SPAN)`.
#[inline]
pub fn spawn_radius<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(BODY_RADIUS_MIN..BODY_RADIUS_MIN + BODY_RADIUS_SPAN)
}

/// Clamp a penetrating body back onto each wall and reflect the matching
/// velocity component away from it, scaled by `bounce`.
#[inline]
pub fn bounce_walls(b: &mut Body, size: Vec2, bounce: f32) {
    let r = b.radius;
    if b.pos.x - r < 0.0 {
        b.pos.x = r;
        b.vel.x = b.vel.x.abs() * bounce;
    }
    if b.pos.x + r > size.x {
        b.pos.x = size.x - r;
        b.vel.x = -b.vel.x.abs() * bounce;
    }
    if b.pos.y - r < 0.0 {
        b.pos.y = r;
        b.vel.y = b.vel.y.abs() * bounce;
    }
    if b.pos.y + r > size.y {
        b.pos.y = size.y - r;
        b.vel.y = -b.vel.y.abs() * bounce;
    }
}

/// Push two overlapping bodies apart by half the overlap each along the line
/// between their centres. Coincident centres separate along +X.
#[inline]
pub fn separate(a: &mut Body, b: &mut Body) {
    let d = b.pos - a.pos;
    let dist = d.length();
    let min = a.radius + b.radius;
    if dist >= min {
        return;
    }
    let normal = if dist > MIN_SEPARATION {
        d / dist
    } else {
        Vec2::X
    };
    let overlap = (min - dist) * 0.5;
    a.pos -= normal * overlap;
    b.pos += normal * overlap;
}

// Left/top first, right/bottom last, so a surface narrower than the body
// pins it to the far wall.
#[inline]
fn contain(pos: Vec2, r: f32, size: Vec2) -> Vec2 {
    Vec2::new(pos.x.max(r).min(size.x - r), pos.y.max(r).min(size.y - r))
}

fn pair_mut(bodies: &mut VecDeque<Body>, i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (front, back) = bodies.make_contiguous().split_at_mut(j);
    (&mut front[i], &mut back[0])
}
