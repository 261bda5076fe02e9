// Host-side tests for the procedural tube/torus preview.

mod common;

use common::*;
use folio_core::palette::{lerp_rgb, PaletteCycle};
use folio_core::topography::{
    mode_weights, project, smooth, ControlState, Timing, TopographyParams, TopographyPreview,
};
use folio_core::{Preview, StrokeStyle};
use glam::{Vec2, Vec3};

#[test]
fn default_cloud_has_rings_times_tube_points() {
    let surface = surface_state(400, 300);
    let mut topo = TopographyPreview::new(TopographyParams::default());
    let n = topo.build_geometry(&surface, 0.0).len();
    assert_eq!(n, 54 * 22);
    assert_eq!(topo.screen().len(), 1188);
}

#[test]
fn first_point_matches_closed_form_at_t0() {
    let surface = surface_state(400, 300);
    let mut topo = TopographyPreview::new(TopographyParams::default());
    topo.build_geometry(&surface, 0.0);

    // One smoothing step from zero toward pointer_x * 2 = 1.0
    assert!(approx(topo.controls().mode_transition, 0.04, 1e-7));
    assert_eq!(topo.controls().angle_x, 0.0);
    assert_eq!(topo.controls().angle_y, 0.0);

    // ring 0 / tube 0: rr = 70 + 14 = 84, twist = 0.04 * 0.35
    let twist = 0.04_f32 * 0.35;
    let expected = Vec3::new(84.0 * twist.cos(), 84.0 * twist.sin(), 0.0);
    let p = topo.points()[0];
    assert!(p.abs_diff_eq(expected, 1e-3), "got {p:?}, want {expected:?}");

    // depth 150 -> scale 420 / 150 = 2.8
    let s = topo.screen()[0];
    assert!(approx(s.x, 200.0 + expected.x * 2.8, 1e-2), "sx = {}", s.x);
    assert!(approx(s.y, 300.0 * 0.52 + expected.y * 2.8, 1e-2), "sy = {}", s.y);
}

// Closed-form torus point evaluated in f64, rotated about X then Y.
fn reference_point(ring: usize, tube: usize, t: f64, controls: [f64; 3]) -> [f64; 3] {
    use std::f64::consts::TAU;
    let [m, ax, ay] = controls;
    let theta = ring as f64 / 54.0 * TAU;
    let phi = tube as f64 / 22.0 * TAU;
    let m = m.clamp(0.0, 2.0);
    let w = if m < 1.0 {
        [1.0 - m, m, 0.0]
    } else {
        [0.0, 2.0 - m, m - 1.0]
    };

    let twist = (t * 0.5).sin() * 0.4 * w[0]
        + (t * 0.6 + theta * 1.5).cos() * 0.35 * w[1]
        + (t * 0.7 + theta).sin() * 0.45 * w[2];
    let wave = (theta * 2.0 - t * 0.8).sin() * 8.0 * w[1];
    let breathing = 70.0 + (t * 0.7 + theta * 2.0).sin() * 9.0;
    let wobble = 14.0 + (t * 1.2 + phi * 2.0 + theta).sin() * 3.2;
    let flow = (phi * 1.5 + t * 0.9).cos() * 6.0 * w[2];

    let rr = breathing + wobble * phi.cos();
    let (x, y) = (rr * theta.cos(), rr * theta.sin() + wave);
    let (x, y) = (
        x * twist.cos() - y * twist.sin(),
        x * twist.sin() + y * twist.cos(),
    );
    let z = wobble * phi.sin() + flow;
    let (y, z) = (y * ax.cos() - z * ax.sin(), y * ax.sin() + z * ax.cos());
    let (x, z) = (x * ay.cos() + z * ay.sin(), -x * ay.sin() + z * ay.cos());
    [x, y, z]
}

// Smoothing from rest toward the pointer targets, `frames` times at time t.
fn reference_controls(pointer: (f64, f64), t: f64, frames: usize) -> [f64; 3] {
    let (mut m, mut ax, mut ay) = (0.0, 0.0, 0.0);
    for _ in 0..frames {
        m += (pointer.0 * 2.0 - m) * 0.04;
        ax += ((pointer.1 - 0.5) * 0.9 + t * 0.2 - ax) * 0.04;
        ay += ((pointer.0 - 0.5) * 0.9 + t * 0.2 - ay) * 0.04;
    }
    [m, ax, ay]
}

fn assert_point(got: Vec3, want: [f64; 3]) {
    let want = Vec3::new(want[0] as f32, want[1] as f32, want[2] as f32);
    assert!(got.abs_diff_eq(want, 1e-3), "got {got:?}, want {want:?}");
}

#[test]
fn interior_point_matches_closed_form_mid_animation() {
    let mut surface = surface_state(400, 300);
    surface.pointer = Vec2::new(0.8, 0.3);
    let mut topo = TopographyPreview::new(TopographyParams::default());
    topo.build_geometry(&surface, 1.3);

    let controls = reference_controls((0.8, 0.3), 1.3, 1);
    assert!(approx(topo.controls().mode_transition, 0.064, 1e-6));
    assert!((topo.controls().angle_x - controls[1]).abs() < 1e-6);
    assert!((topo.controls().angle_y - controls[2]).abs() < 1e-6);

    let p = topo.points()[5 * 22 + 7];
    assert_point(p, reference_point(5, 7, 1.3, controls));
    assert_point(p, [50.24405, 52.18542, 11.42450]);
}

#[test]
fn spiral_flow_mode_matches_closed_form() {
    let mut surface = surface_state(400, 300);
    surface.pointer = Vec2::new(0.95, 0.7);
    let mut topo = TopographyPreview::new(TopographyParams::default());
    for _ in 0..120 {
        topo.build_geometry(&surface, 2.1);
    }

    let controls = reference_controls((0.95, 0.7), 2.1, 120);
    // past the midpoint, so the flow weight is live
    assert!(topo.controls().mode_transition > 1.8);
    assert!(approx(topo.controls().mode_transition, controls[0] as f32, 1e-4));

    let p = topo.points()[17 * 22 + 3];
    assert_point(p, reference_point(17, 3, 2.1, controls));
    assert_point(p, [18.87717, 55.35538, 43.73868]);
}

#[test]
fn geometry_stays_smooth_after_a_day_of_uptime() {
    let surface = surface_state(400, 300);
    let day = 86_400.0;
    let mut a = TopographyPreview::new(TopographyParams::default());
    let mut b = TopographyPreview::new(TopographyParams::default());
    a.build_geometry(&surface, day);
    b.build_geometry(&surface, day + 0.001);

    // a 1 ms step still moves the cloud, by a fraction of a unit
    let max_step = a
        .points()
        .iter()
        .zip(b.points())
        .map(|(p, q)| p.distance(*q))
        .fold(0.0_f32, f32::max);
    assert!(max_step > 0.0 && max_step < 0.1, "max step {max_step}");

    let expected = reference_point(5, 7, day, reference_controls((0.5, 0.5), day, 1));
    assert_point(a.points()[5 * 22 + 7], expected);
}

#[test]
fn mode_weights_partition_unity() {
    for step in 0..=200 {
        let m = step as f32 / 100.0;
        let w = mode_weights(m);
        for (k, v) in w.iter().enumerate() {
            assert!((0.0..=1.0).contains(v), "weight {k} = {v} at m = {m}");
        }
        let sum: f32 = w.iter().sum();
        assert!(approx(sum, 1.0, 1e-6), "sum {sum} at m = {m}");
        assert!(
            w[0] == 0.0 || w[2] == 0.0,
            "two transitions active at m = {m}"
        );
    }
    assert_eq!(mode_weights(0.0), [1.0, 0.0, 0.0]);
    assert_eq!(mode_weights(1.0), [0.0, 1.0, 0.0]);
    assert_eq!(mode_weights(2.0), [0.0, 0.0, 1.0]);
}

#[test]
fn mode_weights_clamp_out_of_range_input() {
    assert_eq!(mode_weights(-0.5), [1.0, 0.0, 0.0]);
    assert_eq!(mode_weights(3.0), [0.0, 0.0, 1.0]);
}

#[test]
fn controls_converge_monotonically_without_overshoot() {
    let pointer = Vec2::new(0.8, 0.3);
    let target = ControlState::targets(pointer, 0.0);
    let mut c = ControlState::default();
    let gap = |c: &ControlState| {
        [
            (target.mode_transition - c.mode_transition) as f64,
            target.angle_x - c.angle_x,
            target.angle_y - c.angle_y,
        ]
    };
    let mut prev = gap(&c);
    for frame in 0..400 {
        c.update(pointer, 0.0, 0.04);
        let now = gap(&c);
        for k in 0..3 {
            assert!(now[k].abs() <= prev[k].abs(), "frame {frame}: gap grew");
            assert!(
                now[k] == 0.0 || now[k].signum() == prev[k].signum(),
                "frame {frame}: overshoot on component {k}"
            );
        }
        prev = now;
    }
    assert!(approx(c.mode_transition, 1.6, 1e-4));
    assert!(approx(c.angle_x as f32, -0.18, 1e-4));
    assert!(approx(c.angle_y as f32, 0.27, 1e-4));
}

#[test]
fn smooth_moves_a_fixed_fraction() {
    assert!(approx(smooth(0.0, 1.0, 0.04), 0.04, 1e-7));
    assert!(approx(smooth(2.0, 1.0, 0.5), 1.5, 1e-7));
    assert_eq!(smooth(3.0, 3.0, 0.04), 3.0);
}

#[test]
fn closer_points_project_larger() {
    let size = Vec2::new(400.0, 300.0);
    let (near, s_near) = project(Vec3::new(10.0, 5.0, -100.0), size);
    let (far, s_far) = project(Vec3::new(10.0, 5.0, 50.0), size);
    assert!(s_near > s_far);
    assert!((near.x - 200.0).abs() > (far.x - 200.0).abs());

    // at or behind the camera plane the divisor floors at 1
    let (_, s_behind) = project(Vec3::new(1.0, 1.0, -400.0), size);
    assert_eq!(s_behind, 420.0);
}

#[test]
fn time_scaled_timing_matches_frame_locked_at_reference_rate() {
    let scaled = Timing::TimeScaled { reference_hz: 60.0 };
    assert!(approx(scaled.smoothing_factor(0.04, 1.0 / 60.0), 0.04, 1e-5));
    assert!(approx(
        scaled.smoothing_factor(0.04, 2.0 / 60.0),
        1.0 - 0.96 * 0.96,
        1e-5
    ));
    assert_eq!(scaled.smoothing_factor(0.04, 0.0), 0.0);
    assert_eq!(Timing::FrameLocked.smoothing_factor(0.04, 0.5), 0.04);
    assert!(approx(Timing::FrameLocked.palette_step(0.5), 1.0 / 60.0, 1e-7));
    assert_eq!(scaled.palette_step(0.02), 0.02);
}

#[test]
fn draw_strokes_every_ring_twice_then_focus_ring() {
    let mut surface = RecordingSurface::new(None, 320, 200);
    let state = surface.state;
    let mut topo = TopographyPreview::new(TopographyParams::default());
    topo.step(&state, 0.016);
    topo.draw(&state, &mut surface, 1.5);

    assert_eq!(surface.ops[0], Op::Clear(320.0, 200.0));
    let lines = surface.polylines();
    assert_eq!(lines.len(), 2 * 54);
    for (k, op) in lines.iter().enumerate() {
        let Op::Polyline {
            len, closed, style, ..
        } = op
        else {
            unreachable!()
        };
        assert_eq!(*len, 22);
        assert!(*closed);
        let (width, alpha) = if k < 54 { (3.2, 0.08) } else { (1.3, 0.18) };
        assert_eq!(style.width, width);
        assert_eq!(style.color.a, alpha);
    }
    match surface.ops.last() {
        Some(Op::StrokeCircle(center, r, StrokeStyle { width, .. })) => {
            assert_eq!(*center, Vec2::new(160.0, 100.0));
            assert_eq!(*r, 20.0);
            assert_eq!(*width, 1.0);
        }
        other => panic!("expected focus ring, got {other:?}"),
    }
}

#[test]
fn focus_ring_grows_while_hovered() {
    let mut surface = RecordingSurface::new(None, 320, 200);
    surface.state.active = true;
    let state = surface.state;
    let mut topo = TopographyPreview::new(TopographyParams::default());
    topo.draw(&state, &mut surface, 0.0);
    assert!(matches!(surface.ops.last(), Some(Op::StrokeCircle(_, r, _)) if *r == 26.0));
}

#[test]
fn buffers_are_reused_across_frames() {
    let surface = surface_state(400, 300);
    let mut topo = TopographyPreview::new(TopographyParams {
        rings: 8,
        tube: 6,
        ..TopographyParams::default()
    });
    let first = topo.build_geometry(&surface, 0.0).as_ptr();
    let second = topo.build_geometry(&surface, 0.5).as_ptr();
    assert_eq!(first, second);
    assert_eq!(topo.points().len(), 48);
}

#[test]
fn palette_blends_then_advances_pair() {
    let mut pal = PaletteCycle::default();
    assert_eq!(pal.color(), [122, 44, 255]);

    pal.advance(1.5);
    assert_eq!(pal.color(), [189, 52, 234]);

    pal.advance(1.5);
    assert_eq!(pal.index(), 0, "exactly one period does not wrap");
    pal.advance(0.01);
    assert_eq!(pal.index(), 1);
    assert_eq!(pal.phase(), 0.0);
    assert_eq!(pal.color(), [255, 59, 212]);
}

#[test]
fn palette_wraps_back_to_first_pair() {
    let mut pal = PaletteCycle::new(vec![[0, 0, 0], [255, 255, 255]], 1.0);
    pal.advance(1.5);
    pal.advance(1.5);
    assert_eq!(pal.index(), 0);
    assert_eq!(lerp_rgb([0, 0, 0], [255, 255, 255], 0.5), [128, 128, 128]);
}
