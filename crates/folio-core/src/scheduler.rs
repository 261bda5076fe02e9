//! Shared per-frame driver for every registered preview.

use crate::constants::MAX_FRAME_DT_SEC;
use crate::preview::{Interaction, Preview};
use crate::surface::Surface;
use glam::Vec2;
use smallvec::SmallVec;

/// Converts host frame timestamps (ms) into clamped step lengths (s).
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_ms: f64,
    max_dt: f32,
}

impl FrameClock {
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            last_ms: now_ms,
            max_dt: MAX_FRAME_DT_SEC,
        }
    }

    /// Seconds since the previous call, clamped to [0, max_dt].
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        if dt.is_finite() {
            dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        }
    }

    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    Stopped,
}

/// What the host should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Reschedule,
    Halt,
}

pub struct PreviewSlot<S> {
    pub surface: S,
    pub preview: Box<dyn Preview>,
}

pub type InteractionListener = Box<dyn FnMut(Interaction)>;

pub struct Scheduler<S> {
    slots: SmallVec<[PreviewSlot<S>; 2]>,
    clock: FrameClock,
    state: RunState,
    listener: Option<InteractionListener>,
}

impl<S: Surface> Scheduler<S> {
    pub fn new(slots: SmallVec<[PreviewSlot<S>; 2]>, now_ms: f64) -> Self {
        Self {
            slots,
            clock: FrameClock::starting_at(now_ms),
            state: RunState::Running,
            listener: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn slots(&self) -> &[PreviewSlot<S>] {
        &self.slots
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut PreviewSlot<S>> {
        self.slots.get_mut(index)
    }

    /// Subscribe to preview interaction events (one listener).
    pub fn on_interaction(&mut self, listener: impl FnMut(Interaction) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// One animation frame: step then draw every slot.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if self.state != RunState::Running {
            return TickOutcome::Halt;
        }
        let dt = self.clock.advance(now_ms);
        let time_sec = now_ms / 1000.0;
        for slot in self.slots.iter_mut() {
            let state = slot.surface.state();
            slot.preview.step(&state, dt);
            slot.preview.draw(&state, &mut slot.surface, time_sec);
        }
        TickOutcome::Reschedule
    }

    /// Forward a pointer press to slot `index` and publish any resulting
    /// interaction.
    pub fn press(&mut self, index: usize, uv: Vec2) -> Option<Interaction> {
        if self.state == RunState::Stopped {
            return None;
        }
        let slot = self.slots.get_mut(index)?;
        let state = slot.surface.state();
        let event = slot.preview.on_press(&state, uv)?;
        if let Some(listener) = self.listener.as_mut() {
            listener(event);
        }
        Some(event)
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
        }
    }

    /// Resume from a pause. The clock is re-anchored at `now_ms` so the first
    /// frame after resuming does not see the paused interval.
    pub fn resume(&mut self, now_ms: f64) -> bool {
        if self.state != RunState::Paused {
            return false;
        }
        self.clock.reset(now_ms);
        self.state = RunState::Running;
        true
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
        self.listener = None;
    }
}
