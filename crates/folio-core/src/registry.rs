use crate::physics::{PhysicsParams, PhysicsPreview};
use crate::preview::{Preview, PreviewKind, UnknownPreviewKind};
use crate::scheduler::{PreviewSlot, Scheduler};
use crate::surface::{Surface, SurfaceState};
use crate::topography::{TopographyParams, TopographyPreview};
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("surface has no preview tag")]
    Untagged,
    #[error(transparent)]
    Unknown(#[from] UnknownPreviewKind),
}

/// Parameters handed to every preview the registry builds.
#[derive(Clone, Debug, Default)]
pub struct PreviewConfig {
    pub physics: PhysicsParams,
    pub topography: TopographyParams,
    /// Fixed base seed for reproducible scatter; random when `None`.
    pub seed: Option<u64>,
}

/// Map a surface's `data-preview` tag to a kind.
pub fn kind_for_tag(tag: Option<&str>) -> Result<PreviewKind, RegistryError> {
    let tag = tag.ok_or(RegistryError::Untagged)?;
    Ok(tag.parse::<PreviewKind>()?)
}

// Derive per-slot seeds from the base seed so slots never share a stream
#[inline]
fn slot_seed(base: u64, index: usize) -> u64 {
    base ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

pub fn instantiate(
    kind: PreviewKind,
    surface: &SurfaceState,
    config: &PreviewConfig,
    seed: u64,
) -> Box<dyn Preview> {
    match kind {
        PreviewKind::Physics => Box::new(PhysicsPreview::with_scatter(
            config.physics.clone(),
            seed,
            surface,
        )),
        PreviewKind::Topography => Box::new(TopographyPreview::new(config.topography.clone())),
    }
}

/// Collects (surface, preview) pairs at startup.
pub struct Registry<S> {
    config: PreviewConfig,
    base_seed: u64,
    slots: SmallVec<[PreviewSlot<S>; 2]>,
}

impl<S: Surface> Registry<S> {
    pub fn new(config: PreviewConfig) -> Self {
        let base_seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            base_seed,
            slots: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Build the preview matching the surface's kind and keep the pair.
    /// Returns the slot index.
    pub fn register(&mut self, surface: S) -> Result<usize, RegistryError> {
        let state = surface.state();
        let kind = state.kind.ok_or(RegistryError::Untagged)?;
        let index = self.slots.len();
        let preview = instantiate(kind, &state, &self.config, slot_seed(self.base_seed, index));
        log::debug!(
            "[registry] slot {} -> {} ({}x{})",
            index,
            kind,
            state.width,
            state.height
        );
        self.slots.push(PreviewSlot { surface, preview });
        Ok(index)
    }

    pub fn into_scheduler(self, now_ms: f64) -> Scheduler<S> {
        Scheduler::new(self.slots, now_ms)
    }
}
