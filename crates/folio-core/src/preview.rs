use crate::canvas::Canvas2d;
use crate::surface::SurfaceState;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    Physics,
    Topography,
}

impl PreviewKind {
    pub fn tag(&self) -> &'static str {
        match self {
            PreviewKind::Physics => "physics",
            PreviewKind::Topography => "topography",
        }
    }
}

impl fmt::Display for PreviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preview kind {0:?}")]
pub struct UnknownPreviewKind(pub String);

impl FromStr for PreviewKind {
    type Err = UnknownPreviewKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "physics" => Ok(PreviewKind::Physics),
            "topography" => Ok(PreviewKind::Topography),
            other => Err(UnknownPreviewKind(other.to_string())),
        }
    }
}

/// Events a preview emits towards the host page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// The user pressed inside a preview; the page stops its ambient
    /// accent cycle in response.
    UserInteracted,
}

/// One animated preview hosted on a surface.
///
/// The scheduler calls `step` then `draw` once per frame with the surface's
/// current state.
pub trait Preview {
    fn kind(&self) -> PreviewKind;

    fn step(&mut self, surface: &SurfaceState, dt: f32);

    fn draw(&mut self, surface: &SurfaceState, canvas: &mut dyn Canvas2d, time_sec: f64);

    /// Pointer pressed at normalized `uv`. Previews that ignore presses keep
    /// the default.
    fn on_press(&mut self, _surface: &SurfaceState, _uv: Vec2) -> Option<Interaction> {
        None
    }
}
