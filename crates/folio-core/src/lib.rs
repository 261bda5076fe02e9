pub mod canvas;
pub mod constants;
pub mod contact;
pub mod palette;
pub mod physics;
pub mod preview;
pub mod projects;
pub mod registry;
pub mod scheduler;
pub mod surface;
pub mod theme;
pub mod topography;

pub use canvas::*;
pub use preview::*;
pub use registry::*;
pub use scheduler::*;
pub use surface::*;
