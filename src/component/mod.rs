//! Component registry and the component capability trait.

pub mod registry;
pub mod traits;

pub use registry::{Registry, RenderError, COMPONENT_ATTR, MAX_RENDER_DEPTH};
pub use traits::Component;
