//! Renderer collaborator contract.

use crate::markers::Marker;

/// Receives per-frame scene updates. Implementations own all drawing,
/// picking and camera concerns.
pub trait Renderer {
    /// Globe rotation around the vertical axis, in radians.
    fn set_rotation(&mut self, angle: f32);

    /// Full replacement of the visible marker set.
    fn set_markers(&mut self, markers: &[Marker]);

    /// Camera controls are disabled while a travel is in flight.
    fn set_interaction_enabled(&mut self, enabled: bool);
}

/// Renderer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn set_rotation(&mut self, _angle: f32) {}

    fn set_markers(&mut self, _markers: &[Marker]) {}

    fn set_interaction_enabled(&mut self, _enabled: bool) {}
}
