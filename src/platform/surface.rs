/// Abstract render surface interface.
///
/// The graph builder never draws; it hands a [`SpatialGraph`] descriptor to
/// whatever surface is bound. Concrete surfaces (chart libraries, JSON
/// emitters, test stubs) live behind this trait.

use crate::core::types::SpatialGraph;

pub trait RenderSurface {
    /// Called once when the controller binds the surface, before the first
    /// graph is applied.
    fn mount(&mut self);

    /// Replace the currently displayed graph with a freshly built one.
    fn apply(&mut self, graph: &SpatialGraph);

    /// Viewport size change, forwarded while the binding is live.
    fn resize(&mut self, width: u32, height: u32);

    /// Release the binding. No calls follow.
    fn unmount(&mut self);
}
