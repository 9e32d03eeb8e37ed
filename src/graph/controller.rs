/// Rebuild lifecycle: owns the current inputs and the render surface
/// binding, and regenerates the full graph whenever inputs change.

use crate::core::error::GraphError;
use crate::core::types::ResourceData;
use crate::graph::builder::assemble_graph;
use crate::platform::surface::RenderSurface;

/// Lifecycle state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No surface binding yet; inputs incomplete.
    Uninitialized,
    /// Surface bound; rebuilds are pushed into it.
    Ready,
    /// Torn down; all further rebuilds are no-ops.
    Disposed,
}

/// Result of a rebuild attempt. Only structural input problems are errors;
/// incomplete inputs and teardown are ordinary conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    Rebuilt,
    NotReady,
    Disposed,
}

/// The mutable inputs a rebuild is computed from.
#[derive(Debug, Clone, Default)]
pub struct GraphInputs {
    pub coordinates: Vec<[f64; 2]>,
    pub resources: ResourceData,
}

impl GraphInputs {
    /// Inputs are complete once every sequence is non-empty. Merely-empty
    /// data renders nothing and is not an error.
    fn complete(&self) -> bool {
        !self.coordinates.is_empty()
            && !self.resources.vx.is_empty()
            && !self.resources.vy.is_empty()
    }
}

pub struct GraphController<S: RenderSurface> {
    state: ControllerState,
    inputs: GraphInputs,
    surface: S,
}

impl<S: RenderSurface> GraphController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            state: ControllerState::Uninitialized,
            inputs: GraphInputs::default(),
            surface,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Replace the coordinate list and rebuild.
    pub fn set_coordinates(
        &mut self,
        coordinates: Vec<[f64; 2]>,
    ) -> Result<RebuildOutcome, GraphError> {
        self.update(|inputs| inputs.coordinates = coordinates)
    }

    /// Replace the resource matrices and rebuild.
    pub fn set_resources(
        &mut self,
        resources: ResourceData,
    ) -> Result<RebuildOutcome, GraphError> {
        self.update(|inputs| inputs.resources = resources)
    }

    /// Apply several input mutations and rebuild once afterwards
    /// (latest-wins coalescing for rapid successive changes).
    pub fn update<F>(&mut self, mutate: F) -> Result<RebuildOutcome, GraphError>
    where
        F: FnOnce(&mut GraphInputs),
    {
        if self.state == ControllerState::Disposed {
            return Ok(RebuildOutcome::Disposed);
        }
        mutate(&mut self.inputs);
        self.rebuild()
    }

    /// Regenerate the graph from current inputs and push it into the
    /// surface. Lazily binds the surface on the first complete rebuild.
    /// Structural errors propagate and leave the state unchanged.
    pub fn rebuild(&mut self) -> Result<RebuildOutcome, GraphError> {
        match self.state {
            ControllerState::Disposed => return Ok(RebuildOutcome::Disposed),
            ControllerState::Uninitialized | ControllerState::Ready => {}
        }

        if !self.inputs.complete() {
            log::debug!("rebuild skipped: inputs not yet available");
            return Ok(RebuildOutcome::NotReady);
        }

        // Validate and build before binding, so a malformed dataset never
        // creates a surface it cannot fill.
        let graph = assemble_graph(
            &self.inputs.coordinates,
            &self.inputs.resources.vx,
            &self.inputs.resources.vy,
        )?;

        if self.state == ControllerState::Uninitialized {
            self.surface.mount();
            self.state = ControllerState::Ready;
        }

        log::info!(
            "graph rebuilt: {} nodes, {} edges",
            graph.nodes.len(),
            graph.edges.len()
        );
        self.surface.apply(&graph);
        Ok(RebuildOutcome::Rebuilt)
    }

    /// Forward a viewport resize to the bound surface.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if self.state == ControllerState::Ready {
            self.surface.resize(width, height);
        }
    }

    /// Tear down: release the surface binding. Idempotent; rebuilds after
    /// this are no-ops.
    pub fn dispose(&mut self) {
        if self.state == ControllerState::Ready {
            self.surface.unmount();
        }
        self.state = ControllerState::Disposed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SpatialGraph;

    /// Records every surface call for assertions.
    #[derive(Default)]
    struct RecordingSurface {
        mounts: usize,
        unmounts: usize,
        resizes: Vec<(u32, u32)>,
        applied: Vec<SpatialGraph>,
    }

    impl RenderSurface for &mut RecordingSurface {
        fn mount(&mut self) {
            self.mounts += 1;
        }
        fn apply(&mut self, graph: &SpatialGraph) {
            self.applied.push(graph.clone());
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.resizes.push((width, height));
        }
        fn unmount(&mut self) {
            self.unmounts += 1;
        }
    }

    fn sample_resources() -> ResourceData {
        ResourceData {
            vx: vec![vec![0.0, 0.0, 1.0], vec![1.0, 0.0, 0.0]],
            vy: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        }
    }

    #[test]
    fn test_stays_uninitialized_on_empty_inputs() {
        let mut surface = RecordingSurface::default();
        let mut ctrl = GraphController::new(&mut surface);

        assert_eq!(ctrl.rebuild().unwrap(), RebuildOutcome::NotReady);
        assert_eq!(
            ctrl.set_coordinates(vec![[0.0, 0.0]]).unwrap(),
            RebuildOutcome::NotReady
        );
        assert_eq!(ctrl.state(), ControllerState::Uninitialized);

        drop(ctrl);
        assert_eq!(surface.mounts, 0);
        assert!(surface.applied.is_empty());
    }

    #[test]
    fn test_first_complete_rebuild_binds_surface() {
        let mut surface = RecordingSurface::default();
        let mut ctrl = GraphController::new(&mut surface);

        ctrl.set_coordinates(vec![[0.0, 0.0], [3.0, 4.0]]).unwrap();
        let outcome = ctrl.set_resources(sample_resources()).unwrap();

        assert_eq!(outcome, RebuildOutcome::Rebuilt);
        assert_eq!(ctrl.state(), ControllerState::Ready);

        drop(ctrl);
        assert_eq!(surface.mounts, 1);
        assert_eq!(surface.applied.len(), 1);
        assert_eq!(surface.applied[0].nodes.len(), 2);
        assert_eq!(surface.applied[0].edges.len(), 1);
    }

    #[test]
    fn test_each_input_change_pushes_a_fresh_graph() {
        let mut surface = RecordingSurface::default();
        let mut ctrl = GraphController::new(&mut surface);

        ctrl.set_coordinates(vec![[0.0, 0.0], [3.0, 4.0]]).unwrap();
        ctrl.set_resources(sample_resources()).unwrap();
        ctrl.set_coordinates(vec![[1.0, 1.0], [4.0, 5.0]]).unwrap();

        drop(ctrl);
        assert_eq!(surface.mounts, 1, "binding is created once");
        assert_eq!(surface.applied.len(), 2);
        assert_eq!(surface.applied[1].find_node(0).unwrap().x, 1.0);
    }

    #[test]
    fn test_update_coalesces_to_one_rebuild() {
        let mut surface = RecordingSurface::default();
        let mut ctrl = GraphController::new(&mut surface);

        ctrl.update(|inputs| {
            inputs.coordinates = vec![[0.0, 0.0], [3.0, 4.0]];
            inputs.resources = sample_resources();
        })
        .unwrap();

        drop(ctrl);
        assert_eq!(surface.applied.len(), 1);
    }

    #[test]
    fn test_mismatch_propagates_and_leaves_state_unchanged() {
        let mut surface = RecordingSurface::default();
        let mut ctrl = GraphController::new(&mut surface);

        let err = ctrl
            .update(|inputs| {
                inputs.coordinates = vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
                inputs.resources = sample_resources(); // only 2 rows
            })
            .unwrap_err();

        assert_eq!(
            err,
            GraphError::DataMismatch {
                coordinates: 3,
                warehouse_levels: 2,
                resources: 2,
            }
        );
        assert_eq!(ctrl.state(), ControllerState::Uninitialized);

        drop(ctrl);
        assert_eq!(surface.mounts, 0);
        assert!(surface.applied.is_empty());
    }

    #[test]
    fn test_resize_forwarded_only_while_ready() {
        let mut surface = RecordingSurface::default();
        let mut ctrl = GraphController::new(&mut surface);

        ctrl.handle_resize(800, 600); // uninitialized: dropped
        ctrl.set_coordinates(vec![[0.0, 0.0], [3.0, 4.0]]).unwrap();
        ctrl.set_resources(sample_resources()).unwrap();
        ctrl.handle_resize(1024, 768);
        ctrl.dispose();
        ctrl.handle_resize(1, 1); // disposed: dropped

        drop(ctrl);
        assert_eq!(surface.resizes, vec![(1024, 768)]);
    }

    #[test]
    fn test_dispose_unmounts_once_and_blocks_rebuilds() {
        let mut surface = RecordingSurface::default();
        let mut ctrl = GraphController::new(&mut surface);

        ctrl.set_coordinates(vec![[0.0, 0.0], [3.0, 4.0]]).unwrap();
        ctrl.set_resources(sample_resources()).unwrap();

        ctrl.dispose();
        ctrl.dispose();
        assert_eq!(ctrl.state(), ControllerState::Disposed);
        assert_eq!(ctrl.rebuild().unwrap(), RebuildOutcome::Disposed);
        assert_eq!(
            ctrl.set_coordinates(vec![[9.0, 9.0]]).unwrap(),
            RebuildOutcome::Disposed
        );

        drop(ctrl);
        assert_eq!(surface.unmounts, 1);
        assert_eq!(surface.applied.len(), 1);
    }

    #[test]
    fn test_dispose_before_binding_never_touches_surface() {
        let mut surface = RecordingSurface::default();
        let mut ctrl = GraphController::new(&mut surface);
        ctrl.dispose();

        drop(ctrl);
        assert_eq!(surface.mounts, 0);
        assert_eq!(surface.unmounts, 0);
    }
}
