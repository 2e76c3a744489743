//! Step observer trait for monitoring simulation progress.

/// Hooks called by [`crate::World::step`]. All methods default to no-ops.
///
/// Implement this for debugging, visualisation of solver convergence or
/// profiling.
pub trait StepObserver {
    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each boundary-clamp + relaxation pass.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called after circle obstacles have been resolved.
    fn on_obstacles(&mut self) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// Observer that does nothing. Use when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts every hook invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCounter {
    pub integrations: usize,
    pub relax_iterations: usize,
    pub obstacle_passes: usize,
    pub steps: usize,
}

impl StepObserver for StepCounter {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_relax_iteration(&mut self, _iteration: usize) {
        self.relax_iterations += 1;
    }

    fn on_obstacles(&mut self) {
        self.obstacle_passes += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
