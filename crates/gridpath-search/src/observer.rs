//! The observation hook called by the engine after every state change.

use gridpath_core::{Grid, Pos};

/// What just happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// All neighbours of `pos` were relaxed. `pos` is marked visited right
    /// after the callback returns (unless it is the start).
    Expanded { pos: Pos },
    /// `pos` was marked as part of the final path.
    PathCell { pos: Pos },
}

impl Step {
    /// The cell the step is about.
    #[inline]
    pub fn pos(self) -> Pos {
        match self {
            Self::Expanded { pos } | Self::PathCell { pos } => pos,
        }
    }
}

/// Observer verdict, checked by the engine as soon as the callback returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Abort,
}

impl Flow {
    #[inline]
    pub fn is_abort(self) -> bool {
        self == Self::Abort
    }
}

/// Receiver of search progress.
///
/// The observer is handed the grid being searched and reads whatever cell
/// states it needs from it. It runs synchronously on the engine's thread and
/// may be called any number of times per search.
pub trait Observer {
    fn observe(&mut self, grid: &Grid, step: Step) -> Flow;
}

impl<F> Observer for F
where
    F: FnMut(&Grid, Step) -> Flow,
{
    #[inline]
    fn observe(&mut self, grid: &Grid, step: Step) -> Flow {
        self(grid, step)
    }
}

/// Observer that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {
    #[inline]
    fn observe(&mut self, _grid: &Grid, _step: Step) -> Flow {
        Flow::Continue
    }
}

/// Observer that records every step, aborting after `limit` steps if set.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub steps: Vec<Step>,
    pub limit: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort once `limit` steps have been recorded.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            steps: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Positions of the recorded expansions, in order.
    pub fn expanded(&self) -> Vec<Pos> {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Expanded { .. }))
            .map(|s| s.pos())
            .collect()
    }

    /// Positions of the recorded path marks, in order (end side first).
    pub fn path_cells(&self) -> Vec<Pos> {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::PathCell { .. }))
            .map(|s| s.pos())
            .collect()
    }
}

impl Observer for Recorder {
    fn observe(&mut self, _grid: &Grid, step: Step) -> Flow {
        self.steps.push(step);
        match self.limit {
            Some(limit) if self.steps.len() >= limit => Flow::Abort,
            _ => Flow::Continue,
        }
    }
}
