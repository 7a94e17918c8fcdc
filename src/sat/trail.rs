#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The delta log: one frame per decision, recording everything needed to
//! restore the solver state exactly when the decision is undone.

use crate::sat::literal::Lit;
use crate::sat::model::Model;
use crate::sat::state::{ClauseState, ClauseStateTable};

/// The state changes attributable to one decision: the decided literal,
/// the literals forced under it (in propagation order), and the prior
/// state of every clause mutated within the frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub decision: Lit,
    pub forced: Vec<Lit>,
    priors: Vec<(usize, ClauseState)>,
}

impl Frame {
    #[must_use]
    pub fn new(decision: Lit) -> Self {
        Self {
            decision,
            forced: Vec::new(),
            priors: Vec::new(),
        }
    }

    /// Records the state of clause `index` as it was before its first
    /// mutation within this frame. Later mutations of the same clause do
    /// not overwrite the entry: only the oldest state is restored.
    pub fn store_prior(&mut self, index: usize, state: ClauseState) {
        if !self.priors.iter().any(|&(i, _)| i == index) {
            self.priors.push((index, state));
        }
    }

    #[must_use]
    pub fn priors(&self) -> &[(usize, ClauseState)] {
        &self.priors
    }
}

/// A stack of frames; the top frame belongs to the most recent decision.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trail {
    frames: Vec<Frame>,
}

impl Trail {
    /// Opens a new frame for `decision`.
    pub fn push(&mut self, decision: Lit) {
        self.frames.push(Frame::new(decision));
    }

    #[must_use]
    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    #[must_use]
    pub fn top_decision(&self) -> Option<Lit> {
        self.frames.last().map(|frame| frame.decision)
    }

    /// The number of live decisions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Pops the top frame and rolls its effects back: the decided and
    /// forced variables leave the model, and every recorded prior clause
    /// state is written back. Returns false when the trail is empty.
    pub fn undo_one(&mut self, model: &mut Model, states: &mut ClauseStateTable) -> bool {
        let Some(frame) = self.frames.pop() else {
            return false;
        };

        model.unassign(frame.decision.variable());
        for lit in &frame.forced {
            model.unassign(lit.variable());
        }

        for &(index, prior) in &frame.priors {
            states[index] = prior;
        }

        true
    }
}
