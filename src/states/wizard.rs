//! Wizard - Multi-step form cursor
//!
//! A wizard is a fixed, ordered list of steps plus the index of the active
//! one. Steps carry their own form data, so a wizard is usually
//! `Wizard<SomeStepEnum>`.

use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct Wizard<S> {
    steps: Vec<S>,
    cursor: usize,
}

impl<S> Wizard<S> {
    /// Create a wizard positioned on the first step
    pub fn new(steps: Vec<S>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "a wizard needs at least one step".to_string(),
            });
        }
        Ok(Self { steps, cursor: 0 })
    }

    /// Build from a first step plus the remaining ones, so it is never empty
    pub fn from_steps(first: S, rest: impl IntoIterator<Item = S>) -> Self {
        let steps = std::iter::once(first).chain(rest).collect();
        Self { steps, cursor: 0 }
    }

    pub fn current(&self) -> &S {
        &self.steps[self.cursor]
    }

    pub fn current_mut(&mut self) -> &mut S {
        &mut self.steps[self.cursor]
    }

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.steps.len()
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Advance one step. Returns `false` when already on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Go back one step. Returns `false` when already on the first step.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Jump to a 0-based step index
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.steps.len() {
            return Err(Error::InvalidPageIndex { index });
        }
        self.cursor = index;
        Ok(())
    }
}
