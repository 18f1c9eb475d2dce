//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::StateHolder;
use crate::machine::{Machine, MachineConfig};
use crate::table::{Transition, TransitionTable};

/// Builder for constructing machines with a fluent API.
///
/// Unlike [`Machine::register`], which panics, registration problems
/// surface here as [`BuildError`] values.
pub struct MachineBuilder<H: StateHolder, A = ()> {
    name: String,
    config: MachineConfig,
    table: TransitionTable<H, A>,
}

impl<H: StateHolder + 'static, A: 'static> MachineBuilder<H, A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: MachineConfig::default(),
            table: TransitionTable::new(),
        }
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_chain_steps(mut self, limit: usize) -> Self {
        self.config.max_chain_steps = limit;
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder is incomplete or the registration
    /// breaks a table rule.
    pub fn transition(self, builder: TransitionBuilder<H, A>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.add_transition(transition)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<H, A>) -> Result<Self, BuildError> {
        self.table.try_insert(transition)?;
        Ok(self)
    }

    /// Build the machine.
    pub fn build(self) -> Result<Machine<H, A>, BuildError> {
        if self.table.is_empty() {
            return Err(BuildError::NoTransitions(self.name));
        }

        Ok(Machine::from_parts(self.name, self.config, self.table))
    }
}
