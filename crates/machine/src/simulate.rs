//! Step-by-step execution of a machine over an input word.
//!
//! Traces let two machines be compared by behaviour rather than by structure:
//! a Mealy machine and its Moore conversion produce the same
//! [`Trace::outputs`] for every input word.

use crate::definition::{MealyMachine, MooreMachine};
use crate::error::ConversionError;
use serde::{Deserialize, Serialize};

/// One consumed input symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub state: String,
    pub symbol: String,
    pub next: String,
    /// Output emitted by the transition (Mealy) or by the entered state (Moore)
    pub output: String,
}

/// The full run of a machine over one input word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub initial_state: String,
    /// Output of the initial state before any input is read. Always `None`
    /// for Mealy machines.
    pub initial_output: Option<String>,
    pub steps: Vec<Step>,
}

impl Trace {
    fn new(initial_state: &str, initial_output: Option<String>) -> Self {
        Self {
            initial_state: initial_state.to_string(),
            initial_output,
            steps: Vec::new(),
        }
    }

    /// Outputs emitted on each step, in order.
    pub fn outputs(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.output.as_str()).collect()
    }

    /// The state the machine is in after the last step.
    pub fn final_state(&self) -> &str {
        self.steps
            .last()
            .map(|s| s.next.as_str())
            .unwrap_or(&self.initial_state)
    }
}

impl MealyMachine {
    /// Run the machine from its initial state over `input`.
    pub fn run<S: AsRef<str>>(&self, input: &[S]) -> Result<Trace, ConversionError> {
        let mut trace = Trace::new(&self.initial_state, None);
        let mut state = self.initial_state.as_str();

        for symbol in input {
            let symbol = symbol.as_ref();
            let t = self.transition(state, symbol)?;
            trace.steps.push(Step {
                state: state.to_string(),
                symbol: symbol.to_string(),
                next: t.next.clone(),
                output: t.output.clone(),
            });
            state = &t.next;
        }

        Ok(trace)
    }
}

impl MooreMachine {
    /// Run the machine from its initial state over `input`.
    pub fn run<S: AsRef<str>>(&self, input: &[S]) -> Result<Trace, ConversionError> {
        let initial_output = self.output(&self.initial_state)?.to_string();
        let mut trace = Trace::new(&self.initial_state, Some(initial_output));
        let mut state = self.initial_state.as_str();

        for symbol in input {
            let symbol = symbol.as_ref();
            let next = self.transition(state, symbol)?;
            trace.steps.push(Step {
                state: state.to_string(),
                symbol: symbol.to_string(),
                next: next.to_string(),
                output: self.output(next)?.to_string(),
            });
            state = next;
        }

        Ok(trace)
    }
}
