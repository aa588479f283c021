//! Machine definitions.
//!
//! Both machine kinds are plain serde values so a definition can come from a
//! configuration file as easily as from code. Maps are [`IndexMap`]s: the
//! declaration order of states, symbols and transitions is kept, which is what
//! makes conversion output deterministic.

use crate::error::{ConversionError, LoadError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single Mealy transition: the destination state and the emitted output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TransitionRepr")]
pub struct MealyTransition {
    pub next: String,
    pub output: String,
}

impl MealyTransition {
    pub fn new(next: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            next: next.into(),
            output: output.into(),
        }
    }
}

/// Accepted spellings of a Mealy transition: `{"next": .., "output": ..}` or
/// the pair form `["B", "y"]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TransitionRepr {
    Pair(String, String),
    Named { next: String, output: String },
}

impl From<TransitionRepr> for MealyTransition {
    fn from(repr: TransitionRepr) -> Self {
        match repr {
            TransitionRepr::Pair(next, output) | TransitionRepr::Named { next, output } => {
                MealyTransition { next, output }
            }
        }
    }
}

/// A Mealy machine: output is produced on transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealyMachine {
    pub states: Vec<String>,
    pub input_symbols: Vec<String>,
    pub transitions: IndexMap<String, IndexMap<String, MealyTransition>>,
    pub initial_state: String,
    /// Output attached to the initial state when it is converted to a Moore
    /// state. Needed when the initial state is never a transition target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_output: Option<String>,
    /// Outputs for states that no transition enters, keyed by state. Such a
    /// state still gets a Moore state of its own when one is listed here.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub state_outputs: IndexMap<String, String>,
}

impl MealyMachine {
    /// Create an empty machine with the given initial state.
    pub fn new(initial_state: impl Into<String>) -> Self {
        let initial_state = initial_state.into();
        Self {
            states: vec![initial_state.clone()],
            input_symbols: Vec::new(),
            transitions: IndexMap::new(),
            initial_state,
            initial_output: None,
            state_outputs: IndexMap::new(),
        }
    }

    /// Set the output supplied alongside the initial state.
    pub fn with_initial_output(mut self, output: impl Into<String>) -> Self {
        self.initial_output = Some(output.into());
        self
    }

    /// Set the output a never-entered state takes on in a Moore machine,
    /// declaring the state if it is new.
    pub fn with_state_output(mut self, state: &str, output: &str) -> Self {
        declare(&mut self.states, state);
        self.state_outputs.insert(state.to_string(), output.to_string());
        self
    }

    /// Output to use for `state` when no transition produces one.
    pub fn output_hint(&self, state: &str) -> Option<&str> {
        if state == self.initial_state {
            if let Some(output) = &self.initial_output {
                return Some(output.as_str());
            }
        }
        self.state_outputs.get(state).map(String::as_str)
    }

    /// Add a transition, declaring its states and symbol if they are new.
    pub fn with_transition(
        mut self,
        state: &str,
        symbol: &str,
        next: &str,
        output: &str,
    ) -> Self {
        declare(&mut self.states, state);
        declare(&mut self.states, next);
        declare(&mut self.input_symbols, symbol);
        self.transitions
            .entry(state.to_string())
            .or_default()
            .insert(symbol.to_string(), MealyTransition::new(next, output));
        self
    }

    /// Look up the transition taken from `state` on `symbol`.
    pub fn transition(&self, state: &str, symbol: &str) -> Result<&MealyTransition, ConversionError> {
        self.transitions
            .get(state)
            .and_then(|row| row.get(symbol))
            .ok_or_else(|| ConversionError::missing_transition(state, symbol))
    }

    /// Number of (state, symbol) entries in the transition table.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(IndexMap::len).sum()
    }
}

/// A Moore machine: output is attached to states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MooreMachine {
    pub states: Vec<String>,
    pub input_symbols: Vec<String>,
    pub transitions: IndexMap<String, IndexMap<String, String>>,
    #[serde(alias = "output")]
    pub outputs: IndexMap<String, String>,
    pub initial_state: String,
}

impl MooreMachine {
    /// Create an empty machine with the given initial state.
    pub fn new(initial_state: impl Into<String>) -> Self {
        let initial_state = initial_state.into();
        Self {
            states: vec![initial_state.clone()],
            input_symbols: Vec::new(),
            transitions: IndexMap::new(),
            outputs: IndexMap::new(),
            initial_state,
        }
    }

    /// Register the output of a state, declaring it if it is new.
    pub fn with_output(mut self, state: &str, output: &str) -> Self {
        declare(&mut self.states, state);
        self.outputs.insert(state.to_string(), output.to_string());
        self
    }

    /// Add a transition, declaring its states and symbol if they are new.
    pub fn with_transition(mut self, state: &str, symbol: &str, next: &str) -> Self {
        declare(&mut self.states, state);
        declare(&mut self.states, next);
        declare(&mut self.input_symbols, symbol);
        self.transitions
            .entry(state.to_string())
            .or_default()
            .insert(symbol.to_string(), next.to_string());
        self
    }

    /// Look up the destination of `state` on `symbol`.
    pub fn transition(&self, state: &str, symbol: &str) -> Result<&str, ConversionError> {
        self.transitions
            .get(state)
            .and_then(|row| row.get(symbol))
            .map(String::as_str)
            .ok_or_else(|| ConversionError::missing_transition(state, symbol))
    }

    /// Look up the output of `state`.
    pub fn output(&self, state: &str) -> Result<&str, ConversionError> {
        self.outputs
            .get(state)
            .map(String::as_str)
            .ok_or_else(|| ConversionError::missing_output(state))
    }

    /// Number of (state, symbol) entries in the transition table.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(IndexMap::len).sum()
    }
}

fn declare(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|s| s == item) {
        list.push(item.to_string());
    }
}

/// A machine definition as read from configuration, tagged by `"kind"`.
///
/// ```json
/// { "kind": "moore", "states": ["A"], "input_symbols": ["0"],
///   "transitions": { "A": { "0": "A" } }, "outputs": { "A": "x" },
///   "initial_state": "A" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MachineDefinition {
    Mealy(MealyMachine),
    Moore(MooreMachine),
}

impl MachineDefinition {
    /// Parse a definition from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a definition file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MachineDefinition::Mealy(_) => "mealy",
            MachineDefinition::Moore(_) => "moore",
        }
    }
}

impl From<MealyMachine> for MachineDefinition {
    fn from(machine: MealyMachine) -> Self {
        MachineDefinition::Mealy(machine)
    }
}

impl From<MooreMachine> for MachineDefinition {
    fn from(machine: MooreMachine) -> Self {
        MachineDefinition::Moore(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_declares_states_in_order() {
        let mealy = MealyMachine::new("A")
            .with_transition("A", "0", "B", "y")
            .with_transition("B", "1", "C", "z");

        assert_eq!(mealy.states, vec!["A", "B", "C"]);
        assert_eq!(mealy.input_symbols, vec!["0", "1"]);
        assert_eq!(mealy.transition_count(), 2);
    }

    #[test]
    fn test_lookup_failures() {
        let moore = MooreMachine::new("A")
            .with_output("A", "x")
            .with_transition("A", "0", "B");

        assert_eq!(moore.transition("A", "0"), Ok("B"));
        assert_eq!(
            moore.transition("A", "1"),
            Err(ConversionError::MissingTransition {
                state: "A".into(),
                symbol: "1".into()
            })
        );
        assert_eq!(
            moore.output("B"),
            Err(ConversionError::MissingOutput { state: "B".into() })
        );
    }

    #[test]
    fn test_parse_mealy_pair_transitions() {
        let source = r#"{
            "kind": "mealy",
            "states": ["A", "B"],
            "input_symbols": ["0"],
            "transitions": {
                "A": { "0": ["B", "y"] },
                "B": { "0": { "next": "A", "output": "x" } }
            },
            "initial_state": "A"
        }"#;

        let MachineDefinition::Mealy(mealy) = MachineDefinition::from_json_str(source).unwrap() else {
            panic!("expected a Mealy definition");
        };
        assert_eq!(mealy.transition("A", "0").unwrap(), &MealyTransition::new("B", "y"));
        assert_eq!(mealy.transition("B", "0").unwrap(), &MealyTransition::new("A", "x"));
        assert_eq!(mealy.initial_output, None);
        assert!(mealy.state_outputs.is_empty());
    }

    #[test]
    fn test_output_hint_prefers_initial_output() {
        let mealy = MealyMachine::new("S")
            .with_initial_output("-")
            .with_state_output("S", "s")
            .with_state_output("D", "w")
            .with_transition("S", "0", "S", "x");

        assert_eq!(mealy.states, vec!["S", "D"]);
        assert_eq!(mealy.output_hint("S"), Some("-"));
        assert_eq!(mealy.output_hint("D"), Some("w"));
        assert_eq!(mealy.output_hint("X"), None);

        let json = serde_json::to_string(&MachineDefinition::from(mealy.clone())).unwrap();
        assert!(json.contains(r#""state_outputs":{"S":"s","D":"w"}"#));
        assert_eq!(
            MachineDefinition::from_json_str(&json).unwrap(),
            MachineDefinition::Mealy(mealy)
        );
    }

    #[test]
    fn test_parse_moore_accepts_output_alias() {
        let source = r#"{
            "kind": "moore",
            "states": ["A"],
            "input_symbols": ["0"],
            "transitions": { "A": { "0": "A" } },
            "output": { "A": "x" },
            "initial_state": "A"
        }"#;

        let def = MachineDefinition::from_json_str(source).unwrap();
        assert_eq!(def.kind(), "moore");
        let MachineDefinition::Moore(moore) = def else {
            panic!("expected a Moore definition");
        };
        assert_eq!(moore.output("A"), Ok("x"));
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = MachineDefinition::from_json_str(r#"{"kind": "turing"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
