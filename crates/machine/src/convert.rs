//! Conversion between Mealy and Moore machines.
//!
//! Mealy → Moore splits every original state into one Moore state per
//! (destination, output) pair that reaches it; states nothing enters take
//! their output from `initial_output` or `state_outputs`. Moore → Mealy is a
//! direct rewrite: each transition emits the output of its destination.

use crate::definition::{MealyMachine, MealyTransition, MooreMachine};
use crate::error::ConversionError;
use indexmap::IndexMap;
use log::debug;
use std::collections::HashSet;

/// Convert a Mealy machine into an equivalent Moore machine.
///
/// Moore state ids are `"{destination}_{output}"`. Every Moore state derived
/// from an original state receives that state's outgoing transitions, so the
/// result is total over its own states whenever the input is total.
///
/// Every declared state maps to at least one Moore state. A state that no
/// transition enters needs an output hint ([`MealyMachine::output_hint`]),
/// otherwise conversion fails with [`ConversionError::UnmappedState`].
pub fn mealy_to_moore(mealy: &MealyMachine) -> Result<MooreMachine, ConversionError> {
    MooreSynthesizer::new(mealy).build()
}

/// Convert a Moore machine into an equivalent Mealy machine.
///
/// States, symbols and the initial state carry over unchanged. The output of
/// the Moore initial state, when registered, becomes `initial_output`, and
/// the outputs of other states no transition enters go to `state_outputs`,
/// so that converting back yields one Moore state per original state.
pub fn moore_to_mealy(moore: &MooreMachine) -> Result<MealyMachine, ConversionError> {
    let mut transitions = IndexMap::with_capacity(moore.states.len());
    let mut entered: HashSet<&str> = HashSet::new();

    for state in &moore.states {
        let mut row = IndexMap::with_capacity(moore.input_symbols.len());
        for symbol in &moore.input_symbols {
            let next = moore.transition(state, symbol)?;
            entered.insert(next);
            // keyed by destination, never by source
            let output = moore.output(next)?;
            row.insert(symbol.clone(), MealyTransition::new(next, output));
        }
        transitions.insert(state.clone(), row);
    }

    let mut state_outputs = IndexMap::new();
    for state in &moore.states {
        if *state == moore.initial_state || entered.contains(state.as_str()) {
            continue;
        }
        if let Some(output) = moore.outputs.get(state) {
            state_outputs.insert(state.clone(), output.clone());
        }
    }

    Ok(MealyMachine {
        states: moore.states.clone(),
        input_symbols: moore.input_symbols.clone(),
        transitions,
        initial_state: moore.initial_state.clone(),
        initial_output: moore.outputs.get(&moore.initial_state).cloned(),
        state_outputs,
    })
}

impl MealyMachine {
    /// See [`mealy_to_moore`].
    pub fn to_moore(&self) -> Result<MooreMachine, ConversionError> {
        mealy_to_moore(self)
    }
}

impl MooreMachine {
    /// See [`moore_to_mealy`].
    pub fn to_mealy(&self) -> Result<MealyMachine, ConversionError> {
        moore_to_mealy(self)
    }
}

/// Builds a Moore machine from a Mealy machine in phases: synthesize the
/// (destination, output) states, resolve the initial state, give the
/// remaining unentered states a state from their hint, wire the transitions.
struct MooreSynthesizer<'a> {
    mealy: &'a MealyMachine,
    /// (destination, output) → Moore state id
    pairs: IndexMap<(String, String), String>,
    /// Moore state id → output, in synthesis order
    outputs: IndexMap<String, String>,
    /// Original state → Moore ids derived from it, first one is the
    /// representative
    derived: IndexMap<String, Vec<String>>,
}

impl<'a> MooreSynthesizer<'a> {
    fn new(mealy: &'a MealyMachine) -> Self {
        Self {
            mealy,
            pairs: IndexMap::new(),
            outputs: IndexMap::new(),
            derived: IndexMap::new(),
        }
    }

    fn build(mut self) -> Result<MooreMachine, ConversionError> {
        let mealy = self.mealy;

        // Phase 1: one Moore state per distinct (destination, output)
        for state in &mealy.states {
            for symbol in &mealy.input_symbols {
                let t = mealy.transition(state, symbol)?;
                self.intern(&t.next, &t.output);
            }
        }

        // Phase 2: initial state, before wiring so it receives transitions
        let initial_state = self.resolve_initial()?;

        // Phase 3: states nothing enters
        for state in &mealy.states {
            if self.derived.contains_key(state) {
                continue;
            }
            let output = mealy
                .output_hint(state)
                .ok_or_else(|| ConversionError::UnmappedState {
                    state: state.clone(),
                })?;
            debug!("State '{}' is never entered; using output '{}'", state, output);
            self.intern(state, output);
        }

        // Phase 4: transitions
        let mut transitions: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        for state in &mealy.states {
            let sources = &self.derived[state];
            for symbol in &mealy.input_symbols {
                let t = mealy.transition(state, symbol)?;
                let dest = &self.pairs[&(t.next.clone(), t.output.clone())];
                for source in sources {
                    transitions
                        .entry(source.clone())
                        .or_default()
                        .insert(symbol.clone(), dest.clone());
                }
            }
        }

        Ok(MooreMachine {
            states: self.outputs.keys().cloned().collect(),
            input_symbols: mealy.input_symbols.clone(),
            transitions,
            outputs: self.outputs,
            initial_state,
        })
    }

    fn resolve_initial(&mut self) -> Result<String, ConversionError> {
        let mealy = self.mealy;
        let initial = &mealy.initial_state;

        if let Some(output) = &mealy.initial_output {
            return Ok(self.intern(initial, output));
        }
        if let Some(id) = self.derived.get(initial).and_then(|ids| ids.first()) {
            return Ok(id.clone());
        }

        match mealy.state_outputs.get(initial) {
            Some(output) => Ok(self.intern(initial, output)),
            None => Err(ConversionError::UnmappedInitialState {
                state: initial.clone(),
            }),
        }
    }

    /// Return the Moore id for a pair, creating it on first sight.
    fn intern(&mut self, next: &str, output: &str) -> String {
        let key = (next.to_string(), output.to_string());
        if let Some(id) = self.pairs.get(&key) {
            return id.clone();
        }

        let mut id = format!("{}_{}", next, output);
        // ("A_b", "c") and ("A", "b_c") would otherwise share an id
        while self.outputs.contains_key(&id) {
            id.push('\'');
        }

        debug!("Synthesized Moore state '{}' for ({}, {})", id, next, output);
        self.pairs.insert(key, id.clone());
        self.outputs.insert(id.clone(), output.to_string());
        self.derived.entry(next.to_string()).or_default().push(id.clone());
        id
    }
}
