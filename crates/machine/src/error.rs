//! Error types for loading and converting machine definitions.

use thiserror::Error;

/// Errors raised while converting or simulating a machine.
///
/// Every variant is fatal: a definition that triggers one is inconsistent and
/// nothing downstream (rendering, simulation) should run on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A (state, symbol) pair has no entry in the transition table
    #[error("No transition defined for state '{state}' on input '{symbol}'")]
    MissingTransition { state: String, symbol: String },

    /// A Moore destination state has no registered output
    #[error("No output registered for Moore state '{state}'")]
    MissingOutput { state: String },

    /// The Mealy initial state has no Moore counterpart
    #[error("No Moore state corresponds to the Mealy initial state '{state}'")]
    UnmappedInitialState { state: String },

    /// A state no transition enters has no output to build a Moore state from
    #[error("No Moore state corresponds to Mealy state '{state}': it is never entered and has no entry in state_outputs")]
    UnmappedState { state: String },
}

impl ConversionError {
    pub(crate) fn missing_transition(state: &str, symbol: &str) -> Self {
        ConversionError::MissingTransition {
            state: state.to_string(),
            symbol: symbol.to_string(),
        }
    }

    pub(crate) fn missing_output(state: &str) -> Self {
        ConversionError::MissingOutput {
            state: state.to_string(),
        }
    }
}

/// Errors raised while reading a definition from disk or text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read definition '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid machine definition: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConversionError::missing_transition("A", "0");
        assert_eq!(err.to_string(), "No transition defined for state 'A' on input '0'");

        let err = ConversionError::UnmappedInitialState {
            state: "S".to_string(),
        };
        assert!(err.to_string().contains("Mealy initial state 'S'"));

        let err = ConversionError::UnmappedState {
            state: "D".to_string(),
        };
        assert!(err.to_string().contains("Mealy state 'D'"));
    }
}
