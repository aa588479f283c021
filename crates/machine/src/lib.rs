//! # mealy-moore-machine
//!
//! Mealy and Moore machine definitions and the conversions between them.
//!
//! ## Features
//!
//! - **Definitions**: [`MealyMachine`] and [`MooreMachine`] as serde values,
//!   loadable from JSON through [`MachineDefinition`]
//! - **Mealy → Moore**: one Moore state per distinct (destination, output)
//!   pair, see [`mealy_to_moore`]
//! - **Moore → Mealy**: each transition emits its destination's output, see
//!   [`moore_to_mealy`]
//! - **Simulation**: [`Trace`]s for comparing machines by behaviour
//!
//! ## Example
//!
//! ```rust
//! use mealy_moore_machine::MealyMachine;
//!
//! let mealy = MealyMachine::new("A")
//!     .with_transition("A", "0", "B", "y")
//!     .with_transition("B", "0", "A", "x");
//!
//! let moore = mealy.to_moore().unwrap();
//! assert_eq!(moore.initial_state, "A_x");
//! assert_eq!(moore.output("B_y").unwrap(), "y");
//!
//! let back = moore.to_mealy().unwrap();
//! assert_eq!(
//!     back.run(&["0", "0"]).unwrap().outputs(),
//!     mealy.run(&["0", "0"]).unwrap().outputs(),
//! );
//! ```

mod convert;
mod definition;
mod error;
mod simulate;

pub use convert::{mealy_to_moore, moore_to_mealy};
pub use definition::{MachineDefinition, MealyMachine, MealyTransition, MooreMachine};
pub use error::{ConversionError, LoadError};
pub use simulate::{Step, Trace};
