//! # mealy-moore
//!
//! Conversion between Mealy and Moore machines, and diagrams of both.
//!
//! ## Features
//!
//! | Feature | Crate | Description |
//! |---------|-------|-------------|
//! | `machine` | [`mealy-moore-machine`] | Definitions, conversion, simulation |
//! | `graph`   | [`mealy-moore-graph`]   | Diagram model, DOT/GraphML/ASCII, Graphviz images |
//!
//! `default = ["machine", "graph"]` enables all of the above.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! mealy-moore = "0.1"
//! ```
//!
//! ```rust,ignore
//! use mealy_moore::{MachineDefinition, graph::{Diagram, GraphvizRenderer, OutputFormat}};
//!
//! let MachineDefinition::Mealy(mealy) = MachineDefinition::from_path("machine.json")? else {
//!     unreachable!()
//! };
//! let moore = mealy.to_moore()?;
//! GraphvizRenderer::new().render(&Diagram::from_moore(&moore), "moore_machine", OutputFormat::Png)?;
//! ```

#[cfg(feature = "machine")]
pub use mealy_moore_machine as machine;

#[cfg(feature = "machine")]
pub use mealy_moore_machine::{
    mealy_to_moore, moore_to_mealy, ConversionError, MachineDefinition, MealyMachine,
    MealyTransition, MooreMachine,
};

#[cfg(feature = "graph")]
pub use mealy_moore_graph as graph;
