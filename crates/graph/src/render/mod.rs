//! Diagram rendering.
//!
//! Text renderers return a `String`:
//! - Graphviz DOT for layout tools
//! - GraphML for graph editors (yEd, Gephi, ...)
//! - ASCII tree for terminal display
//!
//! [`GraphvizRenderer`] writes any of them, or a PNG/SVG image, to disk.

mod ascii;
mod dot;
mod graphml;
mod image;

pub use ascii::render_ascii_tree;
pub use dot::render_dot;
pub use graphml::render_graphml;
pub use image::{GraphvizRenderer, OutputFormat};
