//! Writing rendered diagrams to disk.
//!
//! Image formats go through the Graphviz `dot` program: the DOT source is
//! written to a uniquely named `<base>.*.gv` temporary file, laid out into
//! `<base>.<ext>`, and the temporary file is removed afterwards unless asked
//! to keep it. Text formats are written directly.

use super::{render_dot, render_graphml};
use crate::error::RenderError;
use crate::export::DiagramRepr;
use crate::Diagram;
use log::{debug, info};
use std::fmt;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

/// Output formats a diagram can be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Dot,
    Json,
    GraphMl,
}

impl OutputFormat {
    /// File extension, also the Graphviz `-T` value for image formats.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "gv",
            OutputFormat::Json => "json",
            OutputFormat::GraphMl => "graphml",
        }
    }

    /// Whether producing this format requires running Graphviz.
    pub fn needs_layout(&self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Svg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "dot" | "gv" => Ok(OutputFormat::Dot),
            "json" => Ok(OutputFormat::Json),
            "graphml" => Ok(OutputFormat::GraphMl),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

/// Writes diagrams to files, invoking Graphviz for image formats.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: String,
    directory: PathBuf,
    cleanup: bool,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphvizRenderer {
    /// Renderer using `dot` from `PATH`, writing to the working directory.
    pub fn new() -> Self {
        Self {
            program: "dot".to_string(),
            directory: PathBuf::from("."),
            cleanup: true,
        }
    }

    /// Use a different Graphviz executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Write files into `directory` instead of the working directory.
    pub fn in_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Keep the intermediate `.gv` file after producing an image.
    pub fn keep_source(mut self, keep: bool) -> Self {
        self.cleanup = !keep;
        self
    }

    /// Render `diagram` to `<directory>/<base>.<ext>` and return that path.
    pub fn render(
        &self,
        diagram: &Diagram,
        base: &str,
        format: OutputFormat,
    ) -> Result<PathBuf, RenderError> {
        let target = self.directory.join(format!("{}.{}", base, format.extension()));
        let text = source_text(diagram, format)?;

        if format.needs_layout() {
            self.layout(&text, base, &target, format)?;
        } else {
            write_file(&target, &text)?;
        }

        info!("Rendered {} ({}) to {}", diagram.name(), format, target.display());
        Ok(target)
    }

    /// Write the DOT source to a temporary file this renderer owns, run
    /// Graphviz on it, then drop or keep it.
    fn layout(
        &self,
        dot: &str,
        base: &str,
        target: &Path,
        format: OutputFormat,
    ) -> Result<(), RenderError> {
        let mut source = tempfile::Builder::new()
            .prefix(&format!("{}.", base))
            .suffix(".gv")
            .tempfile_in(&self.directory)
            .map_err(|e| RenderError::io(&self.directory, e))?;
        source
            .write_all(dot.as_bytes())
            .and_then(|_| source.flush())
            .map_err(|e| RenderError::io(source.path(), e))?;

        self.run_graphviz(source.path(), target, format)?;

        if self.cleanup {
            let path = source.path().to_path_buf();
            source.close().map_err(|e| RenderError::io(path, e))?;
        } else {
            let (_, path) = source.keep().map_err(|e| {
                let path = e.file.path().to_path_buf();
                RenderError::io(path, e.error)
            })?;
            info!("Kept Graphviz source {}", path.display());
        }
        Ok(())
    }

    fn run_graphviz(&self, source: &Path, target: &Path, format: OutputFormat) -> Result<(), RenderError> {
        debug!("Running {} -T{} {}", self.program, format.extension(), source.display());

        let output = Command::new(&self.program)
            .arg(format!("-T{}", format.extension()))
            .arg(source)
            .arg("-o")
            .arg(target)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RenderError::GraphvizNotFound {
                    program: self.program.clone(),
                },
                _ => RenderError::io(source, e),
            })?;

        if !output.status.success() {
            return Err(RenderError::Graphviz {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// The text written for `format`; layout formats are fed DOT.
fn source_text(diagram: &Diagram, format: OutputFormat) -> Result<String, RenderError> {
    Ok(match format {
        OutputFormat::Png | OutputFormat::Svg | OutputFormat::Dot => render_dot(diagram),
        OutputFormat::GraphMl => render_graphml(diagram),
        OutputFormat::Json => DiagramRepr::from(diagram).to_json()?,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(path, contents).map_err(|e| RenderError::io(path, e))
}
