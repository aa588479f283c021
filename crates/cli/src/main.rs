//! Convert a machine definition to the other machine kind and render it.
//!
//! Usage: mealy-moore <definition.json> [output-base] [format]
//!
//! A Mealy definition is rendered as its Moore equivalent and vice versa.
//! `format` is one of png (default), svg, dot, json or graphml. Set
//! `RUST_LOG=debug` to see every synthesized state.

use mealy_moore_graph::{Diagram, GraphvizRenderer, OutputFormat};
use mealy_moore_machine::MachineDefinition;
use std::env;
use std::error::Error;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <definition.json> [output-base] [format]", program_name(&args));
        eprintln!("  Converts a Mealy machine to Moore (or Moore to Mealy) and renders it");
        eprintln!("  format: png (default), svg, dot, json, graphml");
        process::exit(1);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str), args.get(3).map(String::as_str)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// `argv[0]`, which a caller may leave out entirely.
fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("mealy-moore")
}

fn run(path: &str, base: Option<&str>, format: Option<&str>) -> Result<(), Box<dyn Error>> {
    let format = match format {
        Some(f) => f.parse::<OutputFormat>()?,
        None => OutputFormat::default(),
    };

    let definition = MachineDefinition::from_path(path)?;
    log::info!("Loaded {} machine from {}", definition.kind(), path);

    let diagram = match &definition {
        MachineDefinition::Mealy(mealy) => {
            let moore = mealy.to_moore()?;
            log::info!(
                "Converted {} Mealy states into {} Moore states",
                mealy.states.len(),
                moore.states.len()
            );
            Diagram::from_moore(&moore)
        }
        MachineDefinition::Moore(moore) => Diagram::from_mealy(&moore.to_mealy()?),
    };

    let base = base.unwrap_or(diagram.name());
    let output = GraphvizRenderer::new().render(&diagram, base, format)?;
    let kind = match definition {
        MachineDefinition::Mealy(_) => "Moore",
        MachineDefinition::Moore(_) => "Mealy",
    };
    println!("{} machine diagram saved as {}", kind, output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_with_empty_argv() {
        assert_eq!(program_name(&[]), "mealy-moore");
        assert_eq!(program_name(&["/usr/bin/mm".to_string()]), "/usr/bin/mm");
    }
}
