//! End-to-end: load a definition, convert it, write the diagram.

use mealy_moore::graph::{Diagram, GraphvizRenderer, OutputFormat};
use mealy_moore::MachineDefinition;
use pretty_assertions::assert_eq;

const MEALY_SOURCE: &str = r#"{
    "kind": "mealy",
    "states": ["A", "B", "C"],
    "input_symbols": ["0", "1"],
    "transitions": {
        "A": { "0": ["B", "y"], "1": ["C", "z"] },
        "B": { "0": ["A", "x"], "1": ["C", "z"] },
        "C": { "0": ["C", "z"], "1": ["A", "x"] }
    },
    "initial_state": "A"
}"#;

#[test]
fn mealy_definition_to_moore_dot_file() {
    let MachineDefinition::Mealy(mealy) = MachineDefinition::from_json_str(MEALY_SOURCE).unwrap() else {
        panic!("expected a Mealy definition");
    };
    let moore = mealy.to_moore().unwrap();
    let diagram = Diagram::from_moore(&moore);

    let dir = tempfile::tempdir().unwrap();
    let path = GraphvizRenderer::new()
        .in_directory(dir.path())
        .render(&diagram, diagram.name(), OutputFormat::Dot)
        .unwrap();

    assert_eq!(path.file_name().unwrap(), "moore_machine.gv");
    let dot = std::fs::read_to_string(path).unwrap();
    assert!(dot.contains(r#""A_x" [label="A_x\nx"];"#));
    assert!(dot.contains(r#""__start__" -> "A_x";"#));
}

#[test]
fn inconsistent_definition_fails_before_rendering() {
    let source = MEALY_SOURCE.replace(r#", "1": ["A", "x"] }"#, " }");
    let MachineDefinition::Mealy(mealy) = MachineDefinition::from_json_str(&source).unwrap() else {
        panic!("expected a Mealy definition");
    };

    let err = mealy.to_moore().unwrap_err();
    assert_eq!(
        err.to_string(),
        "No transition defined for state 'C' on input '1'"
    );
}
