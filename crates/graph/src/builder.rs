//! Drawing machines into a [`GraphSink`].
//!
//! All nodes are added before any edge, and both variants lay out left to
//! right.

use crate::sink::{GraphSink, RankDir};
use crate::Diagram;
use mealy_moore_machine::{MealyMachine, MooreMachine};

/// Default name and output base of a Moore diagram.
pub const MOORE_DIAGRAM_NAME: &str = "moore_machine";

/// Default name and output base of a Mealy diagram.
pub const MEALY_DIAGRAM_NAME: &str = "mealy_machine";

/// Draw a Moore machine: nodes are labeled `"{state}\n{output}"`, edges with
/// the input symbol.
pub fn draw_moore<S: GraphSink + ?Sized>(moore: &MooreMachine, sink: &mut S) {
    sink.set_rank_dir(RankDir::LeftToRight);

    for state in &moore.states {
        let label = match moore.outputs.get(state) {
            Some(output) => format!("{}\n{}", state, output),
            None => state.clone(),
        };
        sink.add_node(state, &label);
    }
    sink.mark_initial(&moore.initial_state);

    for (state, row) in &moore.transitions {
        for (symbol, next) in row {
            sink.add_edge(state, next, symbol);
        }
    }
}

/// Draw a Mealy machine: nodes are bare state ids, edges are labeled
/// `"{symbol}/{output}"`.
pub fn draw_mealy<S: GraphSink + ?Sized>(mealy: &MealyMachine, sink: &mut S) {
    sink.set_rank_dir(RankDir::LeftToRight);

    for state in &mealy.states {
        sink.add_node(state, state);
    }
    sink.mark_initial(&mealy.initial_state);

    for (state, row) in &mealy.transitions {
        for (symbol, t) in row {
            sink.add_edge(state, &t.next, &format!("{}/{}", symbol, t.output));
        }
    }
}

impl Diagram {
    /// Build the diagram of a Moore machine, named [`MOORE_DIAGRAM_NAME`].
    pub fn from_moore(moore: &MooreMachine) -> Self {
        let mut diagram = Diagram::new(MOORE_DIAGRAM_NAME);
        draw_moore(moore, &mut diagram);
        diagram
    }

    /// Build the diagram of a Mealy machine, named [`MEALY_DIAGRAM_NAME`].
    pub fn from_mealy(mealy: &MealyMachine) -> Self {
        let mut diagram = Diagram::new(MEALY_DIAGRAM_NAME);
        draw_mealy(mealy, &mut diagram);
        diagram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records every call, in order.
    #[derive(Default)]
    struct CallLog(Vec<String>);

    impl GraphSink for CallLog {
        fn add_node(&mut self, id: &str, label: &str) {
            self.0.push(format!("node {} {:?}", id, label));
        }

        fn add_edge(&mut self, source: &str, target: &str, label: &str) {
            self.0.push(format!("edge {} -> {} {:?}", source, target, label));
        }

        fn set_rank_dir(&mut self, dir: RankDir) {
            self.0.push(format!("rankdir {}", dir));
        }
    }

    fn sample_moore() -> MooreMachine {
        MooreMachine::new("A_x")
            .with_output("A_x", "x")
            .with_output("B_y", "y")
            .with_transition("A_x", "0", "B_y")
            .with_transition("B_y", "0", "A_x")
    }

    #[test]
    fn test_moore_variant_calls() {
        let mut log = CallLog::default();
        draw_moore(&sample_moore(), &mut log);

        assert_eq!(
            log.0,
            vec![
                "rankdir LR",
                "node A_x \"A_x\\nx\"",
                "node B_y \"B_y\\ny\"",
                "edge A_x -> B_y \"0\"",
                "edge B_y -> A_x \"0\"",
            ]
        );
    }

    #[test]
    fn test_mealy_variant_calls() {
        let mealy = MealyMachine::new("A")
            .with_transition("A", "0", "B", "y")
            .with_transition("B", "1", "A", "x");

        let mut log = CallLog::default();
        draw_mealy(&mealy, &mut log);

        assert_eq!(
            log.0,
            vec![
                "rankdir LR",
                "node A \"A\"",
                "node B \"B\"",
                "edge A -> B \"0/y\"",
                "edge B -> A \"1/x\"",
            ]
        );
    }

    #[test]
    fn test_from_moore_marks_initial() {
        let diagram = Diagram::from_moore(&sample_moore());

        assert_eq!(diagram.name(), MOORE_DIAGRAM_NAME);
        assert_eq!(diagram.rank_dir(), RankDir::LeftToRight);
        assert_eq!(diagram.node_count(), 2);
        assert_eq!(diagram.edge_count(), 2);
        assert!(diagram.node("A_x").unwrap().initial);
        assert_eq!(diagram.node("B_y").unwrap().label, "B_y\ny");
    }
}
