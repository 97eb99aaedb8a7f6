use crate::game::{Board, Side};
use crate::stats::{StatsInterpreter, StatsSource};
use crate::tree::{StateTree, UniqueStateIndex, error::TreeError, ids::NodeId};

#[derive(Debug, Clone, PartialEq)]
/// One statistically recommended move that perfect play refutes: the
/// position is at worst a tie for the mover, yet the move the statistics
/// rank best leads to a losing position.
pub struct Warning {
    /// The position being moved from.
    pub board: Board,
    /// Whose move it is there.
    pub side: Side,
    /// The recommended field.
    pub field: u8,
    /// The board the recommended move leads to.
    pub child_board: Board,
    /// Minimax value of the current position for the mover (>= 0 here).
    pub position_value: i32,
    /// Minimax value of the resulting position for the mover (< 0 here).
    pub move_value: i32,
    /// The interpreter scalar the recommendation scored.
    pub stat_value: f64,
    /// Sample count behind the recommendation; 0 marks cold data.
    pub samples: u32,
}

#[derive(Debug, Clone, Default)]
/// Summary of a consistency run over the unique-state index.
pub struct DiagnosticReport {
    pub warnings: Vec<Warning>,
}

impl DiagnosticReport {
    /// Total warnings found.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Warnings whose recommended position actually had samples, i.e. the
    /// statistics were wrong with data rather than missing it.
    pub fn with_samples_count(&self) -> usize {
        self.warnings
            .iter()
            .filter(|warning| warning.samples > 0)
            .count()
    }
}

/// Cross-check statistics-driven move choice against minimax for every
/// distinct reachable position.
pub fn diagnose(
    tree: &StateTree,
    index: &UniqueStateIndex,
    source: &impl StatsSource,
    interpreter: &impl StatsInterpreter,
) -> Result<DiagnosticReport, TreeError> {
    let mut report = DiagnosticReport::default();
    for (_, node_id) in index.iter() {
        report
            .warnings
            .extend(check_node(tree, node_id, source, interpreter)?);
    }
    Ok(report)
}

/// Check a single position: rank its children by the interpreter scalar,
/// keep every tied-best move, and flag each one that walks from a
/// non-losing position into a lost one. Terminal positions have no
/// children and produce no warnings.
pub fn check_node(
    tree: &StateTree,
    node_id: NodeId,
    source: &impl StatsSource,
    interpreter: &impl StatsInterpreter,
) -> Result<Vec<Warning>, TreeError> {
    let node = tree.node(node_id)?;
    let side = node.state().turn();
    let value = node.value().ok_or(TreeError::Unevaluated { node_id })?;
    let position_value = value.value_for(side);

    let mut best: Vec<(u8, NodeId, u32)> = Vec::new();
    let mut best_value = f64::MIN;
    for (field, child_id) in node.children() {
        let child = tree.node(child_id)?;
        let statistics = source.statistics(child.board());
        let scalar = interpreter.value(side, &statistics);
        // The scalars come from exact integer counts, so tied candidates
        // compare exactly equal despite the f64.
        if best.is_empty() || scalar > best_value {
            best.clear();
            best.push((field, child_id, statistics.samples()));
            best_value = scalar;
        } else if scalar == best_value {
            best.push((field, child_id, statistics.samples()));
        }
    }

    let mut warnings = Vec::new();
    if position_value >= 0 {
        for (field, child_id, samples) in best {
            let child = tree.node(child_id)?;
            let child_value = child
                .value()
                .ok_or(TreeError::Unevaluated { node_id: child_id })?;
            let move_value = child_value.value_for(side);
            if move_value < 0 {
                warnings.push(Warning {
                    board: *node.board(),
                    side,
                    field,
                    child_board: *child.board(),
                    position_value,
                    move_value,
                    stat_value: best_value,
                    samples,
                });
            }
        }
    }
    Ok(warnings)
}
