//! スター付きの0から最終的な割当と目的関数値を取り出す

use crate::config::Objective;
use crate::error::AssignmentError;
use crate::hungarian::cover::StarredZeros;
use crate::hungarian::matrix::{Cost, CostMatrix};
use crate::trace::StepTrace;
use serde::Serialize;

/// 割り当てられた行と列の組
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignedPair {
    pub row: usize,
    pub column: usize,
    /// ダミーの行や列を含まない、元の行列の範囲内の組ならtrue
    pub within_original_bounds: bool,
}

/// 行番号順の割当と、元の行列で数えた目的関数値を返す
///
/// ダミーの行や列を含む組も返すが、目的関数値には含めない。
pub fn extract(
    stars: &StarredZeros,
    original: &CostMatrix,
    objective: Objective,
    trace: &mut StepTrace,
) -> Result<(Vec<AssignedPair>, Cost), AssignmentError> {
    let mut pairs = Vec::with_capacity(stars.dimension());
    let mut value: Cost = 0.0;
    for (row, column) in stars.pairs() {
        let original_value = original.get(row, column);
        if let Some(v) = original_value {
            value += v;
        }
        pairs.push(AssignedPair {
            row,
            column,
            within_original_bounds: original_value.is_some(),
        });
    }

    if pairs.len() != stars.dimension() {
        return Err(AssignmentError::IncompleteAssignment {
            assigned: pairs.len(),
            dimension: stars.dimension(),
        });
    }

    trace.label("--- Optimal final assignment ---");
    for pair in pairs.iter() {
        let suffix = if pair.within_original_bounds {
            ""
        } else {
            " (dummy)"
        };
        trace.action(format!(
            "Row {} -> Column {}{suffix}",
            pair.row + 1,
            pair.column + 1
        ));
    }
    let label = match objective {
        Objective::Minimize => "Minimum cost",
        Objective::Maximize => "Maximum profit",
    };
    trace.action(format!("{label}: {value}"));

    Ok((pairs, value))
}
