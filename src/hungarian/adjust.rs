//! 被覆線が足りないときに行列を調整して新しい0を作る

use crate::error::AssignmentError;
use crate::hungarian::cover::Covering;
use crate::hungarian::matrix::{Cost, WorkingMatrix};
use crate::trace::StepTrace;
use tracing::trace;

/// 被覆されていないセルの最小値。すべて被覆されていればNone。
pub fn min_uncovered(matrix: &WorkingMatrix, covering: &Covering) -> Option<Cost> {
    let dimension = matrix.dimension();
    (0..dimension)
        .filter(|&row| !covering.is_row_covered(row))
        .flat_map(|row| {
            (0..dimension)
                .filter(|&column| !covering.is_column_covered(column))
                .map(move |column| (row, column))
        })
        .map(|(row, column)| matrix.get(row, column))
        .reduce(Cost::min)
}

/// 被覆されていないセルから最小値を引き、二重に被覆されたセルに足す。一本だけで被覆されたセルはそのまま。
///
/// スター付きの0は一本だけで被覆されているので値は変わらない。戻り値は使った最小値。
/// 被覆されていないセルが一つもなければ行列には触らずにエラーを返す。
pub fn adjust(
    matrix: &mut WorkingMatrix,
    covering: &Covering,
    trace: &mut StepTrace,
) -> Result<Cost, AssignmentError> {
    let min = min_uncovered(matrix, covering).ok_or(AssignmentError::NoUncoveredCell {
        lines: covering.line_count(),
        dimension: matrix.dimension(),
    })?;
    trace.action(format!("The smallest uncovered value is {min}."));
    trace!(min, lines = covering.line_count(), "adjusting matrix");

    let dimension = matrix.dimension();
    for row in 0..dimension {
        for column in 0..dimension {
            match (covering.is_row_covered(row), covering.is_column_covered(column)) {
                (false, false) => *matrix.cell_mut(row, column) -= min,
                (true, true) => *matrix.cell_mut(row, column) += min,
                _ => {}
            }
        }
    }

    trace.label("Matrix after adjustment:");
    trace.snapshot(matrix.rows());
    Ok(min)
}
