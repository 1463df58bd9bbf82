//! 行の最小値、列の最小値を引いて0を作る

use crate::hungarian::matrix::WorkingMatrix;
use crate::trace::StepTrace;

/// 各行からその行の最小値を引く
pub fn reduce_rows(matrix: &mut WorkingMatrix, trace: &mut StepTrace) {
    trace.section("Step 1: Row reduction");
    for row in 0..matrix.dimension() {
        let min = matrix.row_min(row);
        if min == 0.0 {
            continue;
        }
        trace.action(format!("Subtract {min} from row {}", row + 1));
        for value in matrix.row_mut(row) {
            *value -= min;
        }
    }
    trace.section("Matrix after row reduction:");
    trace.snapshot(matrix.rows());
}

/// 各列からその列の最小値を引く
pub fn reduce_columns(matrix: &mut WorkingMatrix, trace: &mut StepTrace) {
    trace.section("Step 2: Column reduction");
    for column in 0..matrix.dimension() {
        let min = matrix.column_min(column);
        if min == 0.0 {
            continue;
        }
        trace.action(format!("Subtract {min} from column {}", column + 1));
        for row in 0..matrix.dimension() {
            *matrix.cell_mut(row, column) -= min;
        }
    }
    trace.section("Matrix after column reduction:");
    trace.snapshot(matrix.rows());
}

/// 行を先、列を後に削減する。順番を入れ替えると最初の被覆探索で使える0が変わる。
pub fn reduce(matrix: &mut WorkingMatrix, trace: &mut StepTrace) {
    reduce_rows(matrix, trace);
    reduce_columns(matrix, trace);
}
