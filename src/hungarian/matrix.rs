//! 入力のコスト行列と、ハンガリー法で書き換えていく作業用の正方行列

use crate::config::Objective;
use crate::error::AssignmentError;
use crate::trace::StepTrace;
use serde::{Deserialize, Serialize};

/// 行列の値。整数である必要はないが有限であること。
pub type Cost = f64;

/// 呼び出し元から渡される R x C のコスト（利益）行列
///
/// 作成時に検証を済ませているので、以降は常に R >= 1, C >= 1 で各行の長さがそろっていて、
/// すべての値が有限であることを仮定してよい。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cost>>", into = "Vec<Vec<Cost>>")]
pub struct CostMatrix {
    rows: Vec<Vec<Cost>>,
}

impl CostMatrix {
    pub fn new(rows: Vec<Vec<Cost>>) -> Result<Self, AssignmentError> {
        let first = rows.first().ok_or(AssignmentError::EmptyMatrix)?;
        let expected = first.len();
        if expected == 0 {
            return Err(AssignmentError::NoColumns);
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(AssignmentError::RaggedRow {
                    row: row_index,
                    expected,
                    found: row.len(),
                });
            }
            if let Some(column_index) = row.iter().position(|value| !value.is_finite()) {
                return Err(AssignmentError::NonFiniteValue {
                    row: row_index,
                    column: column_index,
                });
            }
        }

        let matrix = Self { rows };
        let (min, max) = (matrix.min_value(), matrix.max_value());
        // 機会費用への変換、削減と調整、合計で溢れないように、幅と絶対値の次元倍まで有限であることを求める
        let scale = matrix.dimension() as Cost;
        if !((max - min) * scale).is_finite() || !(max.abs().max(min.abs()) * scale).is_finite() {
            return Err(AssignmentError::ValueRangeOverflow { min, max });
        }
        Ok(matrix)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// 正方化したときの一辺の長さ
    pub fn dimension(&self) -> usize {
        self.row_count().max(self.column_count())
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Cost> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn rows(&self) -> &[Vec<Cost>] {
        &self.rows
    }

    pub fn min_value(&self) -> Cost {
        self.rows
            .iter()
            .flatten()
            .copied()
            .fold(Cost::INFINITY, Cost::min)
    }

    pub fn max_value(&self) -> Cost {
        self.rows
            .iter()
            .flatten()
            .copied()
            .fold(Cost::NEG_INFINITY, Cost::max)
    }
}

impl TryFrom<Vec<Vec<Cost>>> for CostMatrix {
    type Error = AssignmentError;

    fn try_from(rows: Vec<Vec<Cost>>) -> Result<Self, Self::Error> {
        CostMatrix::new(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<Cost>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.rows
    }
}

/// 一回の求解の間だけ使う N x N の作業用行列
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingMatrix {
    cells: Vec<Vec<Cost>>,
}

impl WorkingMatrix {
    /// 正方行列をそのまま作業用として受け取る
    pub(crate) fn from_square(cells: Vec<Vec<Cost>>) -> Self {
        debug_assert!(cells.iter().all(|row| row.len() == cells.len()));
        Self { cells }
    }

    pub fn dimension(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<Cost>] {
        &self.cells
    }

    pub fn get(&self, row: usize, column: usize) -> Cost {
        self.cells[row][column]
    }

    pub fn is_zero(&self, row: usize, column: usize) -> bool {
        self.cells[row][column] == 0.0
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Cost] {
        &mut self.cells[row]
    }

    pub(crate) fn cell_mut(&mut self, row: usize, column: usize) -> &mut Cost {
        &mut self.cells[row][column]
    }

    pub fn row_min(&self, row: usize) -> Cost {
        self.cells[row].iter().copied().fold(Cost::INFINITY, Cost::min)
    }

    pub fn column_min(&self, column: usize) -> Cost {
        self.cells
            .iter()
            .map(|row| row[column])
            .fold(Cost::INFINITY, Cost::min)
    }
}

/// 入力行列を最小化問題の正方行列に変換する
///
/// 最大化のときは全体の最大値Vから各値を引いた機会費用行列にしてから、0で埋めて正方化する。
/// 正方化は変換の後なので、追加したダミーのセルは常に0になる（Vにはならない）。
pub fn normalize(matrix: &CostMatrix, objective: Objective, trace: &mut StepTrace) -> WorkingMatrix {
    let mut cells = matrix.rows().to_vec();

    if objective.is_maximize() {
        let max_value = matrix.max_value();
        trace.section("Converting matrix for maximization...");
        trace.action(format!("Maximum value in matrix: {max_value}."));
        for value in cells.iter_mut().flatten() {
            *value = max_value - *value;
        }
        trace.label("Opportunity-cost matrix:");
        trace.snapshot(&cells);
    }

    let dimension = matrix.dimension();
    if matrix.row_count() != matrix.column_count() {
        for row in cells.iter_mut() {
            row.resize(dimension, 0.0);
        }
        cells.resize_with(dimension, || vec![0.0; dimension]);
        trace.section("Matrix with dummy rows/columns added:");
        trace.snapshot(&cells);
    }

    WorkingMatrix::from_square(cells)
}
