//! ハンガリー法（Kuhn-Munkres法）で割当問題を解く。
//! 行列の正方化 → 行と列の削減 → 被覆線が次元に達するまで被覆探索と調整を繰り返す → 割当の取り出し、の順に進める。

// 実装の参考先
// https://en.wikipedia.org/wiki/Hungarian_algorithm

pub mod adjust;
pub mod cover;
pub mod extract;
pub mod matrix;
pub mod reduce;

use crate::config::{Objective, SolverConfig};
use crate::error::AssignmentError;
use crate::trace::{SEPARATOR, StepTrace};
use cover::StarredZeros;
use extract::AssignedPair;
use matrix::{Cost, CostMatrix};
use serde::Serialize;
use tracing::debug;

/// 求解結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub objective: Objective,
    /// 正方化した後の一辺の長さ
    pub dimension: usize,
    /// 行番号順の割当。ダミーの行や列を含む組も含む。
    pub pairs: Vec<AssignedPair>,
    /// 元の行列の範囲内の組だけで数えた合計
    pub value: Cost,
    pub trace: StepTrace,
}

impl Solution {
    /// 元の行列の範囲内の組だけを返す
    pub fn real_pairs(&self) -> impl Iterator<Item = &AssignedPair> {
        self.pairs.iter().filter(|pair| pair.within_original_bounds)
    }

    /// rowに割り当てられた列
    pub fn column_of(&self, row: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|pair| pair.row == row)
            .map(|pair| pair.column)
    }
}

/// 割当問題を解くためのソルバー
///
/// 一回の求解ごとに作り捨てる。内部の行列は求解の間だけ存在し、呼び出し元からは見えない。
#[derive(Debug, Clone)]
pub struct HungarianSolver {
    matrix: CostMatrix,
    objective: Objective,
    config: SolverConfig,
}

impl HungarianSolver {
    pub fn new(matrix: CostMatrix, objective: Objective) -> Self {
        Self {
            matrix,
            objective,
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// 最適な割当を求める
    ///
    /// N = max(R, C)として
    /// 最悪計算量: O(N^4)（調整はO(N^2)回、一回の被覆探索はO(N^2)）
    /// 空間計算量: O(N^2)
    pub fn solve(self) -> Result<Solution, AssignmentError> {
        let Self {
            matrix: original,
            objective,
            config,
        } = self;
        let dimension = original.dimension();
        let limit = config.adjustment_limit(dimension);
        debug!(
            rows = original.row_count(),
            columns = original.column_count(),
            dimension,
            ?objective,
            "solving assignment problem"
        );

        let mut trace = StepTrace::new(config.record_trace);
        trace.label("--- Start of the Hungarian method ---");
        let operation = match objective {
            Objective::Minimize => "MINIMIZATION",
            Objective::Maximize => "MAXIMIZATION",
        };
        trace.label(format!("OPERATION TYPE: {operation}"));
        trace.section("Step 0: Original matrix");
        trace.snapshot(original.rows());

        let mut working = matrix::normalize(&original, objective, &mut trace);
        reduce::reduce(&mut working, &mut trace);

        let mut stars = StarredZeros::new(dimension);
        let mut adjustments = 0;
        loop {
            let covering = cover::find_cover(&working, &mut stars)?;
            let lines = covering.line_count();
            trace.label(SEPARATOR);
            trace.action(format!("Cover attempt: found {lines} lines."));
            trace.label(SEPARATOR);
            if lines >= dimension {
                break;
            }
            if adjustments >= limit {
                return Err(AssignmentError::IterationLimit {
                    limit,
                    lines,
                    dimension,
                });
            }

            trace.action("The number of lines is less than the dimension. The matrix must be adjusted.");
            // 被覆線が次元未満なら被覆されていないセルが必ず残っている
            adjust::adjust(&mut working, &covering, &mut trace)?;
            adjustments += 1;
        }

        let (pairs, value) = extract::extract(&stars, &original, objective, &mut trace)?;
        debug!(adjustments, value, "assignment problem solved");

        Ok(Solution {
            objective,
            dimension,
            pairs,
            value,
            trace,
        })
    }
}

/// 行列とフラグだけで解く簡易版
pub fn solve(rows: Vec<Vec<Cost>>, maximize: bool) -> Result<Solution, AssignmentError> {
    let matrix = CostMatrix::new(rows)?;
    HungarianSolver::new(matrix, Objective::from_maximize(maximize)).solve()
}
