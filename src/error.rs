//! 割当問題を解くときに発生しうるエラーの定義

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssignmentError {
    /// 行が一つもない
    #[error("cost matrix has no rows")]
    EmptyMatrix,

    /// 列が一つもない
    #[error("cost matrix has no columns")]
    NoColumns,

    /// 行ごとの列数がそろっていない
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// NaNや無限大が含まれている
    #[error("cost at row {row}, column {column} is not a finite number")]
    NonFiniteValue { row: usize, column: usize },

    /// 値の幅が広すぎて、変換や合計の途中で有限の値に収まらない
    #[error("cost values span [{min}, {max}], too wide to transform without overflow")]
    ValueRangeOverflow { min: f64, max: f64 },

    /// 被覆と調整の繰り返しが上限に達した。正しい入力では起こらない。
    #[error("cover/adjust loop exceeded {limit} passes with {lines} of {dimension} lines")]
    IterationLimit {
        limit: usize,
        lines: usize,
        dimension: usize,
    },

    /// 被覆線が次元未満なのに被覆されていないセルがない。正しい入力では起こらない。
    #[error("no uncovered cell left to adjust with {lines} of {dimension} lines")]
    NoUncoveredCell { lines: usize, dimension: usize },

    /// 増加道の途中でプライムのない行にたどり着いた。正しい入力では起こらない。
    #[error("augmenting path reached row {row} without a primed zero")]
    BrokenAugmentingPath { row: usize },

    /// すべての行が割り当てられる前に取り出そうとした
    #[error("only {assigned} of {dimension} rows are assigned")]
    IncompleteAssignment { assigned: usize, dimension: usize },

    /// ラベル付きの入力で (agent, task) の組のコストが指定されていない
    #[error("no cost given for agent `{agent}` and task `{task}`")]
    MissingCell { agent: String, task: String },

    #[error("lp solver failed: {0}")]
    Lp(#[from] good_lp::ResolutionError),
}
