//! 割当問題を0-1整数計画問題として求める。
//! hungarianと同じ問題を解くことを想定していて、結果の突き合わせに使う。

use crate::config::Objective;
use crate::error::AssignmentError;
use crate::hungarian::matrix::{Cost, CostMatrix};
use good_lp::{
    Constraint, Expression, Solution, SolverModel, Variable, constraint, microlp, variable,
    variables,
};

/// 整数計画で求めた割当。ダミーは使わないので元の行列の範囲内の組だけを持つ。
#[derive(Debug, Clone, PartialEq)]
pub struct LpAssignment {
    pub value: Cost,
    /// 行番号順の (row, column)
    pub pairs: Vec<(usize, usize)>,
}

pub struct AssignmentLpSolver {
    matrix: CostMatrix,
    objective: Objective,
}

impl AssignmentLpSolver {
    pub fn new(matrix: CostMatrix, objective: Objective) -> Self {
        Self { matrix, objective }
    }

    fn sum(vars: &[&Variable]) -> Expression {
        vars.iter().fold(0.0.into(), |acc: Expression, v| acc + **v)
    }

    /// 割り当てた組の一覧と合計を返す
    pub fn solve(self) -> Result<LpAssignment, AssignmentError> {
        let row_count = self.matrix.row_count();
        let column_count = self.matrix.column_count();

        // 変数定義
        // cells[r][c] == 1 なら行rを列cに割り当てる
        let mut vars = variables!();
        let cells: Vec<Vec<Variable>> = (0..row_count)
            .map(|_| {
                (0..column_count)
                    .map(|_| vars.add(variable().binary()))
                    .collect()
            })
            .collect();

        //
        // 目的関数
        //
        let mut objective: Expression = 0.0.into();
        for (row, values) in self.matrix.rows().iter().enumerate() {
            for (column, value) in values.iter().enumerate() {
                objective = objective + *value * cells[row][column];
            }
        }
        let mut problem = match self.objective {
            Objective::Minimize => vars.minimise(&objective),
            Objective::Maximize => vars.maximise(&objective),
        }
        .using(microlp);

        //
        // 制約条件
        //

        // 小さいほうの集合の要素はちょうど一つ、大きいほうの集合の要素は最大で一つに割り当てられる
        let exactly_or_at_most = |expr: Expression, exactly: bool| -> Constraint {
            if exactly {
                constraint!(expr == 1)
            } else {
                constraint!(expr <= 1)
            }
        };
        for values in cells.iter() {
            let row_vars: Vec<&Variable> = values.iter().collect();
            problem = problem.with(exactly_or_at_most(
                Self::sum(&row_vars),
                row_count <= column_count,
            ));
        }
        for column in 0..column_count {
            let column_vars: Vec<&Variable> = cells.iter().map(|values| &values[column]).collect();
            problem = problem.with(exactly_or_at_most(
                Self::sum(&column_vars),
                column_count <= row_count,
            ));
        }

        // 解く
        let solution = problem.solve()?;

        let mut value: Cost = 0.0;
        let mut pairs = Vec::new();
        for (row, values) in cells.iter().enumerate() {
            for (column, v) in values.iter().enumerate() {
                if solution.value(*v) > 0.5 {
                    value += self.matrix.rows()[row][column];
                    pairs.push((row, column));
                }
            }
        }

        Ok(LpAssignment { value, pairs })
    }
}
