//! 担当者（agent）と仕事（task）のラベルから割当問題を組み立てる
//!
//! ラベルは最初に出てきた順に行番号、列番号に対応付ける（インターニング）。

use crate::config::{Objective, SolverConfig};
use crate::error::AssignmentError;
use crate::hungarian::matrix::{Cost, CostMatrix};
use crate::hungarian::{HungarianSolver, Solution};
use std::collections::BTreeMap;
use std::fmt::Display;

/// 出現順に番号を振る対応表
#[derive(Debug, Clone)]
struct Interner<T: Ord + Clone> {
    value_to_index: BTreeMap<T, usize>,
    index_to_value: Vec<T>,
}

impl<T: Ord + Clone> Interner<T> {
    fn new() -> Self {
        Self {
            value_to_index: BTreeMap::new(),
            index_to_value: Vec::new(),
        }
    }

    /// 登録済みならその番号、なければ新しい番号を振る
    fn intern(&mut self, value: T) -> usize {
        if let Some(&index) = self.value_to_index.get(&value) {
            return index;
        }
        let index = self.index_to_value.len();
        self.index_to_value.push(value.clone());
        self.value_to_index.insert(value, index);
        index
    }

    fn len(&self) -> usize {
        self.index_to_value.len()
    }

    fn value(&self, index: usize) -> Option<&T> {
        self.index_to_value.get(index)
    }
}

/// ラベル付きの割当結果
#[derive(Debug, Clone)]
pub struct LabeledSolution<A, T> {
    /// agentの出現順。ダミーの仕事に割り当てられたagentはNone。
    pub assignments: Vec<(A, Option<T>)>,
    pub solution: Solution,
}

/// (agent, task, cost) の組から作るコスト行列
///
/// 同じ(agent, task)が複数回指定されたときは後勝ち。
#[derive(Debug, Clone)]
pub struct LabeledCostMatrix<A: Ord + Clone, T: Ord + Clone> {
    agents: Interner<A>,
    tasks: Interner<T>,
    cells: BTreeMap<(usize, usize), Cost>,
}

impl<A: Ord + Clone + Display, T: Ord + Clone + Display> LabeledCostMatrix<A, T> {
    pub fn new() -> Self {
        Self {
            agents: Interner::new(),
            tasks: Interner::new(),
            cells: BTreeMap::new(),
        }
    }

    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (A, T, Cost)>,
    {
        let mut matrix = Self::new();
        for (agent, task, cost) in triples {
            matrix.insert(agent, task, cost);
        }
        matrix
    }

    pub fn insert(&mut self, agent: A, task: T, cost: Cost) {
        let row = self.agents.intern(agent);
        let column = self.tasks.intern(task);
        self.cells.insert((row, column), cost);
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// すべての(agent, task)がそろっていればコスト行列にする
    pub fn to_cost_matrix(&self) -> Result<CostMatrix, AssignmentError> {
        let mut rows = Vec::with_capacity(self.agent_count());
        for row in 0..self.agent_count() {
            let mut values = Vec::with_capacity(self.task_count());
            for column in 0..self.task_count() {
                match self.cells.get(&(row, column)) {
                    Some(&cost) => values.push(cost),
                    None => return Err(self.missing(row, column)),
                }
            }
            rows.push(values);
        }
        CostMatrix::new(rows)
    }

    fn missing(&self, row: usize, column: usize) -> AssignmentError {
        AssignmentError::MissingCell {
            agent: self
                .agents
                .value(row)
                .map(|a| a.to_string())
                .unwrap_or_default(),
            task: self
                .tasks
                .value(column)
                .map(|t| t.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn solve(&self, objective: Objective) -> Result<LabeledSolution<A, T>, AssignmentError> {
        self.solve_with(objective, SolverConfig::default())
    }

    /// 調整回数の上限や途中経過の記録を指定して解く
    pub fn solve_with(
        &self,
        objective: Objective,
        config: SolverConfig,
    ) -> Result<LabeledSolution<A, T>, AssignmentError> {
        let matrix = self.to_cost_matrix()?;
        let solution = HungarianSolver::new(matrix, objective)
            .with_config(config)
            .solve()?;

        // ダミーのagentは返さない
        let assignments = solution
            .pairs
            .iter()
            .filter_map(|pair| {
                let agent = self.agents.value(pair.row)?.clone();
                Some((agent, self.tasks.value(pair.column).cloned()))
            })
            .collect();

        Ok(LabeledSolution {
            assignments,
            solution,
        })
    }
}

impl<A: Ord + Clone + Display, T: Ord + Clone + Display> Default for LabeledCostMatrix<A, T> {
    fn default() -> Self {
        Self::new()
    }
}
