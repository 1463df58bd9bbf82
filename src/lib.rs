//! 割当問題（N人の担当者とM個の仕事の一対一の組合せでコスト最小、利益最大となるもの）を解く。

pub mod config;
pub mod error;
pub mod hungarian;
pub mod labeled;
pub mod lp;
pub mod trace;

pub use config::{Objective, SolverConfig};
pub use error::AssignmentError;
pub use hungarian::extract::AssignedPair;
pub use hungarian::matrix::{Cost, CostMatrix};
pub use hungarian::{HungarianSolver, Solution, solve};
pub use trace::{StepTrace, TraceEntry};
