//! 数理最適化ソルバーを使った解法
pub mod assignment;
