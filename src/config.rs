//! ソルバーの設定

use serde::{Deserialize, Serialize};

/// 最小化問題として解くか最大化問題として解くか
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// コストの合計を最小化する
    #[default]
    Minimize,
    /// 利益の合計を最大化する
    Maximize,
}

impl Objective {
    pub fn from_maximize(maximize: bool) -> Self {
        if maximize {
            Objective::Maximize
        } else {
            Objective::Minimize
        }
    }

    pub fn is_maximize(self) -> bool {
        self == Objective::Maximize
    }
}

/// ハンガリー法のソルバーに渡す設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 被覆と調整を繰り返す回数の上限。Noneなら次元から決まる既定値を使う。
    pub max_adjustments: Option<usize>,
    /// falseなら途中経過の記録を取らない
    pub record_trace: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_adjustments: None,
            record_trace: true,
        }
    }
}

impl SolverConfig {
    pub fn with_max_adjustments(mut self, limit: usize) -> Self {
        self.max_adjustments = Some(limit);
        self
    }

    pub fn without_trace(mut self) -> Self {
        self.record_trace = false;
        self
    }

    /// dimension x dimensionの行列に対する調整回数の上限
    ///
    /// 調整のたびにマッチングが一つ増えるか被覆される行が一つ増えるので、
    /// 実際の回数は dimension * (dimension + 1) を超えない。
    pub fn adjustment_limit(&self, dimension: usize) -> usize {
        self.max_adjustments
            .unwrap_or_else(|| 2 * (dimension + 1) * (dimension + 1))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_limit_grows_with_dimension() {
        let config = SolverConfig::default();
        assert_eq!(config.adjustment_limit(1), 8);
        assert_eq!(config.adjustment_limit(3), 32);
        assert!(config.record_trace);
    }

    #[test]
    fn explicit_limit_wins() {
        let config = SolverConfig::default().with_max_adjustments(5);
        assert_eq!(config.adjustment_limit(100), 5);
    }

    #[test]
    fn deserialize_with_missing_fields() {
        let config: SolverConfig = serde_json::from_str(r#"{"record_trace": false}"#).unwrap();
        assert_eq!(config, SolverConfig::default().without_trace());

        let objective: Objective = serde_json::from_str(r#""maximize""#).unwrap();
        assert_eq!(objective, Objective::Maximize);
        assert_eq!(Objective::from_maximize(false), Objective::Minimize);
    }
}
