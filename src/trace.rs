//! ハンガリー法の途中経過の記録

use serde::Serialize;
use std::fmt;

/// 記録の一行分
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TraceEntry {
    /// 見出し
    Label(String),
    /// 行や列に対して行った操作の説明
    Action(String),
    /// その時点の行列全体
    Snapshot(Vec<Vec<f64>>),
}

/// 追記のみできる途中経過の記録
///
/// 無効にしたときは何を追記しても捨てる。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StepTrace {
    entries: Vec<TraceEntry>,
    #[serde(skip)]
    enabled: bool,
}

pub(crate) const SEPARATOR: &str = "---------------------------------------------";

impl StepTrace {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            entries: Vec::new(),
            enabled,
        }
    }

    pub(crate) fn label(&mut self, text: impl Into<String>) {
        if self.enabled {
            self.entries.push(TraceEntry::Label(text.into()));
        }
    }

    pub(crate) fn section(&mut self, text: impl Into<String>) {
        self.label(SEPARATOR);
        self.label(text);
    }

    pub(crate) fn action(&mut self, text: impl Into<String>) {
        if self.enabled {
            self.entries.push(TraceEntry::Action(text.into()));
        }
    }

    pub(crate) fn snapshot(&mut self, rows: &[Vec<f64>]) {
        if self.enabled {
            self.entries.push(TraceEntry::Snapshot(rows.to_vec()));
        }
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Label(text) | TraceEntry::Action(text) => f.write_str(text),
            TraceEntry::Snapshot(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    let line: Vec<String> = row.iter().map(|value| value.to_string()).collect();
                    f.write_str(&line.join("\t"))?;
                }
                Ok(())
            }
        }
    }
}

/// 一項目一行（行列は一行ずつタブ区切り）で出力する
impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
