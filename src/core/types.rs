// パイプラインに関連するデータ型定義

use serde::Serialize;

/// 1段目（SingleHash）の2つのハッシュを結合する区切り文字
pub const COMPOSITE_SEPARATOR: &str = "~";

/// 集約ステージ（CombineResults）で各結果を結合する区切り文字
pub const AGGREGATE_SEPARATOR: &str = "_";

/// MultiHashステージの既定サブワーカー数
pub const DEFAULT_MULTI_HASH_FANOUT: usize = 6;

/// アイテム単位の失敗記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure {
    pub stage: String,
    pub item: String,
    pub error: String,
}

/// 1ステージ分の実行結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: String,
    pub received: usize,
    pub emitted: usize,
    pub failures: Vec<ItemFailure>,
}

impl StageReport {
    pub fn new(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            received: 0,
            emitted: 0,
            failures: Vec::new(),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// パイプライン全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    /// ソース・各ステージの順に並んだレポート（シンクは含まない）
    pub stages: Vec<StageReport>,
    pub failures: Vec<ItemFailure>,
    pub total_processing_time_ms: u64,
}

impl PipelineSummary {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn stage(&self, name: &str) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == name)
    }
}

/// 署名処理1回分の最終結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureReport {
    pub inputs: Vec<i64>,
    pub signature: String,
    pub summary: PipelineSummary,
    pub started_at: String,
}
