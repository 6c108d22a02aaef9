// パイプラインのトレイト定義
// 設定と進捗報告の抽象化インターフェース

use super::types::{PipelineSummary, StageReport};
use async_trait::async_trait;
use mockall::automock;

/// 署名パイプラインの設定を抽象化するトレイト
#[automock]
pub trait SignerConfig: Send + Sync {
    /// MultiHashステージで1アイテムあたりに起動するサブワーカー数
    fn multi_hash_fanout(&self) -> usize;

    /// ステージごとの同時実行ワーカー上限（Noneは無制限）
    fn max_in_flight_workers(&self) -> Option<usize>;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

// SignerConfig for Box<dyn SignerConfig>
impl SignerConfig for Box<dyn SignerConfig> {
    fn multi_hash_fanout(&self) -> usize {
        self.as_ref().multi_hash_fanout()
    }

    fn max_in_flight_workers(&self) -> Option<usize> {
        self.as_ref().max_in_flight_workers()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait PipelineReporter: Send + Sync {
    /// パイプライン開始時の報告
    async fn report_started(&self, total_items: usize);

    /// ステージ開始時の報告
    async fn report_stage_started(&self, stage: &str);

    /// アイテム単位の失敗の報告
    async fn report_item_failed(&self, stage: &str, item: &str, error: &str);

    /// ステージ完了時の報告
    async fn report_stage_finished(&self, report: &StageReport);

    /// パイプライン完了時の報告
    async fn report_completed(&self, summary: &PipelineSummary);
}

// PipelineReporter for Box<dyn PipelineReporter>
#[async_trait]
impl PipelineReporter for Box<dyn PipelineReporter> {
    async fn report_started(&self, total_items: usize) {
        self.as_ref().report_started(total_items).await
    }

    async fn report_stage_started(&self, stage: &str) {
        self.as_ref().report_stage_started(stage).await
    }

    async fn report_item_failed(&self, stage: &str, item: &str, error: &str) {
        self.as_ref().report_item_failed(stage, item, error).await
    }

    async fn report_stage_finished(&self, report: &StageReport) {
        self.as_ref().report_stage_finished(report).await
    }

    async fn report_completed(&self, summary: &PipelineSummary) {
        self.as_ref().report_completed(summary).await
    }
}
