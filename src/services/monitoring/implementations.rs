// 進捗監視の具象実装

use crate::core::{PipelineReporter, PipelineSummary, StageReport};
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl PipelineReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_items: usize) {
        if !self.quiet {
            println!("🚀 Starting pipeline with {total_items} items...");
        }
    }

    async fn report_stage_started(&self, stage: &str) {
        if !self.quiet {
            println!("▶️  Stage started: {stage}");
        }
    }

    async fn report_item_failed(&self, stage: &str, item: &str, error: &str) {
        if !self.quiet {
            eprintln!("❌ [{stage}] item {item} failed: {error}");
        }
    }

    async fn report_stage_finished(&self, report: &StageReport) {
        if !self.quiet {
            println!(
                "📊 Stage finished: {} (received: {}, emitted: {}, failed: {})",
                report.stage,
                report.received,
                report.emitted,
                report.failed()
            );
        }
    }

    async fn report_completed(&self, summary: &PipelineSummary) {
        if !self.quiet {
            println!(
                "✅ Completed in {}ms! Failed items: {}",
                summary.total_processing_time_ms,
                summary.failure_count()
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PipelineReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_items: usize) {
        // 何もしない
    }

    async fn report_stage_started(&self, _stage: &str) {
        // 何もしない
    }

    async fn report_item_failed(&self, _stage: &str, _item: &str, _error: &str) {
        // 何もしない
    }

    async fn report_stage_finished(&self, _report: &StageReport) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &PipelineSummary) {
        // 何もしない
    }
}
