// CombineResults - 全結果を集約して1つの署名にまとめる

use crate::core::{PipelineResult, StageReport, AGGREGATE_SEPARATOR};
use crate::engine::queue::{QueueReceiver, QueueSender};
use crate::engine::stage::Stage;
use async_trait::async_trait;

/// CombineResultsステージの名前
pub const COMBINE_RESULTS_STAGE: &str = "combine_results";

/// 全て集めてからソートし`_`で結合する
pub fn combine_sorted(mut items: Vec<String>) -> String {
    items.sort();
    items.join(AGGREGATE_SEPARATOR)
}

/// 上流の全結果を受け取るまで待ち、1つの結合済み文字列を出力するステージ
///
/// 入力キューが閉じるまで何も出力しない。入力が空でも空文字列を1つ出力する。
#[derive(Debug, Default, Clone)]
pub struct CombineResults;

impl CombineResults {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Stage for CombineResults {
    type Input = String;
    type Output = String;

    fn name(&self) -> &str {
        COMBINE_RESULTS_STAGE
    }

    async fn run(
        &self,
        mut input: QueueReceiver<String>,
        output: QueueSender<String>,
    ) -> PipelineResult<StageReport> {
        let mut report = StageReport::new(COMBINE_RESULTS_STAGE);

        let mut collected = Vec::new();
        while let Some(item) = input.recv().await {
            collected.push(item);
        }
        report.received = collected.len();

        if output.send(combine_sorted(collected)).is_ok() {
            report.emitted = 1;
        }

        Ok(report)
    }
}
