// Pipeline - ステージを連結して同時実行するランナー
// キューはランナーが所有し、隣接するステージに受け渡す

use super::consumer::drain_sink;
use super::producer::{feed_source, SOURCE_STAGE};
use super::queue::{queue, QueueReceiver};
use super::stage::Stage;
use crate::core::{PipelineError, PipelineReporter, PipelineResult, PipelineSummary, StageReport};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

type StageTask = Pin<Box<dyn Future<Output = PipelineResult<StageReport>> + Send>>;

/// パイプライン実行の結果
#[derive(Debug)]
pub struct PipelineOutput<T> {
    /// シンクが受信した値（到着順）
    pub values: Vec<T>,
    pub summary: PipelineSummary,
}

/// 型付きキューで連結されたステージ列
///
/// `T`は現在の末尾キューを流れる値の型。`then`でステージを追加するたびに
/// 次のステージの出力型へ変わるため、隣接ステージ間の型不一致はコンパイル時に検出される。
pub struct Pipeline<T> {
    tail: QueueReceiver<T>,
    tasks: Vec<StageTask>,
    reporter: Arc<dyn PipelineReporter>,
    total_items: usize,
}

impl<T: Send + 'static> Pipeline<T> {
    /// 入力シーケンスを先頭キューへ流すソースからパイプラインを開始
    pub fn from_source(
        items: impl IntoIterator<Item = T>,
        reporter: Arc<dyn PipelineReporter>,
    ) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let total_items = items.len();
        let (head_tx, head_rx) = queue();

        let task = supervise(
            SOURCE_STAGE.to_string(),
            Arc::clone(&reporter),
            feed_source(items, head_tx),
        );

        Self {
            tail: head_rx,
            tasks: vec![task],
            reporter,
            total_items,
        }
    }

    /// 末尾キューを入力とするステージを追加
    pub fn then<S>(mut self, stage: S) -> Pipeline<S::Output>
    where
        S: Stage<Input = T>,
    {
        let (tx, rx) = queue();
        let input = self.tail;
        let name = stage.name().to_string();

        self.tasks.push(supervise(
            name,
            Arc::clone(&self.reporter),
            async move { stage.run(input, tx).await },
        ));

        Pipeline {
            tail: rx,
            tasks: self.tasks,
            reporter: self.reporter,
            total_items: self.total_items,
        }
    }

    /// 登録済みのステージ数（ソースを含む）
    pub fn stage_count(&self) -> usize {
        self.tasks.len()
    }

    /// 全ステージを同時に起動し、最終キューが排出されるまで待機
    pub async fn execute(self) -> PipelineResult<PipelineOutput<T>> {
        let Pipeline {
            tail,
            tasks,
            reporter,
            total_items,
        } = self;
        let start_time = Instant::now();

        reporter.report_started(total_items).await;

        let sink_handle = tokio::spawn(drain_sink(tail));
        let stage_handles: Vec<_> = tasks.into_iter().map(tokio::spawn).collect();

        // エラーがあっても全ステージの終了を待ってから返す
        let mut stages = Vec::with_capacity(stage_handles.len());
        let mut first_error = None;
        for handle in stage_handles {
            match handle.await {
                Ok(Ok(report)) => stages.push(report),
                Ok(Err(error)) => {
                    first_error.get_or_insert(error);
                }
                Err(error) => {
                    first_error.get_or_insert(PipelineError::task(error));
                }
            }
        }

        let values = sink_handle.await.map_err(PipelineError::task)?;
        if let Some(error) = first_error {
            return Err(error);
        }

        let failures = stages
            .iter()
            .flat_map(|report| report.failures.iter().cloned())
            .collect();
        let summary = PipelineSummary {
            stages,
            failures,
            total_processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        reporter.report_completed(&summary).await;

        Ok(PipelineOutput { values, summary })
    }
}

/// ステージの開始・失敗・完了を報告するラッパー
fn supervise<F>(name: String, reporter: Arc<dyn PipelineReporter>, stage: F) -> StageTask
where
    F: Future<Output = PipelineResult<StageReport>> + Send + 'static,
{
    Box::pin(async move {
        reporter.report_stage_started(&name).await;
        let report = stage.await?;
        for failure in &report.failures {
            reporter
                .report_item_failed(&failure.stage, &failure.item, &failure.error)
                .await;
        }
        reporter.report_stage_finished(&report).await;
        Ok(report)
    })
}
