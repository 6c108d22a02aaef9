// WorkerPool - アイテムごとにワーカーを起動する汎用ステージ

use super::queue::{QueueReceiver, QueueSender};
use super::stage::{ItemProcessor, Stage};
use super::worker_group::WorkerGroup;
use crate::core::{ItemFailure, PipelineError, PipelineResult, StageReport};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// ワーカー1つ分の結果
#[derive(Debug)]
enum WorkerOutcome {
    Emitted,
    /// 下流のキューが既に閉じていた
    Discarded,
    Failed { item: String, error: String },
    /// アイテム単位で吸収できない失敗
    Fatal(PipelineError),
}

/// 入力アイテムごとに独立したワーカーを起動するステージ
///
/// 出力キューは入力キューの終端を観測し、かつ起動した全ワーカーが
/// 完了した後にだけ閉じる。出力順序は保証しない。
/// 回復可能なエラーはアイテム単位の失敗として記録し、それ以外のエラーは
/// 全ワーカーの完了を待ってからステージのエラーとして返す。
pub struct WorkerPool<P> {
    name: String,
    processor: Arc<P>,
    admission: Option<Arc<Semaphore>>,
}

impl<P: ItemProcessor> WorkerPool<P> {
    /// 同時実行数無制限のワーカープールを作成
    pub fn new(name: impl Into<String>, processor: P) -> Self {
        Self {
            name: name.into(),
            processor: Arc::new(processor),
            admission: None,
        }
    }

    /// 同時実行ワーカー数の上限を設定（Noneで無制限）
    pub fn with_admission_limit(mut self, limit: Option<usize>) -> Self {
        self.admission = limit.map(|permits| Arc::new(Semaphore::new(permits)));
        self
    }
}

#[async_trait]
impl<P: ItemProcessor> Stage for WorkerPool<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn name(&self) -> &str {
        &self.name
    }

    async fn run(
        &self,
        mut input: QueueReceiver<Self::Input>,
        output: QueueSender<Self::Output>,
    ) -> PipelineResult<StageReport> {
        let mut report = StageReport::new(self.name.as_str());
        let mut workers = WorkerGroup::new();

        while let Some(item) = input.recv().await {
            report.received += 1;

            // 上限設定時のみ、空きが出るまで次のワーカーの起動を待つ
            let permit = match &self.admission {
                Some(semaphore) => Some(
                    Arc::clone(semaphore)
                        .acquire_owned()
                        .await
                        .map_err(|e| PipelineError::channel(format!("Semaphore error: {e}")))?,
                ),
                None => None,
            };

            let processor = Arc::clone(&self.processor);
            let output = output.clone();
            workers.spawn(async move {
                let _permit = permit;
                let label = item.to_string();
                match processor.process(item).await {
                    Ok(value) => match output.send(value) {
                        Ok(()) => WorkerOutcome::Emitted,
                        Err(_) => WorkerOutcome::Discarded,
                    },
                    Err(error) if error.is_recoverable() => WorkerOutcome::Failed {
                        item: label,
                        error: error.to_string(),
                    },
                    Err(error) => WorkerOutcome::Fatal(error),
                }
            });
        }

        let mut first_error = None;
        for outcome in workers.wait().await? {
            match outcome {
                WorkerOutcome::Emitted => report.emitted += 1,
                WorkerOutcome::Discarded => {}
                WorkerOutcome::Failed { item, error } => report.failures.push(ItemFailure {
                    stage: self.name.clone(),
                    item,
                    error,
                }),
                WorkerOutcome::Fatal(error) => {
                    first_error.get_or_insert(error);
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(report),
        }
    }
}
