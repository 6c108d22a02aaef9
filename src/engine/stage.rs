// Stage - パイプラインの1段を表すトレイト

use super::queue::{QueueReceiver, QueueSender};
use crate::core::{PipelineResult, StageReport};
use async_trait::async_trait;
use std::fmt::Display;

/// 入力キューを最後まで消費し、出力キューへ書き込むステージ
///
/// キューはパイプラインが所有する。`run`が返ると`output`がドロップされ、
/// 下流から見たキューが閉じる。
#[async_trait]
pub trait Stage: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    /// ステージ名（レポート・失敗記録に使用）
    fn name(&self) -> &str;

    async fn run(
        &self,
        input: QueueReceiver<Self::Input>,
        output: QueueSender<Self::Output>,
    ) -> PipelineResult<StageReport>;
}

/// 1アイテムを1つの結果に変換する処理
///
/// [`WorkerPool`](super::pool::WorkerPool)がアイテムごとにワーカーを起動して呼び出す。
#[async_trait]
pub trait ItemProcessor: Send + Sync + 'static {
    type Input: Send + Display + 'static;
    type Output: Send + 'static;

    async fn process(&self, item: Self::Input) -> PipelineResult<Self::Output>;
}
