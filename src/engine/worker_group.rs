// WorkerGroup - 1回のステージ実行で起動したワーカーの追跡

use crate::core::{PipelineError, PipelineResult};
use std::future::Future;
use tokio::task::JoinHandle;

/// 起動済みワーカーを起動順に保持し、全完了を待機する
pub struct WorkerGroup<T> {
    handles: Vec<JoinHandle<T>>,
}

impl<T: Send + 'static> WorkerGroup<T> {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// ワーカーを1つ起動
    pub fn spawn<F>(&mut self, worker: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        self.handles.push(tokio::spawn(worker));
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// 全ワーカーの完了を待機し、起動順に結果を返す
    ///
    /// 途中でJoinErrorが出ても残りのワーカーは最後まで待機する。
    pub async fn wait(self) -> PipelineResult<Vec<T>> {
        let mut results = Vec::with_capacity(self.handles.len());
        let mut first_error = None;

        for handle in self.handles {
            match handle.await {
                Ok(value) => results.push(value),
                Err(error) => {
                    first_error.get_or_insert(PipelineError::task(error));
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(results),
        }
    }
}

impl<T: Send + 'static> Default for WorkerGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}
