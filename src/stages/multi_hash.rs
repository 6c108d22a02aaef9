// MultiHash - 合成ハッシュごとのサブワーカーによる派生ハッシュ

use crate::core::{PipelineError, PipelineResult};
use crate::engine::stage::ItemProcessor;
use crate::engine::worker_group::WorkerGroup;
use crate::signer::Signer;
use async_trait::async_trait;
use std::sync::Arc;

/// MultiHashステージの名前
pub const MULTI_HASH_STAGE: &str = "multi_hash";

/// `unguarded(i + data)`をK個並行に計算し、i順に連結する処理
pub struct MultiHash<U> {
    unguarded: Arc<U>,
    fanout: usize,
}

impl<U: Signer + 'static> MultiHash<U> {
    pub fn new(unguarded: Arc<U>, fanout: usize) -> Self {
        Self { unguarded, fanout }
    }

    pub fn fanout(&self) -> usize {
        self.fanout
    }

    /// 1つの合成ハッシュからK個の派生ハッシュを計算して連結
    pub async fn derive(&self, composite: String) -> PipelineResult<String> {
        let composite = Arc::new(composite);
        let mut sub_workers = WorkerGroup::new();

        for index in 0..self.fanout {
            let unguarded = Arc::clone(&self.unguarded);
            let composite = Arc::clone(&composite);
            sub_workers.spawn(async move {
                let data = format!("{index}{composite}");
                let signed = unguarded.sign(&data).await;
                signed.map_err(|e| PipelineError::signer(data, e))
            });
        }

        // WorkerGroupは起動順に結果を返すので、そのままインデックス順になる
        let parts = sub_workers
            .wait()
            .await?
            .into_iter()
            .collect::<PipelineResult<Vec<String>>>()?;

        Ok(parts.concat())
    }
}

#[async_trait]
impl<U: Signer + 'static> ItemProcessor for MultiHash<U> {
    type Input = String;
    type Output = String;

    async fn process(&self, item: String) -> PipelineResult<String> {
        self.derive(item).await
    }
}
