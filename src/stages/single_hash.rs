// SingleHash - 1アイテムの二重ハッシュ合成

use crate::core::{PipelineError, PipelineResult, COMPOSITE_SEPARATOR};
use crate::engine::stage::ItemProcessor;
use crate::signer::{GuardedSigner, Signer, StatefulSigner};
use async_trait::async_trait;
use std::sync::Arc;

/// SingleHashステージの名前
pub const SINGLE_HASH_STAGE: &str = "single_hash";

/// `unguarded(data) ~ unguarded(guarded(data))`を計算する処理
///
/// `guarded(data)`はガード経由で先に計算する。その後、依存のない
/// `unguarded(data)`を別タスクで走らせつつ`unguarded(guarded)`を計算する。
/// 分岐の失敗は両方の分岐が終わってから返す。
pub struct SingleHash<U, G> {
    unguarded: Arc<U>,
    guarded: Arc<GuardedSigner<G>>,
}

impl<U, G> SingleHash<U, G>
where
    U: Signer + 'static,
    G: StatefulSigner + 'static,
{
    pub fn new(unguarded: Arc<U>, guarded: Arc<GuardedSigner<G>>) -> Self {
        Self {
            unguarded,
            guarded,
        }
    }

    /// 1アイテム分の合成ハッシュ文字列を計算
    pub async fn combine(&self, item: i64) -> PipelineResult<String> {
        let data = item.to_string();

        let guarded = self
            .guarded
            .guarded_call(&data)
            .await
            .map_err(|e| PipelineError::signer(&data, e))?;

        // 分岐A: 元データのみに依存するので先に起動しておく
        let branch_a = {
            let unguarded = Arc::clone(&self.unguarded);
            let data = data.clone();
            tokio::spawn(async move { unguarded.sign(&data).await })
        };

        // 分岐B: guardedの結果に依存。どちらかが失敗しても両方の完了を待つ
        let (branch_a, branch_b) = tokio::join!(branch_a, self.unguarded.sign(&guarded));

        let branch_a = branch_a
            .map_err(PipelineError::task)?
            .map_err(|e| PipelineError::signer(&data, e))?;
        let branch_b = branch_b.map_err(|e| PipelineError::signer(&guarded, e))?;

        Ok(format!("{branch_a}{COMPOSITE_SEPARATOR}{branch_b}"))
    }
}

#[async_trait]
impl<U, G> ItemProcessor for SingleHash<U, G>
where
    U: Signer + 'static,
    G: StatefulSigner + 'static,
{
    type Input = i64;
    type Output = String;

    async fn process(&self, item: i64) -> PipelineResult<String> {
        self.combine(item).await
    }
}
