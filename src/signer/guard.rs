// Guard - 非リエントラントな署名バックエンドの直列化

use super::StatefulSigner;
use anyhow::Result;
use tokio::sync::Mutex;

/// 内部状態を持つ署名バックエンドへのアクセスを直列化するガード
///
/// 全ステージの全ワーカーが同じインスタンスを`Arc`で共有すること。
/// ロックが空くまで待機するだけで、タイムアウトやリトライはしない。
pub struct GuardedSigner<S> {
    inner: Mutex<S>,
    algorithm: &'static str,
}

impl<S: StatefulSigner> GuardedSigner<S> {
    pub fn new(inner: S) -> Self {
        let algorithm = inner.algorithm_name();
        Self {
            inner: Mutex::new(inner),
            algorithm,
        }
    }

    /// 排他区間の中で署名を実行
    pub async fn guarded_call(&self, data: &str) -> Result<String> {
        let mut signer = self.inner.lock().await;
        signer.sign(data).await
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm
    }
}
