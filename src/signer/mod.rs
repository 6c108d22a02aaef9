use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod guard;
pub mod xxhash;

pub use guard::GuardedSigner;
pub use xxhash::{Xxh3Signer, Xxh64Signer};

/// 並行呼び出し可能な署名バックエンドのトレイト
///
/// 任意のワーカーから同時に呼び出してよい。ガードを通してはならない。
#[automock]
#[async_trait]
pub trait Signer: Send + Sync {
    /// 文字列データから署名文字列を生成
    async fn sign(&self, data: &str) -> Result<String>;

    /// アルゴリズムの名前を取得
    fn algorithm_name(&self) -> &'static str;
}

/// 内部状態を持つ（非リエントラントな）署名バックエンドのトレイト
///
/// `&mut self`を要求するため、複数ワーカーからは必ず
/// [`GuardedSigner`]経由で呼び出す。
#[automock]
#[async_trait]
pub trait StatefulSigner: Send {
    /// 文字列データから署名文字列を生成
    async fn sign(&mut self, data: &str) -> Result<String>;

    /// アルゴリズムの名前を取得
    fn algorithm_name(&self) -> &'static str;
}

