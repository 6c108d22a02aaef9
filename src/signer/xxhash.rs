// xxHashベースの署名バックエンド実装

use super::{Signer, StatefulSigner};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use xxhash_rust::xxh3::xxh3_64;
use xxhash_rust::xxh64::Xxh64;

const XXH64_SEED: u64 = 0;

/// XXH3による並行安全な署名（10進数文字列を出力）
#[derive(Debug, Clone, Default)]
pub struct Xxh3Signer {
    latency: Duration,
}

impl Xxh3Signer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1回の署名ごとに疑似的な計算コストを加える
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl Signer for Xxh3Signer {
    async fn sign(&self, data: &str) -> Result<String> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(xxh3_64(data.as_bytes()).to_string())
    }

    fn algorithm_name(&self) -> &'static str {
        "XXH3"
    }
}

/// ストリーミングXXH64による署名（16進数文字列を出力）
///
/// ハッシャーの内部状態を呼び出し間で使い回すため非リエントラント。
pub struct Xxh64Signer {
    hasher: Xxh64,
    latency: Duration,
}

impl Xxh64Signer {
    pub fn new() -> Self {
        Self {
            hasher: Xxh64::new(XXH64_SEED),
            latency: Duration::ZERO,
        }
    }

    /// 1回の署名ごとに疑似的な計算コストを加える
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for Xxh64Signer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatefulSigner for Xxh64Signer {
    async fn sign(&mut self, data: &str) -> Result<String> {
        self.hasher.reset(XXH64_SEED);
        self.hasher.update(data.as_bytes());
        if !self.latency.is_zero() {
            // 状態を保持したまま待機するので、この間に別の呼び出しが入ると結果が壊れる
            tokio::time::sleep(self.latency).await;
        }
        Ok(hex::encode(self.hasher.digest().to_be_bytes()))
    }

    fn algorithm_name(&self) -> &'static str {
        "XXH64"
    }
}
