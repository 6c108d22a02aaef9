// 高レベル公開API
// SignerEngineを簡単に使用できるようにするための便利な関数

use super::SignerEngine;
use crate::{
    core::PipelineResult,
    services::{ConsoleProgressReporter, DefaultSignerConfig, NoOpProgressReporter},
    signer::{Xxh3Signer, Xxh64Signer},
};

/// 既定バックエンド（XXH3 / XXH64）を使うエンジンの型
pub type DefaultSignerEngine<R> = SignerEngine<Xxh3Signer, Xxh64Signer, DefaultSignerConfig, R>;

/// SignerEngine作成のヘルパー関数
///
/// デフォルト設定・コンソール出力での簡単なエンジン作成
pub fn create_default_signer_engine() -> DefaultSignerEngine<ConsoleProgressReporter> {
    SignerEngine::new(
        Xxh3Signer::new(),
        Xxh64Signer::new(),
        DefaultSignerConfig::default(),
        ConsoleProgressReporter::new(),
    )
}

/// SignerEngine作成のヘルパー関数（静音版）
///
/// テストやバックグラウンド処理用の静音エンジン作成
pub fn create_quiet_signer_engine() -> DefaultSignerEngine<NoOpProgressReporter> {
    SignerEngine::new(
        Xxh3Signer::new(),
        Xxh64Signer::new(),
        DefaultSignerConfig::default(),
        NoOpProgressReporter::new(),
    )
}

/// 静音エンジンで署名文字列だけを計算
pub async fn sign_sequence(inputs: Vec<i64>) -> PipelineResult<String> {
    let report = create_quiet_signer_engine().sign(inputs).await?;
    Ok(report.signature)
}
