// SignerEngine - 依存性注入による署名パイプラインエンジン
// 全ての依存関係がコンストラクタで注入される

use super::pipeline::Pipeline;
use super::pool::WorkerPool;
use crate::{
    core::{PipelineError, PipelineReporter, PipelineResult, SignatureReport, SignerConfig},
    services::{validate_config, NoOpProgressReporter},
    signer::{GuardedSigner, Signer, StatefulSigner},
    stages::{
        CombineResults, MultiHash, SingleHash, COMBINE_RESULTS_STAGE, MULTI_HASH_STAGE,
        SINGLE_HASH_STAGE,
    },
};
use std::sync::Arc;

/// 署名パイプラインエンジン
///
/// ステージ間で共有される依存関係はArcで管理する。
/// `StatefulSigner`は生成時にガードで包まれ、以後は全実行で同じガードを共有する。
/// キュー・ワーカー・レポートは`sign`の呼び出しごとに新しく作られる。
pub struct SignerEngine<U, G, C, R> {
    unguarded: Arc<U>,
    guarded: Arc<GuardedSigner<G>>,
    config: Arc<C>,
    reporter: Arc<R>,
}

impl<U, G, C, R> SignerEngine<U, G, C, R>
where
    U: Signer + 'static,
    G: StatefulSigner + 'static,
    C: SignerConfig,
    R: PipelineReporter + 'static,
{
    /// 新しいエンジンを作成（Constructor Injection）
    pub fn new(unguarded: U, guarded: G, config: C, reporter: R) -> Self {
        Self {
            unguarded: Arc::new(unguarded),
            guarded: Arc::new(GuardedSigner::new(guarded)),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// 入力シーケンスから署名を計算
    ///
    /// source → single_hash → multi_hash → combine_results → sink
    pub async fn sign(&self, inputs: Vec<i64>) -> PipelineResult<SignatureReport> {
        validate_config(self.config.as_ref())?;

        let started_at = chrono::Utc::now().to_rfc3339();
        let limit = self.config.max_in_flight_workers();
        let reporter: Arc<dyn PipelineReporter> = if self.config.enable_progress_reporting() {
            Arc::clone(&self.reporter) as Arc<dyn PipelineReporter>
        } else {
            Arc::new(NoOpProgressReporter::new())
        };

        let single_hash = SingleHash::new(Arc::clone(&self.unguarded), Arc::clone(&self.guarded));
        let fanout = self.config.multi_hash_fanout();
        let multi_hash = MultiHash::new(Arc::clone(&self.unguarded), fanout);

        let output = Pipeline::from_source(inputs.clone(), reporter)
            .then(WorkerPool::new(SINGLE_HASH_STAGE, single_hash).with_admission_limit(limit))
            .then(WorkerPool::new(MULTI_HASH_STAGE, multi_hash).with_admission_limit(limit))
            .then(CombineResults::new())
            .execute()
            .await?;

        // 集約ステージは必ずちょうど1つの値を出力する
        let mut values = output.values;
        if values.len() != 1 {
            return Err(PipelineError::stage(
                COMBINE_RESULTS_STAGE,
                format!("最終値は1つである必要があります（受信数: {}）", values.len()),
            ));
        }
        let signature = values.remove(0);

        Ok(SignatureReport {
            inputs,
            signature,
            summary: output.summary,
            started_at,
        })
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// 使用中のアルゴリズム名（ガードなし, ガードあり）
    pub fn algorithms(&self) -> (&'static str, &'static str) {
        (self.unguarded.algorithm_name(), self.guarded.algorithm_name())
    }
}
