// エンジン層 - ステージの並列実行とオーケストレーション
// キュー・ワーカープール・パイプラインランナーを組み合わせて署名処理を提供

pub mod api;
pub mod consumer;
pub mod pipeline;
pub mod pool;
pub mod producer;
pub mod queue;
pub mod signer_engine;
pub mod stage;
pub mod worker_group;

// 公開API - 主要エンジンクラス
pub use api::{
    create_default_signer_engine, create_quiet_signer_engine, sign_sequence, DefaultSignerEngine,
};
pub use pipeline::{Pipeline, PipelineOutput};
pub use pool::WorkerPool;
pub use queue::{queue, QueueReceiver, QueueSender};
pub use signer_engine::SignerEngine;
pub use stage::{ItemProcessor, Stage};
pub use worker_group::WorkerGroup;
