// 署名パイプライン全体のエンドツーエンドテスト
// スタブバックエンドで最終署名の形を文字列として検証する

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{expected_signature, StubSigner, StubStatefulSigner};
use hash_signer::{
    core::DEFAULT_MULTI_HASH_FANOUT,
    engine::SignerEngine,
    services::{DefaultSignerConfig, NoOpProgressReporter},
    sign_sequence,
    stages::{COMBINE_RESULTS_STAGE, MULTI_HASH_STAGE, SINGLE_HASH_STAGE},
};

fn stub_engine(
    fanout: usize,
) -> SignerEngine<StubSigner, StubStatefulSigner, DefaultSignerConfig, NoOpProgressReporter> {
    SignerEngine::new(
        StubSigner::new(),
        StubStatefulSigner::new(),
        DefaultSignerConfig::new().with_fanout(fanout),
        NoOpProgressReporter::new(),
    )
}

#[tokio::test]
async fn test_two_inputs_with_fanout_two() {
    let report = stub_engine(2).sign(vec![0, 1]).await.unwrap();

    assert_eq!(
        report.signature,
        "H(0H(0)~H(G(0)))H(1H(0)~H(G(0)))_H(0H(1)~H(G(1)))H(1H(1)~H(G(1)))"
    );
    assert!(report.summary.failures.is_empty());
}

#[tokio::test]
async fn test_single_input_with_default_fanout() {
    let report = stub_engine(DEFAULT_MULTI_HASH_FANOUT).sign(vec![7]).await.unwrap();

    assert_eq!(
        report.signature,
        "H(0H(7)~H(G(7)))H(1H(7)~H(G(7)))H(2H(7)~H(G(7)))\
         H(3H(7)~H(G(7)))H(4H(7)~H(G(7)))H(5H(7)~H(G(7)))"
    );
    assert!(!report.signature.contains('_'));
}

#[tokio::test]
async fn test_default_fanout_matches_hand_built_signature() {
    let inputs = vec![0, 1, 1, 2, 3, 5, 8];
    let report = stub_engine(DEFAULT_MULTI_HASH_FANOUT)
        .sign(inputs.clone())
        .await
        .unwrap();

    assert_eq!(
        report.signature,
        expected_signature(&inputs, DEFAULT_MULTI_HASH_FANOUT)
    );
    // 重複入力もそれぞれ1つの要素として残る
    assert_eq!(report.signature.split('_').count(), inputs.len());
}

#[tokio::test]
async fn test_negative_inputs_use_decimal_text() {
    let report = stub_engine(1).sign(vec![-3]).await.unwrap();

    assert_eq!(report.signature, "H(0H(-3)~H(G(-3)))");
}

#[tokio::test]
async fn test_empty_input_yields_empty_signature() {
    let report = stub_engine(2).sign(Vec::new()).await.unwrap();

    assert_eq!(report.signature, "");
    assert_eq!(report.summary.failure_count(), 0);
}

#[tokio::test]
async fn test_signature_ignores_input_order() {
    let engine = stub_engine(3);

    let forward = engine.sign(vec![4, 9, 10, 11]).await.unwrap();
    let shuffled = engine.sign(vec![11, 4, 10, 9]).await.unwrap();

    assert_eq!(forward.signature, shuffled.signature);
}

#[tokio::test]
async fn test_summary_counts_each_stage() {
    let report = stub_engine(2).sign(vec![0, 1, 2]).await.unwrap();
    let summary = &report.summary;

    let single = summary.stage(SINGLE_HASH_STAGE).unwrap();
    assert_eq!(single.received, 3);
    assert_eq!(single.emitted, 3);

    let multi = summary.stage(MULTI_HASH_STAGE).unwrap();
    assert_eq!(multi.received, 3);
    assert_eq!(multi.emitted, 3);

    let combine = summary.stage(COMBINE_RESULTS_STAGE).unwrap();
    assert_eq!(combine.received, 3);
    assert_eq!(combine.emitted, 1);
}

#[tokio::test]
async fn test_report_serializes_to_json() {
    let report = stub_engine(1).sign(vec![2]).await.unwrap();

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["signature"], "H(0H(2)~H(G(2)))");
    assert_eq!(json["inputs"], serde_json::json!([2]));
    assert!(json["summary"]["stages"].is_array());
}

#[tokio::test]
async fn test_default_backends_are_deterministic() {
    let first = sign_sequence(vec![0, 1, 1, 2, 3, 5, 8]).await.unwrap();
    let second = sign_sequence(vec![8, 5, 3, 2, 1, 1, 0]).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.split('_').count(), 7);
}
