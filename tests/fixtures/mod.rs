// テストユーティリティとスタブ実装
// 結果を手計算できる署名バックエンドとヘルパー
#![allow(dead_code)]


// 公開API
pub use mocks::*;
