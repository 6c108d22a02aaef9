// CLI層 - コマンドライン引数の定義
// ユーザーインターフェースとエンジンの橋渡し

pub mod args;

// 公開API
pub use args::Cli;
