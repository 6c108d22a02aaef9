// ステージ層 - 署名パイプラインを構成する各段の処理

pub mod combine;
pub mod multi_hash;
pub mod single_hash;

pub use combine::{combine_sorted, CombineResults, COMBINE_RESULTS_STAGE};
pub use multi_hash::{MultiHash, MULTI_HASH_STAGE};
pub use single_hash::{SingleHash, SINGLE_HASH_STAGE};
