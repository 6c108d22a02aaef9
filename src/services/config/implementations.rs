// 設定管理の具象実装

use crate::core::{PipelineError, PipelineResult, SignerConfig, DEFAULT_MULTI_HASH_FANOUT};

/// デフォルト設定実装
///
/// 既定ではワーカー数無制限（アイテムごとに1ワーカー）。
#[derive(Debug, Clone)]
pub struct DefaultSignerConfig {
    fanout: usize,
    max_in_flight: Option<usize>,
    enable_progress: bool,
}

impl DefaultSignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// CPU数に応じてワーカー数を制限するプリセット
    pub fn bounded() -> Self {
        Self::default().with_max_in_flight(Some(num_cpus::get().max(1) * 2))
    }

    pub fn with_fanout(mut self, fanout: usize) -> Self {
        self.fanout = fanout;
        self
    }

    pub fn with_max_in_flight(mut self, max_in_flight: Option<usize>) -> Self {
        self.max_in_flight = max_in_flight;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultSignerConfig {
    fn default() -> Self {
        Self {
            fanout: DEFAULT_MULTI_HASH_FANOUT,
            max_in_flight: None,
            enable_progress: true,
        }
    }
}

impl SignerConfig for DefaultSignerConfig {
    fn multi_hash_fanout(&self) -> usize {
        self.fanout
    }

    fn max_in_flight_workers(&self) -> Option<usize> {
        self.max_in_flight
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

/// 設定値の検証
pub fn validate_config<C: SignerConfig + ?Sized>(config: &C) -> PipelineResult<()> {
    if config.multi_hash_fanout() == 0 {
        return Err(PipelineError::configuration(
            "MultiHashのサブワーカー数は1以上である必要があります",
        ));
    }

    if config.max_in_flight_workers() == Some(0) {
        return Err(PipelineError::configuration(
            "同時実行ワーカー数の上限は1以上である必要があります",
        ));
    }

    Ok(())
}
