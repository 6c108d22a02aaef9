// Producer - 入力シーケンスの配信機能

use super::queue::QueueSender;
use crate::core::{PipelineResult, StageReport};

/// ソースステージの名前
pub const SOURCE_STAGE: &str = "source";

/// Producer: 入力値を順番に先頭キューへ送信
///
/// 戻った時点で`queue`がドロップされ、先頭キューが閉じる。
pub async fn feed_source<T: Send>(
    items: Vec<T>,
    queue: QueueSender<T>,
) -> PipelineResult<StageReport> {
    let mut report = StageReport::new(SOURCE_STAGE);
    report.received = items.len();

    for item in items {
        if queue.send(item).is_err() {
            // チャンネルが閉じられた場合は正常終了
            break;
        }
        report.emitted += 1;
    }

    Ok(report)
}
