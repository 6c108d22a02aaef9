// Consumer - 最終キューを排出するシンク

use super::queue::QueueReceiver;

/// 最終キューが閉じるまで全ての値を受信
pub async fn drain_sink<T>(mut queue: QueueReceiver<T>) -> Vec<T> {
    let mut values = Vec::new();
    while let Some(value) = queue.recv().await {
        values.push(value);
    }
    values
}
