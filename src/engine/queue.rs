// Queue - ステージ間の無制限キュー
// 送信側が全てドロップされた時点でキューは閉じ、受信側はNoneを終端として扱う

use tokio::sync::mpsc;

pub type QueueSender<T> = mpsc::UnboundedSender<T>;
pub type QueueReceiver<T> = mpsc::UnboundedReceiver<T>;

/// 新しいキューを作成
pub fn queue<T>() -> (QueueSender<T>, QueueReceiver<T>) {
    mpsc::unbounded_channel()
}
