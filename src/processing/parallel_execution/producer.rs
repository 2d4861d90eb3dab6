// Producer - 作業アイテム配信機能

use crate::core::WorkItem;
use tokio::sync::mpsc;

/// Producer: 作業アイテムを共有キューへ投入
///
/// 全件送り終えると送信側をドロップし、ワーカーにキューの終了を知らせる。
pub fn spawn_producer(
    items: Vec<WorkItem>,
    work_tx: mpsc::Sender<WorkItem>,
) -> tokio::task::JoinHandle<usize> {
    tokio::spawn(async move {
        let mut sent = 0;
        for item in items {
            if work_tx.send(item).await.is_err() {
                // 受信側が全て終了している
                break;
            }
            sent += 1;
        }
        sent
    })
}
