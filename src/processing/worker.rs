// Worker - 単一アイテム処理機能
//
// デコード → フィルタ → 出力パス決定 → エンコード・書き込み。
// どの段階で失敗してもそのアイテムだけを打ち切り、結果は ItemOutcome で返す。

use crate::core::{ItemError, ItemOutcome, WorkItem};
use crate::edge_detection::EdgeDetector;
use crate::image_loader::ImageLoaderBackend;
use crate::storage::ImageWriterBackend;
use std::path::PathBuf;

/// 単一アイテムの処理
pub fn process_item<L, D, W>(loader: &L, detector: &D, writer: &W, item: &WorkItem) -> ItemOutcome
where
    L: ImageLoaderBackend + ?Sized,
    D: EdgeDetector + ?Sized,
    W: ImageWriterBackend + ?Sized,
{
    match run_stages(loader, detector, writer, item) {
        Ok((output, dimensions)) => ItemOutcome::Success {
            source: item.source().clone(),
            output,
            dimensions,
        },
        Err(error) if error.is_decode_failure() => ItemOutcome::LoadFailed {
            source: item.source().clone(),
            reason: error.reason(),
        },
        Err(error) => ItemOutcome::Failed {
            source: item.source().clone(),
            error: error.to_string(),
        },
    }
}

fn run_stages<L, D, W>(
    loader: &L,
    detector: &D,
    writer: &W,
    item: &WorkItem,
) -> Result<(PathBuf, (u32, u32)), ItemError>
where
    L: ImageLoaderBackend + ?Sized,
    D: EdgeDetector + ?Sized,
    W: ImageWriterBackend + ?Sized,
{
    let source = item.source().as_path();

    let gray = loader
        .load_grayscale(source)
        .map_err(|e| ItemError::decode(source, e))?;

    let edges = detector.detect(&gray);
    if edges.dimensions() != gray.dimensions() {
        return Err(ItemError::DimensionMismatch {
            expected: gray.dimensions(),
            actual: edges.dimensions(),
        });
    }

    let output = item.output_path();
    writer
        .write(&edges, &output)
        .map_err(|e| ItemError::write(&output, e))?;

    Ok((output, edges.dimensions()))
}
