use crate::core::{BatchError, ImagePath};
use std::path::Path;
use walkdir::WalkDir;

/// 対象とする拡張子（小文字、ドットなし）
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

pub struct FileScanner;

impl FileScanner {
    /// 入力ディレクトリ直下の画像ファイルを列挙する
    ///
    /// サブディレクトリには降りない。順序はファイルシステムの列挙順のまま。
    pub fn scan_directory(directory: &Path) -> Result<Vec<ImagePath>, BatchError> {
        if directory.is_file() {
            return Err(BatchError::NotADirectory {
                path: directory.to_path_buf(),
            });
        }

        let mut image_paths = Vec::new();

        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| BatchError::discovery(directory, e))?;

            // シンボリックリンク先がディレクトリの場合も除外する
            if entry.path().is_dir() {
                continue;
            }

            let path = ImagePath::new(entry.into_path());
            if path
                .normalized_extension()
                .is_some_and(|ext| Self::is_image_extension(&ext))
            {
                image_paths.push(path);
            }
        }

        Ok(image_paths)
    }

    /// 出力ディレクトリを（親も含めて）作成する。既にあれば何もしない
    pub fn prepare_output_dir(directory: &Path) -> Result<(), BatchError> {
        std::fs::create_dir_all(directory)
            .map_err(|e| BatchError::output_directory(directory, e))
    }

    fn is_image_extension(extension: &str) -> bool {
        SUPPORTED_EXTENSIONS.contains(&extension)
    }
}
