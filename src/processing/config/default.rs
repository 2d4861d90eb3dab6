// デフォルト設定実装

use super::traits::ProcessingConfig;

/// ホストのCPU数から1つ空けたワーカー数（最低1）
pub fn default_worker_count() -> usize {
    num_cpus::get().saturating_sub(1).max(1)
}

#[derive(Debug, Clone)]
pub struct DefaultProcessingConfig {
    worker_count: usize,
    buffer_size: usize,
}

impl DefaultProcessingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
}

impl Default for DefaultProcessingConfig {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
            buffer_size: 100,
        }
    }
}

impl ProcessingConfig for DefaultProcessingConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }
}
