// テスト用の設定モック実装

use super::traits::ProcessingConfig;

pub struct MockProcessingConfig {
    pub workers: usize,
    pub buffer_size: usize,
}

impl ProcessingConfig for MockProcessingConfig {
    fn worker_count(&self) -> usize {
        self.workers
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_config_trait() {
        let config = MockProcessingConfig {
            workers: 3,
            buffer_size: 1,
        };

        assert_eq!(config.worker_count(), 3);
        assert_eq!(config.channel_buffer_size(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_processing_config_as_trait_object() {
        let config = MockProcessingConfig {
            workers: 0,
            buffer_size: 10,
        };

        let config_ref: &dyn ProcessingConfig = &config;
        assert!(config_ref.validate().is_err());
    }
}
