// config.rs
// 归约器全局配置结构体及其默认实现，包含拆分策略、工作线程数和顺序累加阈值。
use crate::error::{Error, Result};
use crate::task_splitter::SplitStrategy;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 归约器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReducerConfig {
    /// 拆分策略
    #[serde(default = "default_strategy")]
    pub strategy: SplitStrategy,
    /// 工作线程数，0表示按可用并行度自动选择
    #[serde(default)]
    pub num_workers: usize,
    /// 顺序累加阈值：区间长度不超过该值时不再拆分
    #[serde(default = "default_sequential_cutoff")]
    pub sequential_cutoff: usize,
}

fn default_strategy() -> SplitStrategy {
    SplitStrategy::Flat
}

fn default_sequential_cutoff() -> usize {
    4096
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            num_workers: 0,
            sequential_cutoff: default_sequential_cutoff(),
        }
    }
}

impl ReducerConfig {
    /// 从JSON配置文件加载配置，文件缺失或格式不合法时返回错误
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigError(format!(
                "未找到配置文件 {}",
                path.display()
            )));
        }
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let config: ReducerConfig = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("解析配置文件失败: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置参数
    pub fn validate(&self) -> Result<()> {
        if self.sequential_cutoff == 0 {
            return Err(Error::ConfigError(
                "顺序累加阈值必须大于等于1".to_string(),
            ));
        }
        Ok(())
    }

    /// 实际工作线程数：配置为0时取可用并行度
    pub fn worker_count(&self) -> usize {
        if self.num_workers > 0 {
            self.num_workers
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }
}
