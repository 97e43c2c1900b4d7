use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::TraversalResult;

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphdb-traversal".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 重写阶段配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RewriteConfig {
    /// 按名称禁用的内置策略
    pub disabled_strategies: Vec<String>,
    /// 批量编译时是否并行重写
    pub parallel: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            disabled_strategies: Vec::new(),
            parallel: true,
        }
    }
}

impl RewriteConfig {
    pub fn is_disabled(&self, strategy: &str) -> bool {
        self.disabled_strategies.iter().any(|name| name == strategy)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub rewrite: RewriteConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> TraversalResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> TraversalResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
