//! 运行配置
//!
//! 可从 JSON 文件加载，命令行参数再覆盖其中的字段。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 分析器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 日志过滤规则（`RUST_LOG` 语法），环境变量优先
    pub log_filter: String,
    /// 距离矩阵使用的线程数，`None` 表示由 rayon 决定
    pub threads: Option<usize>,
    /// 以 JSON 输出结果
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            threads: None,
            json_output: false,
        }
    }
}

impl Config {
    /// 从 JSON 文件加载，缺省字段取默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(Error::ConfigError("log_filter 不能为空".to_string()));
        }
        if self.threads == Some(0) {
            return Err(Error::ConfigError("threads 必须大于 0".to_string()));
        }
        Ok(())
    }
}
