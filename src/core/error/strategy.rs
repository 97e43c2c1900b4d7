//! 策略注册错误类型
//!
//! 在注册阶段（任何管道重写开始之前）检测到的配置错误

use thiserror::Error;

/// 策略注册结果类型别名
pub type StrategyResult<T> = Result<T, StrategyError>;

/// 策略注册错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("策略顺序声明存在环: {}", .0.join(" -> "))]
    CycleDetected(Vec<String>),

    #[error("策略重复注册: {0}")]
    Duplicate(String),

    #[error("未知的策略: {0}")]
    Unknown(String),
}

impl StrategyError {
    pub fn cycle_detected<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CycleDetected(names.into_iter().map(Into::into).collect())
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate(name.into())
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown(name.into())
    }
}
