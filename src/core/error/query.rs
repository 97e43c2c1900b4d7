//! 重写与查询层错误类型
//!
//! 重写阶段的错误最终都以"编译失败"的形式交给调用方，
//! 与执行阶段的失败严格区分

use thiserror::Error;

use crate::core::error::pipeline::PipelineError;
use crate::core::error::strategy::StrategyError;

/// 重写结果类型别名
pub type RewriteResult<T> = Result<T, RewriteError>;

/// 重写错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("管道结构错误: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("策略 {strategy} 执行失败: {message}")]
    StrategyFailed {
        strategy: &'static str,
        message: String,
    },
}

impl RewriteError {
    pub fn strategy_failed(strategy: &'static str, message: impl Into<String>) -> Self {
        Self::StrategyFailed {
            strategy,
            message: message.into(),
        }
    }
}

/// 查询操作结果类型别名
pub type QueryResult<T> = Result<T, QueryError>;

/// 查询层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("编译错误: {0}")]
    Compilation(String),

    #[error("执行错误: {0}")]
    Execution(String),
}

impl QueryError {
    pub fn is_compilation(&self) -> bool {
        matches!(self, QueryError::Compilation(_))
    }
}

impl From<RewriteError> for QueryError {
    fn from(e: RewriteError) -> Self {
        QueryError::Compilation(e.to_string())
    }
}

impl From<StrategyError> for QueryError {
    fn from(e: StrategyError) -> Self {
        QueryError::Compilation(e.to_string())
    }
}

impl From<PipelineError> for QueryError {
    fn from(e: PipelineError) -> Self {
        QueryError::Compilation(RewriteError::from(e).to_string())
    }
}
