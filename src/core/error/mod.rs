//! 统一错误处理系统
//!
//! ## 错误分类
//!
//! 1. **结构编辑错误** (`PipelineError`)：查询或删除不存在的步骤，属于编程错误，立即失败
//! 2. **策略顺序错误** (`StrategyError`)：注册阶段检测到的环或重复注册，在任何重写开始前报告
//! 3. **重写错误** (`RewriteError`)：策略执行期间传播出的结构错误
//! 4. **查询错误** (`QueryError`)：交给调用方的编译失败，区别于执行失败
//!
//! `TraversalResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

pub mod pipeline;
pub mod query;
pub mod strategy;

pub use pipeline::{PipelineError, PipelineResult};
pub use query::{QueryError, QueryResult, RewriteError, RewriteResult};
pub use strategy::{StrategyError, StrategyResult};

/// 统一的错误类型
#[derive(Error, Debug, Clone)]
pub enum TraversalError {
    #[error("管道错误: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("策略错误: {0}")]
    Strategy(#[from] StrategyError),

    #[error("重写错误: {0}")]
    Rewrite(#[from] RewriteError),

    #[error("查询错误: {0}")]
    Query(#[from] QueryError),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(String),
}

/// 统一的结果类型
pub type TraversalResult<T> = Result<T, TraversalError>;

impl TraversalError {
    /// 是否属于编译阶段的失败
    ///
    /// 结构错误、顺序错误和重写错误都会中止该查询的编译
    pub fn is_compilation_failure(&self) -> bool {
        match self {
            TraversalError::Pipeline(_)
            | TraversalError::Strategy(_)
            | TraversalError::Rewrite(_) => true,
            TraversalError::Query(q) => q.is_compilation(),
            TraversalError::Config(_) | TraversalError::Io(_) => false,
        }
    }
}

impl From<std::io::Error> for TraversalError {
    fn from(err: std::io::Error) -> Self {
        TraversalError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for TraversalError {
    fn from(err: toml::de::Error) -> Self {
        TraversalError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TraversalError {
    fn from(err: toml::ser::Error) -> Self {
        TraversalError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::traversal::pipeline::StepId;

    #[test]
    fn test_error_conversion() {
        let strategy_err = StrategyError::duplicate("IdentityReductionStrategy");
        let err: TraversalError = strategy_err.into();
        assert!(matches!(err, TraversalError::Strategy(_)));
        assert!(err.is_compilation_failure());
    }

    #[test]
    fn test_rewrite_error_becomes_compilation_error() {
        let rewrite_err: RewriteError = PipelineError::StepNotFound(StepId::detached(7)).into();
        let query_err: QueryError = rewrite_err.into();
        assert!(query_err.is_compilation());
        assert!(query_err.to_string().contains('7'));
    }

    #[test]
    fn test_config_error_is_not_compilation_failure() {
        let err = TraversalError::Config("bad".to_string());
        assert!(!err.is_compilation_failure());
    }
}
