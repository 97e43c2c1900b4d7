pub mod error;

// 错误和结果类型
pub use error::{
    PipelineError, PipelineResult, QueryError, QueryResult, RewriteError, RewriteResult,
    StrategyError, StrategyResult, TraversalError, TraversalResult,
};
