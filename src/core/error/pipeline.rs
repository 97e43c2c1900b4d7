//! 管道结构错误类型
//!
//! 涵盖对管道进行结构编辑（查询、删除、插入步骤）时的编程错误

use thiserror::Error;

use crate::query::traversal::pipeline::StepId;

/// 管道操作结果类型别名
pub type PipelineResult<T> = Result<T, PipelineError>;

/// 管道结构错误类型
///
/// 这类错误属于调用方的编程错误，而非数据错误：
/// 引用了不在管道中的步骤时立即失败，绝不静默忽略。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("步骤不存在于管道中: {0}")]
    StepNotFound(StepId),

    #[error("步骤不是 Match 步骤: {0}")]
    NotAMatchStep(StepId),
}

impl PipelineError {
    /// 出错的步骤句柄
    pub fn step_id(&self) -> StepId {
        match self {
            PipelineError::StepNotFound(id) | PipelineError::NotAMatchStep(id) => *id,
        }
    }
}
