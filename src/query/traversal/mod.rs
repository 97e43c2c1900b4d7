//! 遍历管道模型
//!
//! - `steps`: 步骤模型
//! - `pipeline`: 管道容器与结构编辑
//! - `compiled`: 重写阶段结束后交给执行器的只读管道

pub mod compiled;
pub mod pipeline;
pub mod steps;

pub use compiled::CompiledPipeline;
pub use pipeline::{Pipeline, RemovedStep, StepId};
pub use steps::{
    BiPredicate, MatchStep, OpaqueStep, SelectOneStep, SelectStep, Step, StepFunction, StepKind,
    WhereForm, WhereStep,
};
