//! 编译完成的管道
//!
//! 重写阶段结束后，管道以只读形式交给执行器。
//! CompiledPipeline 只暴露 Pipeline 的只读接口（`steps_of`、`next`、`iter`），
//! 因此重写结束后不可能再修改任何步骤。

use std::fmt;
use std::ops::Deref;

use crate::query::strategy::RewriteStats;
use crate::query::traversal::pipeline::Pipeline;

#[derive(Debug, Clone)]
pub struct CompiledPipeline {
    pipeline: Pipeline,
    stats: RewriteStats,
}

impl CompiledPipeline {
    pub(crate) fn new(pipeline: Pipeline, stats: RewriteStats) -> Self {
        Self { pipeline, stats }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// 本次重写的统计信息
    pub fn stats(&self) -> &RewriteStats {
        &self.stats
    }
}

impl Deref for CompiledPipeline {
    type Target = Pipeline;

    fn deref(&self) -> &Self::Target {
        &self.pipeline
    }
}

impl fmt::Display for CompiledPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pipeline, f)
    }
}
