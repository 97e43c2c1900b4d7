//! 移除恒等步骤的策略

use crate::core::error::RewriteResult;
use crate::query::strategy::traversal_strategy::TraversalStrategy;
use crate::query::traversal::pipeline::Pipeline;
use crate::query::traversal::steps::StepKind;

/// 移除恒等步骤的策略
///
/// # 转换示例
///
/// Before:
/// ```text
///   V -> Identity -> out -> Identity
/// ```
///
/// After:
/// ```text
///   V -> out
/// ```
///
/// # 适用条件
///
/// - 顶层管道中的 Identity 步骤（纯直通，不携带状态）
#[derive(Debug)]
pub struct IdentityReductionStrategy;

impl IdentityReductionStrategy {
    pub const NAME: &'static str = "IdentityReductionStrategy";

    /// 创建策略实例
    pub fn new() -> Self {
        Self
    }
}

impl Default for IdentityReductionStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalStrategy for IdentityReductionStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, pipeline: &mut Pipeline) -> RewriteResult<bool> {
        let identities = pipeline.steps_of(StepKind::Identity);
        for id in &identities {
            pipeline.remove(*id)?;
        }

        if !identities.is_empty() {
            log::debug!("移除了 {} 个 Identity 步骤", identities.len());
        }
        Ok(!identities.is_empty())
    }
}
