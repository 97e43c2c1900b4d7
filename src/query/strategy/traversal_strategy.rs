//! 遍历策略 trait 定义
//!
//! 策略是无状态的转换规则，原地修改管道。
//! 策略之间通过 `relative_order` 声明相对顺序，由注册表统一解析。

use std::fmt;

use crate::core::error::RewriteResult;
use crate::query::traversal::pipeline::Pipeline;

/// 相对于另一个策略的应用顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyOrder {
    /// 必须先于对方应用
    Before,
    /// 必须晚于对方应用
    After,
    /// 与对方无顺序要求
    #[default]
    Unordered,
}

/// 遍历策略 trait
///
/// 所有重写策略必须实现此 trait。策略不持有每次调用的状态，
/// 所有可变状态都在被重写的管道中。
///
/// # 示例
/// ```rust
/// use graphdb_traversal::core::RewriteResult;
/// use graphdb_traversal::query::strategy::TraversalStrategy;
/// use graphdb_traversal::query::traversal::Pipeline;
///
/// #[derive(Debug)]
/// struct NoopStrategy;
///
/// impl TraversalStrategy for NoopStrategy {
///     fn name(&self) -> &'static str { "NoopStrategy" }
///
///     fn apply(&self, _pipeline: &mut Pipeline) -> RewriteResult<bool> {
///         Ok(false)
///     }
/// }
/// ```
pub trait TraversalStrategy: fmt::Debug + Send + Sync {
    /// 策略名称，在注册表内唯一
    fn name(&self) -> &'static str;

    /// 相对于名为 `other` 的策略的应用顺序
    fn relative_order(&self, _other: &str) -> StrategyOrder {
        StrategyOrder::Unordered
    }

    /// 应用策略（原地修改）
    ///
    /// # 返回
    /// - `Ok(true)`: 管道被修改
    /// - `Ok(false)`: 不匹配，未修改
    /// - `Err(e)`: 重写失败，中止该查询的编译
    fn apply(&self, pipeline: &mut Pipeline) -> RewriteResult<bool>;
}
