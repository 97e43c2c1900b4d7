//! 策略注册表
//!
//! 注册表是显式传入编译上下文的值，而不是全局单例。
//! 每次注册时都会重新解析策略间声明的相对顺序：
//! 顺序矛盾（环）或重名在注册阶段报告，绝不会拖到重写阶段。

use rayon::prelude::*;

use crate::config::RewriteConfig;
use crate::core::error::{RewriteResult, StrategyError, StrategyResult};
use crate::query::strategy::elimination::IdentityReductionStrategy;
use crate::query::strategy::merge::MatchWhereStrategy;
use crate::query::strategy::ordering::TopologicalOrder;
use crate::query::strategy::traversal_strategy::{StrategyOrder, TraversalStrategy};
use crate::query::traversal::pipeline::Pipeline;

/// 一次重写的统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub strategies_applied: usize,
    /// 修改了管道的策略，按应用顺序
    pub strategies_changed: Vec<&'static str>,
    pub steps_before: usize,
    pub steps_after: usize,
}

impl RewriteStats {
    fn start(steps_before: usize) -> Self {
        Self {
            steps_before,
            steps_after: steps_before,
            ..Self::default()
        }
    }

    fn record(&mut self, strategy: &'static str, changed: bool) {
        self.strategies_applied += 1;
        if changed {
            self.strategies_changed.push(strategy);
        }
    }

    pub fn changed(&self) -> bool {
        !self.strategies_changed.is_empty()
    }
}

/// 内置策略名称
pub const BUILTIN_STRATEGIES: [&str; 2] = [
    IdentityReductionStrategy::NAME,
    MatchWhereStrategy::NAME,
];

/// 策略注册表
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    /// 按注册顺序保存
    strategies: Vec<Box<dyn TraversalStrategy>>,
    /// 解析后的应用顺序（`strategies` 的下标）
    order: Vec<usize>,
}

impl StrategyRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建包含全部内置策略的注册表
    pub fn with_defaults() -> StrategyResult<Self> {
        Self::from_config(&RewriteConfig::default())
    }

    /// 根据配置创建注册表，跳过被禁用的内置策略
    pub fn from_config(config: &RewriteConfig) -> StrategyResult<Self> {
        if let Some(unknown) = config
            .disabled_strategies
            .iter()
            .find(|name| !BUILTIN_STRATEGIES.contains(&name.as_str()))
        {
            return Err(StrategyError::unknown(unknown.as_str()));
        }

        let mut registry = Self::new();
        for strategy in Self::builtin_strategies() {
            if config.is_disabled(strategy.name()) {
                log::info!("策略 {} 已被配置禁用", strategy.name());
                continue;
            }
            registry.register_boxed(strategy)?;
        }
        Ok(registry)
    }

    fn builtin_strategies() -> Vec<Box<dyn TraversalStrategy>> {
        vec![
            Box::new(IdentityReductionStrategy::new()),
            Box::new(MatchWhereStrategy::new()),
        ]
    }

    /// 注册策略
    pub fn register<S: TraversalStrategy + 'static>(&mut self, strategy: S) -> StrategyResult<()> {
        self.register_boxed(Box::new(strategy))
    }

    /// 注册已装箱的策略
    ///
    /// 重名或使顺序声明出现环时返回错误，且注册表保持不变
    pub fn register_boxed(&mut self, strategy: Box<dyn TraversalStrategy>) -> StrategyResult<()> {
        if self.contains(strategy.name()) {
            return Err(StrategyError::duplicate(strategy.name()));
        }

        self.strategies.push(strategy);
        match Self::resolve(&self.strategies) {
            Ok(order) => {
                self.order = order;
                log::debug!("策略应用顺序: {:?}", self.ordered_names());
                Ok(())
            }
            Err(err) => {
                self.strategies.pop();
                log::warn!("拒绝注册策略: {}", err);
                Err(err)
            }
        }
    }

    /// 把两两之间的顺序声明解析为线性顺序
    fn resolve(strategies: &[Box<dyn TraversalStrategy>]) -> StrategyResult<Vec<usize>> {
        let mut edges = Vec::new();
        for (i, strategy) in strategies.iter().enumerate() {
            for (j, other) in strategies.iter().enumerate() {
                if i == j {
                    continue;
                }
                match strategy.relative_order(other.name()) {
                    StrategyOrder::Before => edges.push((i, j)),
                    StrategyOrder::After => edges.push((j, i)),
                    StrategyOrder::Unordered => {}
                }
            }
        }

        TopologicalOrder::sort_kahn(strategies.len(), &edges).map_err(|cycle| {
            StrategyError::cycle_detected(cycle.into_iter().map(|i| strategies[i].name()))
        })
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.strategies.iter().any(|s| s.name() == name)
    }

    /// 按应用顺序遍历策略
    pub fn iter(&self) -> impl Iterator<Item = &dyn TraversalStrategy> {
        self.order.iter().map(move |&i| self.strategies[i].as_ref())
    }

    /// 按应用顺序返回策略名称
    pub fn ordered_names(&self) -> Vec<&'static str> {
        self.iter().map(|s| s.name()).collect()
    }

    /// 按解析后的顺序依次应用所有策略
    ///
    /// 任一策略失败即中止，错误交给调用方作为编译失败处理
    pub fn apply(&self, pipeline: &mut Pipeline) -> RewriteResult<RewriteStats> {
        let mut stats = RewriteStats::start(pipeline.len());
        log::trace!("重写前管道: {}", pipeline);

        for strategy in self.iter() {
            let changed = strategy.apply(pipeline).map_err(|err| {
                log::error!("策略 {} 执行失败: {}", strategy.name(), err);
                err
            })?;
            log::debug!("应用策略 {}，是否修改: {}", strategy.name(), changed);
            stats.record(strategy.name(), changed);
        }

        stats.steps_after = pipeline.len();
        log::trace!("重写后管道: {}", pipeline);
        Ok(stats)
    }

    /// 并行重写多条互相独立的管道
    ///
    /// 每条管道仍由单个线程独占，策略在其上顺序应用
    pub fn apply_all(&self, pipelines: &mut [Pipeline]) -> Vec<RewriteResult<RewriteStats>> {
        pipelines
            .par_iter_mut()
            .map(|pipeline| self.apply(pipeline))
            .collect()
    }
}
