use crate::config::RewriteConfig;
use crate::core::error::{QueryError, QueryResult};
use crate::query::strategy::StrategyRegistry;
use crate::query::traversal::compiled::CompiledPipeline;
use crate::query::traversal::pipeline::Pipeline;

/// 遍历编译器 - 负责重写阶段
///
/// 接收构建好的管道，按注册表解析出的顺序应用所有策略，
/// 产出只读的 `CompiledPipeline` 交给执行器。
/// 重写期间的任何错误都作为该查询的编译失败返回，
/// 与执行失败区分开。
#[derive(Debug)]
pub struct TraversalCompiler {
    registry: StrategyRegistry,
    parallel: bool,
}

impl TraversalCompiler {
    /// 使用给定注册表创建编译器
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            registry,
            parallel: true,
        }
    }

    /// 使用内置策略创建编译器
    pub fn with_defaults() -> QueryResult<Self> {
        Ok(Self::new(StrategyRegistry::with_defaults()?))
    }

    /// 根据重写配置创建编译器
    pub fn from_config(config: &RewriteConfig) -> QueryResult<Self> {
        let registry = StrategyRegistry::from_config(config)?;
        Ok(Self {
            registry,
            parallel: config.parallel,
        })
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// 编译单条管道
    pub fn compile(&self, mut pipeline: Pipeline) -> QueryResult<CompiledPipeline> {
        let stats = self.registry.apply(&mut pipeline).map_err(|e| {
            log::warn!("管道编译失败: {}", e);
            QueryError::from(e)
        })?;
        log::debug!(
            "管道编译完成: {} 个步骤 -> {} 个步骤",
            stats.steps_before,
            stats.steps_after
        );
        Ok(CompiledPipeline::new(pipeline, stats))
    }

    /// 批量编译互相独立的管道
    ///
    /// 结果与输入一一对应，单条管道失败不影响其他管道
    pub fn compile_batch(&self, pipelines: Vec<Pipeline>) -> Vec<QueryResult<CompiledPipeline>> {
        if !self.parallel {
            return pipelines.into_iter().map(|p| self.compile(p)).collect();
        }

        let mut pipelines = pipelines;
        let results = self.registry.apply_all(&mut pipelines);
        pipelines
            .into_iter()
            .zip(results)
            .map(|(pipeline, result)| {
                result
                    .map(|stats| CompiledPipeline::new(pipeline, stats))
                    .map_err(QueryError::from)
            })
            .collect()
    }
}
