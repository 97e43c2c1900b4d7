// 遍历查询模块
//
// 管道的构建、重写和编译：
// - traversal: 步骤模型与管道容器
// - strategy: 重写策略及其顺序框架
// - compiler: 重写阶段入口

pub mod compiler;
pub mod strategy;
pub mod traversal;

pub use compiler::TraversalCompiler;
pub use crate::core::{QueryError, QueryResult};
