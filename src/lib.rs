//! GraphDB 遍历重写层
//!
//! 遍历以步骤管道的形式表示，在交给执行器之前由一组有序的策略原地重写。
//!
//! - `query::traversal`: 步骤模型与管道容器
//! - `query::strategy`: 策略框架与内置策略
//! - `query::compiler`: 编译入口，产出只读的 `CompiledPipeline`

pub mod config;
pub mod core;
pub mod query;
pub mod utils;
