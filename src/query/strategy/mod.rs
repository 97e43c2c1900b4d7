//! 遍历策略模块
//!
//! 管道在交给执行器之前，由一组有序的策略原地重写。
//!
//! # 模块结构
//!
//! - `traversal_strategy`: 策略 trait 与相对顺序声明
//! - `ordering`: 顺序声明的拓扑排序
//! - `registry`: 策略注册表，解析顺序并依次应用
//! - `elimination`: 消除规则
//! - `merge`: 合并规则
//!
//! # 使用示例
//!
//! ```rust
//! use graphdb_traversal::query::strategy::StrategyRegistry;
//! use graphdb_traversal::query::traversal::{Pipeline, Step};
//!
//! let registry = StrategyRegistry::with_defaults().expect("内置策略注册应成功");
//! let mut pipeline = Pipeline::from_steps([
//!     Step::match_step("a", Vec::new()),
//!     Step::where_constraint(Pipeline::from_steps([Step::other("out")])),
//! ]);
//! registry.apply(&mut pipeline).expect("重写应成功");
//! assert_eq!(pipeline.len(), 1);
//! ```

pub mod elimination;
pub mod merge;
pub mod ordering;
pub mod registry;
pub mod traversal_strategy;

pub use elimination::IdentityReductionStrategy;
pub use merge::MatchWhereStrategy;
pub use ordering::TopologicalOrder;
pub use registry::{RewriteStats, StrategyRegistry, BUILTIN_STRATEGIES};
pub use traversal_strategy::{StrategyOrder, TraversalStrategy};
