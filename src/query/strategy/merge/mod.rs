//! 合并规则
//!
//! 把独立的管道阶段合并进相邻步骤，减少逐元素的开销

pub mod match_where;

pub use match_where::MatchWhereStrategy;
