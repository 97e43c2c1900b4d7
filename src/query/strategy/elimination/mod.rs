//! 消除规则
//!
//! 移除对结果没有影响的步骤

pub mod identity_reduction;

pub use identity_reduction::IdentityReductionStrategy;
