//! 步骤模型
//!
//! - `step_enum`: 封闭的 Step 枚举与 StepKind
//! - `where_step`: 过滤步骤（约束 / 双谓词）
//! - `select_step`: 投影步骤与步骤函数
//! - `match_step`: 模式匹配步骤
//! - `opaque_step`: 重写层不理解的其他步骤

pub mod match_step;
pub mod opaque_step;
pub mod select_step;
pub mod step_enum;
pub mod where_step;

pub use match_step::MatchStep;
pub use opaque_step::OpaqueStep;
pub use select_step::{SelectOneStep, SelectStep, StepFunction};
pub use step_enum::{Step, StepKind};
pub use where_step::{BiPredicate, WhereForm, WhereStep};
