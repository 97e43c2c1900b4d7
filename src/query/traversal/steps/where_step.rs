//! Where 步骤实现
//!
//! WhereStep 有两种互斥的形式：
//! - 约束形式：一个针对当前元素求值的嵌套子管道，可以被融合进 Match
//! - 双谓词形式：用二元谓词比较两个已绑定的值，不可融合

use std::fmt;

use crate::query::traversal::pipeline::Pipeline;

/// 双谓词比较运算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiPredicate {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl BiPredicate {
    pub fn name(&self) -> &'static str {
        match self {
            BiPredicate::Eq => "eq",
            BiPredicate::Neq => "neq",
            BiPredicate::Lt => "lt",
            BiPredicate::Lte => "lte",
            BiPredicate::Gt => "gt",
            BiPredicate::Gte => "gte",
        }
    }
}

impl fmt::Display for BiPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where 步骤的形式
#[derive(Debug, Clone, PartialEq)]
pub enum WhereForm {
    /// 自包含的过滤约束
    Constraint(Pipeline),
    /// 按键比较两个已绑定的值
    BiPredicate {
        left_key: String,
        right_key: String,
        predicate: BiPredicate,
    },
}

/// Where 过滤步骤
#[derive(Debug, Clone, PartialEq)]
pub struct WhereStep {
    form: WhereForm,
}

impl WhereStep {
    /// 创建约束形式的 Where 步骤
    pub fn constraint(constraint: Pipeline) -> Self {
        Self {
            form: WhereForm::Constraint(constraint),
        }
    }

    /// 创建双谓词形式的 Where 步骤
    pub fn bi_predicate(
        left_key: impl Into<String>,
        right_key: impl Into<String>,
        predicate: BiPredicate,
    ) -> Self {
        Self {
            form: WhereForm::BiPredicate {
                left_key: left_key.into(),
                right_key: right_key.into(),
                predicate,
            },
        }
    }

    pub fn form(&self) -> &WhereForm {
        &self.form
    }

    pub fn has_bi_predicate(&self) -> bool {
        matches!(self.form, WhereForm::BiPredicate { .. })
    }

    /// 只有约束形式可以融合进 Match
    pub fn is_fusible(&self) -> bool {
        matches!(self.form, WhereForm::Constraint(_))
    }

    /// 借用约束子管道
    pub fn constraint_pipeline(&self) -> Option<&Pipeline> {
        match &self.form {
            WhereForm::Constraint(p) => Some(p),
            WhereForm::BiPredicate { .. } => None,
        }
    }

    /// 转移约束子管道的所有权
    ///
    /// 双谓词形式返回 `None`
    pub fn into_constraint(self) -> Option<Pipeline> {
        match self.form {
            WhereForm::Constraint(p) => Some(p),
            WhereForm::BiPredicate { .. } => None,
        }
    }
}

impl fmt::Display for WhereStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.form {
            WhereForm::Constraint(p) => write!(f, "Where({})", p),
            WhereForm::BiPredicate {
                left_key,
                right_key,
                predicate,
            } => write!(f, "Where({} {} {})", predicate, left_key, right_key),
        }
    }
}
