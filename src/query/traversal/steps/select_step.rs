//! Select / SelectOne 投影步骤实现
//!
//! 投影步骤可以携带一个可选的步骤函数（投影后的变换）。
//! 带有非恒等步骤函数的投影会改变后续约束可见的绑定值。

use std::fmt;

/// 投影后的变换
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StepFunction {
    /// 恒等变换，等同于没有步骤函数
    Identity,
    /// 取元素 ID
    Id,
    /// 取元素标签
    Label,
    /// 取指定属性值
    Property(String),
    /// 重命名投影键
    Rename(String),
}

impl StepFunction {
    pub fn is_identity(&self) -> bool {
        matches!(self, StepFunction::Identity)
    }
}

impl fmt::Display for StepFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepFunction::Identity => f.write_str("identity"),
            StepFunction::Id => f.write_str("id"),
            StepFunction::Label => f.write_str("label"),
            StepFunction::Property(key) => write!(f, "values({})", key),
            StepFunction::Rename(name) => write!(f, "as({})", name),
        }
    }
}

fn is_transform(step_function: &Option<StepFunction>) -> bool {
    step_function
        .as_ref()
        .map_or(false, |function| !function.is_identity())
}

/// 投影一个或多个已绑定值的步骤
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStep {
    keys: Vec<String>,
    step_function: Option<StepFunction>,
}

impl SelectStep {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            step_function: None,
        }
    }

    pub fn with_step_function(mut self, step_function: StepFunction) -> Self {
        self.step_function = Some(step_function);
        self
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn step_function(&self) -> Option<&StepFunction> {
        self.step_function.as_ref()
    }

    /// 是否带有非恒等的步骤函数
    pub fn has_step_function(&self) -> bool {
        is_transform(&self.step_function)
    }
}

impl fmt::Display for SelectStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Select({}", self.keys.join(","))?;
        if let Some(function) = &self.step_function {
            write!(f, "|by({})", function)?;
        }
        f.write_str(")")
    }
}

/// 只投影一个已绑定值的步骤
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOneStep {
    key: String,
    step_function: Option<StepFunction>,
}

impl SelectOneStep {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            step_function: None,
        }
    }

    pub fn with_step_function(mut self, step_function: StepFunction) -> Self {
        self.step_function = Some(step_function);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn step_function(&self) -> Option<&StepFunction> {
        self.step_function.as_ref()
    }

    /// 是否带有非恒等的步骤函数
    pub fn has_step_function(&self) -> bool {
        is_transform(&self.step_function)
    }
}

impl fmt::Display for SelectOneStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SelectOne({}", self.key)?;
        if let Some(function) = &self.step_function {
            write!(f, "|by({})", function)?;
        }
        f.write_str(")")
    }
}
