//! 不透明步骤
//!
//! 重写层不理解的所有步骤种类（out、has、dedup ...）都以 OpaqueStep 表示。
//! 重写策略不会修改它们，也不会跨越它们进行融合。

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueStep {
    name: String,
    args: Vec<String>,
}

impl OpaqueStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for OpaqueStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}({})", self.name, self.args.join(","))
        }
    }
}
