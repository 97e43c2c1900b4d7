//! Match 模式匹配步骤实现
//!
//! MatchStep 把每个子句作为独立约束针对当前绑定求值，
//! 只有满足全部子句（合取）的元素才会保留。

use std::fmt;

use crate::query::traversal::pipeline::Pipeline;

/// 模式匹配步骤
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStep {
    start_key: String,
    clauses: Vec<Pipeline>,
}

impl MatchStep {
    /// 创建新的 Match 步骤
    pub fn new(start_key: impl Into<String>, clauses: Vec<Pipeline>) -> Self {
        Self {
            start_key: start_key.into(),
            clauses,
        }
    }

    pub fn start_key(&self) -> &str {
        &self.start_key
    }

    /// 子句，按加入顺序排列
    pub fn clauses(&self) -> &[Pipeline] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// 在子句列表末尾追加一个约束
    pub fn add_clause(&mut self, clause: Pipeline) {
        self.clauses.push(clause);
    }
}

impl fmt::Display for MatchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match({})[", self.start_key)?;
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", clause)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::traversal::steps::Step;

    #[test]
    fn test_add_clause_appends_in_order() {
        let mut step = MatchStep::new("a", vec![Pipeline::from_steps([Step::other("out")])]);
        step.add_clause(Pipeline::from_steps([Step::other("in")]));
        step.add_clause(Pipeline::from_steps([Step::other("both")]));

        assert_eq!(step.clause_count(), 3);
        assert_eq!(step.clauses()[1].to_string(), "[in]");
        assert_eq!(step.clauses()[2].to_string(), "[both]");
    }

    #[test]
    fn test_display() {
        let step = MatchStep::new("a", vec![Pipeline::from_steps([Step::other("out")])]);
        assert_eq!(step.to_string(), "Match(a)[[out]]");
    }
}
