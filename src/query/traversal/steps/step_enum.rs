//! Step 枚举定义
//!
//! 封闭的步骤变体集合。重写策略对 Step 做穷尽匹配，
//! 新增变体时编译器会强制每个策略给出处理方式。

use std::fmt;

use super::match_step::MatchStep;
use super::opaque_step::OpaqueStep;
use super::select_step::{SelectOneStep, SelectStep, StepFunction};
use super::where_step::{BiPredicate, WhereStep};
use crate::query::traversal::pipeline::Pipeline;

/// 管道中的一个阶段
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// 无操作直通
    Identity,
    /// 过滤
    Where(WhereStep),
    /// 多值投影
    Select(SelectStep),
    /// 单值投影
    SelectOne(SelectOneStep),
    /// 模式匹配
    Match(MatchStep),
    /// 重写层不理解的步骤
    Other(OpaqueStep),
}

/// 步骤种类，用于按种类查询管道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Identity,
    Where,
    Select,
    SelectOne,
    Match,
    Other,
}

impl StepKind {
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Identity => "Identity",
            StepKind::Where => "Where",
            StepKind::Select => "Select",
            StepKind::SelectOne => "SelectOne",
            StepKind::Match => "Match",
            StepKind::Other => "Other",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Step {
    pub fn where_constraint(constraint: Pipeline) -> Self {
        Step::Where(WhereStep::constraint(constraint))
    }

    pub fn where_bi_predicate(
        left_key: impl Into<String>,
        right_key: impl Into<String>,
        predicate: BiPredicate,
    ) -> Self {
        Step::Where(WhereStep::bi_predicate(left_key, right_key, predicate))
    }

    pub fn select<I, S>(keys: I, step_function: Option<StepFunction>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let select = SelectStep::new(keys);
        Step::Select(match step_function {
            Some(function) => select.with_step_function(function),
            None => select,
        })
    }

    pub fn select_one(key: impl Into<String>, step_function: Option<StepFunction>) -> Self {
        let select = SelectOneStep::new(key);
        Step::SelectOne(match step_function {
            Some(function) => select.with_step_function(function),
            None => select,
        })
    }

    pub fn match_step(start_key: impl Into<String>, clauses: Vec<Pipeline>) -> Self {
        Step::Match(MatchStep::new(start_key, clauses))
    }

    pub fn other(name: impl Into<String>) -> Self {
        Step::Other(OpaqueStep::new(name))
    }

    /// 获取步骤种类
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Identity => StepKind::Identity,
            Step::Where(_) => StepKind::Where,
            Step::Select(_) => StepKind::Select,
            Step::SelectOne(_) => StepKind::SelectOne,
            Step::Match(_) => StepKind::Match,
            Step::Other(_) => StepKind::Other,
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Step::Identity)
    }

    pub fn is_where(&self) -> bool {
        matches!(self, Step::Where(_))
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Step::Match(_))
    }

    pub fn as_match(&self) -> Option<&MatchStep> {
        match self {
            Step::Match(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_match_mut(&mut self) -> Option<&mut MatchStep> {
        match self {
            Step::Match(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_where(&self) -> Option<&WhereStep> {
        match self {
            Step::Where(w) => Some(w),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Identity => f.write_str("Identity"),
            Step::Where(w) => fmt::Display::fmt(w, f),
            Step::Select(s) => fmt::Display::fmt(s, f),
            Step::SelectOne(s) => fmt::Display::fmt(s, f),
            Step::Match(m) => fmt::Display::fmt(m, f),
            Step::Other(o) => fmt::Display::fmt(o, f),
        }
    }
}

impl From<OpaqueStep> for Step {
    fn from(step: OpaqueStep) -> Self {
        Step::Other(step)
    }
}
