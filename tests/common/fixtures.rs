//! 测试管道生成模块

use graphdb_traversal::query::traversal::{BiPredicate, OpaqueStep, Pipeline, Step, StepFunction};

/// 单步约束子管道，名称用于区分不同约束
pub fn constraint(name: &str) -> Pipeline {
    Pipeline::from_steps([Step::other(name)])
}

/// 带参数的约束子管道，例如 `out(knows) -> has(age)`
pub fn edge_constraint(label: &str, property: &str) -> Pipeline {
    Pipeline::from_steps([
        Step::from(OpaqueStep::new("out").with_args([label])),
        Step::from(OpaqueStep::new("has").with_args([property])),
    ])
}

pub fn where_c(name: &str) -> Step {
    Step::where_constraint(constraint(name))
}

pub fn where_eq(left: &str, right: &str) -> Step {
    Step::where_bi_predicate(left, right, BiPredicate::Eq)
}

pub fn match_a() -> Step {
    Step::match_step("a", vec![constraint("c0")])
}

/// `Match(a)[c0] -> Identity -> Where(c1) -> Select(a,b) -> Where(eq a b) -> Where(c2) -> out`
pub fn mixed_pipeline() -> Pipeline {
    Pipeline::from_steps([
        match_a(),
        Step::Identity,
        where_c("c1"),
        Step::select(["a", "b"], None),
        where_eq("a", "b"),
        where_c("c2"),
        Step::other("out"),
    ])
}

/// 在 Match 后放置一个带步骤函数的 Select，后续约束不可融合
pub fn transformed_pipeline(function: StepFunction) -> Pipeline {
    Pipeline::from_steps([
        match_a(),
        where_c("c1"),
        Step::select(["a"], Some(function)),
        where_c("c2"),
    ])
}
