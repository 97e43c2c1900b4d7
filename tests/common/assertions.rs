//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use graphdb_traversal::query::traversal::{Pipeline, StepKind};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言管道的步骤类型序列
pub fn assert_kinds(pipeline: &Pipeline, expected: &[StepKind]) {
    assert_eq!(
        pipeline.kinds(),
        expected,
        "步骤类型不匹配, 管道: {}",
        pipeline
    );
}

/// 返回第 `index` 个 Match 步骤的子句
pub fn match_clauses(pipeline: &Pipeline, index: usize) -> Vec<Pipeline> {
    let ids = pipeline.steps_of(StepKind::Match);
    let id = *ids.get(index).expect("Match 步骤数量不足");
    pipeline
        .step(id)
        .expect("Match 步骤应存在")
        .as_match()
        .expect("应为 Match 步骤")
        .clauses()
        .to_vec()
}

/// 统计约束的总数：Match 子句加上仍留在管道中的约束形式 Where
pub fn constraint_count(pipeline: &Pipeline) -> usize {
    pipeline
        .iter()
        .map(|(_, step)| {
            if let Some(m) = step.as_match() {
                m.clause_count()
            } else if step.as_where().map_or(false, |w| w.is_fusible()) {
                1
            } else {
                0
            }
        })
        .sum()
}

/// 管道中除 Match 与约束形式 Where 之外的步骤，按显示形式排序
///
/// 融合只会移动约束，其余步骤（双谓词 Where、Select、Identity 等）
/// 在融合前后应构成相同的多重集合
pub fn passthrough_steps(pipeline: &Pipeline) -> Vec<String> {
    let mut steps: Vec<String> = pipeline
        .iter()
        .filter(|(_, step)| {
            !step.is_match() && !step.as_where().map_or(false, |w| w.is_fusible())
        })
        .map(|(_, step)| step.to_string())
        .collect();
    steps.sort();
    steps
}

/// 断言融合前后约束与其余步骤都守恒
pub fn assert_conserved(before: &Pipeline, after: &Pipeline) {
    assert_eq!(
        constraint_count(after),
        constraint_count(before),
        "约束数量不守恒: {} -> {}",
        before,
        after
    );
    assert_eq!(
        passthrough_steps(after),
        passthrough_steps(before),
        "非约束步骤被丢失或重复: {} -> {}",
        before,
        after
    );
}
