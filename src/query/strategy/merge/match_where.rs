//! 把 Where 约束融合进 Match 的策略

use crate::core::error::{PipelineError, RewriteResult};
use crate::query::strategy::elimination::IdentityReductionStrategy;
use crate::query::strategy::traversal_strategy::{StrategyOrder, TraversalStrategy};
use crate::query::traversal::pipeline::{Pipeline, StepId};
use crate::query::traversal::steps::{Step, StepKind};

/// 扫描到一个步骤时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanAction {
    /// 摘除并把约束加入 Match 子句
    Fuse,
    /// 保留在原位，继续向后扫描
    Skip,
    /// 结束对当前 Match 的扫描
    Stop,
}

/// 把紧跟在 Match 之后的 Where 约束融合进 Match 子句的策略
///
/// # 转换示例
///
/// Before:
/// ```text
///   Match(a)[c0] -> Select(a) -> Where(c1) -> Where(eq a b) -> Where(c2) -> out
/// ```
///
/// After:
/// ```text
///   Match(a)[c0, c1, c2] -> Select(a) -> Where(eq a b) -> out
/// ```
///
/// # 适用条件
///
/// - 从每个 Match 向后扫描，只跨越 Where / Identity / Select / SelectOne
/// - 约束形式的 Where 被摘除，子管道按发现顺序追加到子句末尾
/// - 双谓词形式的 Where 留在原位，扫描继续
/// - 带有步骤函数的 Select / SelectOne 会改变后续约束可见的绑定，扫描到此停止
/// - 其他任何步骤都终止扫描
#[derive(Debug)]
pub struct MatchWhereStrategy;

impl MatchWhereStrategy {
    pub const NAME: &'static str = "MatchWhereStrategy";

    /// 创建策略实例
    pub fn new() -> Self {
        Self
    }

    fn scan_action(step: &Step) -> ScanAction {
        match step {
            Step::Where(w) if w.is_fusible() => ScanAction::Fuse,
            Step::Where(_) => ScanAction::Skip,
            Step::Select(s) if s.has_step_function() => ScanAction::Stop,
            Step::SelectOne(s) if s.has_step_function() => ScanAction::Stop,
            Step::Select(_) | Step::SelectOne(_) | Step::Identity => ScanAction::Skip,
            Step::Match(_) | Step::Other(_) => ScanAction::Stop,
        }
    }

    /// 对单个 Match 步骤执行融合，返回融合的约束数量
    fn fuse_into(&self, pipeline: &mut Pipeline, match_id: StepId) -> RewriteResult<usize> {
        let mut fused = Vec::new();
        let mut cursor = pipeline.next(match_id)?;

        while let Some(current) = cursor {
            let action = Self::scan_action(pipeline.step(current)?);
            cursor = match action {
                ScanAction::Fuse => {
                    let removed = pipeline.remove(current)?;
                    if let Step::Where(w) = removed.step {
                        fused.extend(w.into_constraint());
                    }
                    removed.next
                }
                ScanAction::Skip => pipeline.next(current)?,
                ScanAction::Stop => break,
            };
        }

        let count = fused.len();
        if count > 0 {
            let match_step = pipeline
                .step_mut(match_id)?
                .as_match_mut()
                .ok_or(PipelineError::NotAMatchStep(match_id))?;
            for clause in fused {
                match_step.add_clause(clause);
            }
            log::debug!(
                "向 Match 步骤 {} 融合了 {} 个约束，子句数: {}",
                match_id,
                count,
                match_step.clause_count()
            );
        }

        Ok(count)
    }
}

impl Default for MatchWhereStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalStrategy for MatchWhereStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn relative_order(&self, other: &str) -> StrategyOrder {
        if other == IdentityReductionStrategy::NAME {
            StrategyOrder::After
        } else {
            StrategyOrder::Unordered
        }
    }

    fn apply(&self, pipeline: &mut Pipeline) -> RewriteResult<bool> {
        let mut total = 0;
        for match_id in pipeline.steps_of(StepKind::Match) {
            total += self.fuse_into(pipeline, match_id)?;
        }
        Ok(total > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::traversal::steps::{BiPredicate, StepFunction};

    fn constraint(name: &str) -> Pipeline {
        Pipeline::from_steps([Step::other(name)])
    }

    fn apply(pipeline: &mut Pipeline) -> bool {
        MatchWhereStrategy::new()
            .apply(pipeline)
            .expect("应用策略失败")
    }

    fn clauses_of(pipeline: &Pipeline) -> Vec<Pipeline> {
        let id = pipeline.steps_of(StepKind::Match)[0];
        pipeline
            .step(id)
            .expect("Match 步骤应存在")
            .as_match()
            .expect("应为 Match 步骤")
            .clauses()
            .to_vec()
    }

    #[test]
    fn test_rule_name_and_order() {
        let strategy = MatchWhereStrategy::new();
        assert_eq!(strategy.name(), "MatchWhereStrategy");
        assert_eq!(
            strategy.relative_order(IdentityReductionStrategy::NAME),
            StrategyOrder::After
        );
        assert_eq!(strategy.relative_order("Other"), StrategyOrder::Unordered);
    }

    #[test]
    fn test_fuse_consecutive_constraints() {
        let mut pipeline = Pipeline::from_steps([
            Step::match_step("a", vec![constraint("c0")]),
            Step::where_constraint(constraint("c1")),
            Step::where_constraint(constraint("c2")),
            Step::where_constraint(constraint("c3")),
            Step::other("out"),
        ]);

        assert!(apply(&mut pipeline));
        assert_eq!(
            clauses_of(&pipeline),
            vec![constraint("c0"), constraint("c1"), constraint("c2"), constraint("c3")]
        );
        assert_eq!(pipeline.kinds(), vec![StepKind::Match, StepKind::Other]);
    }

    #[test]
    fn test_skip_transparent_steps() {
        let mut pipeline = Pipeline::from_steps([
            Step::match_step("a", Vec::new()),
            Step::Identity,
            Step::where_constraint(constraint("c1")),
            Step::select(["a", "b"], None),
            Step::select_one("a", Some(StepFunction::Identity)),
            Step::where_constraint(constraint("c2")),
        ]);

        assert!(apply(&mut pipeline));
        assert_eq!(clauses_of(&pipeline), vec![constraint("c1"), constraint("c2")]);
        assert_eq!(
            pipeline.kinds(),
            vec![StepKind::Match, StepKind::Identity, StepKind::Select, StepKind::SelectOne]
        );
    }

    #[test]
    fn test_bi_predicate_stays_in_place() {
        let mut pipeline = Pipeline::from_steps([
            Step::match_step("a", Vec::new()),
            Step::where_bi_predicate("a", "b", BiPredicate::Neq),
            Step::where_constraint(constraint("c1")),
        ]);

        assert!(apply(&mut pipeline));
        assert_eq!(clauses_of(&pipeline), vec![constraint("c1")]);
        assert_eq!(pipeline.kinds(), vec![StepKind::Match, StepKind::Where]);
        assert!(pipeline
            .iter()
            .nth(1)
            .and_then(|(_, step)| step.as_where())
            .map_or(false, |w| w.has_bi_predicate()));
    }

    #[test]
    fn test_stop_at_select_with_function() {
        let original = Pipeline::from_steps([
            Step::match_step("a", Vec::new()),
            Step::select(["a"], Some(StepFunction::Property("name".into()))),
            Step::where_constraint(constraint("c1")),
        ]);
        let mut pipeline = original.clone();

        assert!(!apply(&mut pipeline));
        assert_eq!(pipeline, original);
    }

    #[test]
    fn test_stop_at_select_one_with_function() {
        let mut pipeline = Pipeline::from_steps([
            Step::match_step("a", Vec::new()),
            Step::where_constraint(constraint("c1")),
            Step::select_one("a", Some(StepFunction::Label)),
            Step::where_constraint(constraint("c2")),
        ]);

        assert!(apply(&mut pipeline));
        assert_eq!(clauses_of(&pipeline), vec![constraint("c1")]);
        assert_eq!(
            pipeline.kinds(),
            vec![StepKind::Match, StepKind::SelectOne, StepKind::Where]
        );
    }

    #[test]
    fn test_stop_at_opaque_step() {
        let original = Pipeline::from_steps([
            Step::match_step("a", Vec::new()),
            Step::other("out"),
            Step::where_constraint(constraint("c1")),
        ]);
        let mut pipeline = original.clone();

        assert!(!apply(&mut pipeline));
        assert_eq!(pipeline, original);
    }

    #[test]
    fn test_each_match_scanned_independently() {
        let mut pipeline = Pipeline::from_steps([
            Step::match_step("a", Vec::new()),
            Step::where_constraint(constraint("c1")),
            Step::match_step("b", Vec::new()),
            Step::where_constraint(constraint("c2")),
        ]);

        assert!(apply(&mut pipeline));
        assert_eq!(pipeline.kinds(), vec![StepKind::Match, StepKind::Match]);

        let matches: Vec<_> = pipeline
            .iter()
            .filter_map(|(_, step)| step.as_match())
            .map(|m| m.clauses().to_vec())
            .collect();
        assert_eq!(matches, vec![vec![constraint("c1")], vec![constraint("c2")]]);
    }

    #[test]
    fn test_no_match_is_noop() {
        let original = Pipeline::from_steps([
            Step::other("V"),
            Step::where_constraint(constraint("c1")),
        ]);
        let mut pipeline = original.clone();

        assert!(!apply(&mut pipeline));
        assert_eq!(pipeline, original);
    }

    #[test]
    fn test_idempotent() {
        let mut pipeline = Pipeline::from_steps([
            Step::match_step("a", Vec::new()),
            Step::Identity,
            Step::where_constraint(constraint("c1")),
            Step::where_bi_predicate("a", "b", BiPredicate::Eq),
            Step::where_constraint(constraint("c2")),
        ]);

        assert!(apply(&mut pipeline));
        let once = pipeline.clone();
        assert!(!apply(&mut pipeline));
        assert_eq!(pipeline, once);
    }
}
