//! 遍历管道实现
//!
//! Pipeline 独占其所有步骤，内部是一个带前后链接的槽位数组。
//! 步骤句柄 `StepId` 由所属管道的标识和槽位下标组成，删除其他步骤不会使其失效；
//! 被删除的槽位留空，不会被复用。其他管道签发的句柄一律视为不存在。

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::error::{PipelineError, PipelineResult};
use crate::query::traversal::steps::{Step, StepKind};

/// 管道标识分配器，0 保留给不属于任何管道的句柄
static NEXT_PIPELINE_ID: AtomicU64 = AtomicU64::new(1);

fn allocate_pipeline_id() -> u64 {
    NEXT_PIPELINE_ID.fetch_add(1, Ordering::Relaxed)
}

/// 管道内步骤的稳定句柄
///
/// 句柄只在签发它的管道内有意义，克隆出的管道会获得新的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId {
    pipeline: u64,
    index: usize,
}

impl StepId {
    /// 不属于任何管道的句柄
    pub(crate) fn detached(index: usize) -> Self {
        Self { pipeline: 0, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    step: Step,
    prev: Option<usize>,
    next: Option<usize>,
}

/// 被删除的步骤
///
/// 携带步骤本身（连同其拥有的子管道）以及删除前的前驱和后继，
/// 调用方可以据此继续扫描而无需访问已脱离管道的节点
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedStep {
    pub step: Step,
    pub previous: Option<StepId>,
    pub next: Option<StepId>,
}

/// 有序、可变的步骤序列
#[derive(Debug)]
pub struct Pipeline {
    id: u64,
    slots: Vec<Option<Slot>>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            id: allocate_pipeline_id(),
            slots: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl Clone for Pipeline {
    fn clone(&self) -> Self {
        Self {
            id: allocate_pipeline_id(),
            slots: self.slots.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl Pipeline {
    /// 创建空管道
    pub fn new() -> Self {
        Self::default()
    }

    /// 按顺序由步骤构建管道
    pub fn from_steps<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = Step>,
    {
        let mut pipeline = Self::new();
        for step in steps {
            pipeline.push(step);
        }
        pipeline
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<StepId> {
        self.handle(self.head)
    }

    pub fn last(&self) -> Option<StepId> {
        self.handle(self.tail)
    }

    pub fn contains(&self, id: StepId) -> bool {
        self.slot(id).is_ok()
    }

    /// 在末尾追加步骤
    pub fn push(&mut self, step: Step) -> StepId {
        let index = self.slots.len();
        self.slots.push(Some(Slot {
            step,
            prev: self.tail,
            next: None,
        }));
        match self.tail {
            Some(tail) => self.link_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        self.id_of(index)
    }

    /// 在 `anchor` 之后插入步骤
    pub fn insert_after(&mut self, anchor: StepId, step: Step) -> PipelineResult<StepId> {
        let next = self.slot(anchor)?.next;
        let index = self.slots.len();
        self.slots.push(Some(Slot {
            step,
            prev: Some(anchor.index),
            next,
        }));
        self.link_next(anchor.index, Some(index));
        match next {
            Some(n) => self.link_prev(n, Some(index)),
            None => self.tail = Some(index),
        }
        self.len += 1;
        Ok(self.id_of(index))
    }

    pub fn get(&self, id: StepId) -> Option<&Step> {
        self.slot(id).ok().map(|slot| &slot.step)
    }

    pub fn step(&self, id: StepId) -> PipelineResult<&Step> {
        self.slot(id).map(|slot| &slot.step)
    }

    pub fn step_mut(&mut self, id: StepId) -> PipelineResult<&mut Step> {
        self.slot_mut(id).map(|slot| &mut slot.step)
    }

    /// `id` 的后继步骤
    pub fn next(&self, id: StepId) -> PipelineResult<Option<StepId>> {
        let next = self.slot(id)?.next;
        Ok(self.handle(next))
    }

    /// `id` 的前驱步骤
    pub fn previous(&self, id: StepId) -> PipelineResult<Option<StepId>> {
        let prev = self.slot(id)?.prev;
        Ok(self.handle(prev))
    }

    /// 从管道中摘除步骤并连接其前驱与后继
    ///
    /// 返回被摘除的步骤及其删除前的邻居。句柄不存在或由其他管道签发时返回
    /// `PipelineError::StepNotFound`，管道保持不变。
    pub fn remove(&mut self, id: StepId) -> PipelineResult<RemovedStep> {
        self.slot(id)?;
        let slot = self
            .slots
            .get_mut(id.index)
            .and_then(Option::take)
            .ok_or(PipelineError::StepNotFound(id))?;

        match slot.prev {
            Some(p) => self.link_next(p, slot.next),
            None => self.head = slot.next,
        }
        match slot.next {
            Some(n) => self.link_prev(n, slot.prev),
            None => self.tail = slot.prev,
        }
        self.len -= 1;

        Ok(RemovedStep {
            step: slot.step,
            previous: self.handle(slot.prev),
            next: self.handle(slot.next),
        })
    }

    /// 按管道顺序返回指定种类的全部步骤
    pub fn steps_of(&self, kind: StepKind) -> Vec<StepId> {
        self.iter()
            .filter(|(_, step)| step.kind() == kind)
            .map(|(id, _)| id)
            .collect()
    }

    /// 按管道顺序遍历
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            pipeline: self,
            cursor: self.head,
        }
    }

    /// 按管道顺序返回各步骤的种类
    pub fn kinds(&self) -> Vec<StepKind> {
        self.iter().map(|(_, step)| step.kind()).collect()
    }

    /// 拆解管道，按顺序取出所有步骤
    pub fn into_steps(mut self) -> Vec<Step> {
        let mut steps = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(index) = cursor {
            match self.slots.get_mut(index).and_then(Option::take) {
                Some(slot) => {
                    cursor = slot.next;
                    steps.push(slot.step);
                }
                None => break,
            }
        }
        steps
    }

    fn id_of(&self, index: usize) -> StepId {
        StepId {
            pipeline: self.id,
            index,
        }
    }

    fn handle(&self, index: Option<usize>) -> Option<StepId> {
        index.map(|i| self.id_of(i))
    }

    fn slot(&self, id: StepId) -> PipelineResult<&Slot> {
        if id.pipeline != self.id {
            return Err(PipelineError::StepNotFound(id));
        }
        self.slots
            .get(id.index)
            .and_then(Option::as_ref)
            .ok_or(PipelineError::StepNotFound(id))
    }

    fn slot_mut(&mut self, id: StepId) -> PipelineResult<&mut Slot> {
        if id.pipeline != self.id {
            return Err(PipelineError::StepNotFound(id));
        }
        self.slots
            .get_mut(id.index)
            .and_then(Option::as_mut)
            .ok_or(PipelineError::StepNotFound(id))
    }

    fn link_next(&mut self, index: usize, next: Option<usize>) {
        if let Some(Some(slot)) = self.slots.get_mut(index) {
            slot.next = next;
        }
    }

    fn link_prev(&mut self, index: usize, prev: Option<usize>) {
        if let Some(Some(slot)) = self.slots.get_mut(index) {
            slot.prev = prev;
        }
    }
}

/// 管道迭代器，产出 `(StepId, &Step)`
pub struct Iter<'a> {
    pipeline: &'a Pipeline,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (StepId, &'a Step);

    fn next(&mut self) -> Option<Self::Item> {
        let pipeline = self.pipeline;
        let index = self.cursor?;
        let slot = pipeline.slots.get(index)?.as_ref()?;
        self.cursor = slot.next;
        Some((pipeline.id_of(index), &slot.step))
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = (StepId, &'a Step);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Step> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::from_steps(iter)
    }
}

/// 结构相等：步骤序列相同即相等，与句柄无关
impl PartialEq for Pipeline {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .map(|(_, step)| step)
                .eq(other.iter().map(|(_, step)| step))
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (_, step)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", step)?;
        }
        f.write_str("]")
    }
}
