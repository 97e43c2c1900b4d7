//! 策略顺序的拓扑排序
//!
//! 节点是策略的注册下标，边 `(from, to)` 表示 `from` 必须先于 `to` 应用。
//! 入度相同时按注册顺序出队，保证同样的声明总是得到同样的顺序。

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// 拓扑排序算法结构体
pub struct TopologicalOrder;

impl TopologicalOrder {
    /// 使用 Kahn 算法（基于入度）进行拓扑排序
    ///
    /// 成功时返回线性顺序；存在环时返回环上的节点路径（首尾相同）
    pub fn sort_kahn(count: usize, edges: &[(usize, usize)]) -> Result<Vec<usize>, Vec<usize>> {
        let adjacency = Self::adjacency(count, edges);

        let mut in_degree = vec![0usize; count];
        for targets in &adjacency {
            for &to in targets {
                in_degree[to] += 1;
            }
        }

        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| Reverse(node))
            .collect();

        let mut result = Vec::with_capacity(count);
        while let Some(Reverse(node)) = ready.pop() {
            result.push(node);
            for &next in &adjacency[node] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push(Reverse(next));
                }
            }
        }

        if result.len() != count {
            return Err(Self::find_cycle(&adjacency).unwrap_or_default());
        }

        Ok(result)
    }

    /// 查找一个有向环（三色标记法）
    pub fn find_cycle(adjacency: &[Vec<usize>]) -> Option<Vec<usize>> {
        let mut color = vec![Color::White; adjacency.len()];
        let mut path = Vec::new();

        for start in 0..adjacency.len() {
            if color[start] == Color::White {
                if let Some(cycle) = Self::dfs_cycle(adjacency, start, &mut color, &mut path) {
                    return Some(cycle);
                }
            }
        }

        None
    }

    fn dfs_cycle(
        adjacency: &[Vec<usize>],
        node: usize,
        color: &mut [Color],
        path: &mut Vec<usize>,
    ) -> Option<Vec<usize>> {
        color[node] = Color::Gray;
        path.push(node);

        for &next in &adjacency[node] {
            match color[next] {
                Color::Gray => {
                    let start = path.iter().position(|&n| n == next)?;
                    let mut cycle = path[start..].to_vec();
                    cycle.push(next);
                    return Some(cycle);
                }
                Color::White => {
                    if let Some(cycle) = Self::dfs_cycle(adjacency, next, color, path) {
                        return Some(cycle);
                    }
                }
                Color::Black => {}
            }
        }

        path.pop();
        color[node] = Color::Black;
        None
    }

    fn adjacency(count: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); count];
        for &(from, to) in edges {
            adjacency[from].push(to);
        }
        adjacency
    }
}
