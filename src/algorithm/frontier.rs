//! 优先队列元素
//!
//! Dijkstra、Prim 与多源分配共用的最小堆条目：先比代价，再比键，
//! 等代价时出堆顺序由键决定，结果可复现。

use crate::types::Weight;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// 候选条目
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<K> {
    pub cost: Weight,
    pub key: K,
}

impl<K: Ord> PartialEq for Candidate<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for Candidate<K> {}

impl<K: Ord> PartialOrd for Candidate<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for Candidate<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// 最小堆（允许同一顶点多次入堆，出堆时由调用方丢弃过期条目）
#[derive(Debug)]
pub(crate) struct Frontier<K> {
    heap: BinaryHeap<Reverse<Candidate<K>>>,
}

impl<K: Ord> Frontier<K> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, cost: Weight, key: K) {
        self.heap.push(Reverse(Candidate { cost, key }));
    }

    pub fn pop(&mut self) -> Option<(Weight, K)> {
        self.heap.pop().map(|Reverse(c)| (c.cost, c.key))
    }
}
