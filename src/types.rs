//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 边权（道路网络中为通行分钟数）
pub type Weight = f64;

/// 无权网络（电网、水网）使用的默认边权
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// 无向带权边
///
/// 端点总是按标签升序保存（`u <= v`），因此同一条边只有一种表示。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub u: String,
    pub v: String,
    pub weight: Weight,
}

impl Edge {
    /// 创建边，端点自动按标签排序
    pub fn new(a: impl Into<String>, b: impl Into<String>, weight: Weight) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { u: a, v: b, weight }
        } else {
            Self { u: b, v: a, weight }
        }
    }

    /// 端点对 `(较小标签, 较大标签)`
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.u, &self.v)
    }

    /// 按 `(权重, u, v)` 升序比较，Kruskal 依赖这个全序打破等权平局
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.u.cmp(&other.u))
            .then_with(|| self.v.cmp(&other.v))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.u, self.v, self.weight)
    }
}
