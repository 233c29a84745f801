// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2-d tree backend: alternating vertical/horizontal splits with rectangle pruning.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::{Orientation, Point, Rect};

/// 2-d tree backend.
///
/// Each node stores one point, the orientation of the line it splits on, and the
/// rectangle its subtree occupies. A point strictly less than a node's point along the
/// node's axis goes to the lower child (left or below); anything else goes to the upper
/// child (right or above). Nothing is ever rebalanced, so the shape depends on the
/// insertion order and degenerates to a path for sorted input.
#[derive(Clone)]
pub struct KdTree {
    bounds: Rect,
    root: Option<NodeIdx>,
    arena: Vec<Node>,
    height: usize,
}

#[derive(Copy, Clone, Debug)]
struct Node {
    point: Point,
    rect: Rect,
    orientation: Orientation,
    lower: Option<NodeIdx>,
    upper: Option<NodeIdx>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

impl Node {
    /// Which side of this node's splitting line `p` is routed to.
    #[inline]
    fn routes_lower(&self, p: Point) -> bool {
        self.orientation.coord(p) < self.orientation.coord(self.point)
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::with_bounds(Rect::EVERYTHING)
    }
}

impl KdTree {
    /// Create an empty tree whose root region is `bounds`.
    ///
    /// Callers are responsible for only inserting points inside `bounds`;
    /// [`IndexGeneric`](crate::IndexGeneric) enforces this.
    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            root: None,
            arena: Vec::new(),
            height: 0,
        }
    }

    /// Number of nodes on the longest root-to-leaf path; zero when empty.
    pub fn height(&self) -> usize {
        self.height
    }

    fn push_node(
        &mut self,
        point: Point,
        rect: Rect,
        orientation: Orientation,
        depth: usize,
    ) -> NodeIdx {
        let idx = NodeIdx::new(self.arena.len());
        self.arena.push(Node {
            point,
            rect,
            orientation,
            lower: None,
            upper: None,
        });
        self.height = self.height.max(depth + 1);
        log::trace!(
            "kd-tree node {} at depth {depth}: ({}, {})",
            idx.get(),
            point.x(),
            point.y()
        );
        idx
    }
}

impl Backend for KdTree {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn len(&self) -> usize {
        self.arena.len()
    }

    fn insert(&mut self, p: Point) -> bool {
        let Some(mut cur) = self.root else {
            self.root = Some(self.push_node(p, self.bounds, Orientation::ROOT, 0));
            return true;
        };
        let mut depth = 0;
        loop {
            let node = self.arena[cur.get()];
            if node.point == p {
                return false;
            }
            depth += 1;
            let lower = node.routes_lower(p);
            let next = if lower { node.lower } else { node.upper };
            if let Some(child) = next {
                cur = child;
                continue;
            }

            let (lower_rect, upper_rect) = node.rect.split(node.orientation, node.point);
            let rect = if lower { lower_rect } else { upper_rect };
            let idx = self.push_node(p, rect, node.orientation.flip(), depth);
            let parent = &mut self.arena[cur.get()];
            if lower {
                parent.lower = Some(idx);
            } else {
                parent.upper = Some(idx);
            }
            return true;
        }
    }

    fn contains(&self, p: Point) -> bool {
        let mut next = self.root;
        while let Some(i) = next {
            let node = &self.arena[i.get()];
            if node.point == p {
                return true;
            }
            next = if node.routes_lower(p) {
                node.lower
            } else {
                node.upper
            };
        }
        false
    }

    fn query_rect<'a>(&'a self, rect: Rect) -> Box<dyn Iterator<Item = Point> + 'a> {
        let mut out = Vec::new();
        let Some(root_idx) = self.root else {
            return Box::new(out.into_iter());
        };
        let mut stack = vec![root_idx];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            // The node's rectangle bounds its whole subtree.
            if !n.rect.intersects(&rect) {
                continue;
            }
            if rect.contains(n.point) {
                out.push(n.point);
            }
            stack.extend(n.upper);
            stack.extend(n.lower);
        }
        Box::new(out.into_iter())
    }

    fn nearest(&self, p: Point) -> Option<(Point, f64)> {
        let root_idx = self.root?;
        let mut best: Option<(Point, f64)> = None;
        let mut stack = vec![root_idx];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            if let Some((_, best_d)) = best
                && n.rect.distance_squared_to(p) >= best_d
            {
                continue;
            }
            let d = n.point.distance_squared_to(&p);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((n.point, d));
            }
            let (near, far) = if n.routes_lower(p) {
                (n.lower, n.upper)
            } else {
                (n.upper, n.lower)
            };
            // Far side goes on the stack first so the near side is searched before it,
            // and is only searched if its rectangle still beats the best at that point.
            stack.extend(far);
            stack.extend(near);
        }
        best
    }

    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point> + 'a> {
        Box::new(self.arena.iter().map(|n| n.point))
    }

    fn clear(&mut self) {
        log::debug!("clearing kd-tree with {} nodes", self.arena.len());
        self.root = None;
        self.arena.clear();
        self.height = 0;
    }
}

impl Debug for KdTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("bounds", &self.bounds)
            .field("arena_nodes", &self.arena.len())
            .field("height", &self.height)
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}
