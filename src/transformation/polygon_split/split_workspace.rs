use super::PolygonSplitError;
use crate::math::{Point, Real};
use crate::shape::LineSide;

/// A polygon vertex, or cut crossing, linked to its neighbors along a boundary cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkedPolygonPoint {
    /// The position of this node.
    pub position: Point<Real>,
    /// The side of the cut this node lies on.
    pub side: LineSide,
    /// Index of the next node of the cycle.
    pub next: usize,
    /// Index of the previous node of the cycle.
    pub prev: usize,
    /// Distance from the first crossing along the cut. Only meaningful for `On` nodes.
    pub dist_on_line: Real,
    /// Set once the node was emitted into an output polygon.
    pub visited: bool,
}

/// Scratch storage for the concave decomposition.
///
/// All nodes live in one arena and refer to each other by index. The workspace is
/// cleared at the start of every split; its content is meaningless afterward. Reusing
/// the same workspace across splits avoids reallocating the arena.
#[derive(Clone, Debug, Default)]
pub struct SplitWorkspace {
    pub(crate) nodes: Vec<LinkedPolygonPoint>,
    pub(crate) on_line: Vec<usize>,
    max_nodes: usize,
}

impl SplitWorkspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nodes currently stored.
    pub fn nodes(&self) -> &[LinkedPolygonPoint] {
        &self.nodes
    }

    /// Clears the workspace before splitting a polygon with `num_vertices` vertices.
    pub(crate) fn reset(&mut self, num_vertices: usize) {
        self.nodes.clear();
        self.on_line.clear();
        // Every edge adds at most one crossing, and every crossing at most two bridge nodes.
        self.max_nodes = num_vertices * 6;
    }

    /// Appends an unlinked node, returning its index.
    pub(crate) fn push(&mut self, position: Point<Real>, side: LineSide) -> usize {
        let id = self.nodes.len();
        self.nodes.push(LinkedPolygonPoint {
            position,
            side,
            next: id,
            prev: id,
            dist_on_line: 0.0,
            visited: false,
        });
        id
    }

    /// Links all nodes into one cycle, in insertion order.
    pub(crate) fn link_cycle(&mut self) {
        let len = self.nodes.len();

        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.next = (i + 1) % len;
            node.prev = (i + len - 1) % len;
        }
    }

    #[inline]
    pub(crate) fn side(&self, id: usize) -> LineSide {
        self.nodes[id].side
    }

    #[inline]
    pub(crate) fn next(&self, id: usize) -> usize {
        self.nodes[id].next
    }

    #[inline]
    pub(crate) fn prev(&self, id: usize) -> usize {
        self.nodes[id].prev
    }

    #[inline]
    pub(crate) fn dist(&self, id: usize) -> Real {
        self.nodes[id].dist_on_line
    }

    /// Bridges `src` and `dst` with two new nodes, one in each direction.
    ///
    /// Afterward the cycle through `src` reaches `dst` directly, and the cycle through
    /// `dst` reaches `src` directly. If both were on the same cycle, it is split in two.
    ///
    /// The two bridge nodes are full copies of `src` and `dst`, `dist_on_line` included,
    /// instead of starting at a zero distance. A later `is_source` test on a neighbor of a
    /// bridge node thus compares the actual positions along the cut.
    pub(crate) fn link_points(&mut self, src: usize, dst: usize) -> Result<(), PolygonSplitError> {
        if self.nodes.len() + 2 > self.max_nodes {
            return Err(PolygonSplitError::WorkspaceOverflow);
        }

        let src_prev = self.prev(src);
        let dst_prev = self.prev(dst);

        let a = self.nodes.len();
        let b = a + 1;
        let mut bridge_a = self.nodes[src];
        bridge_a.next = dst;
        bridge_a.prev = src_prev;
        let mut bridge_b = self.nodes[dst];
        bridge_b.next = src;
        bridge_b.prev = dst_prev;
        self.nodes.push(bridge_a);
        self.nodes.push(bridge_b);

        self.nodes[src_prev].next = a;
        self.nodes[src].prev = b;
        self.nodes[dst_prev].next = b;
        self.nodes[dst].prev = a;

        Ok(())
    }

    /// Checks that walking `next` links from every node leads back to it.
    pub(crate) fn verify_cycles(&self) -> Result<(), PolygonSplitError> {
        let len = self.nodes.len();

        for start in 0..len {
            let mut curr = start;
            let mut steps = 0;

            loop {
                if steps >= len {
                    return Err(PolygonSplitError::BrokenCycle { node: start });
                }

                curr = self.nodes[curr].next;
                steps += 1;

                if curr == start {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Emits the positions of every cycle not visited yet.
    pub(crate) fn collect_cycles(&mut self) -> Vec<Vec<Point<Real>>> {
        let mut result = vec![];

        for start in 0..self.nodes.len() {
            if self.nodes[start].visited {
                continue;
            }

            let mut cycle = vec![];
            let mut curr = start;

            loop {
                self.nodes[curr].visited = true;
                cycle.push(self.nodes[curr].position);
                curr = self.nodes[curr].next;

                if curr == start || self.nodes[curr].visited {
                    break;
                }
            }

            result.push(cycle);
        }

        result
    }
}
