#[cfg(doc)]
use crate::transformation::polygon_split::{split_concave, SplitWorkspace};

/// Errors that can occur while decomposing a concave polygon along a cut.
///
/// These signal a broken internal invariant of [`split_concave`], usually caused by a
/// self-intersecting input outline or by numerical noise near the cut line. The slicer
/// drops the affected source rather than emitting malformed pieces.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum PolygonSplitError {
    /// A polygon edge crossing the cut turned out to be parallel to it.
    #[error("a polygon edge crossing the cut is parallel to it")]
    ParallelLines,

    /// Following `next` links from a node did not lead back to it.
    ///
    /// The decomposition must only leave closed cycles behind.
    #[error("the boundary cycle starting at node {node} is not closed")]
    BrokenCycle {
        /// The index of the node, in the [`SplitWorkspace`], the broken walk started from.
        node: usize,
    },

    /// Bridging the cut created more nodes than the polygon can require.
    #[error("the split workspace exceeded its node budget")]
    WorkspaceOverflow,
}
