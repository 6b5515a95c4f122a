use super::{SliceChild, SliceEvent, SliceFilter, SliceListener, SliceParams, SliceSource};
use crate::mesh::{self, Triangulation};
use crate::shape::{CutHits, CutLine, Polygon};
use crate::math::Real;
use crate::transformation::{self, PolygonSplitError, SplitWorkspace};

// Segment-parameter margin below which an edge crossing counts as a shared vertex.
const SIMPLICITY_EPSILON: Real = 1.0e-5;

/// Cuts sliceable objects along lines.
///
/// A slicer owns the scratch memory of the split algorithms, reused from one cut to the
/// next, so slicing needs `&mut self`. Use one slicer per thread.
#[derive(Clone, Debug, Default)]
pub struct Slicer {
    /// The slicing configuration.
    pub params: SliceParams,
    workspace: SplitWorkspace,
}

impl Slicer {
    /// Creates a slicer with the given configuration.
    pub fn new(params: SliceParams) -> Self {
        Self {
            params,
            workspace: SplitWorkspace::new(),
        }
    }

    /// Cuts `source` along `cut`.
    ///
    /// Returns no piece if the cut is rejected or does not divide the source.
    pub fn slice(
        &mut self,
        source: &SliceSource<'_>,
        cut: &CutLine,
    ) -> Result<Vec<SliceChild>, PolygonSplitError> {
        self.slice_with_listener(source, cut, None, &mut ())
    }

    /// Cuts `source` along `cut`, with the entry and exit points already known (typically from
    /// a raycast).
    pub fn slice_with_hits(
        &mut self,
        source: &SliceSource<'_>,
        cut: &CutLine,
        hits: &CutHits,
    ) -> Result<Vec<SliceChild>, PolygonSplitError> {
        self.slice_with_listener(source, cut, Some(hits), &mut ())
    }

    /// Cuts `source` along `cut`, notifying `listener` if it was divided.
    ///
    /// The cut is rejected, and no piece returned, if:
    /// - the outline has fewer than three vertices or a zero area,
    /// - the outline intersects itself,
    /// - `source` is at the maximum depth,
    /// - either end of the cut is inside the outline,
    /// - the cut segment does not cross the outline twice.
    ///
    /// When `hits` is `None`, the entry and exit points are computed from the outline.
    pub fn slice_with_listener(
        &mut self,
        source: &SliceSource<'_>,
        cut: &CutLine,
        hits: Option<&CutHits>,
        listener: &mut impl SliceListener,
    ) -> Result<Vec<SliceChild>, PolygonSplitError> {
        let polygon = match Polygon::new(source.outline.to_vec()) {
            Some(polygon) => polygon,
            None => {
                log::debug!("Not slicing {:?}: degenerate outline.", source.id);
                return Ok(vec![]);
            }
        };

        if !polygon.is_simple(SIMPLICITY_EPSILON) {
            log::debug!("Not slicing {:?}: self-intersecting outline.", source.id);
            return Ok(vec![]);
        }

        if let Some(max_depth) = self.params.max_depth {
            if source.depth >= max_depth {
                log::debug!("Not slicing {:?}: depth limit reached.", source.id);
                return Ok(vec![]);
            }
        }

        if polygon.contains_point(&cut.start) || polygon.contains_point(&cut.end) {
            log::debug!("Not slicing {:?}: the cut starts or ends inside.", source.id);
            return Ok(vec![]);
        }

        if !cut.aabb().intersects(&polygon.aabb()) {
            return Ok(vec![]);
        }

        let hits = match (cut.hits_on(polygon.vertices()), hits) {
            (Some(_), Some(hits)) => *hits,
            (Some(computed), None) => computed,
            (None, _) => {
                log::debug!("Not slicing {:?}: the cut misses the outline.", source.id);
                return Ok(vec![]);
            }
        };

        let tolerances = &self.params.tolerances;
        let class = transformation::classify(&polygon, tolerances.convexity_epsilon);
        let pieces =
            transformation::split_polygon(&mut self.workspace, &polygon, cut, &hits, tolerances)?;
        let parent_area = polygon.area();
        let mut children = Vec::with_capacity(pieces.len());

        for piece in pieces {
            let built = mesh::build_mesh(
                &piece.vertices,
                &source.mapping,
                Triangulation::from(class),
                self.params.center_children,
            );

            let Some(child_polygon) = Polygon::new(built.collider) else {
                log::debug!("Dropping a degenerate piece of {:?}.", source.id);
                continue;
            };

            let mut mapping = source.mapping;
            mapping.centroid = built.centroid;

            children.push(SliceChild {
                polygon: child_polygon,
                area: piece.area,
                mapping,
                depth: source.depth + 1,
                mesh: built.mesh,
                body: source.body.scaled(piece.area / parent_area),
                source_id: source.id,
                root_id: source.root_id,
                local_offset: built.local_offset,
                tag: source.tag.map(str::to_owned),
            });
        }

        if !children.is_empty() {
            listener.on_sprite_sliced(&SliceEvent {
                source_id: source.id,
                root_id: source.root_id,
                enter: hits.enter,
                exit: hits.exit,
                children: &children,
            });
        }

        Ok(children)
    }

    /// Cuts every source accepted by `filter` along `cut`.
    ///
    /// Static bodies are skipped. A source whose split fails is logged and skipped, the others
    /// are still sliced. The pieces of all sources are returned together; each one records
    /// the source it came from.
    pub fn slice_all(
        &mut self,
        sources: &[SliceSource<'_>],
        cut: &CutLine,
        filter: &SliceFilter<'_>,
        listener: &mut impl SliceListener,
    ) -> Vec<SliceChild> {
        let mut result = vec![];

        for source in sources {
            if source.body.is_static || !filter.accepts(source) {
                continue;
            }

            match self.slice_with_listener(source, cut, None, listener) {
                Ok(children) => result.extend(children),
                Err(err) => log::warn!("Failed to slice {:?}: {}", source.id, err),
            }
        }

        result
    }
}
