use super::{PolygonSplitError, SplitPolygon, SplitTolerances, SplitWorkspace};
use crate::shape::{CutLine, LineSide, Polygon};
use crate::utils;
use ordered_float::OrderedFloat;

/// Splits an arbitrary simple polygon along the infinite line supporting `cut`.
///
/// The boundary is turned into a linked cycle, with extra nodes where it crosses the line.
/// The crossings are then sorted along the line and paired up; every pair is bridged so
/// that the cycle splits in two. Each resulting cycle becomes one piece.
///
/// Pieces failing the vertex count or area checks are dropped. If the bridges leave a
/// single cycle, the line did not divide the polygon and no piece is returned.
pub fn split_concave(
    workspace: &mut SplitWorkspace,
    polygon: &Polygon,
    cut: &CutLine,
    tolerances: &SplitTolerances,
) -> Result<Vec<SplitPolygon>, PolygonSplitError> {
    split_edges(workspace, polygon, cut, tolerances)?;
    sort_edges(workspace, cut);
    split_cycles(workspace)?;

    let cycles = workspace.collect_cycles();

    if cycles.len() < 2 {
        log::debug!("The cut does not divide the concave polygon.");
        return Ok(vec![]);
    }

    Ok(cycles
        .into_iter()
        .filter_map(|cycle| SplitPolygon::accept(cycle, tolerances, false))
        .collect())
}

/// Fills the workspace with the boundary of `polygon`, inserting a node wherever an edge
/// strictly crosses the cut line.
fn split_edges(
    workspace: &mut SplitWorkspace,
    polygon: &Polygon,
    cut: &CutLine,
    tolerances: &SplitTolerances,
) -> Result<(), PolygonSplitError> {
    let vertices = polygon.vertices();
    workspace.reset(vertices.len());

    for (i, start) in vertices.iter().enumerate() {
        let end = &vertices[(i + 1) % vertices.len()];
        let start_side = cut.side_of(start, tolerances.side_epsilon);
        let end_side = cut.side_of(end, tolerances.side_epsilon);
        let id = workspace.push(*start, start_side);

        if start_side == LineSide::On {
            workspace.on_line.push(id);
        } else if start_side != end_side && end_side != LineSide::On {
            let crossing = utils::line_intersection2d(start, end, &cut.start, &cut.end)
                .ok_or(PolygonSplitError::ParallelLines)?;
            let id = workspace.push(crossing, LineSide::On);
            workspace.on_line.push(id);
        }
    }

    workspace.link_cycle();
    Ok(())
}

/// Sorts the nodes on the line by their position along the cut.
///
/// Nodes with equal projections keep their boundary order.
fn sort_edges(workspace: &mut SplitWorkspace, cut: &CutLine) {
    let nodes = &workspace.nodes;
    workspace
        .on_line
        .sort_by_key(|id| OrderedFloat(cut.projection(&nodes[*id].position)));

    if let Some(&first) = workspace.on_line.first() {
        let origin = workspace.nodes[first].position;

        for &id in &workspace.on_line[1..] {
            let node = &mut workspace.nodes[id];
            node.dist_on_line = (node.position - origin).norm();
        }
    }
}

/// Can a bridge start at this node on the line?
fn is_source(workspace: &SplitWorkspace, id: usize) -> bool {
    let prev = workspace.prev(id);
    let next = workspace.next(id);

    match (workspace.side(prev), workspace.side(next)) {
        (LineSide::Left, LineSide::Right) => true,
        (LineSide::Left, LineSide::On) => workspace.dist(next) < workspace.dist(id),
        (LineSide::On, LineSide::Right) => workspace.dist(prev) < workspace.dist(id),
        _ => false,
    }
}

/// Can a bridge end at this node on the line?
fn is_destination(workspace: &SplitWorkspace, id: usize) -> bool {
    let prev = workspace.side(workspace.prev(id));
    let next = workspace.side(workspace.next(id));

    matches!(
        (prev, next),
        (LineSide::Right, LineSide::Left)
            | (LineSide::On, LineSide::Left)
            | (LineSide::Right, LineSide::On)
            | (LineSide::Right, LineSide::Right)
            | (LineSide::Left, LineSide::Left)
    )
}

/// Pairs up the sorted nodes on the line and bridges each pair.
fn split_cycles(workspace: &mut SplitWorkspace) -> Result<(), PolygonSplitError> {
    let num_on_line = workspace.on_line.len();
    let mut carried_src = None;
    let mut i = 0;

    while i < num_on_line {
        let mut src = carried_src.take();

        while src.is_none() && i < num_on_line {
            let curr = workspace.on_line[i];

            if is_source(workspace, curr) {
                src = Some(curr);
            }

            i += 1;
        }

        let mut dst = None;

        while dst.is_none() && i < num_on_line {
            let curr = workspace.on_line[i];

            if is_destination(workspace, curr) {
                dst = Some(curr);
            } else {
                i += 1;
            }
        }

        if let (Some(src), Some(dst)) = (src, dst) {
            workspace.link_points(src, dst)?;
            workspace.verify_cycles()?;

            // The boundary re-enters the cut right after this bridge: keep going from there.
            let src_prev = workspace.prev(src);

            if workspace.side(workspace.prev(src_prev)) == LineSide::Left {
                carried_src = Some(src_prev);
            } else if workspace.side(workspace.next(dst)) == LineSide::Right {
                carried_src = Some(dst);
            }
        }

        i += 1;
    }

    Ok(())
}
