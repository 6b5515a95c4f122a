use super::{InstanceId, SliceChild};
use crate::math::{Point, Real};

/// Notification sent once per source that a cut divided.
#[derive(Copy, Clone, Debug)]
pub struct SliceEvent<'a> {
    /// The object that was sliced.
    pub source_id: InstanceId,
    /// The uncut object at the origin of the lineage.
    pub root_id: InstanceId,
    /// Where the cut entered the object, in its local frame.
    pub enter: Point<Real>,
    /// Where the cut left the object, in its local frame.
    pub exit: Point<Real>,
    /// The pieces the object was cut into.
    pub children: &'a [SliceChild],
}

/// Receives [`SliceEvent`]s.
///
/// `()` ignores every event, and any `FnMut(&SliceEvent)` closure is a listener.
pub trait SliceListener {
    /// Called after `event.source_id` was divided into at least one piece.
    fn on_sprite_sliced(&mut self, event: &SliceEvent<'_>);
}

impl SliceListener for () {
    fn on_sprite_sliced(&mut self, _: &SliceEvent<'_>) {}
}

impl<F> SliceListener for F
where
    F: for<'a, 'b> FnMut(&'a SliceEvent<'b>),
{
    fn on_sprite_sliced(&mut self, event: &SliceEvent<'_>) {
        (*self)(event)
    }
}
