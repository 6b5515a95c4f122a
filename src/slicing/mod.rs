//! Slicing sprites: validation of the cut, splitting, and rebuilding of every piece.

pub use self::slice_child::{BodyParams, InstanceId, SliceChild, SliceSource};
pub use self::slice_filter::SliceFilter;
pub use self::slice_listener::{SliceEvent, SliceListener};
pub use self::slice_params::SliceParams;
pub use self::slicer::Slicer;

mod slice_child;
mod slice_filter;
mod slice_listener;
mod slice_params;
mod slicer;
