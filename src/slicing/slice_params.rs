use crate::transformation::SplitTolerances;

/// Configuration of a [`Slicer`](super::Slicer).
///
/// ```
/// # #[cfg(feature = "f32")] {
/// # use slicer2d::slicing::SliceParams;
/// let params = SliceParams {
///     max_depth: Some(3),
///     center_children: true,
///     ..SliceParams::default()
/// };
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct SliceParams {
    /// Tolerances of the split algorithms.
    pub tolerances: SplitTolerances,
    /// Sources cut this many times already are not sliced anymore. `None` means no limit.
    pub max_depth: Option<u32>,
    /// If set, every piece is re-centered on the center of its mesh bounds.
    pub center_children: bool,
}
