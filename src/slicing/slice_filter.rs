use super::{InstanceId, SliceSource};

/// Restricts which sources [`Slicer::slice_all`](super::Slicer::slice_all) may cut.
///
/// The default filter accepts everything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SliceFilter<'a> {
    /// Only cut this object, or pieces sliced out of it.
    pub instance: Option<InstanceId>,
    /// Only cut sources with this tag.
    pub tag: Option<&'a str>,
}

impl<'a> SliceFilter<'a> {
    /// Only accept `instance` and its pieces.
    pub fn instance(instance: InstanceId) -> Self {
        Self {
            instance: Some(instance),
            tag: None,
        }
    }

    /// Only accept sources tagged with `tag`.
    pub fn tag(tag: &'a str) -> Self {
        Self {
            instance: None,
            tag: Some(tag),
        }
    }

    /// Does this filter let `source` through?
    pub fn accepts(&self, source: &SliceSource<'_>) -> bool {
        if let Some(instance) = self.instance {
            if source.id != instance && source.root_id != instance {
                return false;
            }
        }

        match self.tag {
            Some(tag) => source.tag == Some(tag),
            None => true,
        }
    }
}
