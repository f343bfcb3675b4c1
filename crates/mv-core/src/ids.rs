//! Typed handles to primitives registered with a display region.
//!
//! A handle is the registration slot plus a zero-sized kind tag, so a line
//! handle cannot be passed where a shape handle is expected.

use crate::error::RenderError;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::num::NonZeroU32;

/// Names a primitive family in handles and errors.
pub trait PrimitiveKind {
    const NAME: &'static str;
}

#[derive(Debug)]
pub enum LineKind {}

#[derive(Debug)]
pub enum ShapeKind {}

impl PrimitiveKind for LineKind {
    const NAME: &'static str = "line";
}

impl PrimitiveKind for ShapeKind {
    const NAME: &'static str = "shape";
}

/// Slot is stored 1-based so `Option<Handle<_>>` stays four bytes.
pub struct Handle<K> {
    slot: NonZeroU32,
    kind: PhantomData<fn() -> K>,
}

pub type LineId = Handle<LineKind>;
pub type ShapeId = Handle<ShapeKind>;

impl<K> Handle<K> {
    pub fn from_index(index: u32) -> Self {
        Self {
            slot: NonZeroU32::MIN.saturating_add(index),
            kind: PhantomData,
        }
    }

    /// 0-based registration order within the owning region.
    pub fn index(self) -> usize {
        (self.slot.get() - 1) as usize
    }
}

impl<K: PrimitiveKind> Handle<K> {
    /// Error for a handle its region never issued.
    pub fn unknown(self) -> RenderError {
        RenderError::UnknownPrimitive {
            kind: K::NAME,
            index: self.index(),
        }
    }
}

impl<K> Clone for Handle<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Handle<K> {}

impl<K> PartialEq for Handle<K> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<K> Eq for Handle<K> {}

impl<K> Hash for Handle<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

impl<K: PrimitiveKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", K::NAME, self.index())
    }
}

impl<K: PrimitiveKind> fmt::Display for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", K::NAME, self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_survives_round_trip() {
        for i in [0_u32, 1, 7, 10_000] {
            assert_eq!(LineId::from_index(i).index(), i as usize);
        }
    }

    #[test]
    fn optional_handle_has_no_overhead() {
        assert_eq!(
            core::mem::size_of::<ShapeId>(),
            core::mem::size_of::<Option<ShapeId>>()
        );
    }

    #[test]
    fn formatting_names_the_kind() {
        assert_eq!(format!("{:?}", LineId::from_index(2)), "line#2");
        assert_eq!(ShapeId::from_index(0).to_string(), "shape 0");
        assert_eq!(
            LineId::from_index(4).unknown(),
            RenderError::UnknownPrimitive {
                kind: "line",
                index: 4
            }
        );
    }
}
