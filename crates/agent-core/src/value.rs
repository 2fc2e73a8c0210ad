use crate::math::{Color, Vec2, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single fact stored in an [`AgentContext`](crate::AgentContext).
///
/// The tag set is closed: every variant is `Copy` and fixed-size, so a
/// context entry never allocates per value. The tag is fixed at
/// construction; reading under the wrong tag yields the caller's default
/// (or `None`), never the stored bits reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContextValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Color(Color),
}

/// Payload types admissible in a context entry.
///
/// The trait is sealed: the set of storable types is exactly the
/// [`ContextValue`] variants, so writing an unsupported type through the
/// generic path is a compile error rather than a runtime surprise.
pub trait ContextPayload: Copy + sealed::Sealed {
    fn into_value(self) -> ContextValue;
    fn from_value(value: ContextValue) -> Option<Self>;
}

mod sealed {
    use crate::math::{Color, Vec2, Vec3};

    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for Vec2 {}
    impl Sealed for Vec3 {}
    impl Sealed for Color {}
}

macro_rules! impl_payload {
    ($ty:ty, $variant:ident) => {
        impl ContextPayload for $ty {
            fn into_value(self) -> ContextValue {
                ContextValue::$variant(self)
            }

            fn from_value(value: ContextValue) -> Option<Self> {
                match value {
                    ContextValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for ContextValue {
            fn from(value: $ty) -> Self {
                ContextValue::$variant(value)
            }
        }
    };
}

impl_payload!(bool, Bool);
impl_payload!(i32, Int);
impl_payload!(f32, Float);
impl_payload!(Vec2, Vec2);
impl_payload!(Vec3, Vec3);
impl_payload!(Color, Color);
