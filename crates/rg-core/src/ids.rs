//! Strongly typed identifier wrappers.
//!
//! IDs are plain `u32` positions into the frozen road list or the junction
//! table.  "Not assigned yet" is expressed as `Option<RoadId>` rather than a
//! sentinel; the `-1` convention only exists at the serialization boundary
//! (see [`RoadId::to_wire`]).

use std::fmt;

/// Generate a typed ID wrapper around `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Signed wire representation; `None` becomes `-1`.
            #[inline]
            pub fn to_wire(id: Option<$name>) -> i64 {
                id.map_or(-1, |id| i64::from(id.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Position of a road in the final road list.  Also the value stored in
    /// the flat connection index.
    pub struct RoadId;
}

typed_id! {
    /// A shared endpoint in the incidence table, numbered in the order the
    /// traversal first touched it.
    pub struct JunctionId;
}
