//! Arena identifiers for clips, parameters and states.
//!
//! Identity is the arena index inside a [`StateGraph`](crate::graph::StateGraph); two
//! entities with the same name but different ids are distinct.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ParamId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StateId(pub u32);

macro_rules! arena_index {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                #[inline]
                pub(crate) fn from_index(index: usize) -> Self {
                    Self(index as u32)
                }

                #[inline]
                pub fn index(self) -> usize {
                    self.0 as usize
                }
            }
        )*
    };
}

arena_index!(ClipId, ParamId, StateId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_arena_position() {
        assert_eq!(StateId::from_index(3), StateId(3));
        assert_eq!(StateId(3).index(), 3);
        assert_eq!(ParamId::from_index(0).index(), 0);
        assert_eq!(ClipId::from_index(7), ClipId(7));
    }
}
