use crate::{DuplicatedTiles, Slots, Tile};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Describes how a placed or trayed [tile](Tile) is highlighted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateClass {
    /// The [tile](Tile) is not placed into more than one slot.
    #[default]
    Unflagged,
    /// The [tile](Tile) is duplicated, but this is not the last duplicate.
    OtherDuplicate,
    /// The last duplicate, found first when scanning slots from the highest index down.
    LastDuplicate,
}

/// The [tiles](Tile) placed into more than one slot, and the last of those placements.
///
/// Computed from scratch from the [slots](Slots) whenever it is needed.
///
/// # See Also
///
/// * [BoardState::duplicates](crate::BoardState::duplicates)
/// * [BoardState::board_view](crate::BoardState::board_view)
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Duplicates {
    /// Every [tile](Tile) placed into more than one slot.
    duplicated: DuplicatedTiles,
    /// The highest slot holding a duplicated [tile](Tile), and that [tile](Tile).
    last: Option<(usize, Tile)>,
}

impl Duplicates {
    /// Finds every [tile](Tile) placed into more than one slot, then scans slots from the
    /// highest index down and remembers the first slot holding one of them.
    pub fn find(slots: &Slots) -> Duplicates {
        let duplicated: DuplicatedTiles = slots.iter().flatten().copied().duplicates().collect();
        let last = slots
            .iter()
            .enumerate()
            .rev()
            .find_map(|(slot, tile)| match tile {
                Some(tile) if duplicated.contains(tile) => Some((slot, *tile)),
                _ => None,
            });

        Duplicates { duplicated, last }
    }

    /// # Returns
    ///
    /// Every [tile](Tile) placed into more than one slot.
    #[inline]
    pub fn duplicated(&self) -> &DuplicatedTiles {
        &self.duplicated
    }

    /// # Returns
    ///
    /// Whether no [tile](Tile) is placed into more than one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.duplicated.is_empty()
    }

    /// # Returns
    ///
    /// The duplicated [tile](Tile) in the highest slot, or `None` without duplicates.
    #[inline]
    pub fn last_duplicate(&self) -> Option<Tile> {
        self.last.map(|(_, tile)| tile)
    }

    /// # Returns
    ///
    /// The highest slot holding a duplicated [tile](Tile), or `None` without duplicates.
    #[inline]
    pub fn last_duplicate_slot(&self) -> Option<usize> {
        self.last.map(|(slot, _)| slot)
    }

    /// Classifies the occupant of a slot. Only the [last slot](Duplicates::last_duplicate_slot)
    /// is the [last duplicate](DuplicateClass::LastDuplicate); other placements of duplicated
    /// [tiles](Tile), including of the same [tile](Tile), are
    /// [other duplicates](DuplicateClass::OtherDuplicate).
    ///
    /// # Arguments
    ///
    /// * `slot`: The index of the slot.
    /// * `tile`: The occupant of the slot.
    pub fn classify_slot(&self, slot: usize, tile: Option<Tile>) -> DuplicateClass {
        let Some(tile) = tile else {
            return DuplicateClass::Unflagged;
        };

        if self.last_duplicate_slot() == Some(slot) {
            DuplicateClass::LastDuplicate
        } else if self.duplicated.contains(&tile) {
            DuplicateClass::OtherDuplicate
        } else {
            DuplicateClass::Unflagged
        }
    }

    /// Classifies a [tile](Tile) shown in the [tray](crate::Tray). The
    /// [last duplicate](Duplicates::last_duplicate) is
    /// [the last duplicate](DuplicateClass::LastDuplicate), and every other duplicated
    /// [tile](Tile) is an [other duplicate](DuplicateClass::OtherDuplicate).
    pub fn classify_tray_tile(&self, tile: Tile) -> DuplicateClass {
        if self.last_duplicate() == Some(tile) {
            DuplicateClass::LastDuplicate
        } else if self.duplicated.contains(&tile) {
            DuplicateClass::OtherDuplicate
        } else {
            DuplicateClass::Unflagged
        }
    }
}
