use crate::{tiles, Duplicates, Slots, Tile, Tray, SLOTS_LEN};

pub use board_view::*;
pub use drag_complete::*;
pub use remove_tile::*;

mod board_view;
mod drag_complete;
mod remove_tile;
#[cfg(test)]
mod test_setup;

/// Owns the [tray](Tray) and the [slots](Slots) of the board. Created from [BoardState::new].
///
/// Transitions consume the current state and produce the next one, so a state observed by the
/// rendering layer is never changed behind its back.
///
/// # See Also
///
/// * [BoardState::drag_complete]
/// * [BoardState::remove_tile]
/// * [BoardState::reset]
/// * [BoardController](crate::BoardController)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BoardState {
    /// The catalog of [tiles](Tile) available to drag, never depleted.
    tray: Tray,
    /// One [tile](Tile) or nothing for every slot on the board.
    slots: Slots,
}

impl BoardState {
    /// Creates the initial state: every [tile](Tile) in the [tray](Tray) in
    /// [catalog order](tiles) and every slot empty.
    pub fn new() -> BoardState {
        BoardState {
            tray: tiles().into_iter().collect(),
            slots: [None; SLOTS_LEN],
        }
    }

    /// Discards this state and produces the [initial state](BoardState::new).
    #[inline]
    pub fn reset(self) -> BoardState {
        BoardState::new()
    }

    /// # Returns
    ///
    /// The catalog of [tiles](Tile) available to drag.
    #[inline]
    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    /// # Returns
    ///
    /// One [tile](Tile) or nothing for every slot on the board.
    #[inline]
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// # Returns
    ///
    /// The occupant of a slot, or `None` if the slot is empty or not on the board.
    #[inline]
    pub fn slot(&self, slot: usize) -> Option<Tile> {
        self.slots.get(slot).copied().flatten()
    }

    /// # Returns
    ///
    /// The [tiles](Tile) currently placed into more than one slot.
    #[inline]
    pub fn duplicates(&self) -> Duplicates {
        Duplicates::find(&self.slots)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::new()
    }
}
