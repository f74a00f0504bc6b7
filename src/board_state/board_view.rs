use crate::{slot_droppable_id, BoardState, DuplicateClass, Tile, COLUMNS, SLOTS_LEN, TILES_LEN};
use serde::Serialize;
use smallvec::SmallVec;

/// A [tile](Tile) shown in the [tray](crate::Tray).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct TrayEntry {
    /// The [tile](Tile) shown.
    pub tile: Tile,
    /// The display index in the [tray](crate::Tray), reported back as the drag source index.
    pub index: usize,
    /// How the [tile](Tile) is highlighted.
    pub class: DuplicateClass,
}

/// A slot on the board and its occupant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct SlotEntry {
    /// The index of the slot.
    pub slot: usize,
    /// The occupant of the slot, or `None` if it is empty.
    pub tile: Option<Tile>,
    /// How the occupant is highlighted, [unflagged](DuplicateClass::Unflagged) when empty.
    pub class: DuplicateClass,
}

/// Everything the rendering layer needs to draw the board, computed from a [`BoardState`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct BoardView {
    /// Every [tile](Tile) in the [tray](crate::Tray) in display order.
    pub tray: SmallVec<[TrayEntry; TILES_LEN]>,
    /// Every slot on the board in index order.
    pub slots: SmallVec<[SlotEntry; SLOTS_LEN]>,
    /// The number of columns in the grid of slots.
    pub columns: usize,
}

impl TrayEntry {
    /// # Returns
    ///
    /// The draggable identifier of this entry, the [tile](Tile) identifier followed by the
    /// display index, as in `blop2_vert4`.
    pub fn draggable_id(&self) -> String {
        format!("{}{}", self.tile, self.index)
    }
}

impl SlotEntry {
    /// # Returns
    ///
    /// The draggable identifier of the occupant, its [tile](Tile) identifier, or `None` if
    /// the slot is empty.
    pub fn draggable_id(&self) -> Option<String> {
        self.tile.map(|tile| tile.to_string())
    }

    /// # Returns
    ///
    /// The droppable identifier of this slot, as in `case5`.
    #[inline]
    pub fn droppable_id(&self) -> String {
        slot_droppable_id(self.slot)
    }

    /// # Returns
    ///
    /// The row of this slot in the grid.
    #[inline]
    pub fn row(&self) -> usize {
        self.slot / COLUMNS
    }

    /// # Returns
    ///
    /// The column of this slot in the grid.
    #[inline]
    pub fn column(&self) -> usize {
        self.slot % COLUMNS
    }
}

impl BoardState {
    /// Classifies every [tray](crate::Tray) entry and every slot from
    /// [the current duplicates](BoardState::duplicates).
    ///
    /// # Returns
    ///
    /// A new [`BoardView`] computed from scratch.
    pub fn board_view(&self) -> BoardView {
        let duplicates = self.duplicates();

        BoardView {
            tray: self
                .tray
                .iter()
                .enumerate()
                .map(|(index, &tile)| TrayEntry {
                    tile,
                    index,
                    class: duplicates.classify_tray_tile(tile),
                })
                .collect(),
            slots: self
                .slots
                .iter()
                .enumerate()
                .map(|(slot, &tile)| SlotEntry {
                    slot,
                    tile,
                    class: duplicates.classify_slot(slot, tile),
                })
                .collect(),
            columns: COLUMNS,
        }
    }
}
