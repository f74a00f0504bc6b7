use crate::BoardState;

/// Describes the reason why [removing a tile](BoardState::remove_tile) left the
/// [board](BoardState) unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum RemoveRejection {
    /// The slot holds no [tile](crate::Tile).
    AlreadyEmpty {
        /// The index of the slot.
        slot: usize,
    },
    /// The slot is not on the board.
    SlotOutOfBounds {
        /// The index of the slot.
        slot: usize,
    },
}

impl BoardState {
    /// Empties a slot. The [tray](crate::Tray) is unaffected since it is never depleted.
    ///
    /// # Errors
    ///
    /// The unchanged state and one of the following reasons:
    ///
    /// * [RemoveRejection::AlreadyEmpty] The slot holds no [tile](crate::Tile).
    /// * [RemoveRejection::SlotOutOfBounds] The slot is not on the board.
    pub fn remove_tile(mut self, slot: usize) -> Result<BoardState, (Self, RemoveRejection)> {
        let Some(occupant) = self.slots.get(slot).copied() else {
            return Err((self, RemoveRejection::SlotOutOfBounds { slot }));
        };
        if occupant.is_none() {
            return Err((self, RemoveRejection::AlreadyEmpty { slot }));
        }

        self.slots[slot] = None;
        Ok(self)
    }
}
