use crate::{random_slots, BoardState, Slots, Tile, SLOTS_LEN};
use rand::Rng;

impl BoardState {
    /// Generates a [BoardState] with the initial tray and slots taken from identifiers, where
    /// `None` is an empty slot. Slots past the end of `identifiers` are empty.
    ///
    /// # Panics
    ///
    /// If an identifier is not a [tile](Tile) or there are more identifiers than slots.
    pub fn from_identifiers(identifiers: &[Option<&str>]) -> BoardState {
        assert!(identifiers.len() <= SLOTS_LEN);

        let mut board_state = BoardState::new();
        for (slot, identifier) in identifiers.iter().enumerate() {
            board_state.slots[slot] = identifier.map(|identifier| {
                identifier
                    .parse::<Tile>()
                    .expect("identifier should be a tile")
            });
        }

        board_state
    }

    /// A mutable reference to `self.slots`.
    pub fn mut_slots(&mut self) -> &mut Slots {
        &mut self.slots
    }

    /// Places random [tiles](Tile) into a random, small, non-zero number of distinct random
    /// slots, leaving at least one slot empty.
    ///
    /// # Returns
    ///
    /// The number of slots filled.
    pub fn random_slots<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_slots(rng, &mut self.slots)
    }

    /// # Panics
    ///
    /// If every slot is occupied.
    ///
    /// # Returns
    ///
    /// The lowest empty slot.
    pub fn empty_slot(&self) -> usize {
        self.slots
            .iter()
            .position(Option::is_none)
            .expect("some slot should be empty")
    }

    /// # Panics
    ///
    /// If every slot is empty.
    ///
    /// # Returns
    ///
    /// The lowest occupied slot.
    pub fn occupied_slot(&self) -> usize {
        self.slots
            .iter()
            .position(Option::is_some)
            .expect("some slot should be occupied")
    }

    /// # Returns
    ///
    /// The number of occupied slots.
    pub fn placed_len(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_identifiers() {
        let board_state = BoardState::from_identifiers(&[None, Some("blop3_jaune")]);

        assert_eq!(None, board_state.slots[0]);
        assert_eq!(Some("blop3_jaune".parse().unwrap()), board_state.slots[1]);
        assert_eq!(1, board_state.placed_len());
        assert_eq!(BoardState::new().tray, board_state.tray);
    }

    #[test]
    fn random_slots() {
        let mut board_state = BoardState::new();

        let filled = board_state.random_slots(&mut rand::thread_rng());

        assert_eq!(filled, board_state.placed_len());
        assert!(filled < SLOTS_LEN);
        assert_eq!(board_state.slots[board_state.empty_slot()], None);
        assert!(board_state.slots[board_state.occupied_slot()].is_some());
    }
}
