use crate::{BoardState, Destination, Gesture, Source, Tile};

/// Describes the reason why a [gesture](Gesture) left the [board](BoardState) unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum DragRejection {
    /// The gesture was dropped outside any droppable.
    Cancelled,
    /// The gesture was dropped back onto the [tray](crate::Tray).
    TrayDestination,
    /// A [tile](Tile) was dropped onto the slot it came from.
    SameSlot {
        /// The index of the slot.
        slot: usize,
    },
    /// A [tile](Tile) was dropped onto a slot which already holds one.
    Occupied {
        /// The index of the destination slot.
        slot: usize,
        /// The [tile](Tile) already in the destination slot.
        occupant: Tile,
    },
    /// A [tile](Tile) was dragged from past the end of the [tray](crate::Tray).
    TrayIndexOutOfBounds {
        /// The index into the [tray](crate::Tray).
        index: usize,
        /// The number of [tiles](Tile) in the [tray](crate::Tray).
        tray_len: usize,
    },
    /// A gesture started or ended at a slot that is not on the board.
    SlotOutOfBounds {
        /// The index of the slot.
        slot: usize,
    },
    /// A gesture started at a slot without a [tile](Tile).
    EmptySource {
        /// The index of the slot.
        slot: usize,
    },
}

impl BoardState {
    /// Checks whether the gesture is a legal placement, then places the dragged [tile](Tile) into
    /// the destination slot. A [tile](Tile) dragged from the [tray](crate::Tray) stays in the
    /// [tray](crate::Tray); a [tile](Tile) dragged from a slot leaves that slot empty.
    ///
    /// # Arguments
    ///
    /// * `gesture`: Where the [tile](Tile) came from and where it was dropped.
    ///
    /// # Errors
    ///
    /// The unchanged state and one of the following reasons:
    ///
    /// * [DragRejection::Cancelled] The gesture was dropped outside any droppable.
    /// * [DragRejection::TrayDestination] The gesture was dropped back onto the tray.
    /// * [DragRejection::SameSlot] A [tile](Tile) was dropped onto the slot it came from.
    /// * [DragRejection::Occupied] A [tile](Tile) was dropped onto an occupied slot.
    /// * [DragRejection::TrayIndexOutOfBounds] A [tile](Tile) was dragged from past the end
    /// of the tray.
    /// * [DragRejection::SlotOutOfBounds] A gesture started or ended off the board.
    /// * [DragRejection::EmptySource] A gesture started at an empty slot.
    ///
    /// # Returns
    ///
    /// The next state of the board.
    pub fn drag_complete(mut self, gesture: &Gesture) -> Result<BoardState, (Self, DragRejection)> {
        let (tile, destination) = match self.check_gesture(gesture) {
            Ok(placement) => placement,
            Err(rejection) => return Err((self, rejection)),
        };

        if let Source::Slot { slot } = gesture.source {
            self.slots[slot] = None;
        }
        self.slots[destination] = Some(tile);

        Ok(self)
    }

    /// Checks whether the gesture is a legal placement.
    ///
    /// # Returns
    ///
    /// The dragged [tile](Tile) and the index of the destination slot.
    fn check_gesture(&self, gesture: &Gesture) -> Result<(Tile, usize), DragRejection> {
        let destination = match gesture.destination {
            Destination::Outside => return Err(DragRejection::Cancelled),
            Destination::Tray => return Err(DragRejection::TrayDestination),
            Destination::Slot { slot } => slot,
        };

        let occupant = |slot: usize| {
            self.slots
                .get(slot)
                .copied()
                .ok_or(DragRejection::SlotOutOfBounds { slot })
        };

        let tile = match gesture.source {
            Source::Tray { index } => {
                self.tray
                    .get(index)
                    .copied()
                    .ok_or(DragRejection::TrayIndexOutOfBounds {
                        index,
                        tray_len: self.tray.len(),
                    })?
            }
            Source::Slot { slot } => {
                if slot == destination {
                    return Err(DragRejection::SameSlot { slot });
                }
                occupant(slot)?.ok_or(DragRejection::EmptySource { slot })?
            }
        };

        if let Some(occupant) = occupant(destination)? {
            return Err(DragRejection::Occupied {
                slot: destination,
                occupant,
            });
        }

        Ok((tile, destination))
    }
}
