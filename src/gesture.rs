use crate::{SLOT_DROPPABLE_PREFIX, TRAY_DROPPABLE_ID};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a drag started or ended, as reported by the drag library.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    /// Either [TRAY_DROPPABLE_ID] or [SLOT_DROPPABLE_PREFIX] followed by a slot index.
    pub droppable_id: String,
    /// The position of the dragged item inside the droppable.
    pub index: usize,
}

/// The result the drag library reports when a drag gesture completes.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    /// The identifier of the dragged item.
    #[serde(default)]
    pub draggable_id: String,
    /// Where the drag started.
    pub source: DraggableLocation,
    /// Where the drag ended, or `None` when it was dropped outside any droppable.
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

/// Where a [gesture](Gesture) took its [tile](crate::Tile) from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Source {
    /// The [tray](crate::Tray) at a display index.
    Tray {
        /// The index into the [tray](crate::Tray).
        index: usize,
    },
    /// A slot on the board.
    Slot {
        /// The index of the slot.
        slot: usize,
    },
}

/// Where a [gesture](Gesture) dropped its [tile](crate::Tile).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Destination {
    /// Outside any droppable, the gesture was abandoned.
    Outside,
    /// Back onto the [tray](crate::Tray).
    Tray,
    /// A slot on the board.
    Slot {
        /// The index of the slot.
        slot: usize,
    },
}

/// A completed drag gesture, decoded once from a [DropResult].
///
/// # See Also
///
/// * [BoardState::drag_complete](crate::BoardState::drag_complete)
/// * [BoardController::handle_drag_complete](crate::BoardController::handle_drag_complete)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Gesture {
    /// Where the [tile](crate::Tile) came from.
    pub source: Source,
    /// Where the [tile](crate::Tile) was dropped.
    pub destination: Destination,
}

/// Describes the reason why a [DropResult] could not be decoded into a [Gesture].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum DecodeError {
    /// The droppable identifier is neither the tray nor a slot.
    #[error("unknown droppable `{droppable_id}`")]
    UnknownDroppable {
        /// The droppable identifier reported by the drag library.
        droppable_id: String,
    },
    /// The droppable identifier names a slot without a valid slot index.
    #[error("droppable `{droppable_id}` does not end with a slot index")]
    MalformedSlot {
        /// The droppable identifier reported by the drag library.
        droppable_id: String,
    },
}

enum Droppable {
    Tray,
    Slot(usize),
}

fn parse_droppable(droppable_id: &str) -> Result<Droppable, DecodeError> {
    if droppable_id == TRAY_DROPPABLE_ID {
        return Ok(Droppable::Tray);
    }

    let Some(slot) = droppable_id.strip_prefix(SLOT_DROPPABLE_PREFIX) else {
        return Err(DecodeError::UnknownDroppable {
            droppable_id: droppable_id.to_owned(),
        });
    };

    // `usize::from_str` accepts a leading `+`, which the drag library never produces
    if !slot.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(DecodeError::MalformedSlot {
            droppable_id: droppable_id.to_owned(),
        });
    }
    slot.parse()
        .map(Droppable::Slot)
        .map_err(|_| DecodeError::MalformedSlot {
            droppable_id: droppable_id.to_owned(),
        })
}

impl Gesture {
    /// # Arguments
    ///
    /// * `source`: Where the [tile](crate::Tile) came from.
    /// * `destination`: Where the [tile](crate::Tile) was dropped.
    #[inline]
    pub fn new(source: Source, destination: Destination) -> Gesture {
        Gesture {
            source,
            destination,
        }
    }

    /// Validates the droppable identifiers of a [DropResult] and decodes them into a
    /// [Gesture]. Slot indexes are not checked against the board here.
    ///
    /// # Errors
    ///
    /// * [DecodeError::UnknownDroppable] Either droppable is neither the tray nor a slot.
    /// * [DecodeError::MalformedSlot] Either droppable names a slot without a valid index.
    pub fn decode(drop_result: &DropResult) -> Result<Gesture, DecodeError> {
        let source = match parse_droppable(&drop_result.source.droppable_id)? {
            Droppable::Tray => Source::Tray {
                index: drop_result.source.index,
            },
            Droppable::Slot(slot) => Source::Slot { slot },
        };

        let destination = match &drop_result.destination {
            None => Destination::Outside,
            Some(location) => match parse_droppable(&location.droppable_id)? {
                Droppable::Tray => Destination::Tray,
                Droppable::Slot(slot) => Destination::Slot { slot },
            },
        };

        Ok(Gesture::new(source, destination))
    }
}

impl Source {
    /// # Returns
    ///
    /// The droppable identifier the drag library uses for this source.
    pub fn droppable_id(&self) -> String {
        match self {
            Source::Tray { .. } => TRAY_DROPPABLE_ID.to_owned(),
            Source::Slot { slot } => slot_droppable_id(*slot),
        }
    }
}

impl Destination {
    /// # Returns
    ///
    /// The droppable identifier the drag library uses for this destination or `None` when the
    /// gesture ended outside any droppable.
    pub fn droppable_id(&self) -> Option<String> {
        match self {
            Destination::Outside => None,
            Destination::Tray => Some(TRAY_DROPPABLE_ID.to_owned()),
            Destination::Slot { slot } => Some(slot_droppable_id(*slot)),
        }
    }
}

/// # Returns
///
/// The droppable identifier of a slot, as in `case5`.
pub fn slot_droppable_id(slot: usize) -> String {
    format!("{SLOT_DROPPABLE_PREFIX}{slot}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_result(source: (&str, usize), destination: Option<(&str, usize)>) -> DropResult {
        DropResult {
            draggable_id: "blop1_rouge0".to_owned(),
            source: DraggableLocation {
                droppable_id: source.0.to_owned(),
                index: source.1,
            },
            destination: destination.map(|(droppable_id, index)| DraggableLocation {
                droppable_id: droppable_id.to_owned(),
                index,
            }),
        }
    }

    #[test]
    fn decode_tray_to_slot() {
        let gesture = Gesture::decode(&drop_result(("images", 4), Some(("case7", 0))));

        assert_eq!(
            Ok(Gesture::new(
                Source::Tray { index: 4 },
                Destination::Slot { slot: 7 }
            )),
            gesture
        );
    }

    #[test]
    fn decode_slot_to_slot() {
        let gesture = Gesture::decode(&drop_result(("case12", 0), Some(("case23", 0))));

        assert_eq!(
            Ok(Gesture::new(
                Source::Slot { slot: 12 },
                Destination::Slot { slot: 23 }
            )),
            gesture
        );
    }

    #[test]
    fn decode_cancelled() {
        let gesture = Gesture::decode(&drop_result(("images", 0), None));

        assert_eq!(
            Ok(Gesture::new(Source::Tray { index: 0 }, Destination::Outside)),
            gesture
        );
    }

    #[test]
    fn decode_back_to_tray() {
        let gesture = Gesture::decode(&drop_result(("case3", 0), Some(("images", 2))));

        assert_eq!(
            Ok(Gesture::new(Source::Slot { slot: 3 }, Destination::Tray)),
            gesture
        );
    }

    #[test]
    fn decode_unknown_droppable() {
        assert_eq!(
            Err(DecodeError::UnknownDroppable {
                droppable_id: "trash".to_owned()
            }),
            Gesture::decode(&drop_result(("trash", 0), Some(("case1", 0))))
        );
        assert_eq!(
            Err(DecodeError::UnknownDroppable {
                droppable_id: "Images".to_owned()
            }),
            Gesture::decode(&drop_result(("case1", 0), Some(("Images", 0))))
        );
    }

    #[test]
    fn decode_malformed_slot() {
        for droppable_id in ["case", "caseX", "case-1", "case+1", "case 1", "case1.5"] {
            assert_eq!(
                Err(DecodeError::MalformedSlot {
                    droppable_id: droppable_id.to_owned()
                }),
                Gesture::decode(&drop_result(("images", 0), Some((droppable_id, 0)))),
                "{droppable_id}"
            );
        }
    }

    #[test]
    fn decode_slot_beyond_board() {
        let gesture = Gesture::decode(&drop_result(("images", 0), Some(("case99", 0))));

        assert_eq!(
            Ok(Gesture::new(
                Source::Tray { index: 0 },
                Destination::Slot { slot: 99 }
            )),
            gesture
        );
    }

    #[test]
    fn deserialize_drop_result() {
        let json = r#"{
            "draggableId": "blop2_vert4",
            "type": "DEFAULT",
            "source": { "droppableId": "images", "index": 4 },
            "destination": null,
            "reason": "CANCEL"
        }"#;

        let drop_result: DropResult = serde_json::from_str(json).unwrap();

        assert_eq!("blop2_vert4", drop_result.draggable_id);
        assert_eq!(
            Ok(Gesture::new(Source::Tray { index: 4 }, Destination::Outside)),
            Gesture::decode(&drop_result)
        );
    }

    #[test]
    fn droppable_ids() {
        assert_eq!("images", Source::Tray { index: 3 }.droppable_id());
        assert_eq!("case5", Source::Slot { slot: 5 }.droppable_id());
        assert_eq!(None, Destination::Outside.droppable_id());
        assert_eq!(Some("images".to_owned()), Destination::Tray.droppable_id());
        assert_eq!(
            Some("case17".to_owned()),
            Destination::Slot { slot: 17 }.droppable_id()
        );
    }
}
