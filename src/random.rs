use crate::{
    slot_droppable_id, Destination, DraggableLocation, DropResult, Gesture, Slots, Source, Tile,
    SLOTS_LEN, TILES_LEN, TRAY_DROPPABLE_ID,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// Places random [tiles](Tile) into a random, small, non-zero number of distinct random slots,
/// leaving at least one slot empty.
///
/// # Returns
///
/// The number of slots filled.
pub fn random_slots<R: Rng + ?Sized>(rng: &mut R, slots: &mut Slots) -> usize {
    let filled = rng.gen_range(1..SLOTS_LEN);
    let indexes = (0..SLOTS_LEN)
        .collect::<Vec<_>>()
        .tap_mut(|indexes| indexes.shuffle(rng));

    for &slot in &indexes[..filled] {
        slots[slot] = Some(rng.gen::<Tile>());
    }

    filled
}

/// A random slot index, sometimes past the end of the board.
pub fn random_slot<R: Rng + ?Sized>(rng: &mut R) -> usize {
    if rng.gen_ratio(1, 10) {
        rng.gen_range(SLOTS_LEN..2 * SLOTS_LEN)
    } else {
        rng.gen_range(0..SLOTS_LEN)
    }
}

/// A random [gesture](Gesture) of any shape: from the tray or from a slot, dropped
/// outside, onto the tray or onto a slot. Indexes are sometimes out of bounds.
pub fn random_gesture<R: Rng + ?Sized>(rng: &mut R) -> Gesture {
    let source = if rng.gen() {
        Source::Tray {
            index: rng.gen_range(0..TILES_LEN + 2),
        }
    } else {
        Source::Slot {
            slot: random_slot(rng),
        }
    };

    let destination = match rng.gen_range(0..10) {
        0 => Destination::Outside,
        1 => Destination::Tray,
        _ => Destination::Slot {
            slot: random_slot(rng),
        },
    };

    Gesture::new(source, destination)
}

/// A random [drop result](DropResult), either the encoding of a
/// [random gesture](random_gesture) or, some of the time, one with a malformed droppable.
pub fn random_drop_result<R: Rng + ?Sized>(rng: &mut R) -> DropResult {
    let gesture = random_gesture(rng);
    let (source_id, index) = match gesture.source {
        Source::Tray { index } => (TRAY_DROPPABLE_ID.to_owned(), index),
        Source::Slot { slot } => (slot_droppable_id(slot), 0),
    };

    let mut drop_result = DropResult {
        draggable_id: String::new(),
        source: DraggableLocation {
            droppable_id: source_id,
            index,
        },
        destination: gesture
            .destination
            .droppable_id()
            .map(|droppable_id| DraggableLocation {
                droppable_id,
                index: 0,
            }),
    };

    match rng.gen_range(0..8) {
        0 => drop_result.source.droppable_id = "case".to_owned(),
        1 => {
            drop_result.destination = Some(DraggableLocation {
                droppable_id: ["caseX", "case-2", "trash", ""]
                    .choose(rng)
                    .copied()
                    .unwrap_or_default()
                    .to_owned(),
                index: 0,
            })
        }
        _ => {}
    }

    drop_result
}
