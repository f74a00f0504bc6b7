use crate::{Tile, SLOTS_LEN, TILES_LEN};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// The ordered catalog of [tiles](Tile) available to drag onto the board. Never depleted by
/// placing a [tile](Tile), so a single entry can be placed into several slots.
///
/// # See Also
///
/// * [tiles](crate::tiles)
/// * [BoardState](crate::BoardState)
/// * [TrayEntry](crate::TrayEntry)
pub type Tray = SmallVec<[Tile; TILES_LEN]>;
/// One [tile](Tile) or nothing for every slot on the board, indexed by slot.
///
/// # See Also
///
/// * [SLOTS_LEN]
/// * [BoardState](crate::BoardState)
/// * [SlotEntry](crate::SlotEntry)
pub type Slots = [Option<Tile>; SLOTS_LEN];
/// An ordered set of [tiles](Tile) which are currently placed into more than one slot.
///
/// # See Also
///
/// * [Duplicates](crate::Duplicates)
pub type DuplicatedTiles = BTreeSet<Tile>;
