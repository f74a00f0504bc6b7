/// The number of columns in the grid of slots. `6` columns.
///
/// # See Also
///
/// * [ROWS]
/// * [SLOTS_LEN]
pub const COLUMNS: usize = 6;
/// The number of rows in the grid of slots. `4` rows.
///
/// # See Also
///
/// * [COLUMNS]
/// * [SLOTS_LEN]
pub const ROWS: usize = 4;
/// The number of slots on the board, [COLUMNS] `*` [ROWS]. `24` slots.
///
/// # See Also
///
/// * [Slots](crate::Slots)
/// * [BoardState](crate::BoardState)
pub const SLOTS_LEN: usize = COLUMNS * ROWS;
/// The droppable identifier the drag library reports for the [tray](crate::Tray).
///
/// # See Also
///
/// * [Gesture::decode](crate::Gesture::decode)
pub const TRAY_DROPPABLE_ID: &str = "images";
/// The prefix of the droppable identifier the drag library reports for a slot, followed by
/// the slot index, as in `case5`.
///
/// # See Also
///
/// * [Gesture::decode](crate::Gesture::decode)
pub const SLOT_DROPPABLE_PREFIX: &str = "case";
