use crate::{BoardState, BoardView, Destination, DropResult, Gesture, Source};
use std::mem;
use tracing::{debug, info, instrument, warn};

/// Owns the single [`BoardState`] of a board and replaces it on every user action.
///
/// Every action either replaces the state with the next one or leaves it untouched; rejected
/// actions are only logged, never reported to the user.
///
/// # See Also
///
/// * [BoardState::drag_complete]
/// * [BoardState::remove_tile]
/// * [BoardState::reset]
#[derive(Debug, Default)]
pub struct BoardController {
    state: BoardState,
}

impl BoardController {
    /// Creates a controller holding the [initial state](BoardState::new).
    pub fn new() -> BoardController {
        BoardController::default()
    }

    /// # Returns
    ///
    /// The current state of the board.
    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// # Returns
    ///
    /// A new [`BoardView`] of the current state.
    #[inline]
    pub fn view(&self) -> BoardView {
        self.state.board_view()
    }

    /// Applies a completed drag gesture. Rejected gestures leave the state unchanged.
    ///
    /// # Returns
    ///
    /// Whether the state changed.
    #[instrument(level = "debug", skip(self))]
    pub fn handle_drag_complete(&mut self, source: Source, destination: Destination) -> bool {
        let gesture = Gesture::new(source, destination);
        match mem::take(&mut self.state).drag_complete(&gesture) {
            Ok(next_state) => {
                self.state = next_state;
                debug!("tile placed");
                true
            }
            Err((same_state, rejection)) => {
                self.state = same_state;
                debug!(?rejection, "drag rejected");
                false
            }
        }
    }

    /// Decodes a [drop result](DropResult) reported by the drag library and applies it as a
    /// [completed drag gesture](BoardController::handle_drag_complete). Drop results that
    /// cannot be decoded leave the state unchanged.
    ///
    /// # Returns
    ///
    /// Whether the state changed.
    #[instrument(level = "debug", skip(self))]
    pub fn handle_drop_result(&mut self, drop_result: &DropResult) -> bool {
        match Gesture::decode(drop_result) {
            Ok(gesture) => self.handle_drag_complete(gesture.source, gesture.destination),
            Err(error) => {
                warn!(%error, "ignoring drop result");
                false
            }
        }
    }

    /// Empties a slot. Empty slots and slots off the board are left unchanged.
    ///
    /// # Returns
    ///
    /// Whether the state changed.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_tile(&mut self, slot: usize) -> bool {
        match mem::take(&mut self.state).remove_tile(slot) {
            Ok(next_state) => {
                self.state = next_state;
                debug!("tile removed");
                true
            }
            Err((same_state, rejection)) => {
                self.state = same_state;
                debug!(?rejection, "remove rejected");
                false
            }
        }
    }

    /// Replaces the state with the [initial state](BoardState::new).
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = mem::take(&mut self.state).reset();
        info!("board reset");
    }
}
