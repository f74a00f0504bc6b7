use crate::{BoardController, BoardView, DropResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// An action reported by the rendering layer or the drag library.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BoardEvent {
    /// A drag gesture completed.
    DragComplete(DropResult),
    /// The removal button of a slot was activated.
    RemoveTile {
        /// The index of the slot.
        slot: usize,
    },
    /// The reset button was activated.
    Reset,
}

/// Draws the board and reports user actions. Implemented by the rendering layer.
///
/// `next_event` blocks until the user acts, and `update_view` may draw asynchronously. The
/// board lives on a single thread, so neither needs to be [Send].
///
/// # Errors
///
/// The implementor of [`Surface`] is responsible for returning an error when it can no longer
/// report events or draw. The error stops [the session](run_session) and is propagated back to
/// the caller.
#[async_trait(?Send)]
pub trait Surface<E> {
    /// Gets the next user action, or `None` when the page is left and the session ends.
    fn next_event(&self) -> Result<Option<BoardEvent>, E>;

    /// Draws the current state of the board.
    async fn update_view(&self, view: &BoardView) -> Result<(), E>;
}

impl BoardController {
    /// Applies a [`BoardEvent`] to the board.
    ///
    /// # Returns
    ///
    /// Whether the state changed.
    pub fn apply(&mut self, event: BoardEvent) -> bool {
        match event {
            BoardEvent::DragComplete(drop_result) => self.handle_drop_result(&drop_result),
            BoardEvent::RemoveTile { slot } => self.remove_tile(slot),
            BoardEvent::Reset => {
                self.reset();
                true
            }
        }
    }
}

/// Draws the board, then repeatedly waits for a user action, applies it, and draws the board
/// again when the action changed it. Events are processed one at a time in the order they
/// are reported.
///
/// # Arguments
///
/// * `surface`: Draws the board and reports user actions.
/// * `controller`: Owns the state of the board.
///
/// # Errors
///
/// When `surface` fails to report an event or to draw.
///
/// # Returns
///
/// The controller once `surface` ends the session.
#[instrument(skip_all)]
pub async fn run_session<S, E>(
    surface: &S,
    mut controller: BoardController,
) -> Result<BoardController, E>
where
    S: Surface<E> + ?Sized,
{
    surface.update_view(&controller.view()).await?;

    while let Some(event) = surface.next_event()? {
        debug!(?event, "applying event");
        if controller.apply(event) {
            surface.update_view(&controller.view()).await?;
        }
    }

    info!("session ended");
    Ok(controller)
}
