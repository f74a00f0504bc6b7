//! The state and interaction rules of a puzzle board where labeled tiles are dragged onto
//! a grid of slots.
//!
//! ## Summary
//!
//! A fixed [tray](Tray) of [`TILES_LEN`] [tiles](Tile) (`3` [variants](Variant) of
//! `4` [colors](Color)) can be dragged onto a grid of [`SLOTS_LEN`] slots
//! ([`COLUMNS`] by [`ROWS`], `6` by `4`), moved between slots, removed from slots,
//! and the whole board reset. [`BoardController`] owns the single [`BoardState`] and offers
//! a [`BoardView`] for the rendering layer.
//!
//! ## How is the board created?
//!
//! [BoardController::new] and [BoardState::new] create the initial state: every
//! [tile](Tile) in the [tray](Tray) in [catalog order](tiles), colors first and then variants,
//! and every slot empty. [BoardController::reset] and [BoardState::reset] discard the state
//! and create the same initial state again.
//!
//! ## How are tiles placed?
//!
//! The drag library reports a completed gesture as a [`DropResult`], which
//! [Gesture::decode] validates once into a [`Gesture`] with a [`Source`] and
//! a [`Destination`]. Then [BoardState::drag_complete]:
//!
//! * ignores gestures dropped outside any droppable or onto the [tray](Tray);
//! * places a [tile](Tile) dragged from the [tray](Tray) into an empty slot, leaving the
//! [tray](Tray) as it was, so the same [tile](Tile) can be placed again;
//! * moves a [tile](Tile) from one slot into another empty slot;
//! * never overwrites an occupied slot.
//!
//! [BoardState::remove_tile] empties a slot.
//!
//! ## How are rejected actions reported?
//!
//! They are not reported to the user. Each transition consumes the state and either returns
//! the next state or returns the unchanged state with a reason
//! ([`DragRejection`], [`RemoveRejection`]). [`BoardController`] keeps the unchanged state
//! and logs the reason with [tracing]. Malformed drop results never panic and never change
//! the state.
//!
//! ## How are duplicates highlighted?
//!
//! Since the [tray](Tray) is never depleted, a [tile](Tile) can be placed into several slots.
//! [`Duplicates`] finds every such [tile](Tile), and then scans slots from the highest index
//! down: the first slot holding a duplicated [tile](Tile) is the
//! [last duplicate](DuplicateClass::LastDuplicate), and every other slot holding a duplicated
//! [tile](Tile) is an [other duplicate](DuplicateClass::OtherDuplicate). The same
//! classification is applied to the [tray](Tray). It is recomputed from scratch for every
//! [view](BoardState::board_view).
//!
//! ## How is the board connected to a page?
//!
//! A rendering layer implements [`Surface`] to report [events](BoardEvent) and draw
//! [views](BoardView), and [`run_session`] drives the [`BoardController`] until the
//! [`Surface`] ends the session.
//!
//! ## How are board states tested when properties are private?
//!
//! The `test` build configuration adds methods to [`BoardState`] to get mutable references to
//! its slots, to fill random slots, and to build a state from tile identifiers.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use board_state::*;
pub use consts::*;
pub use controller::*;
pub use duplicates::*;
pub use gesture::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use tile::*;
pub use types::*;

mod board_state;
mod consts;
mod controller;
mod duplicates;
mod gesture;
#[cfg(test)]
mod random;
mod runtime;
mod tile;
mod types;
