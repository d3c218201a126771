//! Game rules for N-in-a-row.
//!
//! Pure functions over a [`crate::Board`]. Rules never branch on the
//! placement mode and never write to the board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::has_victory;
