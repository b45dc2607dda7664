//! The library components of the game. They allow initializing the game, sourcing dice throws,
//! playing a full round and writing every line of it to a terminal.
//!
//! The starting point of the library is the game.rs file, which contains the round state machine.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod dice;
mod game;
mod messages;

pub use dice::{Dice, DiceError, FairDice, LoadedDice, Roll};
pub use game::{init, play_round, Outcome};
