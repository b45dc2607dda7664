//! # crapshoot
//!
//! This crate is a game that plays a single round of craps on the terminal with two six-sided
//! dice. The come-out roll wins on a 7 or 11 and loses on a 2, 3 or 12; any other total becomes
//! the point, and the dice are thrown until the point comes up again (a win) or a 7 ends the
//! round first (a loss).
//!
//! There is no betting and nothing to type; you watch the dice fall. A round can be replayed
//! throw for throw by pinning the dice seed, which is mostly useful for demonstrations and for
//! the tests.
//!
//! The library is really small and only covers the use cases of this one game, so there is no
//! full table of craps bets and no multi-round play.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

use anyhow::Result;
use crapshoot::init;

fn main() -> Result<ExitCode> {
    init()
}
