//! This module contains the dice behind the game: the `Roll` value produced by every throw, the
//! `Dice` trait that abstracts where throws come from, and the two sources the crate ships.
//!
//! `FairDice` draws from its own `fastrand` generator and is what the binary plays with.
//! `LoadedDice` plays back a fixed script of throws and is what the tests play with, since the
//! whole observable behavior of a round depends on the dice it is given.

use std::collections::VecDeque;

use console::style;
use fastrand::Rng;

/// This trait is the randomness capability the round consumes. One call draws both die faces of
/// a single throw, so a source is asked for exactly one value per throw no matter how it keeps
/// its entropy.
pub trait Dice {
    /// Draws the two die faces of one throw from the source.
    ///
    /// # Errors
    ///
    /// The function returns `DiceError::Exhausted` if the source cannot produce another throw.
    /// The game never recovers from this; the failure is meant to travel up to `main` as a fatal
    /// error rather than be papered over with a substitute roll.
    fn roll(&mut self) -> Result<Roll, DiceError>;
}

/// This enum holds the ways a dice source can fail to produce a throw. A fair source never
/// fails; a loaded source fails once its script runs dry, which stands in for a real entropy
/// source running out.
#[derive(thiserror::Error, Debug)]
pub enum DiceError {
    /// This variant is used when a source is asked for more throws than it can give.
    #[error("{}", style("the dice source ran out of throws").bold().underlined())]
    Exhausted,
}

/// This struct is the honest dice source. It owns its generator instead of reaching for the
/// thread-local one, so a seeded instance replays the same round no matter what else in the
/// process asks for random numbers.
pub struct FairDice {
    /// This field contains the generator both die faces of every throw are drawn from.
    rng: Rng,
}

impl FairDice {
    /// This function creates a source seeded from system entropy, for ordinary play.
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// This function creates a source with a fixed seed. Two sources built with the same seed
    /// throw the identical sequence of rolls, which makes a whole round reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }
}

impl Default for FairDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for FairDice {
    fn roll(&mut self) -> Result<Roll, DiceError> {
        let one = self.rng.u8(1..=6);
        let two = self.rng.u8(1..=6);

        Ok(Roll::new(one, two))
    }
}

/// This struct is a dice source fixed to produce known throws in a known order. Casinos frown on
/// it; tests depend on it, because it makes every path through the round reachable on purpose.
pub struct LoadedDice {
    /// This field contains the scripted throws that have not been played yet.
    throws: VecDeque<Roll>,
}

impl LoadedDice {
    /// This function loads a source with the given throws, each a pair of die faces in the order
    /// they should come up.
    ///
    /// # Panics
    ///
    /// The function panics if any scripted face is not on a six-sided die, so a bad script fails
    /// at construction instead of somewhere in the middle of a round.
    pub fn new(throws: &[(u8, u8)]) -> Self {
        Self {
            throws: throws
                .iter()
                .map(|&(one, two)| Roll::new(one, two))
                .collect(),
        }
    }

    /// This function reports how many scripted throws are left unplayed. Tests use it to check
    /// that a round consumed exactly the rolls it was expected to.
    pub fn remaining(&self) -> usize {
        self.throws.len()
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> Result<Roll, DiceError> {
        self.throws.pop_front().ok_or(DiceError::Exhausted)
    }
}

/// This struct holds the two die faces of one throw. A roll is created fresh for every throw and
/// only lives long enough to be reported and summed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roll {
    /// This field contains the two faces in the order they were drawn.
    faces: [u8; 2],
}

impl Roll {
    /// This function builds a throw from two die faces.
    ///
    /// # Panics
    ///
    /// The function panics if either face is outside 1 through 6. A source that hands out such a
    /// face has broken its contract, and there is no sensible roll to continue with.
    pub fn new(one: u8, two: u8) -> Self {
        assert!(
            (1..=6).contains(&one),
            "die face {one} is not on a six-sided die"
        );
        assert!(
            (1..=6).contains(&two),
            "die face {two} is not on a six-sided die"
        );

        Self { faces: [one, two] }
    }

    /// This function returns the two faces in the order they were drawn.
    pub const fn faces(self) -> [u8; 2] {
        self.faces
    }

    /// This function returns the total of the throw, always the sum of the two faces and so
    /// always between 2 and 12.
    pub const fn total(self) -> u8 {
        self.faces[0] + self.faces[1]
    }
}
