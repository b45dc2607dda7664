//! The game module contains the core parts of the game, except for dice sources and message
//! output.
//!
//! It contains the `init()` function to set up the terminal and dice and play one round, the
//! `play_round()` state machine that drives a round from the come-out roll to its end, and the
//! pure decision table both of them rest on.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use console::Term;

use crate::dice::{Dice, FairDice};
use crate::messages::{announce_outcome, announce_point, report_roll, roll_pause, welcome};

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. It uses the derive attribute to set up the few options the
/// game takes; none of them are required, so plain `crapshoot` plays a round straight away.
#[derive(Parser)]
#[command(name = "crapshoot", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// Skip the short rolling pause before each throw.
    ///
    /// The pause is pure showmanship. It is already skipped whenever the output is not a
    /// terminal, so piped output never waits; this flag turns it off for interactive runs too.
    #[arg(short, long)]
    fast: bool,
    /// Play the round with a fixed dice seed.
    ///
    /// Two runs with the same seed throw the identical sequence of dice and end in the same
    /// outcome, which makes a round reproducible. Without this option the dice are seeded from
    /// system entropy.
    #[arg(short, long)]
    #[arg(env = "CRAPSHOOT_SEED", value_name = "SEED")]
    seed: Option<u64>,
    /// Reflect the outcome in the process exit code.
    ///
    /// With this flag a won round exits with code 0 and a lost round with code 1, so scripts can
    /// branch on the result. Without it the program exits with 0 after any completed round.
    #[arg(long)]
    status: bool,
}

/// This enum holds the terminal result of a completed round, to transfer the win or loss between
/// the state machine, the announcement of it, and the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// This variant is used when the round ends against the shooter.
    Loss,
    /// This variant is used when the round ends in the shooter's favor.
    Win,
}

impl Outcome {
    /// This function reports the outcome as the single win flag callers branch on.
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// This enum holds the two named states a round moves through. A round starts at the come-out
/// roll and moves into the point phase at most once; it never moves back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// This variant is the opening state, before any point exists.
    ComeOut,
    /// This variant is the chasing state, carrying the established point. The point is always
    /// one of 4, 5, 6, 8, 9 or 10, because every other come-out total settles the round on the
    /// spot.
    Point(u8),
}

/// This enum holds what a single roll does to the round: settle it with an outcome, or leave it
/// unsettled in some phase. It is the return value of the decision table in `resolve()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// This variant is used when the roll ends the round.
    Settled(Outcome),
    /// This variant is used when the round carries on in the given phase.
    Unsettled(Phase),
}

/// Initializes the terminal and the dice and plays exactly one round from the come-out roll to
/// its end. This is a `main()` function of sorts though it is still called from main.rs.
///
/// The dice are seeded from system entropy unless the `--seed` option pins them, and the
/// resulting exit code only reflects the outcome when `--status` asks for it.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - crapshoot::DiceError
pub fn init() -> Result<ExitCode> {
    let term = Term::stdout();
    let cli = Cli::parse();
    let mut dice = match cli.seed {
        Some(seed) => FairDice::with_seed(seed),
        None => FairDice::new(),
    };

    // show the welcome banner
    welcome(&term)?;

    // play the one round of the program's life
    let outcome = play_round(&term, &mut dice, cli.fast)?;

    if cli.status && !outcome.is_win() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// This function drives one full round against the given dice source, reporting every throw on
/// the terminal as it happens and announcing the outcome when the round settles.
///
/// The round starts at the come-out roll; a 7 or 11 wins it outright, a 2, 3 or 12 loses it
/// outright, and anything else becomes the point. From then on the dice are thrown until the
/// point comes up again (win) or a 7 does (seven out, loss). The loop has no iteration cap: a
/// fair source settles the round with probability one, and a loaded source runs dry with an
/// error instead of spinning.
///
/// When `fast` is set the rolling pause before each throw is skipped; the pause is presentation
/// only and never affects the rolls.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - crapshoot::DiceError
pub fn play_round<D: Dice>(term: &Term, dice: &mut D, fast: bool) -> Result<Outcome> {
    let mut phase = Phase::ComeOut;

    // round loop
    loop {
        // build a little suspense, then throw and show the dice
        roll_pause(term, fast);
        let roll = dice.roll()?;
        report_roll(term, roll)?;

        match resolve(phase, roll.total()) {
            Resolution::Settled(outcome) => {
                announce_outcome(term, phase, outcome)?;
                break Ok(outcome);
            }
            Resolution::Unsettled(next) => {
                // the only phase change a roll can leave unsettled is the one establishing the
                // point, so announce it exactly once
                if let (Phase::ComeOut, Phase::Point(point)) = (phase, next) {
                    announce_point(term, point)?;
                }
                phase = next;
            }
        }
    }
}

/// This function is the decision table of craps for a single roll: given the phase the throw was
/// made in and its total, it says whether the round settles and how, or which phase it carries
/// on in. It touches no terminal and no dice, so it can be checked total by total.
pub(crate) const fn resolve(phase: Phase, total: u8) -> Resolution {
    match phase {
        Phase::ComeOut => match total {
            7 | 11 => Resolution::Settled(Outcome::Win),
            2 | 3 | 12 => Resolution::Settled(Outcome::Loss),
            point => Resolution::Unsettled(Phase::Point(point)),
        },
        Phase::Point(point) => {
            if total == point {
                Resolution::Settled(Outcome::Win)
            } else if total == 7 {
                Resolution::Settled(Outcome::Loss)
            } else {
                Resolution::Unsettled(Phase::Point(point))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{DiceError, LoadedDice};

    /// A terminal whose output is buffered and never flushed, so tests stay silent.
    fn quiet_term() -> Term {
        Term::buffered_stdout()
    }

    #[test]
    fn test_come_out_decision_table() {
        for total in [7, 11] {
            assert_eq!(
                resolve(Phase::ComeOut, total),
                Resolution::Settled(Outcome::Win),
                "a natural {total} must win outright"
            );
        }

        for total in [2, 3, 12] {
            assert_eq!(
                resolve(Phase::ComeOut, total),
                Resolution::Settled(Outcome::Loss),
                "craps {total} must lose outright"
            );
        }

        for total in [4, 5, 6, 8, 9, 10] {
            assert_eq!(
                resolve(Phase::ComeOut, total),
                Resolution::Unsettled(Phase::Point(total)),
                "{total} must become the point"
            );
        }
    }

    #[test]
    fn test_point_phase_decision_table() {
        assert_eq!(
            resolve(Phase::Point(8), 8),
            Resolution::Settled(Outcome::Win),
            "hitting the point must win"
        );
        assert_eq!(
            resolve(Phase::Point(8), 7),
            Resolution::Settled(Outcome::Loss),
            "a seven must lose once a point is set"
        );

        for total in [2, 3, 4, 5, 6, 9, 10, 11, 12] {
            assert_eq!(
                resolve(Phase::Point(8), total),
                Resolution::Unsettled(Phase::Point(8)),
                "{total} must leave the point at 8"
            );
        }
    }

    #[test]
    fn test_natural_seven_wins_the_come_out() {
        let mut dice = LoadedDice::new(&[(3, 4)]);
        let outcome = play_round(&quiet_term(), &mut dice, true).expect("round should finish");

        // a first-roll 7 is a natural win; it can never turn into a point of 7
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_natural_eleven_wins_the_come_out() {
        let mut dice = LoadedDice::new(&[(5, 6)]);
        let outcome = play_round(&quiet_term(), &mut dice, true).expect("round should finish");

        assert_eq!(outcome, Outcome::Win);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_craps_totals_lose_the_come_out() {
        for throw in [(1, 1), (1, 2), (6, 6)] {
            let mut dice = LoadedDice::new(&[throw]);
            let outcome = play_round(&quiet_term(), &mut dice, true).expect("round should finish");

            assert_eq!(outcome, Outcome::Loss, "{throw:?} must lose on the spot");
            assert_eq!(dice.remaining(), 0, "{throw:?} must not enter a point phase");
        }
    }

    #[test]
    fn test_making_the_point_wins() {
        let mut dice = LoadedDice::new(&[(2, 4), (3, 3)]);
        let outcome = play_round(&quiet_term(), &mut dice, true).expect("round should finish");

        assert_eq!(outcome, Outcome::Win);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_seven_out_loses_the_point_phase() {
        let mut dice = LoadedDice::new(&[(5, 5), (3, 4)]);
        let outcome = play_round(&quiet_term(), &mut dice, true).expect("round should finish");

        assert_eq!(outcome, Outcome::Loss);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_neutral_rolls_keep_the_round_alive() {
        // point of 8, then a 2 that decides nothing, then the point again
        let mut dice = LoadedDice::new(&[(4, 4), (1, 1), (4, 4)]);
        let outcome = play_round(&quiet_term(), &mut dice, true).expect("round should finish");

        assert_eq!(outcome, Outcome::Win);
        assert_eq!(dice.remaining(), 0, "all three throws must have been played");
    }

    #[test]
    fn test_a_dry_dice_source_is_fatal() {
        // the script establishes a point and then has nothing left to throw
        let mut dice = LoadedDice::new(&[(4, 4)]);
        let err = play_round(&quiet_term(), &mut dice, true)
            .expect_err("the round cannot finish without dice");

        assert!(matches!(
            err.downcast_ref::<DiceError>(),
            Some(DiceError::Exhausted)
        ));
    }

    #[test]
    fn test_outcome_exposes_the_win_flag() {
        assert!(Outcome::Win.is_win());
        assert!(!Outcome::Loss.is_win());
    }
}
