//! This module contains all functions that write the game's lines to the terminal. They all take
//! the terminal handle as a parameter, so a round can be played against any terminal the caller
//! owns, including the buffered ones the tests never flush.
//!
//! Specifically, the functions cover the welcome banner, the per-throw report, the point
//! announcement, the final announcements and the short rolling pause shown between throws. The
//! wording of each line is built by a pure helper, so the text can be checked without a terminal.

use std::{thread, time::Duration};

use anyhow::Result;
use console::{style, Term};
use indicatif::ProgressBar;

use crate::dice::Roll;
use crate::game::{Outcome, Phase};

/// This function is in charge of announcing how the round ended, with the wording picked by the
/// phase the final roll was thrown in.
pub(crate) fn announce_outcome(term: &Term, phase: Phase, outcome: Outcome) -> Result<()> {
    term.write_line(&outcome_line(phase, outcome))?;
    Ok(())
}

/// This function is in charge of announcing the point the shooter must chase from now on.
pub(crate) fn announce_point(term: &Term, point: u8) -> Result<()> {
    term.write_line(&point_line(point))?;
    Ok(())
}

/// This function builds the announcement line for the way the round ended.
fn outcome_line(phase: Phase, outcome: Outcome) -> String {
    match (phase, outcome) {
        (Phase::ComeOut, Outcome::Win) => {
            format!("{}", style("Congratulations! You win!").bold())
        }
        (Phase::ComeOut, Outcome::Loss) => {
            format!("{}", style("Craps! You lose.").bold().underlined())
        }
        (Phase::Point(_), Outcome::Win) => {
            format!("{}", style("You hit your point! You win!").bold())
        }
        (Phase::Point(_), Outcome::Loss) => {
            format!("{}", style("Seven out! You lose.").bold().underlined())
        }
    }
}

/// This function builds the announcement line for a freshly established point.
fn point_line(point: u8) -> String {
    format!("Your point is {}. Keep rolling!", style(point).bold())
}

/// This function is in charge of reporting a single throw, face by face and with the total the
/// round is decided on.
pub(crate) fn report_roll(term: &Term, roll: Roll) -> Result<()> {
    term.write_line(&roll_line(roll))?;
    Ok(())
}

/// This function builds the report line for one throw, carrying both faces in the order they
/// were drawn and their total.
fn roll_line(roll: Roll) -> String {
    let [one, two] = roll.faces();

    format!(
        "You rolled a {} and a {} (total: {})",
        style(one).bold(),
        style(two).bold(),
        style(roll.total()).bold()
    )
}

/// This function draws a short spinner before a throw to build a little suspense. It is skipped
/// when the caller asked for a fast game or when nobody is watching the output.
pub(crate) fn roll_pause(term: &Term, fast: bool) {
    if fast || !term.is_term() {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Rolling...");
    spinner.enable_steady_tick(Duration::from_millis(50));
    thread::sleep(Duration::from_millis(450));
    spinner.finish_and_clear();
}

/// This function clears the screen and prints the banner the game opens with, as well as setting
/// the title of the console window to the name of the game.
pub(crate) fn welcome(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to Craps!";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.set_title("crapshoot");

    term.write_line(&format!("{}", msg))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use console::strip_ansi_codes;

    use super::*;

    #[test]
    fn test_roll_line_reports_both_faces_and_the_total() {
        let line = roll_line(Roll::new(3, 4));

        assert_eq!(
            strip_ansi_codes(&line),
            "You rolled a 3 and a 4 (total: 7)",
            "the report must carry both faces and their sum"
        );
    }

    #[test]
    fn test_roll_line_keeps_the_faces_in_thrown_order() {
        let line = roll_line(Roll::new(6, 1));

        assert_eq!(
            strip_ansi_codes(&line),
            "You rolled a 6 and a 1 (total: 7)",
            "the faces must be reported in the order they came up"
        );
    }

    #[test]
    fn test_point_line_names_the_point() {
        let line = point_line(9);

        assert_eq!(
            strip_ansi_codes(&line),
            "Your point is 9. Keep rolling!",
            "the announcement must name the established point"
        );
    }

    #[test]
    fn test_outcome_lines_match_the_phase_and_the_outcome() {
        let cases = [
            (Phase::ComeOut, Outcome::Win, "Congratulations! You win!"),
            (Phase::ComeOut, Outcome::Loss, "Craps! You lose."),
            (Phase::Point(8), Outcome::Win, "You hit your point! You win!"),
            (Phase::Point(8), Outcome::Loss, "Seven out! You lose."),
        ];

        for (phase, outcome, wording) in cases {
            assert_eq!(
                strip_ansi_codes(&outcome_line(phase, outcome)),
                wording,
                "{outcome:?} in {phase:?} must announce itself as {wording:?}"
            );
        }
    }
}
