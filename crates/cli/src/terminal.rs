//! Terminal implementation of the board's display seam.

use std::fmt;
use std::time::Duration;

use board_core::{
    BoardView, FeedbackId, FeedbackKind, FeedbackMessage, ParticipantSection, RenderedBoard,
};
use dialoguer::Confirm;
use tracing::debug;

/// Prints the board to stdout and feedback to stdout/stderr.
pub struct TerminalView {
    /// Skip the interactive confirmation (`--yes`)
    assume_yes: bool,
}

impl TerminalView {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

/// Plain-text listing of a rendered board.
pub struct BoardListing<'a>(pub &'a RenderedBoard);

impl fmt::Display for BoardListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No activities available.");
        }

        for card in &self.0.cards {
            writeln!(f, "{}", card.name)?;
            writeln!(f, "  {}", card.description)?;
            writeln!(f, "  Schedule: {}", card.schedule)?;
            write!(f, "  Availability: {}", card.availability())?;
            if card.over_capacity() {
                write!(f, " (over capacity)")?;
            }
            writeln!(f)?;

            match card.participant_section() {
                ParticipantSection::Empty(placeholder) => writeln!(f, "  {placeholder}")?,
                ParticipantSection::Listed(participants) => {
                    writeln!(f, "  Participants:")?;
                    for email in participants {
                        writeln!(f, "    - {email}")?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl BoardView for TerminalView {
    fn render_activities(&self, board: RenderedBoard) {
        print!("{}", BoardListing(&board));
    }

    fn render_load_failure(&self, notice: &str) {
        eprintln!("{notice}");
    }

    fn show_feedback(&self, message: FeedbackMessage) {
        match message.kind {
            FeedbackKind::Success => println!("{}", message.text),
            FeedbackKind::Error => eprintln!("error: {}", message.text),
        }
    }

    fn hide_feedback(&self, id: FeedbackId) {
        debug!(?id, "Feedback hidden");
    }

    // Printed lines stay in the scrollback; there is nothing to hide later.
    fn schedule_feedback_hide(&self, id: FeedbackId, delay: Duration) {
        debug!(?id, ?delay, "Ignoring feedback timeout in terminal");
    }

    fn reset_signup_form(&self) {
        debug!("Signup form reset");
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
