//! The display seam of the board.

use std::time::Duration;

use crate::feedback::{FeedbackId, FeedbackMessage};
use crate::render::RenderedBoard;

/// Everything the board controller needs from the page it drives.
///
/// Implementations own the rendered list and the feedback element; the
/// controller is their only writer.
pub trait BoardView {
    /// Replace the whole activity list and the picker options.
    fn render_activities(&self, board: RenderedBoard);

    /// Replace the activity list with a static failure notice.
    fn render_load_failure(&self, notice: &str);

    /// Show a feedback message, replacing any visible one.
    fn show_feedback(&self, message: FeedbackMessage);

    /// Hide the feedback message `id`, if it is still the one shown.
    fn hide_feedback(&self, id: FeedbackId);

    /// Arrange for [`BoardView::hide_feedback`] to run after `delay`.
    fn schedule_feedback_hide(&self, id: FeedbackId, delay: Duration);

    /// Clear the signup form inputs.
    fn reset_signup_form(&self);

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;
}
