//! Browser implementation of the board's display seam.

use std::time::Duration;

use board_core::{BoardView, FeedbackId, FeedbackMessage, RenderedBoard};
use gloo_timers::callback::Timeout;
use tracing::debug;
use yew::prelude::*;

use crate::state::{BoardAction, BoardState};

/// Drives the board page through its reducer.
#[derive(Clone)]
pub struct YewBoardView {
    dispatcher: UseReducerDispatcher<BoardState>,
}

impl YewBoardView {
    pub fn new(dispatcher: UseReducerDispatcher<BoardState>) -> Self {
        Self { dispatcher }
    }
}

impl BoardView for YewBoardView {
    fn render_activities(&self, board: RenderedBoard) {
        self.dispatcher.dispatch(BoardAction::Render(board));
    }

    fn render_load_failure(&self, notice: &str) {
        self.dispatcher
            .dispatch(BoardAction::LoadFailed(notice.to_string()));
    }

    fn show_feedback(&self, message: FeedbackMessage) {
        self.dispatcher.dispatch(BoardAction::ShowFeedback(message));
    }

    fn hide_feedback(&self, id: FeedbackId) {
        self.dispatcher.dispatch(BoardAction::HideFeedback(id));
    }

    fn schedule_feedback_hide(&self, id: FeedbackId, delay: Duration) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        debug!(?id, millis, "Scheduling feedback hide");

        let view = self.clone();
        Timeout::new(millis, move || view.hide_feedback(id)).forget();
    }

    fn reset_signup_form(&self) {
        self.dispatcher.dispatch(BoardAction::ResetForm);
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
