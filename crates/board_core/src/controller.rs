//! The board controller: load, sign up, remove, refresh.

use tracing::{debug, info, warn};

use crate::api::ActivityApi;
use crate::config::BoardConfig;
use crate::endpoints::Mutation;
use crate::error::BoardError;
use crate::feedback::FeedbackMessage;
use crate::render::{LOAD_FAILURE_NOTICE, render_board};
use crate::view::BoardView;

/// How a user action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

impl Outcome {
    pub fn is_failure(self) -> bool {
        self == Self::Failed
    }
}

/// Confirmation text for removing a participant.
pub fn unregister_prompt(activity: &str, email: &str) -> String {
    format!("Are you sure you want to unregister {email} from {activity}?")
}

/// Drives a [`BoardView`] from an [`ActivityApi`].
///
/// Every failure is turned into something visible on the view; no method
/// returns an error.
#[derive(Debug, Clone)]
pub struct Board<A, V> {
    api: A,
    view: V,
    config: BoardConfig,
}

impl<A: ActivityApi, V: BoardView> Board<A, V> {
    pub fn new(api: A, view: V, config: BoardConfig) -> Self {
        Self { api, view, config }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Fetch all activities and redraw the list and the picker.
    pub async fn load_activities(&self) -> Outcome {
        match self.api.fetch_activities().await {
            Ok(catalog) => {
                let board = render_board(catalog);
                info!(activities = board.len(), "Loaded activities");
                self.view.render_activities(board);
                Outcome::Succeeded
            }
            Err(err) => {
                warn!(error = %err, "Failed to load activities");
                self.view.render_load_failure(LOAD_FAILURE_NOTICE);
                Outcome::Failed
            }
        }
    }

    /// Sign `email` up for `activity`.
    ///
    /// On success the form is cleared and the list reloaded.
    pub async fn submit_signup(&self, activity: &str, email: &str) -> Outcome {
        match self.api.signup(activity, email).await {
            Ok(message) => {
                info!(activity, email, "Signed up");
                self.notify(FeedbackMessage::success(message));
                self.view.reset_signup_form();
                self.load_activities().await;
                Outcome::Succeeded
            }
            Err(err) => {
                self.report_failure(Mutation::Signup, activity, email, &err);
                Outcome::Failed
            }
        }
    }

    /// Remove `email` from `activity` after the user confirms.
    pub async fn remove_participant(&self, activity: &str, email: &str) -> Outcome {
        if !self.view.confirm(&unregister_prompt(activity, email)) {
            debug!(activity, email, "Unregister cancelled");
            return Outcome::Cancelled;
        }

        match self.api.unregister(activity, email).await {
            Ok(message) => {
                info!(activity, email, "Unregistered");
                self.notify(FeedbackMessage::success(message));
                self.load_activities().await;
                Outcome::Succeeded
            }
            Err(err) => {
                self.report_failure(Mutation::Unregister, activity, email, &err);
                Outcome::Failed
            }
        }
    }

    fn report_failure(&self, mutation: Mutation, activity: &str, email: &str, err: &BoardError) {
        warn!(
            activity,
            email,
            request = mutation.path_segment(),
            error = %err,
            "Request failed"
        );
        self.notify(FeedbackMessage::error(
            err.user_message(mutation.fallback_message()),
        ));
    }

    fn notify(&self, message: FeedbackMessage) {
        let id = message.id;
        self.view.show_feedback(message);
        self.view
            .schedule_feedback_hide(id, self.config.feedback_timeout);
    }
}
