//! Page state for the board, driven by reducer actions.

use std::rc::Rc;

use board_core::{ActivityCard, FeedbackId, FeedbackMessage, RenderedBoard};
use yew::prelude::*;

/// What the activity list area shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Loading,
    Loaded(Vec<ActivityCard>),
    Failed(String),
}

/// Everything the board page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub list: ListState,
    /// Activity names offered by the signup picker.
    pub options: Vec<String>,
    pub feedback: Option<FeedbackMessage>,
    /// Bumped on every form reset; used as the form's key so it remounts blank.
    pub form_generation: u64,
}

/// State transitions requested by the board view.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    Render(RenderedBoard),
    LoadFailed(String),
    ShowFeedback(FeedbackMessage),
    HideFeedback(FeedbackId),
    ResetForm,
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            BoardAction::Render(board) => {
                next.list = ListState::Loaded(board.cards);
                next.options = board.options;
            }
            BoardAction::LoadFailed(notice) => {
                next.list = ListState::Failed(notice);
            }
            BoardAction::ShowFeedback(message) => {
                next.feedback = Some(message);
            }
            BoardAction::HideFeedback(id) => {
                // A newer message may have replaced the one this timer was for
                if next.feedback.as_ref().is_none_or(|shown| shown.id != id) {
                    return self;
                }
                next.feedback = None;
            }
            BoardAction::ResetForm => {
                next.form_generation += 1;
            }
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, spots_left: i64) -> ActivityCard {
        ActivityCard {
            name: name.to_string(),
            description: "desc".to_string(),
            schedule: "Mondays".to_string(),
            spots_left,
            participants: vec![],
        }
    }

    fn reduce(state: BoardState, action: BoardAction) -> BoardState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = BoardState::default();
        assert_eq!(state.list, ListState::Loading);
        assert!(state.options.is_empty());
        assert!(state.feedback.is_none());
    }

    #[test]
    fn test_render_replaces_list_and_options() {
        let first = RenderedBoard {
            cards: vec![card("Chess Club", 3), card("Art Studio", 5)],
            options: vec!["Chess Club".to_string(), "Art Studio".to_string()],
        };
        let second = RenderedBoard {
            cards: vec![card("Drama Club", 1)],
            options: vec!["Drama Club".to_string()],
        };

        let state = reduce(BoardState::default(), BoardAction::Render(first));
        let state = reduce(state, BoardAction::Render(second.clone()));

        assert_eq!(state.list, ListState::Loaded(second.cards));
        assert_eq!(state.options, vec!["Drama Club".to_string()]);
    }

    #[test]
    fn test_load_failure_replaces_list() {
        let loaded = reduce(
            BoardState::default(),
            BoardAction::Render(RenderedBoard {
                cards: vec![card("Chess Club", 3)],
                options: vec!["Chess Club".to_string()],
            }),
        );

        let state = reduce(loaded, BoardAction::LoadFailed("Failed".to_string()));

        assert_eq!(state.list, ListState::Failed("Failed".to_string()));
    }

    #[test]
    fn test_hide_only_hides_matching_message() {
        let old = FeedbackMessage::success("Signed up");
        let new = FeedbackMessage::error("Already signed up");

        let state = reduce(BoardState::default(), BoardAction::ShowFeedback(old.clone()));
        let state = reduce(state, BoardAction::ShowFeedback(new.clone()));

        // The older message's timer fires while the newer one is shown
        let state = reduce(state, BoardAction::HideFeedback(old.id));
        assert_eq!(state.feedback, Some(new.clone()));

        let state = reduce(state, BoardAction::HideFeedback(new.id));
        assert_eq!(state.feedback, None);
    }

    #[test]
    fn test_reset_form_bumps_generation() {
        let state = reduce(BoardState::default(), BoardAction::ResetForm);
        let state = reduce(state, BoardAction::ResetForm);
        assert_eq!(state.form_generation, 2);
    }
}
