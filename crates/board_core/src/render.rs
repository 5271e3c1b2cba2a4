//! Rendering model for the board.
//!
//! The board is rebuilt from scratch on every successful load: each
//! [`RenderedBoard`] replaces the previous one wholesale.

use board_types::{Activity, ActivityCatalog};

/// Notice shown in place of the list when loading fails.
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";

/// Placeholder shown for an activity nobody has joined.
pub const NO_PARTICIPANTS_PLACEHOLDER: &str = "No participants yet";

/// First entry of the activity picker.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// One activity card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

/// What the participant area of a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantSection<'a> {
    /// Nobody enrolled; show the placeholder text.
    Empty(&'static str),
    /// Enrolled emails, each rendered with a removal control.
    Listed(&'a [String]),
}

impl ActivityCard {
    pub fn from_activity(activity: Activity) -> Self {
        let spots_left = activity.spots_left();
        Self {
            name: activity.name,
            description: activity.description,
            schedule: activity.schedule,
            spots_left,
            participants: activity.participants,
        }
    }

    /// Availability line, e.g. "3 spots left".
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    /// More participants than capacity. Shown as-is, only flagged.
    pub fn over_capacity(&self) -> bool {
        self.spots_left < 0
    }

    pub fn participant_section(&self) -> ParticipantSection<'_> {
        if self.participants.is_empty() {
            ParticipantSection::Empty(NO_PARTICIPANTS_PLACEHOLDER)
        } else {
            ParticipantSection::Listed(&self.participants)
        }
    }
}

/// Everything a view needs to redraw the list and the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBoard {
    /// Cards in server order.
    pub cards: Vec<ActivityCard>,
    /// Activity names offered by the signup picker, in server order.
    pub options: Vec<String>,
}

impl RenderedBoard {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Build the rendering model from a freshly fetched catalog.
pub fn render_board(catalog: ActivityCatalog) -> RenderedBoard {
    let (cards, options) = catalog
        .into_activities()
        .into_iter()
        .map(|activity| {
            let option = activity.name.clone();
            (ActivityCard::from_activity(activity), option)
        })
        .unzip();

    RenderedBoard { cards, options }
}
