//! Reusable UI components.

mod activity_card;
mod feedback_banner;
mod loading;
mod signup_form;

pub use activity_card::{ActivityCard, RemoveRequest};
pub use feedback_banner::FeedbackBanner;
pub use loading::Loading;
pub use signup_form::{SignupForm, SignupRequest};
