//! Activity board controller.
//!
//! This crate provides:
//! - Board: loads activities, renders them, and drives signup/unregister
//! - ActivityApi / BoardView: the injected HTTP client and display seams
//! - HttpActivityApi: a reqwest client for native front ends (`http-client`)

pub mod api;
pub mod config;
pub mod controller;
pub mod endpoints;
pub mod error;
pub mod feedback;
#[cfg(any(feature = "http-client", test))]
pub mod http;
pub mod render;
pub mod view;

pub use api::{ActivityApi, interpret_mutation, parse_catalog};
pub use config::BoardConfig;
pub use controller::{Board, Outcome, unregister_prompt};
pub use endpoints::{Endpoints, Mutation};
pub use error::{BoardError, ErrorKind, Result};
pub use feedback::{FeedbackId, FeedbackKind, FeedbackMessage};
#[cfg(any(feature = "http-client", test))]
pub use http::HttpActivityApi;
pub use render::{ActivityCard, ParticipantSection, RenderedBoard, render_board};
pub use view::BoardView;
