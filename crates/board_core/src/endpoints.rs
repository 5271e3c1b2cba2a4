//! URL construction for the activities API.

use url::Url;

use crate::error::{BoardError, Result};

/// A state-changing request on an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// `POST /activities/{name}/signup`
    Signup,
    /// `POST /activities/{name}/unregister`
    Unregister,
}

impl Mutation {
    /// Final path segment of the endpoint.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Unregister => "unregister",
        }
    }

    /// Message shown when the request fails without a server answer.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Signup => "Failed to sign up. Please try again.",
            Self::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

/// Endpoint URLs rooted at the API origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parse the API origin.
    ///
    /// Any query or fragment on the base URL is dropped.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(BoardError::InvalidBaseUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    /// `GET /activities`
    pub fn activities(&self) -> Url {
        self.with_segments(&["activities"])
    }

    /// `POST /activities/{name}/{signup|unregister}?email={email}`
    pub fn mutation(&self, mutation: Mutation, activity: &str, email: &str) -> Url {
        let mut url = self.with_segments(&["activities", activity, mutation.path_segment()]);
        url.query_pairs_mut().append_pair("email", email);
        url
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // new() rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_url() {
        let endpoints = Endpoints::new("http://localhost:8000").unwrap();
        assert_eq!(
            endpoints.activities().as_str(),
            "http://localhost:8000/activities"
        );
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let endpoints = Endpoints::new("https://school.example.edu/board/").unwrap();
        assert_eq!(
            endpoints.activities().as_str(),
            "https://school.example.edu/board/activities"
        );
    }

    #[test]
    fn test_signup_url_is_percent_encoded() {
        let endpoints = Endpoints::new("http://localhost:8000").unwrap();
        let url = endpoints.mutation(Mutation::Signup, "Chess Club", "a@b.com");

        assert_eq!(
            url.as_str(),
            "http://localhost:8000/activities/Chess%20Club/signup?email=a%40b.com"
        );
    }

    #[test]
    fn test_unregister_url_escapes_reserved_characters() {
        let endpoints = Endpoints::new("http://localhost:8000").unwrap();
        let url = endpoints.mutation(Mutation::Unregister, "Art/Design?", "a+b@c.edu");

        assert_eq!(
            url.as_str(),
            "http://localhost:8000/activities/Art%2FDesign%3F/unregister?email=a%2Bb%40c.edu"
        );
    }

    #[test]
    fn test_base_query_and_fragment_are_dropped() {
        let endpoints = Endpoints::new("http://localhost:8000/?debug=1#top").unwrap();
        assert_eq!(
            endpoints.activities().as_str(),
            "http://localhost:8000/activities"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            Endpoints::new("not a url"),
            Err(BoardError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            Endpoints::new("mailto:board@example.edu"),
            Err(BoardError::InvalidBaseUrl(_))
        ));
    }
}
