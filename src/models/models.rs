use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::core::helpers::now_millis;

/// A registered user. Never updated or deleted once stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub username: String,
    pub password: String,
    pub age: u32,
    pub gender: String,
    pub hobbies: Vec<String>,
    pub interests: Vec<String>,
}

impl Profile {
    /// Trims the credentials and rejects the profile when either is
    /// empty afterwards. Uniqueness is the directory's job, not ours.
    pub fn new(
        username: &str,
        password: &str,
        age: u32,
        gender: &str,
        hobbies: Vec<String>,
        interests: Vec<String>,
    ) -> Result<Self, AppError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::MissingCredentials);
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            age,
            gender: gender.trim().to_string(),
            hobbies,
            interests,
        })
    }
}

/// The single logged-in identity, if any.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Session {
    #[serde(rename = "currentUser")]
    pub current_user: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub from: String,
    pub text: String,
    pub ts: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Review {
    pub rating: u8,
    pub comment: String,
    pub ts: i64,
}

impl Review {
    pub fn new(rating: u8, comment: &str) -> Result<Self, AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::InvalidRating(rating));
        }
        Ok(Self {
            rating,
            comment: comment.trim().to_string(),
            ts: now_millis(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_rejects_blank_credentials() {
        assert!(matches!(
            Profile::new("  ", "123", 24, "female", vec![], vec![]),
            Err(AppError::MissingCredentials)
        ));
        assert!(matches!(
            Profile::new("alice", "   ", 24, "female", vec![], vec![]),
            Err(AppError::MissingCredentials)
        ));
    }

    #[test]
    fn review_rating_bounds() {
        assert!(matches!(Review::new(0, "bad"), Err(AppError::InvalidRating(0))));
        assert!(matches!(Review::new(6, "too good"), Err(AppError::InvalidRating(6))));
        assert_eq!(Review::new(5, "  great  ").unwrap().comment, "great");
    }
}
