//! Matchmaking core: profiles, compatibility scoring, match lists,
//! pairwise chat and a review board, all persisted as JSON values in a
//! pluggable key-value store.

pub mod config;
pub mod core;
pub mod models;

pub mod chat;
pub mod matching;
pub mod reviews;
pub mod session;
pub mod users;
