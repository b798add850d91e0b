use crate::config::REVIEWS_KEY;
use crate::core::errors::AppError;
use crate::core::kv::{KeyValue, KeyValueExt};
use crate::models::models::Review;

/// Prepend a new review so the board lists newest first.
pub fn submit_review(store: &dyn KeyValue, rating: u8, comment: &str) -> Result<Review, AppError> {
    let review = Review::new(rating, comment)?;
    let mut reviews: Vec<Review> = store.load_or(REVIEWS_KEY, Vec::new());
    reviews.insert(0, review.clone());
    store.set_json(REVIEWS_KEY, &reviews)?;
    Ok(review)
}

pub fn list_reviews(store: &dyn KeyValue) -> Vec<Review> {
    store.load_or(REVIEWS_KEY, Vec::new())
}
