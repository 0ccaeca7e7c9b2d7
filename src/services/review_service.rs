//! Review Service - validation and submission of book reviews

use chrono::Local;
use serde::Deserialize;

use crate::domain::{DomainError, NewReview, Review, ReviewRepository};

/// Warning shown when a required input was left blank
pub const FILL_IN_ALL_FIELDS: &str = "Please fill in all fields.";

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Raw "Add your review" form as submitted by the browser
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub reviewer: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub comment: String,
}

fn required(value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation(FILL_IN_ALL_FIELDS.to_string()));
    }
    Ok(value.to_string())
}

fn parse_rating(value: &str) -> Result<i32, DomainError> {
    let raw = required(value)?;
    match raw.parse::<i32>() {
        Ok(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => Ok(rating),
        _ => Err(DomainError::Validation(format!(
            "Rating must be a whole number from {} to {}.",
            MIN_RATING, MAX_RATING
        ))),
    }
}

/// Checks the form and stores the review dated today.
/// Nothing is written when a field is missing.
pub async fn submit_review(
    repo: &dyn ReviewRepository,
    form: ReviewForm,
) -> Result<Review, DomainError> {
    let book_name = required(&form.book)?;
    let reviewer = required(&form.reviewer)?;
    let comment = required(&form.comment)?;
    let rating = parse_rating(&form.rating)?;

    let review = repo
        .create(NewReview {
            book_name,
            reviewer,
            rating,
            comment,
            review_date: Local::now().format("%Y-%m-%d").to_string(),
        })
        .await?;

    tracing::info!(
        "Review #{} added for book #{} by {}",
        review.id,
        review.book_id,
        review.reviewer
    );
    Ok(review)
}
