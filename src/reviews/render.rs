//! HTML for the reviews panel and its fallback.

use std::fmt::Write;

use super::select_reviews;
use crate::config::ReviewsConfig;
use crate::types::{PlaceDetails, Review};

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';
const MAX_STARS: u8 = 5;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Five-star bar for a rating: whole stars filled, the rest empty.
///
/// Fractions round down and out-of-range ratings clamp to 0..=5.
pub fn stars_for_rating(rating: f64) -> String {
    (1..=MAX_STARS)
        .map(|i| {
            if f64::from(i) <= rating {
                FILLED_STAR
            } else {
                EMPTY_STAR
            }
        })
        .collect()
}

fn write_review_link(out: &mut String, config: &ReviewsConfig) {
    let _ = write!(
        out,
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="write-review-btn">Write a Review</a>"#,
        escape_html(&config.write_review_url())
    );
}

fn write_review(out: &mut String, review: &Review, format_date: &dyn Fn(i64) -> String) {
    let author = escape_html(&review.author_name);
    out.push_str(r#"<div class="review-item"><div class="review-header"><div class="reviewer-info">"#);
    if let Some(photo) = &review.profile_photo_url {
        let _ = write!(
            out,
            r#"<img src="{}" alt="{author}" class="reviewer-photo">"#,
            escape_html(photo)
        );
    }
    let _ = write!(
        out,
        r#"<div class="reviewer-details"><h5 class="reviewer-name">{author}</h5><span class="review-date">{}</span></div></div>"#,
        escape_html(&format_date(review.time))
    );
    let _ = write!(
        out,
        r#"<div class="review-rating"><div class="stars">{}</div></div></div>"#,
        stars_for_rating(f64::from(review.rating))
    );
    let _ = write!(
        out,
        r#"<div class="review-text"><p>{}</p></div></div>"#,
        escape_html(&review.text)
    );
}

/// Render the place summary, the selected reviews and the write-a-review link.
///
/// `format_date` turns a review's unix timestamp (seconds) into display text.
pub fn render_place(
    place: &PlaceDetails,
    config: &ReviewsConfig,
    format_date: &dyn Fn(i64) -> String,
) -> String {
    let rating = place.rating.unwrap_or(0.0);
    let mut out = String::new();

    out.push_str(r#"<div class="google-reviews-container">"#);
    let _ = write!(
        out,
        r#"<div class="business-info"><div class="overall-rating"><div class="rating-line"><div class="stars">{}</div><span class="rating-text">{rating} out of 5 stars</span></div>"#,
        stars_for_rating(rating)
    );
    if let Some(total) = place.user_ratings_total {
        let _ = write!(out, r#"<span class="total-reviews">({total} reviews)</span>"#);
    }
    out.push_str("</div></div>");

    let selected = select_reviews(&place.reviews, config.sort_by, config.reviews_to_show);
    if !selected.is_empty() {
        out.push_str(r#"<div class="reviews-list">"#);
        for review in selected {
            write_review(&mut out, review, format_date);
        }
        out.push_str("</div>");
    }

    out.push_str(r#"<div class="write-review-section">"#);
    write_review_link(&mut out, config);
    out.push_str("</div></div>");
    out
}

/// Fallback panel shown when reviews cannot be loaded.
pub fn render_error(config: &ReviewsConfig) -> String {
    let mut out = String::new();
    out.push_str(r#"<div class="reviews-error"><div class="error-content">"#);
    out.push_str(r#"<i class="fas fa-exclamation-triangle"></i>"#);
    out.push_str("<h4>Reviews Temporarily Unavailable</h4>");
    out.push_str(
        "<p>We're having trouble loading our Google reviews right now. \
         Please check back later or contact us directly for references.</p>",
    );
    let _ = write!(
        out,
        r#"<div class="contact-fallback"><a href="tel:{}" class="error-cta-button"><i class="fas fa-phone"></i> Call {}</a>"#,
        escape_html(&config.phone),
        escape_html(&config.phone_display)
    );
    write_review_link(&mut out, config);
    out.push_str("</div></div></div>");
    out
}
