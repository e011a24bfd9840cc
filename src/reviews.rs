//! Review-side actions. The vote button carries the review id itself,
//! and the tally lives beside it in the review header.

use web_sys::Element;

use crate::api::{self, ApiError};

pub async fn upvote(review_id: &str) -> Result<(), ApiError> {
    api::upvote_review(review_id).await?;
    apply_upvote(review_id);
    Ok(())
}

pub async fn remove_upvote(review_id: &str) -> Result<(), ApiError> {
    api::remove_review_upvote(review_id).await?;
    apply_remove_upvote(review_id);
    Ok(())
}

pub fn apply_upvote(review_id: &str) {
    let Some(button) = crate::document().get_element_by_id(review_id) else {
        return;
    };
    crate::swap_vote_button(&button, "likeReview", "unlikeReview", "Unlike");
    if let Some(tally) = tally_for(&button) {
        crate::shift_tally(&tally, 1);
    }
}

pub fn apply_remove_upvote(review_id: &str) {
    let Some(button) = crate::document().get_element_by_id(review_id) else {
        return;
    };
    crate::swap_vote_button(&button, "unlikeReview", "likeReview", "Like");
    if let Some(tally) = tally_for(&button) {
        crate::shift_tally(&tally, -1);
    }
}

fn tally_for(button: &Element) -> Option<Element> {
    button.parent_element()?.query_selector(".numlikes").ok()?
}

pub async fn delete(review_id: &str) -> Result<(), ApiError> {
    let parent = api::delete_review(review_id).await?;
    crate::navigate(&format!("/games/{}/reviews", parent.game_id));
    Ok(())
}
