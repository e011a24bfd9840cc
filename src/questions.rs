//! Deleting a question leaves the page entirely, so the response's
//! parent game drives a navigation instead of a DOM patch.

use crate::api::{self, ApiError};

pub async fn delete(question_id: &str) -> Result<(), ApiError> {
    let parent = api::delete_question(question_id).await?;
    crate::navigate(&format!("/games/{}/questions", parent.game_id));
    Ok(())
}
