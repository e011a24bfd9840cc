//! One function per endpoint the page talks to. Every call resolves to
//! a `Result`; callers decide what to roll back when a request fails.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::payload::{AnswerCreated, AnswerEdited, ParentGame};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

#[derive(Serialize)]
struct AnswerText<'a> {
    text: &'a str,
}

fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, ApiError> {
    let response = expect_ok(response)?;
    Ok(response.json().await?)
}

pub async fn create_answer(question_id: &str, text: &str) -> Result<AnswerCreated, ApiError> {
    let body = serde_json::to_string(&AnswerText { text })?;
    let response = Request::post(&format!("/questions/{question_id}/answer"))
        .header("content-type", "application/json")
        .body(body)?
        .send()
        .await?;
    decode(response).await
}

pub async fn edit_answer(answer_id: &str, text: &str) -> Result<AnswerEdited, ApiError> {
    let body = serde_json::to_string(&AnswerText { text })?;
    let response = Request::patch(&format!("/answers/{answer_id}/edit"))
        .header("content-type", "application/json")
        .body(body)?
        .send()
        .await?;
    decode(response).await
}

pub async fn delete_answer(answer_id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&format!("/answers/{answer_id}/delete"))
        .send()
        .await?;
    expect_ok(response)?;
    Ok(())
}

pub async fn upvote_answer(answer_id: &str) -> Result<(), ApiError> {
    let response = Request::post(&format!("/answers/{answer_id}/upvote"))
        .send()
        .await?;
    expect_ok(response)?;
    Ok(())
}

pub async fn remove_answer_upvote(answer_id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&format!("/answers/{answer_id}/remove_upvote"))
        .send()
        .await?;
    expect_ok(response)?;
    Ok(())
}

pub async fn upvote_review(review_id: &str) -> Result<(), ApiError> {
    let response = Request::post(&format!("/reviews/{review_id}/upvote"))
        .send()
        .await?;
    expect_ok(response)?;
    Ok(())
}

pub async fn remove_review_upvote(review_id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&format!("/reviews/{review_id}/remove_upvote"))
        .send()
        .await?;
    expect_ok(response)?;
    Ok(())
}

pub async fn delete_question(question_id: &str) -> Result<ParentGame, ApiError> {
    let response = Request::delete(&format!("/questions/{question_id}/delete"))
        .send()
        .await?;
    decode(response).await
}

pub async fn delete_review(review_id: &str) -> Result<ParentGame, ApiError> {
    let response = Request::delete(&format!("/reviews/{review_id}/delete"))
        .send()
        .await?;
    decode(response).await
}
