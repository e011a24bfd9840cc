//! Bodies the site's JSON endpoints respond with.

/// `POST /questions/{id}/answer`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerCreated {
    pub answer_id: u64,
    pub text: String,
    pub username: String,
    pub timestamp: String,
}

/// `PATCH /answers/{id}/edit`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerEdited {
    pub text: String,
}

/// `DELETE /questions/{id}/delete` and `DELETE /reviews/{id}/delete`
/// both answer with the game the deleted item belonged to, which is
/// where the browser goes next.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParentGame {
    pub game_id: u64,
}
