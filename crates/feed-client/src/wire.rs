//! Response bodies of the session-scoped endpoints

use feed_core::ReactionKind;
use serde::Deserialize;

/// Body of `GET /api/userreaction`
#[derive(Debug, Deserialize)]
pub struct UserReactionResponse {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl UserReactionResponse {
    /// Interpret the reported kind.
    ///
    /// `null`, the string `"null"` and `""` all mean the user has no reaction.
    pub fn into_kind(self) -> Result<Option<ReactionKind>, String> {
        match self.kind.as_deref() {
            None | Some("" | "null") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| format!("unknown reaction type '{raw}'")),
        }
    }
}

/// Body of `POST /api/reaction`
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
