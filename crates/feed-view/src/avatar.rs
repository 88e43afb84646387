//! Avatar URLs
//!
//! Avatars come from an external image service. The URL is a pure function
//! of the owner's identity, so the same email always renders the same image.

use feed_common::{RenderConfig, DEFAULT_AVATAR_URL_TEMPLATE};
use sha2::{Digest, Sha256};

/// Builds avatar URLs from a template with `{hash}` / `{seed}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarService {
    template: String,
}

impl AvatarService {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.avatar_url_template.clone())
    }

    /// Avatar URL for an identity string (an email address)
    pub fn url_for(&self, identity: &str) -> String {
        let normalized = identity.trim().to_lowercase();
        let mut url = self.template.clone();
        if url.contains("{hash}") {
            let hash = hex::encode(Sha256::digest(normalized.as_bytes()));
            url = url.replace("{hash}", &hash);
        }
        if url.contains("{seed}") {
            url = url.replace("{seed}", &urlencoding::encode(&normalized));
        }
        url
    }
}

impl Default for AvatarService {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_URL_TEMPLATE)
    }
}
