//! Post ID - opaque identifier of a post
//!
//! The server emits integer ids, but nothing on the client does arithmetic
//! with them: they are compared, used as element ids and echoed back in
//! requests. The id is therefore stored in its textual form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque, unique post identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(String);

impl PostId {
    /// Create a new PostId from any textual representation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as it appears on the wire and in the DOM
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for PostId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PostIdVisitor;

        impl<'de> Visitor<'de> for PostIdVisitor {
            type Value = PostId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer post id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<PostId, E>
            where
                E: de::Error,
            {
                Ok(PostId(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<PostId, E>
            where
                E: de::Error,
            {
                Ok(PostId(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<PostId, E>
            where
                E: de::Error,
            {
                if value.is_empty() {
                    return Err(de::Error::custom("empty post id"));
                }
                Ok(PostId(value.to_string()))
            }
        }

        deserializer.deserialize_any(PostIdVisitor)
    }
}
