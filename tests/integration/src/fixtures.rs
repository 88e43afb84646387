//! Test fixtures
//!
//! Post payloads shaped like the feed server's `/api/posts` response.

use serde_json::{json, Value};

/// A post with integer id, percent-encoded content and optional extras
pub fn post_json(id: i64, content: &str) -> Value {
    json!({
        "post_id": id,
        "email": format!("user{id}@example.com"),
        "datetime": "2024-05-01 10:00:00 UTC",
        "title": format!("Post {id}"),
        "content": content,
        "image": "",
        "reactions": { "heart": 0, "thumbsUp": 0, "thumbsDown": 0 },
        "comments": []
    })
}

/// Three posts covering image, links, comments and missing reaction counts
pub fn sample_feed() -> Vec<Value> {
    vec![
        json!({
            "post_id": 1,
            "email": "ana@example.com",
            "datetime": "2024-05-01 10:00:00 UTC",
            "title": "Hiking",
            "content": concat!(
                "Trail%20map%3A%20https%3A%2F%2Fmaps.example%2Ftrail",
                "%20and%20https%3A%2F%2Fmaps.example%2Ftrail"
            ),
            "image": "/uploads/trail.jpg",
            "reactions": { "heart": 3, "thumbsUp": 1, "thumbsDown": 0 },
            "comments": [
                {
                    "email": "bo@example.com",
                    "datetime": "2024-05-01 11:00:00 UTC",
                    "content": "Looks%20great%20http%3A%2F%2Fbo.example"
                },
                {
                    "email": "ana@example.com",
                    "datetime": "2024-05-01 11:05:00 UTC",
                    "content": "Thanks!"
                }
            ]
        }),
        json!({
            "post_id": 2,
            "email": "bo@example.com",
            "datetime": "2024-05-02 09:30:00 UTC",
            "title": "<b>Bold</b> claims",
            "content": "100%2525%20sure",
            "reactions": { "thumbsDown": 2 },
            "comments": []
        }),
        post_json(3, "Hello%20World"),
    ]
}
