//! Value objects - identifiers with no behaviour of their own

mod post_id;

pub use post_id::PostId;
