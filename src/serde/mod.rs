//! Deserialize JSON documents into Rust data structures using [`serde`].

pub mod de;
pub mod error;
