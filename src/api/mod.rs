//! Reddit listing API module.
//!
//! This module provides:
//! - HTTP client for the Reddit listing endpoints
//! - Extraction of a post's target URL from a listing response

pub mod client;
pub mod types;

pub use client::{extract_listing_data, extract_target_url, subreddit_url, user_agent, RedditApi};
pub use types::*;
