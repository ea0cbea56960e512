//! Reddit listing HTTP client.

use reqwest::{header, Client};
use serde_json::{Map, Value};

use crate::api::types::ListingResult;
use crate::config::ListingType;
use crate::error::{Error, Result};

/// Product name sent in the `User-Agent` header.
const PRODUCT_NAME: &str = "RadioReddit";

/// Reddit listing client bound to one API root.
#[derive(Debug, Clone)]
pub struct RedditApi {
    client: Client,
    api_base: String,
}

impl RedditApi {
    /// Create a new client for the given API root.
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let api_base = api_base.into().trim_end_matches('/').to_string();
        tracing::debug!("Reddit API URI defined as {}", api_base);

        Ok(Self { client, api_base })
    }

    /// Fetch the raw listing JSON for a subreddit.
    pub async fn fetch_subreddit_data(
        &self,
        subreddit: &str,
        listing_type: ListingType,
    ) -> Result<Value> {
        let url = subreddit_url(subreddit, &self.api_base, listing_type);
        let user_agent = user_agent();
        tracing::debug!("User-agent defined as {}", user_agent);
        tracing::debug!("GET {}", url);

        let fetch_error = |message: String| Error::Fetch {
            url: url.clone(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        serde_json::from_str(&text).map_err(|source| Error::Decode {
            url: url.clone(),
            source,
        })
    }

    /// Fetch a listing and pick out its first post.
    pub async fn listing(&self, subreddit: &str, listing_type: ListingType) -> Result<ListingResult> {
        tracing::debug!("Indexing into {} listing data for {}", listing_type, subreddit);

        let subreddit_data = self.fetch_subreddit_data(subreddit, listing_type).await?;
        let raw_post_data = extract_listing_data(&subreddit_data, listing_type)?;
        let target_url = extract_target_url(&raw_post_data)?;

        tracing::debug!("Found listing URL {}", target_url);

        Ok(ListingResult {
            target_url,
            raw_post_data,
        })
    }

    /// Fetch a listing and return only the post's target URL.
    pub async fn listing_url(&self, subreddit: &str, listing_type: ListingType) -> Result<String> {
        Ok(self.listing(subreddit, listing_type).await?.target_url)
    }
}

/// Build the listing URL, e.g. `https://www.reddit.com/r/all/random.json`.
pub fn subreddit_url(subreddit: &str, api_base: &str, listing_type: ListingType) -> String {
    format!("{}/r/{}/{}.json", api_base, subreddit, listing_type)
}

/// Generate a fresh `User-Agent` value for one request.
pub fn user_agent() -> String {
    format!("{}/{}", PRODUCT_NAME, uuid::Uuid::new_v4().simple())
}

/// Index into a listing response to reach the first post's `data` object.
///
/// `random` responses are an array of two listings (the post and its
/// comments), `top` responses are a single listing.
pub fn extract_listing_data(
    subreddit_data: &Value,
    listing_type: ListingType,
) -> Result<Map<String, Value>> {
    let pointer = match listing_type {
        ListingType::Random => "/0/data/children/0/data",
        ListingType::Top => "/data/children/0/data",
    };

    let malformed = |message: String| Error::MalformedListingData {
        listing_type: listing_type.to_string(),
        message,
    };

    subreddit_data
        .pointer(pointer)
        .ok_or_else(|| malformed(format!("nothing found at {}", pointer)))?
        .as_object()
        .cloned()
        .ok_or_else(|| malformed(format!("{} is not an object", pointer)))
}

/// Read the `url` field of a post.
pub fn extract_target_url(listing_data: &Map<String, Value>) -> Result<String> {
    listing_data
        .get("url")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::MissingUrlField(Value::Object(listing_data.clone()).to_string()))
}
