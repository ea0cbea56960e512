//! Listing type definitions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported Reddit listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ListingType {
    /// A single random post (`random.json`), returned as a two-element array.
    #[default]
    Random,
    /// The current top posts (`top.json`), returned as a single listing.
    Top,
}

impl ListingType {
    /// Name used in listing URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Random => "random",
            ListingType::Top => "top",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "random" => Ok(ListingType::Random),
            "top" => Ok(ListingType::Top),
            _ => Err(Error::UnsupportedListingType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ListingType {
    type Error = Error;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_listing_types() {
        assert_eq!("random".parse::<ListingType>().unwrap(), ListingType::Random);
        assert_eq!("top".parse::<ListingType>().unwrap(), ListingType::Top);
    }

    #[test]
    fn test_parse_unsupported_listing_type() {
        let err = "hot".parse::<ListingType>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedListingType(ref s) if s == "hot"));
    }

    #[test]
    fn test_display_round_trips_through_url_name() {
        assert_eq!(ListingType::Random.to_string(), "random");
        assert_eq!(ListingType::Top.to_string(), "top");
    }
}
