//! Video provider enum for embedded work videos.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// The source of an embedded video.
///
/// Stored as text in the database (`YOUTUBE`, `VIMEO`, `SELF`) and carried
/// with the same spelling over the admin JSON API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Provider {
    /// YouTube iframe embed.
    #[default]
    #[serde(rename = "YOUTUBE")]
    Youtube,
    /// Vimeo iframe embed.
    #[serde(rename = "VIMEO")]
    Vimeo,
    /// Self-hosted file played with a native `<video>` element.
    #[serde(rename = "SELF")]
    SelfHosted,
}

/// Error returned when parsing an unknown provider string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown provider: {0} (expected YOUTUBE, VIMEO, or SELF)")]
pub struct ProviderParseError(pub String);

impl Provider {
    /// The database/API spelling of this provider.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "YOUTUBE",
            Self::Vimeo => "VIMEO",
            Self::SelfHosted => "SELF",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ProviderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "YOUTUBE" => Ok(Self::Youtube),
            "VIMEO" => Ok(Self::Vimeo),
            "SELF" => Ok(Self::SelfHosted),
            other => Err(ProviderParseError(other.to_owned())),
        }
    }
}

#[cfg(feature = "postgres")]
impl ::sqlx::Type<::sqlx::Postgres> for Provider {
    fn type_info() -> ::sqlx::postgres::PgTypeInfo {
        <String as ::sqlx::Type<::sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
        <String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for Provider {
    fn decode(
        value: ::sqlx::postgres::PgValueRef<'r>,
    ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
        let raw = <&str as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
        Ok(raw.parse()?)
    }
}

#[cfg(feature = "postgres")]
impl ::sqlx::Encode<'_, ::sqlx::Postgres> for Provider {
    fn encode_by_ref(
        &self,
        buf: &mut ::sqlx::postgres::PgArgumentBuffer,
    ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
        <&str as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for (raw, provider) in [
            ("YOUTUBE", Provider::Youtube),
            ("VIMEO", Provider::Vimeo),
            ("SELF", Provider::SelfHosted),
        ] {
            assert_eq!(raw.parse::<Provider>().expect("known provider"), provider);
            assert_eq!(provider.as_str(), raw);
        }
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(
            " VIMEO ".parse::<Provider>().expect("trimmed"),
            Provider::Vimeo
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!("DAILYMOTION".parse::<Provider>().is_err());
    }

    #[test]
    fn test_serde_spelling() {
        let json = serde_json::to_string(&Provider::SelfHosted).expect("serialize");
        assert_eq!(json, "\"SELF\"");
        let back: Provider = serde_json::from_str("\"YOUTUBE\"").expect("deserialize");
        assert_eq!(back, Provider::Youtube);
    }
}
