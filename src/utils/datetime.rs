//! Timezone utilities for raid
//!
//! Resolves IANA timezone identifiers from the settings file into
//! `chrono_tz::Tz` handles.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{RaidError, Result};

/// Parse an IANA timezone identifier such as "Europe/Kiev" or "UTC".
///
/// Lookup is case-sensitive and accepts the database's backward links.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RaidError::timezone_unresolvable(name, "empty timezone name"));
    }
    if trimmed != name {
        return Err(RaidError::timezone_unresolvable(
            name,
            "surrounding whitespace is not allowed",
        ));
    }

    name.parse::<Tz>()
        .map_err(|e| RaidError::timezone_unresolvable(name, e.to_string()))
}

/// Current wall-clock time in the given timezone
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}
