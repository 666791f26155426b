//! Identifier-safe zone tokens for generated artifact names.

use chrono::{DateTime, Utc};
use zonewall_offset::OffsetResolver;

/// Resolves the zone's short alias and sanitizes it into a token safe
/// for variable and column names: `[A-Za-z0-9_]`, never empty.
/// Aliases that sanitize away entirely fall back to the identifier's
/// city segment.
pub fn zone_token(
    resolver: &dyn OffsetResolver,
    timezone_id: &str,
    instant: DateTime<Utc>,
) -> String {
    let alias = resolver.short_alias(timezone_id, instant);
    let token = sanitize(&alias);
    if has_substance(&token) {
        return token;
    }

    let city = timezone_id.rsplit('/').next().unwrap_or(timezone_id);
    let token = sanitize(city);
    if has_substance(&token) {
        token
    } else {
        "ZONE".to_owned()
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn has_substance(token: &str) -> bool {
    token.chars().any(|c| c != '_')
}
