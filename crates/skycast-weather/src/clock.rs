//! Wall-clock formatting for provider timestamps.

use chrono::{DateTime, Utc};

/// Format an epoch timestamp as the location's local `HH:MM`.
///
/// The provider's timezone trick: add the location's offset to the UTC
/// epoch and format the sum as if it were itself a UTC instant. The
/// displayed clock then matches the location's wall time regardless of
/// the host timezone.
pub fn format_local_time(epoch_secs: i64, tz_offset_secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(epoch_secs.saturating_add(tz_offset_secs), 0)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
