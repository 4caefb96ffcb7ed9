//! Record extraction
//!
//! Walks a parsed [`GpxDocument`] and flattens every heart-rate-instrumented
//! track point into an [`HrRecord`]. Points without a heart-rate extension
//! block are normal in mixed recordings and are skipped silently; a missing
//! activity name, a missing track structure, or an unparsable point
//! timestamp aborts with [`GpxError::MalformedDocument`].

use crate::error::{GpxError, Result};
use crate::types::{GpxDocument, HrRecord, TrackPoint};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

/// Flatten a parsed document into ordered heart-rate records.
///
/// The returned records preserve track-point order. A document whose points
/// all lack heart-rate data yields an empty vec, not an error.
pub fn extract_records(doc: &GpxDocument) -> Result<Vec<HrRecord>> {
    let name = doc.metadata_name.as_deref().ok_or_else(|| {
        GpxError::MalformedDocument("missing activity name in gpx metadata".to_string())
    })?;

    let track = match doc.tracks.as_slice() {
        [track] => track,
        [] => {
            return Err(GpxError::MalformedDocument(
                "document has no track".to_string(),
            ))
        }
        _ => {
            return Err(GpxError::MalformedDocument(
                "expected a single track".to_string(),
            ))
        }
    };

    let segment = match track.segments.as_slice() {
        [segment] => segment,
        [] => {
            return Err(GpxError::MalformedDocument(
                "track has no segment".to_string(),
            ))
        }
        _ => {
            return Err(GpxError::MalformedDocument(
                "expected a single track segment".to_string(),
            ))
        }
    };

    if segment.points.is_empty() {
        return Err(GpxError::MalformedDocument(
            "track segment has no track points".to_string(),
        ));
    }

    let mut records = Vec::new();
    for point in &segment.points {
        let Some(extension) = &point.extension else {
            continue;
        };

        let stamp = parse_point_timestamp(point)?;
        records.push(HrRecord {
            name: name.to_string(),
            date: format_short_date(stamp.date_naive()),
            time: format_clock_time(&stamp),
            heart_rate: extension.heart_rate.clone().unwrap_or_default(),
        });
    }

    Ok(records)
}

/// Interpret a qualifying point's `<time>` text as an RFC 3339 instant.
///
/// The embedded UTC offset is kept, so rendering does not depend on the host
/// timezone.
fn parse_point_timestamp(point: &TrackPoint) -> Result<DateTime<FixedOffset>> {
    let raw = point.time.as_deref().ok_or_else(|| {
        GpxError::MalformedDocument("track point with heart rate data has no timestamp".to_string())
    })?;

    DateTime::parse_from_rfc3339(raw).map_err(|e| {
        GpxError::MalformedDocument(format!("invalid track point timestamp '{}': {}", raw, e))
    })
}

/// Finnish-convention short date: unpadded day and month, dot-separated.
fn format_short_date(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

fn format_clock_time(stamp: &DateTime<FixedOffset>) -> String {
    stamp.format("%H:%M:%S").to_string()
}
