/// Parsed GPX activity document
///
/// The tree mirrors the subset of GPX 1.1 the report consumes: the activity
/// name from the metadata section and the track points of the recording.
/// Field values are kept as the raw text found in the file; interpretation
/// happens during record extraction.
#[derive(Debug, Default)]
pub struct GpxDocument {
    /// Text of `gpx > metadata > name`, when present
    pub metadata_name: Option<String>,
    pub tracks: Vec<Track>,
}

impl GpxDocument {
    /// Total number of track points across all tracks and segments
    pub fn point_count(&self) -> usize {
        self.tracks
            .iter()
            .flat_map(|track| &track.segments)
            .map(|segment| segment.points.len())
            .sum()
    }
}

#[derive(Debug, Default)]
pub struct Track {
    pub segments: Vec<TrackSegment>,
}

#[derive(Debug, Default)]
pub struct TrackSegment {
    pub points: Vec<TrackPoint>,
}

/// A single timestamped GPS sample within a track segment
#[derive(Debug, Default)]
pub struct TrackPoint {
    /// Raw ISO-8601 text of the point's `<time>` child, when present
    pub time: Option<String>,
    /// Present only when the point carried an `<extensions>` block with a
    /// `gpxtpx:TrackPointExtension` sub-block
    pub extension: Option<HeartRateExtension>,
}

/// Vendor extension data attached to a track point
#[derive(Debug, Default)]
pub struct HeartRateExtension {
    /// Raw `gpxtpx:hr` text, never numerically coerced
    pub heart_rate: Option<String>,
}
