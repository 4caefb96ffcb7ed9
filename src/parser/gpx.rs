//! Streaming GPX reader
//!
//! Builds a [`GpxDocument`] from GPX 1.1 text. Only the elements the report
//! consumes are materialized: the metadata name, the track/segment/point
//! structure, point timestamps, and the heart-rate extension blocks. Unknown
//! elements are skipped without error.

use crate::error::{GpxError, Result};
use crate::types::{GpxDocument, HeartRateExtension, Track, TrackPoint, TrackSegment};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

/// Parse a GPX file from disk.
pub fn parse_gpx_file(file_path: &Path, debug: bool) -> Result<GpxDocument> {
    if debug {
        let metadata = std::fs::metadata(file_path)?;
        println!("File size: {} bytes", metadata.len());
    }

    let text = std::fs::read_to_string(file_path)?;
    parse_gpx_str(&text)
}

/// Parse GPX text into a document tree.
pub fn parse_gpx_str(xml: &str) -> Result<GpxDocument> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.trim_text(true);

    let mut doc = GpxDocument::default();

    let mut in_metadata = false;
    // Child depth inside <metadata>; the activity name is the direct child
    // <name>, not e.g. the one nested under <author>.
    let mut metadata_depth = 0usize;
    let mut in_track = false;
    let mut in_point = false;
    let mut in_extensions = false;
    let mut in_hr_extension = false;
    let mut current_element = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let qname = e.name();
                let name = element_name(qname.as_ref())?;
                match name {
                    "metadata" if !in_track => {
                        in_metadata = true;
                        metadata_depth = 0;
                    }
                    "trk" => {
                        doc.tracks.push(Track::default());
                        in_track = true;
                    }
                    "trkseg" => {
                        if let Some(track) = doc.tracks.last_mut() {
                            track.segments.push(TrackSegment::default());
                        }
                    }
                    "trkpt" => {
                        if let Some(segment) = current_segment(&mut doc) {
                            segment.points.push(TrackPoint::default());
                            in_point = true;
                        }
                    }
                    "extensions" if in_point => in_extensions = true,
                    "TrackPointExtension" | "gpxtpx:TrackPointExtension" if in_extensions => {
                        if let Some(point) = current_point(&mut doc) {
                            point.extension = Some(HeartRateExtension::default());
                            in_hr_extension = true;
                        }
                    }
                    other => {
                        if in_metadata {
                            metadata_depth += 1;
                        }
                        current_element = other.to_string();
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                // Self-closing elements mark presence but carry no children.
                let qname = e.name();
                let name = element_name(qname.as_ref())?;
                match name {
                    "trk" => doc.tracks.push(Track::default()),
                    "trkseg" => {
                        if let Some(track) = doc.tracks.last_mut() {
                            track.segments.push(TrackSegment::default());
                        }
                    }
                    "trkpt" => {
                        if let Some(segment) = current_segment(&mut doc) {
                            segment.points.push(TrackPoint::default());
                        }
                    }
                    "TrackPointExtension" | "gpxtpx:TrackPointExtension" if in_extensions => {
                        if let Some(point) = current_point(&mut doc) {
                            point.extension = Some(HeartRateExtension::default());
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| GpxError::Xml(e.to_string()))?;

                if in_point {
                    match current_element.as_str() {
                        "time" => {
                            if let Some(point) = current_point(&mut doc) {
                                point.time = Some(text.into_owned());
                            }
                        }
                        "hr" | "gpxtpx:hr" if in_hr_extension => {
                            if let Some(extension) =
                                current_point(&mut doc).and_then(|p| p.extension.as_mut())
                            {
                                extension.heart_rate = Some(text.into_owned());
                            }
                        }
                        _ => {}
                    }
                } else if in_metadata && metadata_depth == 1 && current_element == "name" {
                    doc.metadata_name = Some(text.into_owned());
                }
            }
            Ok(Event::End(e)) => {
                let qname = e.name();
                let name = element_name(qname.as_ref())?;
                match name {
                    "metadata" => in_metadata = false,
                    "trk" => in_track = false,
                    "trkpt" => in_point = false,
                    "extensions" => in_extensions = false,
                    "TrackPointExtension" | "gpxtpx:TrackPointExtension" => {
                        in_hr_extension = false
                    }
                    _ => {
                        if in_metadata {
                            metadata_depth = metadata_depth.saturating_sub(1);
                        }
                    }
                }
                current_element.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(GpxError::Xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(doc)
}

fn element_name(raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|e| GpxError::Xml(e.to_string()))
}

fn current_segment(doc: &mut GpxDocument) -> Option<&mut TrackSegment> {
    doc.tracks.last_mut()?.segments.last_mut()
}

fn current_point(doc: &mut GpxDocument) -> Option<&mut TrackPoint> {
    current_segment(doc)?.points.last_mut()
}
