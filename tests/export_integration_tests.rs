//! Integration tests for the export layer and the per-file driver
//!
//! Covers the emitter contract (empty input, quoting, round-trip through a
//! CSV reader), the append semantics, and the driver's fail-fast error
//! paths for malformed documents.

use gpx_hr_report::{
    append_csv, init_output_file, process_gpx_file, records_to_csv, HrRecord,
};
use std::fs;
use tempfile::TempDir;

fn record(name: &str, date: &str, time: &str, heart_rate: &str) -> HrRecord {
    HrRecord {
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        heart_rate: heart_rate.to_string(),
    }
}

#[test]
fn test_append_empty_text_is_a_noop() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("results.csv");

    init_output_file(&output).expect("init should succeed");
    let length_before = fs::metadata(&output).unwrap().len();

    let empty = records_to_csv(&[], false).expect("empty render");
    assert!(empty.is_empty());
    append_csv(&output, &empty).expect("append of empty text");

    let length_after = fs::metadata(&output).unwrap().len();
    assert_eq!(length_before, length_after, "file length must be unchanged");
}

#[test]
fn test_init_truncates_previous_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("results.csv");

    fs::write(&output, "stale content from an earlier run\n").unwrap();
    init_output_file(&output).expect("init should succeed");

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "Name,Date,Time,Heart Rate\n");
}

#[test]
fn test_csv_round_trip_recovers_exact_fields() {
    let records = vec![
        record("Morning Run", "1.6.2023", "07:15:30", "142"),
        record("Run, with intervals", "31.12.2023", "23:59:59", "180"),
        record("the \"long\" loop", "5.1.2024", "00:00:01", ""),
    ];

    let csv_text = records_to_csv(&records, false).expect("render");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(csv_text.as_bytes());
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();

    assert_eq!(rows.len(), records.len());
    for (row, original) in rows.iter().zip(&records) {
        assert_eq!(row[0], original.name);
        assert_eq!(row[1], original.date);
        assert_eq!(row[2], original.time);
        assert_eq!(row[3], original.heart_rate);
    }
}

#[test]
fn test_process_file_appends_after_header() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gpx_path = temp_dir.path().join("run.gpx");
    fs::write(
        &gpx_path,
        r#"<gpx xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1">
  <metadata><name>Intervals</name></metadata>
  <trk><trkseg>
    <trkpt lat="0" lon="0">
      <time>2023-06-01T07:15:30Z</time>
      <extensions>
        <gpxtpx:TrackPointExtension><gpxtpx:hr>142</gpxtpx:hr></gpxtpx:TrackPointExtension>
      </extensions>
    </trkpt>
    <trkpt lat="0" lon="0">
      <time>2023-06-01T07:15:35Z</time>
      <extensions>
        <gpxtpx:TrackPointExtension><gpxtpx:hr>150</gpxtpx:hr></gpxtpx:TrackPointExtension>
      </extensions>
    </trkpt>
  </trkseg></trk>
</gpx>"#,
    )
    .unwrap();

    let output = temp_dir.path().join("results.csv");
    init_output_file(&output).unwrap();

    let appended = process_gpx_file(&gpx_path, &output, false).expect("processing should succeed");
    assert_eq!(appended, 2);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "Name,Date,Time,Heart Rate\n\
         Intervals,1.6.2023,07:15:30,142\n\
         Intervals,1.6.2023,07:15:35,150\n"
    );
}

#[test]
fn test_process_file_with_comma_in_name_quotes_field() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gpx_path = temp_dir.path().join("run.gpx");
    fs::write(
        &gpx_path,
        r#"<gpx xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1">
  <metadata><name>Lauf, am Abend</name></metadata>
  <trk><trkseg>
    <trkpt lat="0" lon="0">
      <time>2023-06-01T19:30:00Z</time>
      <extensions>
        <gpxtpx:TrackPointExtension><gpxtpx:hr>133</gpxtpx:hr></gpxtpx:TrackPointExtension>
      </extensions>
    </trkpt>
  </trkseg></trk>
</gpx>"#,
    )
    .unwrap();

    let output = temp_dir.path().join("results.csv");
    init_output_file(&output).unwrap();
    process_gpx_file(&gpx_path, &output, false).expect("processing should succeed");

    let content = fs::read_to_string(&output).unwrap();
    assert!(
        content.contains("\"Lauf, am Abend\",1.6.2023,19:30:00,133"),
        "name with a comma must be quoted, got: {content}"
    );
}

#[test]
fn test_process_file_missing_metadata_name_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gpx_path = temp_dir.path().join("anonymous.gpx");
    fs::write(
        &gpx_path,
        r#"<gpx><trk><trkseg>
          <trkpt lat="0" lon="0"><time>2023-06-01T07:15:30Z</time></trkpt>
        </trkseg></trk></gpx>"#,
    )
    .unwrap();

    let output = temp_dir.path().join("results.csv");
    init_output_file(&output).unwrap();

    let result = process_gpx_file(&gpx_path, &output, false);
    assert!(result.is_err(), "missing metadata name must fail");

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "Name,Date,Time,Heart Rate\n", "no partial rows");
}

#[test]
fn test_process_file_without_track_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gpx_path = temp_dir.path().join("trackless.gpx");
    fs::write(
        &gpx_path,
        r#"<gpx><metadata><name>No Track</name></metadata></gpx>"#,
    )
    .unwrap();

    let output = temp_dir.path().join("results.csv");
    init_output_file(&output).unwrap();

    assert!(process_gpx_file(&gpx_path, &output, false).is_err());
}

#[test]
fn test_process_file_extension_without_hr_emits_empty_field() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gpx_path = temp_dir.path().join("cadence_only.gpx");
    fs::write(
        &gpx_path,
        r#"<gpx xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1">
  <metadata><name>Cadence Only</name></metadata>
  <trk><trkseg>
    <trkpt lat="0" lon="0">
      <time>2023-06-01T07:15:30Z</time>
      <extensions>
        <gpxtpx:TrackPointExtension><gpxtpx:cad>85</gpxtpx:cad></gpxtpx:TrackPointExtension>
      </extensions>
    </trkpt>
  </trkseg></trk>
</gpx>"#,
    )
    .unwrap();

    let output = temp_dir.path().join("results.csv");
    init_output_file(&output).unwrap();
    process_gpx_file(&gpx_path, &output, false).expect("processing should succeed");

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "Name,Date,Time,Heart Rate\nCadence Only,1.6.2023,07:15:30,\n"
    );
}

#[test]
fn test_process_unreadable_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("does_not_exist.gpx");
    let output = temp_dir.path().join("results.csv");
    init_output_file(&output).unwrap();

    assert!(process_gpx_file(&missing, &output, false).is_err());
}
