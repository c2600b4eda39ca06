use std::io::Cursor;

use pushperf::perfdata::record::parse_record;
use pushperf::perfdata::segments::SegmentReader;

fn record_text(step: u64, dists: &[f64], avg: f64, outside: f64) -> String {
    let dist_lines: String = dists.iter().map(|d| format!("{d}\n")).collect();
    format!(
        "Step {step}!Steps: {step}!\n{dist_lines}!Boxes: {n}\nOutside: 0\nAverage: {avg}\nAverageOutside: {outside}\n",
        n = dists.len()
    )
}

fn log_text(records: &[String]) -> String {
    let mut text = String::from("#Robots 100\n#Boxes 2\nMaxsteps: 100000\n");
    for record in records {
        text.push('$');
        text.push_str(record);
    }
    text
}

#[test]
fn segments_then_records_roundtrip_a_whole_log() {
    let log = log_text(&[
        record_text(0, &[4.0, 6.0], 5.0, 5.0),
        record_text(1000, &[1.0, 3.0], 2.0, 1.5),
    ]);

    let segments: Vec<String> = SegmentReader::new(Cursor::new(log.into_bytes()), "$")
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(segments.len(), 3);

    // Segment 0 is the file header, never a record.
    assert!(segments[0].contains("Maxsteps:"));

    let first = parse_record(&segments[1]).unwrap().expect("record expected");
    assert_eq!(first.step, 0);
    assert_eq!(first.box_dists, vec![4.0, 6.0]);
    assert_eq!(first.avg_dist, 5.0);

    let second = parse_record(&segments[2]).unwrap().expect("record expected");
    assert_eq!(second.step, 1000);
    assert_eq!(second.avg_dist, 2.0);
    assert_eq!(second.avg_outside_dist, 1.5);
}

#[test]
fn truncated_trailing_segment_parses_to_none() {
    let mut log = log_text(&[record_text(500, &[2.0], 2.0, 0.0)]);
    log.push('$');
    log.push_str("interrupted write, no field separators");

    let segments: Vec<String> = SegmentReader::new(Cursor::new(log.into_bytes()), "$")
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(segments.len(), 3);
    assert!(parse_record(&segments[1]).unwrap().is_some());
    assert!(parse_record(&segments[2]).unwrap().is_none());
}
