use chrono::NaiveDate;
use golf_scorecard::export::{
    ExportFormat, export_filename, export_round, from_json, quote_csv_field, to_csv, to_json,
    to_text,
};
use golf_scorecard::model::{HoleEdit, Round};

mod common;

fn sample_round() -> Round {
    let mut round = common::round_from(&[(4, 5), (3, 0)]);
    round.update_hole(1, HoleEdit::Notes("drove it \"long\"".to_string()));
    round.set_course_notes("fast greens, \"tricky\" pins");
    round
}

#[test]
fn test_export_filename() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
    assert_eq!(export_filename(ExportFormat::Csv, date), "golf-scorecard-20240307.csv");
    assert_eq!(export_filename(ExportFormat::Json, date), "golf-scorecard-20240307.json");
    assert_eq!(export_filename(ExportFormat::Text, date), "golf-scorecard-20240307.txt");

    let late = NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date");
    assert_eq!(export_filename(ExportFormat::Csv, late), "golf-scorecard-20251231.csv");
}

#[test]
fn test_format_metadata() {
    assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
    assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    assert_eq!(ExportFormat::Text.mime_type(), "text/plain");
    assert_eq!("TXT".parse::<ExportFormat>(), Ok(ExportFormat::Text));
    assert!("xml".parse::<ExportFormat>().is_err());
}

#[test]
fn test_csv_export_doubles_quotes() {
    assert_eq!(quote_csv_field(r#"say "hi""#), r#""say ""hi""""#);

    let csv = to_csv(&sample_round());
    let expected = concat!(
        "Hole,Par,Score,Notes\n",
        "1,4,5,\"drove it \"\"long\"\"\"\n",
        "2,3,0,\"\"\n",
        "\n",
        "Course Notes:,\"fast greens, \"\"tricky\"\" pins\"\n",
    );
    assert_eq!(csv, expected);
}

#[test]
fn test_json_export_shape() {
    let json = to_json(&sample_round()).expect("json export");
    let expected = r#"{
  "holes": [
    {
      "number": 1,
      "par": 4,
      "playerScore": 5,
      "notes": "drove it \"long\""
    },
    {
      "number": 2,
      "par": 3,
      "playerScore": 0,
      "notes": ""
    }
  ],
  "courseNotes": "fast greens, \"tricky\" pins"
}"#;
    assert_eq!(json, expected);
}

#[test]
fn test_json_round_trip() {
    let mut round = Round::default();
    round.update_hole(3, HoleEdit::PlayerScore(6));
    round.update_hole(9, HoleEdit::Par(5));
    round.update_hole(12, HoleEdit::Notes("line\nbreak and ünïcode".to_string()));
    round.set_course_notes("back nine closed early");

    let json = to_json(&round).expect("json export");
    let parsed = from_json(&json).expect("json re-parse");
    assert_eq!(parsed, round);

    assert!(from_json("{\"holes\": 3}").is_err());
}

#[test]
fn test_text_export() {
    let txt = to_text(&sample_round());
    let expected = concat!(
        "Golf Scorecard\n",
        "-----------------------------\n",
        "Hole 1: Par 4, Score 5\n",
        "  Notes: drove it \"long\"\n",
        "Hole 2: Par 3, Score 0\n",
        "\n",
        "Course Notes:\n",
        "fast greens, \"tricky\" pins\n",
    );
    assert_eq!(txt, expected);

    let empty = to_text(&Round::new(1, 4));
    assert!(empty.ends_with("Hole 1: Par 4, Score 0\n\nCourse Notes:\n"));
}

#[test]
fn test_export_round_bundles_payload() {
    let date = NaiveDate::from_ymd_opt(2024, 11, 2).expect("valid date");
    let round = sample_round();
    for format in ExportFormat::ALL {
        let export = export_round(&round, format, date).expect("export");
        assert_eq!(export.format, format);
        assert_eq!(export.mime_type(), format.mime_type());
        assert_eq!(export.filename, format!("golf-scorecard-20241102.{}", format.extension()));
        assert!(!export.body.is_empty());
    }
}
