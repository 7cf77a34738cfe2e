use golf_scorecard::model::Round;
use golf_scorecard::score::{
    PerformanceClass, RelativeScore, RoundSummary, ScoreDisplay, per_hole_difference,
    performance_class, score_display, total_difference, total_par, total_score,
};

mod common;

#[test]
fn test_partial_round_scenario() {
    let round = common::round_from(&[(4, 5), (3, 0)]);

    assert_eq!(total_par(&round), 7);
    assert_eq!(total_score(&round), 5);
    assert_eq!(per_hole_difference(&round.holes[0]).to_string(), "+1");
    assert_eq!(per_hole_difference(&round.holes[1]).to_string(), "-");
    // only hole 1 counts: 5 - 4
    assert_eq!(total_difference(&round).to_string(), "+1");
}

#[test]
fn test_unplayed_round_has_no_total_difference() {
    let round = Round::default();
    assert_eq!(round.holes.len(), 18);
    assert_eq!(total_par(&round), 72);
    assert_eq!(total_score(&round), 0);
    assert_eq!(total_difference(&round), RelativeScore::Unplayed);
    assert_eq!(total_difference(&round).to_string(), "-");

    let odd_pars = common::round_from(&[(3, 0), (5, 0), (6, 0)]);
    assert_eq!(total_difference(&odd_pars).to_string(), "-");
    assert_eq!(performance_class(total_difference(&odd_pars)), None);
}

#[test]
fn test_per_hole_labels() {
    let round = common::round_from(&[(4, 0), (4, 4), (4, 6), (5, 3), (3, 1)]);
    let labels: Vec<String> = round
        .holes
        .iter()
        .map(|h| per_hole_difference(h).to_string())
        .collect();
    assert_eq!(labels, vec!["-", "E", "+2", "-2", "-2"]);

    for hole in &round.holes {
        let diff = per_hole_difference(hole);
        assert_eq!(diff == RelativeScore::Unplayed, hole.player_score == 0);
        if hole.player_score > 0 {
            let strokes = i64::from(hole.player_score) - i64::from(hole.par);
            assert_eq!(diff.strokes(), Some(strokes));
        }
    }
}

#[test]
fn test_total_difference_ignores_unplayed_holes() {
    // all-holes totals would read 9 against 12, played holes are 9 against 8
    let round = common::round_from(&[(4, 5), (4, 4), (4, 0)]);
    assert_eq!(total_par(&round), 12);
    assert_eq!(total_score(&round), 9);
    assert_eq!(total_difference(&round).to_string(), "+1");
    assert_eq!(
        performance_class(total_difference(&round)),
        Some(PerformanceClass::OverPar)
    );

    let under = common::round_from(&[(5, 4), (4, 3), (3, 0)]);
    assert_eq!(total_difference(&under).to_string(), "-2");
    assert_eq!(
        performance_class(total_difference(&under)),
        Some(PerformanceClass::UnderPar)
    );

    let even = common::round_from(&[(5, 6), (4, 3)]);
    assert_eq!(total_difference(&even).to_string(), "E");
    assert_eq!(PerformanceClass::Even.css_class(), "even");
}

#[test]
fn test_zero_par_hole_with_score() {
    let round = common::round_from(&[(0, 2)]);
    assert_eq!(per_hole_difference(&round.holes[0]).to_string(), "+2");
}

#[test]
fn test_score_display_names() {
    let round = common::round_from(&[(4, 0), (5, 2), (5, 3), (4, 3), (4, 4), (4, 5), (4, 6), (3, 9)]);
    let names: Vec<Option<ScoreDisplay>> = round.holes.iter().map(score_display).collect();
    assert_eq!(
        names,
        vec![
            None,
            Some(ScoreDisplay::Albatross),
            Some(ScoreDisplay::Eagle),
            Some(ScoreDisplay::Birdie),
            Some(ScoreDisplay::Par),
            Some(ScoreDisplay::Bogey),
            Some(ScoreDisplay::DoubleBogey),
            Some(ScoreDisplay::TripleBogey),
        ]
    );
}

#[test]
fn test_round_summary() {
    let round = common::round_from(&[(4, 5), (3, 0), (5, 4)]);
    let summary = RoundSummary::from_round(&round);
    assert_eq!(summary.total_par, 12);
    assert_eq!(summary.total_score, 9);
    assert_eq!(summary.total_difference, RelativeScore::Even);
    assert_eq!(summary.holes_played, 2);

    let value = serde_json::to_value(&summary).expect("summary serializes");
    assert_eq!(value["totalDifference"], "E");
    assert_eq!(value["holesPlayed"], 2);
}
