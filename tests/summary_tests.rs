use lifewheel::core::{Area, Level, LevelVector};
use lifewheel::summary::{
    BalanceComment, CONGRATULATION_MESSAGE, Summary, suggestions,
};

fn levels(values: [i32; 8]) -> LevelVector {
    LevelVector::from_values(values).expect("valid levels")
}

#[test]
fn comment_boundaries_at_five_six_and_seven_eight() {
    let comment = |v| BalanceComment::for_level(Level::new(v).expect("valid level"));
    assert_eq!(comment(5), BalanceComment::NeedsAttention);
    assert_eq!(comment(6), BalanceComment::Moderate);
    assert_eq!(comment(7), BalanceComment::Moderate);
    assert_eq!(comment(8), BalanceComment::GoodBalance);
}

#[test]
fn radar_data_preserves_area_order_and_levels() {
    let summary = Summary::from_levels(&levels([3, 9, 7, 2, 10, 5, 6, 4]));
    let expected: Vec<(Area, u8)> = Area::ALL
        .iter()
        .copied()
        .zip([3, 9, 7, 2, 10, 5, 6, 4])
        .map(|(area, level)| (area, level as u8))
        .collect();

    let actual: Vec<(Area, u8)> = summary
        .radar
        .iter()
        .map(|point| (point.area, point.level.get()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn end_to_end_suggestions_cover_exactly_the_low_areas() {
    // Levels <= 5 sit at indices 0, 3, 5, 7.
    let lines = suggestions(&levels([3, 9, 7, 2, 10, 5, 6, 4]));

    let expected_areas = [Area::Health, Area::Finances, Area::Leisure, Area::Spirituality];
    assert_eq!(lines.len(), expected_areas.len());
    for (line, area) in lines.iter().zip(expected_areas) {
        assert!(
            line.starts_with(&format!("{}: ", area.label())),
            "line `{line}` should be keyed by {area}"
        );
        assert!(line.ends_with(area.advice()));
    }
}

#[test]
fn congratulation_appears_iff_every_level_is_at_least_six() {
    let balanced = suggestions(&levels([6, 6, 6, 6, 6, 6, 6, 6]));
    assert_eq!(balanced.len(), 1);
    assert_eq!(balanced[0], CONGRATULATION_MESSAGE);

    let one_low = suggestions(&levels([6, 6, 6, 5, 6, 6, 6, 6]));
    assert_eq!(one_low.len(), 1);
    assert!(one_low[0].starts_with("Finances: "));
    assert!(!one_low.contains(&CONGRATULATION_MESSAGE.to_owned()));
}

#[test]
fn summary_rows_combine_level_and_comment() {
    let summary = Summary::from_levels(&levels([3, 9, 7, 2, 10, 5, 6, 4]));
    assert_eq!(summary.rows[1].area, Area::Family);
    assert_eq!(summary.rows[1].comment, BalanceComment::GoodBalance);
    assert_eq!(summary.rows[2].comment, BalanceComment::Moderate);
    assert_eq!(summary.rows[7].comment, BalanceComment::NeedsAttention);
    assert!(!summary.is_balanced());

    let balanced = Summary::from_levels(&levels([8, 8, 9, 10, 8, 9, 8, 8]));
    assert!(balanced.is_balanced());
}

#[test]
fn summary_serializes_with_area_labels() {
    let summary = Summary::from_levels(&levels([3, 9, 7, 2, 10, 5, 6, 4]));
    let json = serde_json::to_value(&summary).expect("summary json");

    assert_eq!(json["rows"][0]["area"], "Health");
    assert_eq!(json["rows"][0]["level"], 3);
    assert_eq!(json["rows"][0]["comment"], "NeedsAttention");
}
