use limbic::{Detector, Emotion};

#[test]
fn test_batch_entries_mirror_single_classification() {
    let detector = Detector::new();
    let texts = ["so happy today", "terrible and gloomy", "nothing notable"];

    let entries = detector.analyze_batch(&texts);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].emotion, Emotion::Happy);
    assert_eq!(entries[1].emotion, Emotion::Sad);
    assert_eq!(entries[2].emotion, Emotion::Neutral);

    for (entry, text) in entries.iter().zip(texts) {
        assert_eq!(entry.emotion, detector.classify(text).emotion);
    }
}

#[test]
fn test_batch_truncates_display_copy_only() {
    let detector = Detector::new();
    // keyword sits beyond the 100-character preview cut
    let mut text = "word ".repeat(24);
    text.push_str("heartbroken");
    assert!(text.chars().count() > 100);

    let entries = detector.analyze_batch(&[text.as_str()]);
    assert!(entries[0].text.ends_with("..."));
    assert_eq!(entries[0].text.chars().count(), 103);
    // classification saw the full text, not the preview
    assert_eq!(entries[0].emotion, Emotion::Sad);
}

#[test]
fn test_batch_short_texts_echo_unchanged() {
    let detector = Detector::new();
    let entries = detector.analyze_batch(&["short and happy"]);
    assert_eq!(entries[0].text, "short and happy");
}

#[test]
fn test_aggregate_counts_and_percentages() {
    let detector = Detector::new();
    let texts = ["happy", "so happy", "gloomy", "meeting at three"];

    let stats = detector.aggregate(&texts);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.dominant, Emotion::Happy);

    let happy = &stats.emotions[&Emotion::Happy];
    assert_eq!(happy.count, 2);
    assert_eq!(happy.percentage, 50.0);
    assert_eq!(stats.emotions[&Emotion::Sad].count, 1);
    assert_eq!(stats.emotions[&Emotion::Sad].percentage, 25.0);
    assert_eq!(stats.emotions[&Emotion::Neutral].count, 1);

    let sum: f64 = stats.emotions.values().map(|s| s.percentage).sum();
    assert!((sum - 100.0).abs() < 0.05);
}

#[test]
fn test_aggregate_rounds_to_two_decimals() {
    let detector = Detector::new();
    let texts = ["happy", "gloomy", "cry"];

    let stats = detector.aggregate(&texts);
    assert_eq!(stats.emotions[&Emotion::Happy].percentage, 33.33);
    assert_eq!(stats.emotions[&Emotion::Sad].percentage, 66.67);
}

#[test]
fn test_aggregate_tie_takes_first_encountered() {
    let detector = Detector::new();
    // sad and happy both occur twice; sad was counted first
    let texts = ["gloomy", "happy", "cry", "joy"];

    let stats = detector.aggregate(&texts);
    assert_eq!(stats.emotions[&Emotion::Sad].count, 2);
    assert_eq!(stats.emotions[&Emotion::Happy].count, 2);
    assert_eq!(stats.dominant, Emotion::Sad);
}

#[test]
fn test_aggregate_empty_batch() {
    let detector = Detector::new();
    let stats = detector.aggregate::<&str>(&[]);

    assert_eq!(stats.total, 0);
    assert!(stats.emotions.is_empty());
    assert_eq!(stats.dominant, Emotion::Neutral);
}

#[test]
fn test_statistics_serialize_shape() {
    let detector = Detector::new();
    let stats = detector.aggregate(&["happy", "happy"]);
    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["total"], 2);
    assert_eq!(json["dominant"], "happy");
    assert_eq!(json["emotions"]["happy"]["count"], 2);
    assert_eq!(json["emotions"]["happy"]["percentage"], 100.0);
}
