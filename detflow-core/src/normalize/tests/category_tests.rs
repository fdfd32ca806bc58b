use crate::normalize::{CategoryParse, ParseStrategy, normalize_categories};
use pretty_assertions::assert_eq;

fn labels(raw: &str) -> Vec<String> {
    normalize_categories(Some(raw)).labels
}

fn strategy(raw: &str) -> Option<ParseStrategy> {
    normalize_categories(Some(raw)).strategy
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn absent_cell_is_empty() {
    // Act
    let parsed = normalize_categories(None);

    // Assert
    assert_eq!(parsed, CategoryParse::default());
    assert!(parsed.is_empty());
}

#[test]
fn empty_cell_is_empty_without_running_strategies() {
    // Act
    let parsed = normalize_categories(Some(""));

    // Assert
    assert!(parsed.labels.is_empty());
    assert_eq!(parsed.strategy, None);
}

#[test]
fn json_array_is_parsed_strictly() {
    // Arrange
    let raw = r#"["edr", "network"]"#;

    // Act / Assert
    assert_eq!(labels(raw), owned(&["edr", "network"]));
    assert_eq!(strategy(raw), Some(ParseStrategy::Json));
}

#[test]
fn wrapping_quotes_are_stripped_once_before_parsing() {
    // Arrange
    let raw = r#"  "["edr", "network"]"  "#;

    // Act / Assert
    assert_eq!(labels(raw), owned(&["edr", "network"]));
}

#[test]
fn residual_element_quotes_are_stripped() {
    // Arrange: elements that were quoted twice by the exporter.
    let raw = r#"["\"edr\"", "\"network\""]"#;

    // Act / Assert
    assert_eq!(labels(raw), owned(&["edr", "network"]));
}

#[test]
fn non_array_json_is_a_single_label() {
    assert_eq!(labels(r#""edr""#), owned(&["edr"]));
    assert_eq!(labels("5"), owned(&["5"]));
    assert_eq!(labels("null"), owned(&["None"]));
    assert_eq!(labels("true"), owned(&["True"]));
}

#[test]
fn single_quoted_list_falls_back_to_literal() {
    // Arrange
    let raw = "['edr', 'network',]";

    // Act / Assert
    assert_eq!(labels(raw), owned(&["edr", "network"]));
    assert_eq!(strategy(raw), Some(ParseStrategy::Literal));
}

#[test]
fn tuple_literal_is_a_single_label() {
    // Arrange
    let raw = "('edr', 'network')";

    // Act / Assert
    assert_eq!(labels(raw), owned(&["('edr', 'network')"]));
    assert_eq!(strategy(raw), Some(ParseStrategy::Literal));
}

#[test]
fn literal_numbers_use_their_canonical_text() {
    assert_eq!(labels("[1_000, 0x1F, 1e5]"), owned(&["1000", "31", "100000.0"]));
}

#[test]
fn nested_json_containers_render_as_python_repr() {
    assert_eq!(
        labels(r#"[{"a": 1}, ["b"], 2.5]"#),
        owned(&["{'a': 1}", "['b']", "2.5"])
    );
    assert_eq!(labels(r#"{"a": [1, null]}"#), owned(&["{'a': [1, None]}"]));
}

#[test]
fn unquoted_bracket_text_falls_back_to_split() {
    // Arrange
    let raw = "[edr, network]";

    // Act / Assert
    assert_eq!(labels(raw), owned(&["edr", "network"]));
    assert_eq!(strategy(raw), Some(ParseStrategy::BracketSplit));
}

#[test]
fn bracket_split_drops_empty_pieces_and_mixed_quotes() {
    // Arrange
    let raw = r#"[edr, , 'network", "cloud]"#;

    // Act / Assert
    assert_eq!(labels(raw), owned(&["edr", "network", "cloud"]));
}

#[test]
fn bracket_split_keeps_quotes_nested_inside_pieces() {
    // Arrange: not JSON, and `y z` is not a valid literal.
    let raw = r#"['"x"', y z]"#;

    // Act / Assert
    assert_eq!(labels(raw), owned(&["\"x\"", "y z"]));
    assert_eq!(strategy(raw), Some(ParseStrategy::BracketSplit));
}

#[test]
fn verbatim_label_keeps_its_quotes() {
    // Arrange
    let raw = "edr\"";

    // Act / Assert
    assert_eq!(labels(raw), owned(&["edr\""]));
    assert_eq!(strategy(raw), Some(ParseStrategy::Verbatim));
}

#[test]
fn unbracketed_text_is_kept_verbatim() {
    // Arrange
    let raw = "  edr  ";

    // Act / Assert
    assert_eq!(labels(raw), owned(&["edr"]));
    assert_eq!(strategy(raw), Some(ParseStrategy::Verbatim));
}

#[test]
fn whitespace_only_cell_yields_no_labels() {
    assert!(labels("   ").is_empty());
}

#[test]
fn empty_json_array_yields_no_labels() {
    assert!(labels("[]").is_empty());
    assert!(labels(r#"["", "\"\""]"#).is_empty());
}

#[test]
fn duplicate_elements_are_preserved() {
    assert_eq!(labels(r#"["edr","edr"]"#), owned(&["edr", "edr"]));
}

#[test]
fn normalizing_a_clean_list_is_idempotent() {
    // Arrange
    let first = labels("[edr, network]");
    let rendered = serde_json::to_string(&first).unwrap();

    // Act
    let second = labels(&rendered);

    // Assert
    assert_eq!(first, second);
}
