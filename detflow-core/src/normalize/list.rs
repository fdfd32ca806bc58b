use crate::normalize::literal::{Literal, parse_literal};
use crate::normalize::scalar::strip_wrapping_quotes;
use crate::normalize::{CategoryParse, ParseStrategy, StrategyOutcome};
use serde_json::Value;

type Strategy = fn(&str) -> StrategyOutcome;

/// Strategies in the order they are tried. `Verbatim` never fails, so the
/// chain always terminates with a result.
const STRATEGIES: &[(ParseStrategy, Strategy)] = &[
    (ParseStrategy::Json, parse_json),
    (ParseStrategy::Literal, parse_python_literal),
    (ParseStrategy::BracketSplit, split_brackets),
    (ParseStrategy::Verbatim, verbatim),
];

/// Normalizes a raw multi-value category cell into a list of labels.
///
/// - Absent or empty cells produce an empty list without running any strategy.
/// - Surrounding whitespace is trimmed and one wrapping pair of double quotes
///   is removed before the strategy chain runs.
/// - Labels from the structured strategies (JSON, literal) have their residual
///   double quotes stripped. Bracket-split and verbatim labels are kept as
///   produced.
/// - Labels that end up empty are dropped.
pub fn normalize_categories(raw: Option<&str>) -> CategoryParse {
    let Some(raw) = raw else {
        return CategoryParse::default();
    };
    if raw.is_empty() {
        return CategoryParse::default();
    }

    let value = strip_wrapping_quotes(raw.trim());

    for (strategy, run) in STRATEGIES {
        if let StrategyOutcome::Parsed(labels) = run(value) {
            let labels = if strategy.is_structured() {
                labels.into_iter().filter_map(clean_label).collect()
            } else {
                labels.into_iter().filter(|l| !l.is_empty()).collect()
            };
            return CategoryParse {
                labels,
                strategy: Some(*strategy),
            };
        }
    }

    // Unreachable in practice: verbatim always parses.
    CategoryParse::default()
}

fn clean_label(label: String) -> Option<String> {
    let cleaned = label.trim_matches('"');
    if cleaned.is_empty() {
        None
    } else if cleaned.len() == label.len() {
        Some(label)
    } else {
        Some(cleaned.to_string())
    }
}

//-----------------------------------------------------------------------------
// Strategies
//-----------------------------------------------------------------------------

/// Strict JSON. Arrays yield one label per element; any other JSON value is a
/// single label.
pub fn parse_json(value: &str) -> StrategyOutcome {
    match serde_json::from_str::<Value>(value) {
        Ok(Value::Array(items)) => StrategyOutcome::Parsed(items.iter().map(json_text).collect()),
        Ok(other) => StrategyOutcome::Parsed(vec![json_text(&other)]),
        Err(_) => StrategyOutcome::Unparsed,
    }
}

/// Python-literal syntax: single quotes, trailing commas, `None`/`True`/`False`.
pub fn parse_python_literal(value: &str) -> StrategyOutcome {
    match parse_literal(value) {
        Some(literal) => StrategyOutcome::Parsed(literal.into_labels()),
        None => StrategyOutcome::Unparsed,
    }
}

/// Naive split of bracketed text such as `[edr, network]`.
pub fn split_brackets(value: &str) -> StrategyOutcome {
    let Some(inner) = value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return StrategyOutcome::Unparsed;
    };

    let labels = inner
        .split(',')
        .map(|piece| piece.trim().trim_matches('"').trim_matches('\''))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();

    StrategyOutcome::Parsed(labels)
}

/// Last resort: the whole cleaned cell is one label.
pub fn verbatim(value: &str) -> StrategyOutcome {
    StrategyOutcome::Parsed(vec![value.to_string()])
}

/// Strings are taken as is; other values, nested containers included, use
/// their Python repr.
fn json_text(value: &Value) -> String {
    Literal::from(value).into_text()
}
