use regexp_extract_pushdown::error::RegexpExtractError;
use regexp_extract_pushdown::{
    ExtractionEvaluator, ExtractionTransform, InvalidPatternMode, RegexExtraction,
    RegexpExtractConfig, SimpleExtraction,
};

fn regex(pattern: &str, index: i32) -> ExtractionTransform {
    ExtractionTransform::Regex(RegexExtraction::new(pattern, index))
}

fn evaluator() -> ExtractionEvaluator {
    ExtractionEvaluator::new(&RegexpExtractConfig::default())
}

#[test]
fn whole_match_and_groups() {
    let mut ev = evaluator();
    let whole = SimpleExtraction::new("s").cascade(regex(r"(\d+)-(\d+)", 0));
    let left = SimpleExtraction::new("s").cascade(regex(r"(\d+)-(\d+)", 1));
    assert_eq!(ev.evaluate(&whole, Some("x100-200y")).unwrap().as_deref(), Some("100-200"));
    assert_eq!(ev.evaluate(&left, Some("x100-200y")).unwrap().as_deref(), Some("100"));
}

#[test]
fn empty_chain_is_identity() {
    let mut ev = evaluator();
    let bare = SimpleExtraction::new("s");
    assert_eq!(ev.evaluate(&bare, Some("abc")).unwrap().as_deref(), Some("abc"));
    assert_eq!(ev.evaluate(&bare, None).unwrap(), None);
}

#[test]
fn transforms_apply_in_order() {
    let mut ev = evaluator();
    let chain = SimpleExtraction::new("s")
        .cascade(regex(r"id=(\w+)", 1))
        .cascade(regex(r"[0-9]+", 0));
    assert_eq!(ev.evaluate(&chain, Some("id=ab12cd;")).unwrap().as_deref(), Some("12"));
    // first step misses, null flows through the second step as ""
    assert_eq!(ev.evaluate(&chain, Some("nothing")).unwrap(), None);
}

#[test]
fn unicode_extracts_properly() {
    let mut ev = evaluator();
    let chain = SimpleExtraction::new("s").cascade(regex(r"([^\d]+)(\d+)", 2));
    assert_eq!(ev.evaluate(&chain, Some("Köln99")).unwrap().as_deref(), Some("99"));
    assert_eq!(ev.evaluate(&chain, Some("東京123")).unwrap().as_deref(), Some("123"));
}

#[test]
fn null_input_is_matched_as_empty_string() {
    let mut ev = evaluator();
    let optional = SimpleExtraction::new("s").cascade(regex(r"^(a*)$", 1));
    let digits = SimpleExtraction::new("s").cascade(regex(r"\d+", 0));
    // matches "", and the empty group then reads as null
    assert_eq!(ev.evaluate(&optional, None).unwrap(), None);
    assert_eq!(ev.evaluate(&optional, Some("aa")).unwrap().as_deref(), Some("aa"));
    assert_eq!(ev.evaluate(&digits, None).unwrap(), None);
}

#[test]
fn empty_group_match_is_null() {
    let mut ev = evaluator();
    let t = RegexExtraction::new(r"a(x*)b", 1);
    assert_eq!(ev.apply_regex(&t, Some("ab")).unwrap(), None);
    assert_eq!(ev.apply_regex(&t, Some("axxb")).unwrap().as_deref(), Some("xx"));

    let fill_empty = RegexExtraction::new(r"(\d+)", 1).replace_missing_with("");
    assert_eq!(ev.apply_regex(&fill_empty, Some("abc")).unwrap(), None);
}

#[test]
fn optional_group_that_did_not_participate_is_null() {
    let mut ev = evaluator();
    let t = RegexExtraction::new(r"a(x)?b", 1);
    assert_eq!(ev.apply_regex(&t, Some("ab")).unwrap(), None);
    assert_eq!(ev.apply_regex(&t, Some("axb")).unwrap().as_deref(), Some("x"));
}

#[test]
fn matching_is_case_sensitive() {
    let mut ev = evaluator();
    let t = RegexExtraction::new(r"([a-z]+)", 1);
    assert_eq!(ev.apply_regex(&t, Some("ABC")).unwrap(), None);
}

#[test]
fn negative_index_errors() {
    let mut ev = evaluator();
    let err = ev
        .apply_regex(&RegexExtraction::new(r"(a)", -1), Some("a"))
        .unwrap_err();
    assert!(matches!(err, RegexpExtractError::NegativeIndex(-1)));
}

#[test]
fn index_beyond_groups_errors() {
    let mut ev = evaluator();
    let err = ev
        .apply_regex(&RegexExtraction::new(r"(a)(b)", 3), Some("ab"))
        .unwrap_err();
    assert!(matches!(
        err,
        RegexpExtractError::GroupOutOfRange { index: 3, groups: 2 }
    ));
}

#[test]
fn invalid_pattern_follows_configured_mode() {
    let t = RegexExtraction::new("(unclosed", 0);

    let mut strict = evaluator();
    let err = strict.apply_regex(&t, Some("x")).unwrap_err();
    assert!(err.to_string().contains("invalid regex pattern"));

    let cfg = RegexpExtractConfig::new().invalid_pattern_mode(InvalidPatternMode::Null);
    let mut lenient = ExtractionEvaluator::new(&cfg);
    assert_eq!(lenient.apply_regex(&t, Some("x")).unwrap(), None);
}

#[test]
fn tiny_cache_still_answers_alternating_patterns() {
    let cfg = RegexpExtractConfig::new().cache_size(1);
    let mut ev = ExtractionEvaluator::new(&cfg);
    let a = RegexExtraction::new(r"(a)(\d)", 2);
    let b = RegexExtraction::new(r"(b)(\d)", 2);
    for _ in 0..3 {
        assert_eq!(ev.apply_regex(&a, Some("a1")).unwrap().as_deref(), Some("1"));
        assert_eq!(ev.apply_regex(&b, Some("b2")).unwrap().as_deref(), Some("2"));
    }
}
