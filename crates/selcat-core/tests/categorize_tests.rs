//! Integration tests for selector categorization and its serialized form.

use selcat_core::{
    AttributePair, CategorizedResult, DuplicatePolicy, Lexeme, TokenKind, categorize,
    categorize_with,
};
use serde_json::json;

fn texts(result: &CategorizedResult, kind: TokenKind) -> Vec<&str> {
    result.texts(kind).collect()
}

fn attributes(result: &CategorizedResult) -> Vec<(&str, &str)> {
    result
        .get(TokenKind::Attribute)
        .iter()
        .filter_map(Lexeme::as_attribute)
        .map(|pair| (pair.key(), pair.value()))
        .collect()
}

/// Asserts every kind not listed is empty.
fn assert_only(result: &CategorizedResult, populated: &[TokenKind]) {
    for (kind, lexemes) in result.iter() {
        if !populated.contains(&kind) {
            assert!(lexemes.is_empty(), "{kind} should be empty, got {lexemes:?}");
        }
    }
}

#[test]
fn test_blank_input_has_every_category_empty() {
    for input in ["", " ", "\t\n  \r"] {
        let result = categorize(input);
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.iter().count(), 6);
    }
}

#[test]
fn test_compound_selector() {
    let result = categorize("div.menu#nav");
    assert_eq!(texts(&result, TokenKind::Element), ["div"]);
    assert_eq!(texts(&result, TokenKind::Class), ["menu"]);
    assert_eq!(texts(&result, TokenKind::Id), ["nav"]);
    assert_only(&result, &[TokenKind::Element, TokenKind::Class, TokenKind::Id]);
}

#[test]
fn test_pseudo_class() {
    let result = categorize("a:hover");
    assert_eq!(texts(&result, TokenKind::Element), ["a"]);
    assert_eq!(texts(&result, TokenKind::PseudoClass), ["hover"]);
    assert_only(&result, &[TokenKind::Element, TokenKind::PseudoClass]);
}

#[test]
fn test_pseudo_element() {
    let result = categorize("a::before");
    assert_eq!(texts(&result, TokenKind::Element), ["a"]);
    assert_eq!(texts(&result, TokenKind::PseudoElement), ["before"]);
    assert_only(&result, &[TokenKind::Element, TokenKind::PseudoElement]);
}

#[test]
fn test_nth_child_argument_never_appears() {
    let result = categorize("li:nth-child(7n+5)");
    assert_eq!(texts(&result, TokenKind::Element), ["li"]);
    assert_eq!(texts(&result, TokenKind::PseudoClass), ["nth-child"]);
    assert_only(&result, &[TokenKind::Element, TokenKind::PseudoClass]);

    let serialized = serde_json::to_string(&result).unwrap();
    assert!(!serialized.contains("7n"));
    assert!(!serialized.contains('5'));
}

#[test]
fn test_boolean_attribute() {
    let result = categorize("input[disabled]");
    assert_eq!(texts(&result, TokenKind::Element), ["input"]);
    assert_eq!(attributes(&result), [("disabled", "disabled")]);
    assert!(result.get(TokenKind::Attribute)[0].as_attribute().unwrap().is_shorthand());
}

#[test]
fn test_attribute_pair() {
    let result = categorize("input[type=checkbox]");
    assert_eq!(attributes(&result), [("type", "checkbox")]);
    assert_eq!(
        result.get(TokenKind::Attribute),
        [Lexeme::Attribute(AttributePair::new("type", "checkbox").unwrap())]
    );
}

#[test]
fn test_combinators_and_commas_contribute_nothing() {
    let result = categorize("div > p, span");
    assert_eq!(texts(&result, TokenKind::Element), ["div", "p", "span"]);
    assert_only(&result, &[TokenKind::Element]);
}

#[test]
fn test_order_is_preserved_per_category() {
    let result = categorize("ul.b li.a > a.c:focus:hover");
    assert_eq!(texts(&result, TokenKind::Element), ["ul", "li", "a"]);
    assert_eq!(texts(&result, TokenKind::Class), ["b", "a", "c"]);
    assert_eq!(texts(&result, TokenKind::PseudoClass), ["focus", "hover"]);
}

#[test]
fn test_repeated_calls_are_identical() {
    let selector = "nav > ul li:nth-of-type(2n) a.active[href]::after, .active";
    assert_eq!(categorize(selector), categorize(selector));
}

#[test]
fn test_duplicates_kept_by_default() {
    let result = categorize(".active li .active li");
    assert_eq!(texts(&result, TokenKind::Class), ["active", "active"]);
    assert_eq!(texts(&result, TokenKind::Element), ["li", "li"]);
    assert_eq!(result.len(), 4);
}

#[test]
fn test_collapse_keeps_first_occurrence() {
    let result = categorize_with(".b .a .b [x] [x] [x=y]", DuplicatePolicy::Collapse);
    assert_eq!(texts(&result, TokenKind::Class), ["b", "a"]);
    assert_eq!(attributes(&result), [("x", "x"), ("x", "y")]);
}

#[test]
fn test_collapse_many_distinct_lexemes() {
    let count = 20_000;
    let classes: Vec<String> = (0..count).map(|i| format!("c{i}")).collect();
    let once: String = classes.iter().map(|class| format!(".{class}")).collect();
    let selector = format!("{once} {once}");

    let kept = categorize(&selector);
    assert_eq!(kept.get(TokenKind::Class).len(), 2 * count);

    let collapsed = categorize_with(&selector, DuplicatePolicy::Collapse);
    assert_eq!(texts(&collapsed, TokenKind::Class), classes);
}

#[test]
fn test_collapse_is_per_category() {
    let result = categorize_with("menu.menu#menu", DuplicatePolicy::Collapse);
    assert_eq!(texts(&result, TokenKind::Element), ["menu"]);
    assert_eq!(texts(&result, TokenKind::Class), ["menu"]);
    assert_eq!(texts(&result, TokenKind::Id), ["menu"]);
}

#[test]
fn test_trailing_unterminated_attribute() {
    let result = categorize("a[target = _blank");
    assert_eq!(attributes(&result), [("target", "_blank")]);
}

#[test]
fn test_serialized_shape() {
    let result = categorize("input.field#email:focus::placeholder[type=email][required]");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "elements": ["input"],
            "classes": ["field"],
            "ids": ["email"],
            "pseudoElements": ["placeholder"],
            "pseudoClasses": ["focus"],
            "attributes": [
                { "key": "type", "value": "email" },
                { "key": "required", "value": "required" }
            ]
        })
    );
}

#[test]
fn test_serialized_keys_in_kind_order() {
    let serialized = serde_json::to_string(&categorize("")).unwrap();
    assert_eq!(
        serialized,
        r#"{"elements":[],"classes":[],"ids":[],"pseudoElements":[],"pseudoClasses":[],"attributes":[]}"#
    );
}

#[test]
fn test_concurrent_calls_are_independent() {
    let selectors = ["div.a", "span#b", "p:hover", "a::after", "[x=y]"];
    let handles: Vec<_> = selectors
        .into_iter()
        .map(|selector| std::thread::spawn(move || (selector, categorize(selector))))
        .collect();
    for handle in handles {
        let (selector, result) = handle.join().unwrap();
        assert_eq!(result, categorize(selector));
        assert_eq!(result.len(), if selector.starts_with('[') { 1 } else { 2 });
    }
}
