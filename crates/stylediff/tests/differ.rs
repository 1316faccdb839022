//! End-to-end diffs over CSS AST JSON documents, the form a front end hands
//! to the differ.

use proptest::prelude::*;
use serde_json::json;
use stylediff::types::{Comment, Declaration, MediaBlock, Rule, RuleSet, Stylesheet};
use stylediff::{diff, diff_with_config, DiffConfig, DiffError, Differ, StackScope};

fn parse(value: serde_json::Value) -> Stylesheet {
    serde_json::from_value(value).unwrap()
}

fn ltr() -> Stylesheet {
    parse(json!({
        "type": "stylesheet",
        "stylesheet": { "rules": [
            { "type": "comment", "comment": " theme: base " },
            { "type": "rule", "selectors": [".sapMBtn"], "declarations": [
                { "type": "declaration", "property": "float", "value": "left" },
                { "type": "declaration", "property": "margin-left", "value": "0.5rem" },
                { "type": "declaration", "property": "color", "value": "#333" },
                { "type": "declaration", "property": "border-radius", "value": "2px" }
            ] },
            { "type": "media", "media": "(max-width: 600px)", "rules": [
                { "type": "rule", "selectors": [".sapMBar"], "declarations": [
                    { "type": "declaration", "property": "padding-left", "value": "1rem" }
                ] },
                { "type": "rule", "selectors": [".sapMList"], "declarations": [
                    { "type": "declaration", "property": "display", "value": "block" }
                ] }
            ] },
            { "type": "font-face", "declarations": [
                { "type": "declaration", "property": "font-family", "value": "icons" }
            ] },
            { "type": "rule", "selectors": [".sapMText", ".sapMLabel"], "declarations": [
                { "type": "declaration", "property": "text-align", "value": "left" }
            ] }
        ] }
    }))
}

fn rtl() -> Stylesheet {
    parse(json!({
        "type": "stylesheet",
        "stylesheet": { "rules": [
            { "type": "comment", "comment": " theme: base " },
            { "type": "rule", "selectors": [".sapMBtn"], "declarations": [
                { "type": "declaration", "property": "float", "value": "right" },
                { "type": "declaration", "property": "margin-right", "value": "0.5rem" },
                { "type": "declaration", "property": "color", "value": "#333" },
                { "type": "declaration", "property": "border-radius", "value": "2px" }
            ] },
            { "type": "rule", "selectors": ["html[dir=rtl] .sapMBtn"], "declarations": [
                { "type": "declaration", "property": "direction", "value": "rtl" }
            ] },
            { "type": "media", "media": "(max-width: 600px)", "rules": [
                { "type": "rule", "selectors": [".sapMBar"], "declarations": [
                    { "type": "declaration", "property": "padding-left", "value": "1rem" }
                ] },
                { "type": "rule", "selectors": [".sapMList"], "declarations": [
                    { "type": "declaration", "property": "display", "value": "block" }
                ] }
            ] },
            { "type": "font-face", "declarations": [
                { "type": "declaration", "property": "font-family", "value": "icons" }
            ] },
            { "type": "rule", "selectors": [".sapMText", ".sapMLabel"], "declarations": [
                { "type": "declaration", "property": "text-align", "value": "right" }
            ] },
            { "type": "rule", "selectors": [".sapRtlOnly"], "declarations": [] }
        ] }
    }))
}

#[test]
fn rtl_override_contains_only_directional_changes() {
    let outcome = diff(&ltr(), &rtl()).unwrap();

    let expected = parse(json!({
        "type": "stylesheet",
        "stylesheet": { "rules": [
            { "type": "rule", "selectors": [".sapMBtn"], "declarations": [
                { "type": "declaration", "property": "float", "value": "right" },
                { "type": "declaration", "property": "color", "value": "#333" }
            ] },
            { "type": "rule", "selectors": [".sapMText", ".sapMLabel"], "declarations": [
                { "type": "declaration", "property": "text-align", "value": "right" }
            ] }
        ] }
    }));
    assert_eq!(outcome.diff, expected);

    let leftovers: Vec<String> = outcome.stack.iter().map(Rule::describe).collect();
    assert_eq!(
        leftovers,
        vec!["rule `html[dir=rtl] .sapMBtn`", "rule `.sapRtlOnly`"]
    );
}

#[test]
fn diff_serializes_back_to_ast_json() {
    let outcome = diff(&ltr(), &rtl()).unwrap();
    let value = serde_json::to_value(&outcome.diff).unwrap();

    assert_eq!(value["type"], "stylesheet");
    assert_eq!(value["stylesheet"]["rules"][0]["type"], "rule");
    assert_eq!(
        value["stylesheet"]["rules"][0]["declarations"][0],
        json!({ "type": "declaration", "property": "float", "value": "right" })
    );
}

#[test]
fn media_block_diff_keeps_query_and_changed_rules() {
    let base = Stylesheet::new(vec![MediaBlock::new(
        "print",
        vec![
            RuleSet::new([".a"], [Declaration::new("left", "0")]).into(),
            RuleSet::new([".b"], [Declaration::new("float", "left")]).into(),
        ],
    )
    .into()]);
    let compare = Stylesheet::new(vec![MediaBlock::new(
        "print",
        vec![
            RuleSet::new([".a"], [Declaration::new("left", "0")]).into(),
            RuleSet::new([".b"], [Declaration::new("float", "right")]).into(),
        ],
    )
    .into()]);

    let outcome = diff(&base, &compare).unwrap();
    assert_eq!(
        outcome.diff,
        Stylesheet::new(vec![MediaBlock::new(
            "print",
            vec![RuleSet::new([".b"], [Declaration::new("float", "right")]).into()],
        )
        .into()])
    );
}

#[test]
fn base_rule_missing_from_compare_fails() {
    let base = Stylesheet::new(vec![
        RuleSet::new([".a"], Vec::<Declaration>::new()).into(),
        Comment::new("only in base").into(),
    ]);
    let compare = Stylesheet::new(vec![RuleSet::new([".a"], Vec::<Declaration>::new()).into()]);

    match diff(&base, &compare) {
        Err(DiffError::NoCounterpart { rule, path }) => {
            assert_eq!(rule, "comment `only in base`");
            assert!(path.is_empty());
        }
        other => panic!("expected NoCounterpart, got {:?}", other),
    }
}

#[test]
fn differ_is_reusable_across_calls() {
    let differ = Differ::new(DiffConfig::reference());
    assert_eq!(differ.config().stack_scope, StackScope::TopLevel);

    let first = differ.run(&ltr(), &rtl()).unwrap();
    let second = differ.run(&ltr(), &rtl()).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------
// Properties
// ---------------------------------------------------------------

const PLAIN_PROPERTIES: &[&str] = &[
    "float", "left", "right", "margin-left", "padding-right", "display", "direction", "top",
];

fn plain_declaration() -> impl Strategy<Value = Declaration> {
    (prop::sample::select(PLAIN_PROPERTIES), "[a-z0-9]{1,6}")
        .prop_map(|(property, value)| Declaration::new(property, value))
}

fn rule_set() -> impl Strategy<Value = Rule> {
    (
        prop::collection::vec("[.#][a-z]{1,5}", 1..3),
        prop::collection::vec(plain_declaration(), 0..5),
    )
        .prop_map(|(selectors, decls)| Rule::from(RuleSet::new(selectors, decls)))
}

fn rule() -> impl Strategy<Value = Rule> {
    let leaf = prop_oneof![
        4 => rule_set(),
        1 => "[a-z ]{0,8}".prop_map(|text| Rule::from(Comment::new(text))),
    ];
    leaf.prop_recursive(2, 16, 4, |inner| {
        ("[a-z]{3,8}", prop::collection::vec(inner, 0..4))
            .prop_map(|(media, rules)| Rule::from(MediaBlock::new(media, rules)))
    })
}

fn stylesheet() -> impl Strategy<Value = Stylesheet> {
    prop::collection::vec(rule(), 0..8).prop_map(Stylesheet::new)
}

proptest! {
    #[test]
    fn diff_against_itself_is_empty(sheet in stylesheet()) {
        let outcome = diff(&sheet, &sheet).unwrap();
        prop_assert!(outcome.is_empty());
        prop_assert!(!outcome.has_leftovers());
    }

    #[test]
    fn inserted_rules_surface_on_the_stack(
        sheet in stylesheet(),
        extra in prop::collection::vec("[a-z]{1,4}", 1..4),
    ) {
        // Selectors with a `.rtl-` prefix never occur in the generated base.
        let inserted: Vec<Rule> = extra
            .iter()
            .map(|name| RuleSet::new([format!(".rtl-{name}")], Vec::<Declaration>::new()).into())
            .collect();
        let mut compare = sheet.clone();
        compare.rules.extend(inserted.iter().cloned());

        let outcome = diff(&sheet, &compare).unwrap();
        prop_assert!(outcome.is_empty());
        prop_assert_eq!(outcome.stack.rules, inserted);
    }

    #[test]
    fn inputs_are_left_untouched(base in stylesheet(), compare in stylesheet()) {
        let base_snapshot = base.clone();
        let compare_snapshot = compare.clone();

        let _ = diff_with_config(&base, &compare, &DiffConfig::default());

        prop_assert_eq!(base, base_snapshot);
        prop_assert_eq!(compare, compare_snapshot);
    }
}
