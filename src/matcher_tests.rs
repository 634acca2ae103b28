//! Tests for the containment matcher

use super::*;
use proptest::prelude::*;

fn set(pairs: &[(&str, &str)]) -> QaSet {
    QaSet::from(
        pairs
            .iter()
            .map(|(q, a)| QaPair::new(*q, *a))
            .collect::<Vec<_>>(),
    )
}

#[test]
fn test_full_containment_scores_question_length_with_bonus() {
    let engine = MatchEngine::default();
    let question = normalize("What is the capital of France?");
    let score = engine.score(&normalize("what is the capital of france?"), &question);

    assert!((score - 30.0 * 1.05).abs() < 1e-9);
}

#[test]
fn test_reverse_containment_is_weighted() {
    let engine = MatchEngine::default();
    let question = normalize("What is the capital of France?");
    let score = engine.score("capital", &question);

    assert!((score - 7.0 * 0.7 * 1.05).abs() < 1e-9);
}

#[test]
fn test_reverse_containment_fragment_below_threshold() {
    let engine = MatchEngine::default();
    let qa = set(&[("What is the capital of France?", "Paris")]);

    assert!(engine.pick_best_answer("capital", &qa).is_none());
}

#[test]
fn test_hovered_text_missing_question_mark_uses_reverse_containment() {
    let engine = MatchEngine::default();
    let qa = set(&[("What is the capital of France?", "Paris")]);

    // 29 chars x 0.7 x 1.05 is about 21.3, under the threshold
    let (_, score) = engine
        .best_candidate("what is the capital of france", &qa)
        .unwrap();
    assert!(score < 26.0);
    assert!(engine.pick_best_answer("what is the capital of france", &qa).is_none());
}

#[test]
fn test_full_containment_in_longer_text_matches() {
    let engine = MatchEngine::default();
    let qa = set(&[("What is the capital of France?", "Paris")]);

    let best = engine
        .pick_best_answer("Quiz: What is the capital of France? (1 point)", &qa)
        .unwrap();
    assert_eq!(best.answer, "Paris");
}

#[test]
fn test_short_hovered_text_is_rejected() {
    let engine = MatchEngine::default();
    let qa = set(&[("abcde", "x")]);

    assert!(engine.best_candidate("abcde", &qa).is_none());
    assert!(engine.best_candidate("  ab  ", &qa).is_none());
}

#[test]
fn test_empty_set_returns_none() {
    let engine = MatchEngine::default();
    assert!(engine
        .pick_best_answer("a long enough hovered text", &QaSet::new())
        .is_none());
}

#[test]
fn test_empty_questions_are_skipped() {
    let engine = MatchEngine::default();
    let qa = set(&[
        ("", "never"),
        ("  ", "never either"),
        ("Where is the nearest train station?", "Two blocks north."),
    ]);

    let best = engine
        .pick_best_answer("Where is the nearest train station?", &qa)
        .unwrap();
    assert_eq!(best.answer, "Two blocks north.");
}

#[test]
fn test_longer_contained_question_wins() {
    let engine = MatchEngine::default();
    let qa = set(&[
        ("How do I reset my password?", "short"),
        ("How do I reset my password if I lost my phone?", "long"),
    ]);

    let best = engine
        .pick_best_answer(
            "FAQ: how do I reset my password if I lost my phone? Contact us.",
            &qa,
        )
        .unwrap();
    assert_eq!(best.answer, "long");
}

#[test]
fn test_tie_keeps_first_pair() {
    let engine = MatchEngine::default();
    let qa = set(&[
        ("What time does the store open?", "first"),
        ("What time does the store open?", "second"),
    ]);

    let best = engine
        .pick_best_answer("What time does the store open?", &qa)
        .unwrap();
    assert!(std::ptr::eq(best, &qa.as_slice()[0]));
}

#[test]
fn test_same_inputs_return_same_pair() {
    let engine = MatchEngine::default();
    let qa = set(&[
        ("Is shipping free for members?", "Yes."),
        ("What is the refund window?", "30 days."),
    ]);
    let text = "Our refund window: what is the refund window? See details.";

    let first = engine.pick_best_answer(text, &qa).unwrap();
    let second = engine.pick_best_answer(text, &qa).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.answer, "30 days.");
}

#[test]
fn test_quotes_and_case_are_ignored() {
    let engine = MatchEngine::default();
    let qa = set(&[("What's the “best” way to contact support?", "Email.")]);

    let best = engine
        .pick_best_answer("WHATS THE BEST WAY TO CONTACT SUPPORT?", &qa)
        .unwrap();
    assert_eq!(best.answer, "Email.");
}

#[test]
fn test_declarative_label_scores_without_bonus() {
    let engine = MatchEngine::default();
    let hovered = "shipping and returns policy";
    let score = engine.score(hovered, "shipping and returns policy");
    assert!((score - 27.0).abs() < 1e-9);
}

#[test]
fn test_threshold_is_configurable() {
    let engine = MatchEngine::new(MatcherConfig {
        min_score: 5.0,
        ..MatcherConfig::default()
    });
    let qa = set(&[("What is the capital of France?", "Paris")]);

    let best = engine.pick_best_answer("capital", &qa).unwrap();
    assert_eq!(best.answer, "Paris");
}

#[test]
fn test_debug_format() {
    let debug = format!("{:?}", MatchEngine::default());
    assert!(debug.contains("MatchEngine"));
    assert!(debug.contains("26"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any raw top score under the threshold yields no match.
    #[test]
    fn prop_below_threshold_never_matches(
        hovered in "[a-z ?]{0,40}",
        questions in prop::collection::vec("[a-z ?]{0,30}", 0..5)
    ) {
        let engine = MatchEngine::default();
        let qa = QaSet::from(
            questions.iter().map(|q| QaPair::new(q.as_str(), "answer")).collect::<Vec<_>>(),
        );

        let candidate = engine.best_candidate(&hovered, &qa);
        let picked = engine.pick_best_answer(&hovered, &qa);

        match candidate {
            Some((_, score)) if score >= crate::config::DEFAULT_MIN_SCORE => {
                prop_assert!(picked.is_some());
            }
            _ => prop_assert!(picked.is_none()),
        }
    }

    #[test]
    fn prop_matching_is_deterministic(
        hovered in "[a-z ?]{6,60}",
        questions in prop::collection::vec("[a-z ?]{0,40}", 0..6)
    ) {
        let engine = MatchEngine::default();
        let qa = QaSet::from(
            questions.iter().map(|q| QaPair::new(q.as_str(), "answer")).collect::<Vec<_>>(),
        );

        let first = engine.pick_best_answer(&hovered, &qa).map(|p| p as *const QaPair);
        let second = engine.pick_best_answer(&hovered, &qa).map(|p| p as *const QaPair);
        prop_assert_eq!(first, second);
    }
}
