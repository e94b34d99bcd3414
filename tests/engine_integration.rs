// End-to-end checks of the three entry points on fixture lexicons
// WHY: The public API must hold the documented properties, not just the unit-level pieces

use std::collections::BTreeSet;

use posgrammar::edit_distance::distance;
use posgrammar::{
    build_dictionary, check_sentence_rules, suggest, validate_words, Algorithm, EngineError, Pattern,
    SentenceRuleChecker,
};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{fixtures, lexicon};

#[test]
fn test_scenario_noun_and_verb_present() {
    let dict = build_dictionary([("cat", "NN"), ("sat", "VB")]);
    for algorithm in ["KMP", "BoyerMoore"] {
        let errors = check_sentence_rules("The cat sat.", &dict, algorithm).unwrap();
        assert!(errors.is_empty(), "{algorithm}: {errors:?}");
    }
}

#[test]
fn test_scenario_missing_verb() {
    let dict = build_dictionary([("cat", "NN"), ("sat", "VB")]);
    let errors = check_sentence_rules("The cat.", &dict, "KMP").unwrap();
    assert_eq!(errors, vec!["Sentence 'The cat.' lacks a verb."]);
}

#[test]
fn test_scenario_lowercase_start() {
    let dict = build_dictionary([("cat", "NN"), ("sat", "VB")]);
    let errors = check_sentence_rules("the cat sat.", &dict, "BoyerMoore").unwrap();
    assert_eq!(errors, vec!["Capitalization error at: the cat sat."]);
}

#[test]
fn test_scenario_period_followed_by_letter() {
    let dict = build_dictionary([("cat", "NN"), ("sat", "VB")]);
    let errors = check_sentence_rules("The cat sat.Really", &dict, "KMP").unwrap();
    assert!(errors.contains(&"Punctuation spacing error at: '.R' in 'The cat sat.Really'".to_string()));
}

#[test]
fn test_scenario_tied_suggestions() {
    let dict = build_dictionary([("cat", "NN"), ("bat", "NN"), ("hat", "NN")]);
    let result = suggest("kat", &dict);
    let expected: BTreeSet<String> = ["cat", "bat", "hat"].iter().map(|w| w.to_string()).collect();
    assert_eq!(result.candidates, expected);
    assert_eq!(result.min_distance, Some(1));
}

#[test]
fn test_abbreviation_sentence_is_not_split() {
    let checker = SentenceRuleChecker::with_default_rules(Algorithm::Kmp).unwrap();
    let sentences = checker.split("Dr. Smith arrived.");
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text, "Dr. Smith arrived.");
}

#[test]
fn test_clean_fixture_document() {
    let dict = lexicon();
    let words = validate_words(fixtures::CLEAN_TEXT, &dict).unwrap();
    assert!(words.is_clean(), "unexpected unknown words: {:?}", words.unknown);
    for algorithm in Algorithm::ALL {
        let errors = check_sentence_rules(fixtures::CLEAN_TEXT, &dict, algorithm.as_str()).unwrap();
        assert!(errors.is_empty(), "{algorithm}: {errors:?}");
    }
}

#[test]
fn test_messy_fixture_document() {
    let dict = lexicon();

    let words = validate_words(fixtures::MESSY_TEXT, &dict).unwrap();
    assert_eq!(words.unknown, vec!["kat", "Then", "hats"]);
    let kat: Vec<&str> = words.suggestions["kat"].candidates.iter().map(String::as_str).collect();
    assert_eq!(kat, vec!["bat", "cat", "hat", "mat", "sat"]);
    assert!(words.suggestions["Then"].candidates.contains("the"));
    assert!(words.suggestions["hats"].candidates.contains("hat"));

    for algorithm in Algorithm::ALL {
        let errors = check_sentence_rules(fixtures::MESSY_TEXT, &dict, algorithm.as_str()).unwrap();
        assert_eq!(errors, fixtures::MESSY_EXPECTED, "{algorithm}");
    }
}

#[test]
fn test_unknown_list_never_holds_dictionary_or_numeric_tokens() {
    let dict = lexicon();
    let document = "THE Cat 123 SAT 0042 on Mat 7 unknownword";
    let report = validate_words(document, &dict).unwrap();
    assert_eq!(report.unknown, vec!["unknownword"]);
    for word in &report.unknown {
        assert!(!dict.contains(word));
        assert!(!word.chars().all(char::is_numeric));
    }
}

#[test]
fn test_suggestions_hold_exactly_the_minimum_distance_words() {
    let dict = lexicon();
    for query in ["kat", "rnu", "smyth", "zzzz", "arived"] {
        let result = suggest(query, &dict);
        let min = result.min_distance.expect("lexicon is not empty");
        for word in dict.all_words() {
            let d = distance(query, word);
            assert!(d >= min, "{word} closer than reported minimum for {query}");
            assert_eq!(result.candidates.contains(word), d == min, "{word} / {query}");
        }
    }
}

#[test]
fn test_algorithm_equivalence_on_token_sequences() {
    let haystacks: Vec<Vec<&str>> = vec![
        vec![],
        vec!["the"],
        vec!["the", "cat", "the", "cat", "sat"],
        vec!["a", "a", "b", "a", "a", "a", "b"],
        "to be or not to be that is the question".split(' ').collect(),
    ];
    let needles: Vec<Vec<&str>> = vec![
        vec![],
        vec!["cat"],
        vec!["the", "cat", "sat"],
        vec!["a", "a", "b"],
        vec!["a", "b", "a"],
        vec!["to", "be"],
        vec!["be", "that"],
        vec!["question", "mark"],
    ];
    for haystack in &haystacks {
        for needle in &needles {
            let kmp = Pattern::compile(Algorithm::Kmp, needle).find_in(haystack);
            let bm = Pattern::compile(Algorithm::BoyerMoore, needle).find_in(haystack);
            assert_eq!(kmp, bm, "haystack={haystack:?} needle={needle:?}");
        }
    }
}

#[test]
fn test_edit_distance_properties() {
    let words = ["", "a", "cat", "cart", "act", "tac", "kitten", "sitting", "résumé", "resume"];
    for a in words {
        assert_eq!(distance(a, a), 0);
        assert_eq!(distance("", a), a.chars().count());
        for b in words {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }
}

#[test]
fn test_invalid_algorithm_fails_fast() {
    let dict = lexicon();
    let err = check_sentence_rules("The cat sat.", &dict, "Aho-Corasick").unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedAlgorithm(ref s) if s == "Aho-Corasick"));
    assert!(err.to_string().contains("Aho-Corasick"));
}

#[test]
fn test_empty_inputs_produce_empty_results() {
    let empty = build_dictionary(Vec::<(String, String)>::new());
    assert!(validate_words("", &empty).unwrap().is_clean());
    assert!(check_sentence_rules("", &empty, "KMP").unwrap().is_empty());
    assert!(suggest("word", &empty).is_empty());
}

#[test]
fn test_dictionary_shared_across_threads() {
    let dict = std::sync::Arc::new(lexicon());
    let handles: Vec<_> = [fixtures::CLEAN_TEXT, fixtures::MESSY_TEXT]
        .into_iter()
        .map(|doc| {
            let dict = std::sync::Arc::clone(&dict);
            std::thread::spawn(move || check_sentence_rules(doc, &dict, "BoyerMoore").unwrap().len())
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![0, fixtures::MESSY_EXPECTED.len()]);
}
