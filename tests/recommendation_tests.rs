use std::collections::HashSet;

use game_advisor::models::Genre;
use game_advisor::services::{PreferenceExtractor, Recommender};
use game_advisor::Catalog;

fn setup() -> (Catalog, PreferenceExtractor) {
    let catalog = Catalog::with_default_library().unwrap();
    (catalog, PreferenceExtractor::new())
}

#[test]
fn test_text_to_recommendations_flow() {
    let (catalog, extractor) = setup();
    let recommender = Recommender::new(&catalog);

    let parsed = extractor.extract("I am 13 years old, I like: RPG, indie");
    assert!(parsed.validate().is_valid());

    let age = parsed.age.unwrap();
    let result = recommender.recommend(age, &parsed.genres);

    assert!(!result.recommendations.is_empty());
    assert_eq!(result.total_found, result.recommendations.len());
    for rec in &result.recommendations {
        assert!(rec.age_rating <= age);
        assert!((0.0..=1.0).contains(&rec.relevance));
    }

    // The 13-year-old RPG fan should see the one age-eligible RPG
    assert!(result
        .recommendations
        .iter()
        .any(|rec| rec.name == "Final Fantasy XV"));
}

#[test]
fn test_all_canonical_phrasings_reach_recommendations() {
    let (catalog, extractor) = setup();
    let recommender = Recommender::new(&catalog);

    let inputs = [
        "I am 13 years old, I like: RPG, indie",
        "Age: 25, I love Action and Strategy",
        "I'm 18, interests: Horror, Adventure",
        "Age 16, I like Racing and Sports",
    ];

    for input in inputs {
        let parsed = extractor.extract(input);
        let report = parsed.validate();
        assert!(report.is_valid(), "should parse: {}", input);

        let result = recommender.recommend(parsed.age.unwrap(), &parsed.genres);
        assert!(
            !result.recommendations.is_empty(),
            "no recommendations for: {}",
            input
        );
    }
}

#[test]
fn test_invalid_inputs_never_reach_the_recommender() {
    let (_, extractor) = setup();

    for input in ["Hello, how are you?", "", "Age: old"] {
        let report = extractor.extract(input).validate();
        assert!(!report.is_valid(), "should be invalid: {:?}", input);
    }
}

#[test]
fn test_alternatives_avoid_excluded_genres() {
    let (catalog, _) = setup();
    let recommender = Recommender::new(&catalog);

    let excluded: HashSet<Genre> = HashSet::from([Genre::Rpg]);
    let result = recommender.alternatives(18, &excluded);

    assert!(!result.recommendations.is_empty());
    for rec in &result.recommendations {
        assert_ne!(rec.genre, Some(Genre::Rpg), "{} is an RPG", rec.name);
    }
}

#[test]
fn test_fallback_produces_results_for_hopeless_preferences() {
    let (catalog, extractor) = setup();
    let recommender = Recommender::new(&catalog);

    // Every Horror game is rated 17+; a ten-year-old gets fallbacks instead
    let parsed = extractor.extract("I am 10 years old, I like Horror");
    assert!(parsed.validate().is_valid());

    let result = recommender.recommend(parsed.age.unwrap(), &parsed.genres);
    assert!(!result.recommendations.is_empty());
    for rec in &result.recommendations {
        assert!(rec.age_rating <= 10);
    }
}

#[test]
fn test_repeat_requests_are_identical() {
    let (catalog, extractor) = setup();
    let recommender = Recommender::new(&catalog);

    let parsed = extractor.extract("Age: 25, I love Action and Strategy");
    let age = parsed.age.unwrap();

    let first = recommender.recommend(age, &parsed.genres);
    let second = recommender.recommend(age, &parsed.genres);
    assert_eq!(first, second);
}

#[test]
fn test_recommendation_set_serializes_with_expected_shape() {
    let (catalog, _) = setup();
    let recommender = Recommender::new(&catalog);

    let genres: HashSet<Genre> = HashSet::from([Genre::Puzzle]);
    let result = recommender.recommend(10, &genres);

    let value = serde_json::to_value(&result).unwrap();
    assert!(value["recommendations"].is_array());
    assert!(value["rationale"].is_string());
    assert!(value["total_found"].is_u64());
    assert!(value["age_eligible_count"].is_u64());
    assert!(value["genre_eligible_count"].is_u64());

    let first = &value["recommendations"][0];
    assert_eq!(first["genre"], "puzzle");
    assert!(first["relevance"].is_f64());
}
