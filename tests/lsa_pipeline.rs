// End-to-end checks of vectorization and topic projection through the public API.

use lsa_vectorizer::{
    Analysis, Body, IdfSmoothing, LsaError, StopWords, TopicProjector, Vectorizer, VectorizerConfig, Weighting,
};

const POEMS: &str = include_str!("../demos/poems.csv");

fn toy() -> Body {
    Body::from_texts([
        "the quick brown fox",
        "the slow brown dog",
        "the quick red dog",
        "the lazy yellow fox",
    ])
}

fn poems() -> Body {
    Body::from_csv_reader(POEMS.as_bytes(), "sentence", Some("title")).unwrap()
}

// ============================================================
// Vectorizer
// ============================================================

#[test]
fn toy_dictionary_and_first_row() {
    let dtm = Vectorizer::default().vectorize(&toy()).unwrap();
    assert_eq!(
        dtm.dictionary().terms().collect::<Vec<_>>(),
        vec!["brown", "dog", "fox", "lazy", "quick", "red", "slow", "the", "yellow"]
    );
    assert_eq!(dtm.row(0).unwrap().to_vec(), vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn shape_and_non_negativity_for_every_weighting() {
    let body = poems();
    let configs = [
        VectorizerConfig::default(),
        VectorizerConfig::default().with_weighting(Weighting::TfIdf),
        VectorizerConfig::default()
            .with_weighting(Weighting::TfIdf)
            .with_idf(IdfSmoothing::Smooth)
            .with_normalize(true),
    ];
    for config in configs {
        let dtm = Vectorizer::new(config).vectorize(&body).unwrap();
        assert_eq!(dtm.shape(), (body.len(), dtm.dictionary().len()));
        assert!(dtm.matrix().iter().all(|&v| v >= 0.0));
    }
}

#[test]
fn count_entries_are_integral() {
    let dtm = Vectorizer::default().vectorize(&poems()).unwrap();
    assert!(dtm.matrix().iter().all(|v| v.fract() == 0.0));
    assert_eq!(dtm.get(9, "sitting"), Some(2.0));
}

#[test]
fn dictionary_is_deterministic() {
    let config = VectorizerConfig::default().with_stop_words(StopWords::English);
    let a = Vectorizer::new(config.clone()).vectorize(&poems()).unwrap();
    let b = Vectorizer::new(config).vectorize(&poems()).unwrap();
    assert_eq!(a.dictionary(), b.dictionary());
    assert_eq!(a.matrix(), b.matrix());
}

#[test]
fn english_stop_words_and_min_df() {
    let config = VectorizerConfig::default()
        .with_stop_words(StopWords::English)
        .with_min_document_frequency(2);
    let dtm = Vectorizer::new(config).vectorize(&poems()).unwrap();
    let dict = dtm.dictionary();
    assert!(!dict.contains("the"));
    assert!(dict.contains("cannon"));
    assert!(dict.contains("raven"));
    assert!(!dict.contains("dreary"));
    assert!(dict.iter().all(|(_, df)| df >= 2));
}

#[test]
fn all_stop_words_is_an_empty_dictionary() {
    let config = VectorizerConfig::default().with_stop_words(StopWords::custom(["the"]));
    let err = Vectorizer::new(config)
        .vectorize(&Body::from_texts(["the", "the", "the"]))
        .unwrap_err();
    assert!(matches!(err, LsaError::EmptyDictionary));
}

#[test]
fn empty_body_is_rejected() {
    assert!(matches!(Vectorizer::default().vectorize(&Body::new()), Err(LsaError::EmptyBody)));
}

// ============================================================
// Topic projector
// ============================================================

#[test]
fn projector_shapes() {
    let dtm = Vectorizer::default().vectorize(&toy()).unwrap();
    let model = TopicProjector::new(2).project(&dtm).unwrap();
    assert_eq!(model.topic_encoded().dim(), (4, 2));
    assert_eq!(model.encoding().dim(), (9, 2));
}

#[test]
fn rank_equal_to_document_count_is_invalid() {
    let dtm = Vectorizer::default().vectorize(&toy()).unwrap();
    let err = TopicProjector::new(4).project(&dtm).unwrap_err();
    assert!(matches!(err, LsaError::InvalidRank { k: 4, max: 4 }));
}

#[test]
fn reconstruction_error_decreases_with_rank() {
    let dtm = Vectorizer::default().vectorize(&toy()).unwrap();
    let total: f64 = dtm.matrix().iter().map(|x| x * x).sum();
    let errors: Vec<f64> = (1..4)
        .map(|k| {
            let model = TopicProjector::new(k).project(&dtm).unwrap();
            let kept: f64 = model.singular_values().iter().map(|s| s * s).sum();
            let err = model.reconstruction_error(&dtm).unwrap();
            assert!((err * err - (total - kept)).abs() < 1e-8);
            err
        })
        .collect();
    assert!(errors.windows(2).all(|w| w[1] <= w[0] + 1e-12));
}

#[test]
fn topic_encoded_equals_projection_onto_encoding() {
    let dtm = Vectorizer::default().vectorize(&toy()).unwrap();
    let model = TopicProjector::new(2).project(&dtm).unwrap();
    let projected = dtm.matrix().dot(model.encoding());
    for (a, b) in projected.iter().zip(model.topic_encoded().iter()) {
        assert!((a - b).abs() < 1e-12);
    }
    // column norms of U_k Σ_k are the singular values
    for (j, s) in model.singular_values().iter().enumerate() {
        let n = model.topic_encoded().column(j).iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((n - s).abs() < 1e-9);
    }
}

#[test]
fn sign_convention_largest_loading_positive() {
    let config = VectorizerConfig::default().with_weighting(Weighting::TfIdf);
    let dtm = Vectorizer::new(config).vectorize(&poems()).unwrap();
    let model = TopicProjector::new(3).project(&dtm).unwrap();
    for column in model.encoding().columns() {
        let max = column.iter().copied().fold(0.0f64, |m, x| m.max(x.abs()));
        let first = column.iter().find(|x| x.abs() == max).unwrap();
        assert!(*first > 0.0);
    }
    let ratios = model.explained_variance_ratio();
    assert!(ratios.iter().all(|&r| r > 0.0 && r <= 1.0));
    assert!(ratios.iter().sum::<f64>() <= 1.0 + 1e-12);
}

// ============================================================
// Analysis
// ============================================================

#[test]
fn poems_group_by_title() {
    let config = VectorizerConfig::default().with_stop_words(StopWords::English);
    let analysis = Analysis::run(&poems(), &config, 2).unwrap();
    let groups = analysis.table.group_by_label();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label.as_deref(), Some("The Raven"));
    assert_eq!(groups[0].points.len(), 10);
    assert_eq!(groups[1].label.as_deref(), Some("The Charge of the Light Brigade"));
    assert!(groups.iter().flat_map(|g| &g.points).all(|p| p.len() == 2));
}

#[test]
fn analysis_serializes_to_json() {
    let analysis = Analysis::run(&toy(), &VectorizerConfig::default(), 2).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["table"]["columns"][1], "topic_2");
    assert_eq!(json["table"]["rows"].as_array().unwrap().len(), 4);
}
