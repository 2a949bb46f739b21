use lsa_vectorizer::{Analysis, Body, StopWords, VectorizerConfig, Weighting};

const POEMS: &str = include_str!("poems.csv");

fn main() {
    let body = Body::from_csv_reader(POEMS.as_bytes(), "sentence", Some("title")).expect("bundled csv");

    for weighting in [Weighting::Count, Weighting::TfIdf] {
        let config = VectorizerConfig::default()
            .with_stop_words(StopWords::English)
            .with_weighting(weighting);
        let analysis = Analysis::run(&body, &config, 2).expect("two topics");

        println!("== {:?}", weighting);
        for group in analysis.table.group_by_label() {
            println!("{}", group.label.as_deref().unwrap_or("-"));
            for p in &group.points {
                println!("  ({:>9.5}, {:>9.5})", p[0], p[1]);
            }
        }
        for topic in 0..2 {
            print!("{}", analysis.model.top_terms(topic, 5).expect("topic in range"));
        }
    }
}
