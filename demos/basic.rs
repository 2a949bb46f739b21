use lsa_vectorizer::{Body, TopicProjector, Vectorizer, VectorizerConfig};

fn main() {
    // build body
    let body = Body::from_texts([
        "the quick brown fox",
        "the slow brown dog",
        "the quick red dog",
        "the lazy yellow fox",
    ]);

    // document-term matrix
    let dtm = Vectorizer::new(VectorizerConfig::default())
        .vectorize(&body)
        .expect("toy body vectorizes");
    println!("dictionary: {:?}", dtm.dictionary().terms().collect::<Vec<_>>());
    println!("{}", dtm.matrix());

    // two topics
    let model = TopicProjector::new(2).project(&dtm).expect("k = 2 is valid");
    print!("{}", model.topic_table(&body).expect("same body"));
    print!("{}", model.encoding_table());

    for topic in 0..model.n_topics() {
        println!("{:#?}", model.ranked_terms(topic).expect("topic in range"));
    }
}
