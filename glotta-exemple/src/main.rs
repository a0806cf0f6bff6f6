use glotta_core::model::{Alphabet, Language, NgramOrder, TestDataModels, Trainer, TrainingInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Training configuration, every order from 1 to 5 by default
    let mut input = TrainingInput::new();

    // Highest n-gram order to build (1..=5)
    input.set_max_order(5)?;

    // Worker threads, languages are trained in parallel
    input.set_threads(4)?;

    // Any language can use a custom alphabet instead of its script's letters
    input.set_alphabet(Language::English, Alphabet::new(r"\p{L}&&\p{Latin}")?);

    // Invalid values are rejected
    match input.set_max_order(6) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{}", e),
    }

    // Train every '<iso code>.txt' corpus of the "data" directory.
    // Models are written next to each corpus as '<iso code>.bin' and
    // loaded from there on the next run.
    let trained = Trainer::train_directory("./data", &input)?;

    for models in &trained {
        println!("{}:", models.language());
        for model in models.iter() {
            println!(
                "  order {}: {} distinct n-grams",
                model.order(),
                model.absolute_frequencies().len()
            );
        }
    }

    // Build the test models of a text to classify
    let text = "These sentences are intended for testing purposes.";
    let test_models = TestDataModels::from_text(text, NgramOrder::try_from(5)?);
    for model in test_models.iter() {
        println!("Order {}: {} n-grams", model.order(), model.len());
        if let Some(chain) = model.ngrams().first() {
            let chain: Vec<&str> = chain.iter().map(|ngram| ngram.value()).collect();
            println!("  first back-off chain: {:?}", chain);
        }
    }

    Ok(())
}
