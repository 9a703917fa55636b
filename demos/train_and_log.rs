//! Trains AdaBoost on `<dir>/ada_x_train.csv` and `<dir>/ada_y_train.csv`,
//! evaluates on the `test` counterparts, and writes the per-round
//! metrics to a CSV file.
//!
//! ```sh
//! cargo run --example train_and_log -- data adaboost.csv 500
//! ```
use stumpboost::prelude::*;
use stumpboost::research::{CsvSink, Logger};

use std::env;
use std::error::Error;
use std::path::Path;


fn load(dir: &Path, suffix: &str) -> Result<Sample, BoostError> {
    SampleReader::new()
        .features_file(dir.join(format!("ada_x_{suffix}")))
        .labels_file(dir.join(format!("ada_y_{suffix}")))
        .read()
}


fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let dir = args.next().unwrap_or_else(|| "data".into());
    let output = args.next().unwrap_or_else(|| "adaboost.csv".into());
    let rounds = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => AdaBoostConfig::default().rounds,
    };

    let dir = Path::new(&dir);
    let train = load(dir, "train.csv")?;
    let test = load(dir, "test.csv")?;

    let booster = AdaBoost::init(&train, &test)
        .rounds(rounds);
    let weak_learner = DStump::init(&train);
    let sink = CsvSink::create(&output)?;

    let mut logger = Logger::new(booster, weak_learner, sink)
        .print_every(10);
    let f = logger.run()?;

    println!("Final training error: {}", f.check(&train));
    println!("Final test error:     {}", f.check(&test));
    println!("Metrics written to {output}");
    Ok(())
}
