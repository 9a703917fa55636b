use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::constants::DEFAULT_DELIMITER;
use crate::error::{BoostError, Result};
use super::sample_struct::Sample;


/// Builder that reads a [`Sample`] from a pair of delimited files:
/// one holding the feature matrix (one example per line) and
/// one holding the labels in `{-1, +1}`.
///
/// ```no_run
/// use stumpboost::SampleReader;
/// let sample = SampleReader::new()
///     .features_file("data/ada_x_train.csv")
///     .labels_file("data/ada_y_train.csv")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct SampleReader<P> {
    features: Option<P>,
    labels: Option<P>,
    delimiter: char,
    has_header: bool,
}


impl<P> SampleReader<P> {
    /// Construct a reader with no files set,
    /// delimiter `,` and no header row.
    pub fn new() -> Self {
        Self {
            features: None,
            labels: None,
            delimiter: DEFAULT_DELIMITER,
            has_header: false,
        }
    }


    /// Set the delimiter. Default is `,`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }


    /// Set the flag whether the feature file has a header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file holding the feature matrix.
    pub fn features_file(mut self, file: P) -> Self {
        self.features = Some(file);
        self
    }


    /// Set the file holding the labels.
    pub fn labels_file(mut self, file: P) -> Self {
        self.labels = Some(file);
        self
    }


    /// Reads both files and returns the validated [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let features = self.features.ok_or(BoostError::MissingFile("feature"))?;
        let labels = self.labels.ok_or(BoostError::MissingFile("label"))?;

        let features = BufReader::new(File::open(features)?);
        let labels = BufReader::new(File::open(labels)?);

        Sample::from_reader(features, labels, self.delimiter, self.has_header)
    }
}
