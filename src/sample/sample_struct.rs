use std::io::BufRead;
use std::ops::Index;

use crate::error::{BoostError, Result};
use crate::tools::checkers;


/// A batch of `n_sample` examples over `n_feature` numeric features,
/// each labeled by `-1` or `+1`.
///
/// Features are stored column by column since the stump search
/// scans one feature at a time.
/// The order of the examples is significant:
/// the `i`-th example corresponds to the `i`-th entry of
/// every weight vector built over this sample.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) features: Vec<Vec<f64>>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a sample from row-major examples and their labels.
    ///
    /// Returns `Err` if there is no example or feature,
    /// the rows are ragged,
    /// `target.len()` differs from the number of rows,
    /// a label is not in `{-1, +1}`,
    /// or a feature value is not finite.
    pub fn from_rows<R>(rows: &[R], target: Vec<f64>) -> Result<Self>
        where R: AsRef<[f64]>,
    {
        let n_sample = rows.len();
        let n_feature = rows.first()
            .map(|row| row.as_ref().len())
            .ok_or(BoostError::EmptySample)?;

        let mut features = vec![Vec::with_capacity(n_sample); n_feature];
        for row in rows {
            let row = row.as_ref();
            checkers::same_length("row length", n_feature, row.len())?;
            features.iter_mut()
                .zip(row)
                .for_each(|(column, &x)| { column.push(x); });
        }

        Self::from_columns(features, target)
    }


    /// Construct a sample from column-major features and their labels.
    /// `columns[j][i]` is the `j`-th feature of the `i`-th example.
    ///
    /// Returns `Err` under the same conditions as [`Sample::from_rows`].
    pub fn from_columns(columns: Vec<Vec<f64>>, target: Vec<f64>)
        -> Result<Self>
    {
        let n_feature = columns.len();
        let n_sample = columns.first()
            .map_or(target.len(), |column| column.len());

        checkers::non_empty(n_sample, n_feature)?;
        for column in columns.iter() {
            checkers::same_length("feature length", n_sample, column.len())?;
        }
        checkers::same_length("label count", n_sample, target.len())?;
        checkers::binary_labels(&target[..])?;
        checkers::finite_features(&columns[..])?;

        Ok(Self { features: columns, target, n_sample, n_feature })
    }


    /// Parse a sample from two delimited sources:
    /// `features` holds one example per line,
    /// `labels` holds the labels either one per line or
    /// as delimited values on a single line.
    ///
    /// Empty lines are skipped.
    /// If `has_header` is `true`, the first line of `features` is skipped.
    pub fn from_reader<F, L>(
        features: F,
        labels: L,
        delimiter: char,
        has_header: bool,
    ) -> Result<Self>
        where F: BufRead,
              L: BufRead,
    {
        let skip = usize::from(has_header);
        let rows = parse_lines(features, delimiter, skip)?;
        let target = parse_lines(labels, delimiter, 0)?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        Self::from_rows(&rows[..], target)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the labels.
    #[inline]
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns all feature columns.
    #[inline]
    pub fn features(&self) -> &[Vec<f64>] {
        &self.features[..]
    }


    /// Returns the `feature`-th value of the `row`-th example.
    #[inline]
    pub fn value_at(&self, row: usize, feature: usize) -> f64 {
        self.features[feature][row]
    }
}


impl Index<usize> for Sample {
    type Output = [f64];

    /// Returns the `j`-th feature column.
    #[inline]
    fn index(&self, j: usize) -> &Self::Output {
        &self.features[j][..]
    }
}


fn parse_lines<R: BufRead>(reader: R, delimiter: char, skip: usize)
    -> Result<Vec<Vec<f64>>>
{
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate().skip(skip) {
        let line = line?;
        let line = line.trim();
        if line.is_empty() { continue; }

        let row = line.split(delimiter)
            .map(|token| {
                let token = token.trim();
                token.parse::<f64>()
                    .map_err(|_| BoostError::Parse {
                        line: i + 1,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }
    Ok(rows)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_01() {
        let rows = vec![
            vec![0.0, 10.0],
            vec![1.0, 11.0],
            vec![2.0, 12.0],
        ];
        let sample = Sample::from_rows(&rows[..], vec![1.0, -1.0, 1.0])
            .unwrap();

        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(&sample[0], &[0.0, 1.0, 2.0]);
        assert_eq!(&sample[1], &[10.0, 11.0, 12.0]);
        assert_eq!(sample.value_at(2, 1), 12.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![0.0, 10.0], vec![1.0]];
        let result = Sample::from_rows(&rows[..], vec![1.0, -1.0]);
        assert!(
            matches!(result, Err(BoostError::ShapeMismatch { .. })),
            "expected a shape mismatch, got {result:?}."
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let result = Sample::from_rows(&rows[..], Vec::new());
        assert!(matches!(result, Err(BoostError::EmptySample)));
    }

    #[test]
    fn test_from_rows_label_length() {
        let rows = vec![vec![0.0], vec![1.0]];
        let result = Sample::from_rows(&rows[..], vec![1.0]);
        assert!(matches!(
            result,
            Err(BoostError::ShapeMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_from_rows_invalid_label() {
        let rows = vec![vec![0.0], vec![1.0]];
        let result = Sample::from_rows(&rows[..], vec![1.0, 0.0]);
        assert!(matches!(
            result,
            Err(BoostError::InvalidLabel { row: 1, .. })
        ));
    }

    #[test]
    fn test_from_rows_nan_feature() {
        let rows = vec![vec![0.0, 1.0], vec![1.0, f64::NAN]];
        let result = Sample::from_rows(&rows[..], vec![1.0, -1.0]);
        assert!(matches!(
            result,
            Err(BoostError::NonFiniteFeature { row: 1, feature: 1, .. })
        ));
    }

    #[test]
    fn test_from_reader_01() {
        let features = b"\
            0.5,1.0\n\
            -2.0,3.5\n\
            \n\
            4.0,0.0\n";
        let labels = b"1\n-1\n1\n";

        let sample = Sample::from_reader(&features[..], &labels[..], ',', false)
            .unwrap();
        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.target(), &[1.0, -1.0, 1.0]);
        assert_eq!(&sample[0], &[0.5, -2.0, 4.0]);
    }

    #[test]
    fn test_from_reader_single_line_labels() {
        let features = b"a,b\n0.5,1.0\n-2.0,3.5\n";
        let labels = b"1,-1\n";

        let sample = Sample::from_reader(&features[..], &labels[..], ',', true)
            .unwrap();
        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample.target(), &[1.0, -1.0]);
    }

    #[test]
    fn test_from_reader_parse_error() {
        let features = b"0.5,1.0\n-2.0,abc\n";
        let labels = b"1\n-1\n";

        let result = Sample::from_reader(&features[..], &labels[..], ',', false);
        match result {
            Err(BoostError::Parse { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            },
            other => panic!("expected a parse error, got {other:?}."),
        }
    }
}
