use serde::Serialize;

use crate::booster::RoundMetrics;
use crate::error::Result;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;


const CSV_HEADER: &str = "Round,Alpha,WeightedError,TrainError,TestError,Time\n";


/// A destination of [`RoundMetrics`].
/// [`Logger`](super::Logger) calls `record` once per completed round,
/// in round order, and `finish` once at the end of the run.
pub trait MetricsSink {
    /// Records the metrics of a round.
    /// `time_millis` is the cumulative running time up to this round.
    fn record(&mut self, metrics: &RoundMetrics, time_millis: u128)
        -> Result<()>;

    /// Flushes buffered output.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}


impl MetricsSink for Vec<RoundMetrics> {
    fn record(&mut self, metrics: &RoundMetrics, _time_millis: u128)
        -> Result<()>
    {
        self.push(*metrics);
        Ok(())
    }
}


/// Writes one CSV line per round.
/// The header is
/// `Round,Alpha,WeightedError,TrainError,TestError,Time`,
/// where `Time` is in milliseconds.
pub struct CsvSink<W: Write> {
    writer: W,
}


impl<W: Write> CsvSink<W> {
    /// Construct a new `CsvSink` and write the header to `writer`.
    pub fn new(mut writer: W) -> Result<Self> {
        writer.write_all(CSV_HEADER.as_bytes())?;
        Ok(Self { writer })
    }


    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}


impl CsvSink<BufWriter<File>> {
    /// Creates the file at `path` and writes the header to it.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}


impl<W: Write> MetricsSink for CsvSink<W> {
    fn record(&mut self, metrics: &RoundMetrics, time_millis: u128)
        -> Result<()>
    {
        let RoundMetrics {
            round, alpha, weighted_error, train_error, test_error,
        } = metrics;
        writeln!(
            self.writer,
            "{round},{alpha},{weighted_error},{train_error},{test_error},{time_millis}"
        )?;
        Ok(())
    }


    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}


/// One line of [`JsonLinesSink`].
#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    metrics: &'a RoundMetrics,
    time_millis: u64,
}


/// Writes one JSON object per line and round.
/// Each object has the fields of [`RoundMetrics`] and `time_millis`.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}


impl<W: Write> JsonLinesSink<W> {
    /// Construct a new `JsonLinesSink`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }


    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}


impl JsonLinesSink<BufWriter<File>> {
    /// Creates the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}


impl<W: Write> MetricsSink for JsonLinesSink<W> {
    fn record(&mut self, metrics: &RoundMetrics, time_millis: u128)
        -> Result<()>
    {
        let time_millis = u64::try_from(time_millis).unwrap_or(u64::MAX);
        let record = JsonRecord { metrics, time_millis };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }


    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
