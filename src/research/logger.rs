use colored::Colorize;

use crate::{
    Booster,
    WeakLearner,
    booster::RoundMetrics,
    error::Result,
};
use super::{MetricsSink, Research};

use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Struct `Logger` runs a boosting algorithm round by round,
/// measures the running time of each round,
/// prints the progress to the standard output, and
/// hands the [`RoundMetrics`] of every round to a [`MetricsSink`].
///
/// # Example
/// ```no_run
/// use stumpboost::prelude::*;
/// use stumpboost::research::{Logger, CsvSink};
///
/// let train = SampleReader::new()
///     .features_file("data/ada_x_train.csv")
///     .labels_file("data/ada_y_train.csv")
///     .read()
///     .unwrap();
/// let test = SampleReader::new()
///     .features_file("data/ada_x_test.csv")
///     .labels_file("data/ada_y_test.csv")
///     .read()
///     .unwrap();
///
/// let booster = AdaBoost::init(&train, &test).rounds(500);
/// let weak_learner = DStump::init(&train);
/// let sink = CsvSink::create("adaboost.csv").unwrap();
///
/// let mut logger = Logger::new(booster, weak_learner, sink)
///     .print_every(50)
///     .time_limit_as_secs(60);
/// let f = logger.run().unwrap();
/// println!("{} stumps", f.len());
/// ```
pub struct Logger<B, W, S> {
    booster: B,
    weak_learner: W,
    sink: S,
    time_limit: u128,
    round: usize,
}


impl<B, W, S> Logger<B, W, S> {
    /// Create a new instance of `Logger`.
    pub fn new(booster: B, weak_learner: W, sink: S) -> Self {
        Self {
            booster,
            weak_learner,
            sink,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the cumulative running time exceeds this limit,
    /// the run stops after the current round.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000);
        self
    }


    /// Set the time limit for boosting algorithm as minutes.
    #[inline(always)]
    pub fn time_limit_as_mins(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(60_000);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round.max(1);
        self
    }


    /// Returns a reference to the booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }


    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }


    /// Decompose the logger into the booster and the sink.
    pub fn into_parts(self) -> (B, S) {
        (self.booster, self.sink)
    }
}


impl<H, B, W, S, O> Logger<B, W, S>
    where B: Booster<H, Output = O> + Research,
          W: WeakLearner<Hypothesis = H>,
          S: MetricsSink,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "".bold().blue(),
            "WEIGHTED".bold().purple(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "ALPHA".bold().blue(),
            "ERROR".bold().purple(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        if let Some(info) = self.booster.info() {
            println!("{}", info_lines(info));
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        if let Some(info) = self.weak_learner.info() {
            println!("{}", info_lines(info));
        }

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// This method plays the same game as [`Booster::run`],
    /// but measures the running time per round
    /// and records the metrics of each completed round to the sink.
    ///
    /// The time limit is checked between rounds,
    /// so every recorded round is complete.
    /// [`MetricsSink::finish`] is called even if the run fails;
    /// the error of the run takes precedence over that of `finish`.
    pub fn run(&mut self) -> Result<O> {
        let played = self.play();
        let finished = self.sink.finish();
        played?;
        finished?;

        Ok(self.booster.postprocess())
    }


    /// Plays the rounds, recording each one to the sink.
    fn play(&mut self) -> Result<()> {
        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess()?;
        let verbose = self.round != usize::MAX;
        if verbose { self.print_stats(); }

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Boosting step
        if verbose { self.print_log_header(); }
        for iteration in 0.. {
            let now = Instant::now();
            let flow = self.booster.boost(&self.weak_learner, iteration)?;
            time_acc += now.elapsed().as_millis();

            if flow.is_break() {
                let last = self.booster.current_metrics();
                if let Some(metrics) = last.filter(|_| verbose) {
                    println!(
                        "{} {}\n",
                        "[FIN]".bold().bright_green(),
                        line(metrics, time_acc),
                    );
                }
                break;
            }

            let Some(&metrics) = self.booster.current_metrics() else {
                continue;
            };
            self.sink.record(&metrics, time_acc)?;

            if time_acc > self.time_limit {
                println!("{} {}\n", "[TLE]".bold().bright_red(), line(&metrics, time_acc));
                break;
            }

            if verbose && (iteration + 1) % self.round == 0 {
                println!("{} {}", "[LOG]".bold().magenta(), line(&metrics, time_acc));
            }
        }
        Ok(())
    }
}


fn info_lines(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


fn line(metrics: &RoundMetrics, time_acc: u128) -> String {
    format!(
        "{}\t\t{}\t{}\t{}\t{}\t{}",
        format!("{:>WIDTH$}", metrics.round + 1).red(),
        format!("{:>WIDTH$.PREC_WIDTH$}", metrics.alpha).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", metrics.weighted_error).purple(),
        format!("{:>WIDTH$.PREC_WIDTH$}", metrics.train_error).green(),
        format!("{:>WIDTH$.PREC_WIDTH$}", metrics.test_error).yellow(),
        time_format(time_acc).bold().cyan(),
    )
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
