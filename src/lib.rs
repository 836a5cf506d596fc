//! Replace `| sort | uniq -c | sort -rn` at the end of a pipeline with
//! `| distribution` and get a bar chart of the most frequent lines or tokens
//! instead. Memory stays bounded: the tally is pruned to its best keys every
//! so often, so counts are approximate for keys that were ever pruned.

pub mod cli;
pub mod core;
pub mod render;

use std::{
    io::{BufRead, Write},
    time::{Duration, Instant},
};

pub use crate::core::{
    classify::{Classifier, TallyMode, Totals},
    color::{AnsiCode, Palette},
    config::{Config, ConfigBuilder, InputMode, NumericMode, Orientation},
    error::{ColorError, ConfigError, GraphError, MalformedLine},
    series::NumericSeries,
    tally::TallyStore,
};

pub use render::{Bar, BarRenderer, GlyphSet, Report, ReportRow, Scale, Summary, write_series};

use crate::{
    core::{constants::STAT_INTERVAL_SECS, input::for_each_line},
    render::report::group_thousands,
};

/// Read `input` to the end and write the report.
///
/// Rows go to `out`. The header, malformed-line notices, progress and the
/// verbose summary go to `diag`.
pub fn run<R, W, E>(cfg: &Config, input: R, out: &mut W, diag: &mut E) -> Result<Summary, GraphError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let start = Instant::now();
    let mode = match TallyMode::try_from(cfg.mode) {
        Ok(mode) => mode,
        Err(numeric) => return run_series(cfg, numeric, input, out, start),
    };

    let mut store = TallyStore::new(cfg.max_keys, cfg.prune_interval);
    let mut classifier = Classifier::new(cfg, mode);
    let stat_every = Duration::from_secs(STAT_INTERVAL_SECS);
    let mut next_stat = start + stat_every;

    for_each_line(input, |line| {
        if let Err(malformed) = classifier.feed(line, &mut store) {
            writeln!(diag, "{malformed}")?;
        }

        if cfg.verbose && Instant::now() > next_stat {
            write!(
                diag,
                "tokens/lines examined: {} ; hash prunes: {}...\r",
                group_thousands(classifier.totals().examined),
                group_thousands(store.prunes()),
            )?;
            diag.flush()?;
            next_stat = Instant::now() + stat_every;
        }
        Ok(())
    })?;

    let summary = Summary {
        totals: classifier.totals(),
        keys: store.len(),
        prunes: store.prunes(),
        elapsed: start.elapsed(),
    };
    if cfg.verbose {
        summary.write_to(diag)?;
    }

    Report::assemble(&store, &summary.totals, cfg).write_to(cfg, out, diag)?;
    out.flush()?;
    Ok(summary)
}

fn run_series<R: BufRead, W: Write>(
    cfg: &Config,
    mode: NumericMode,
    input: R,
    out: &mut W,
    start: Instant,
) -> Result<Summary, GraphError> {
    let mut series = NumericSeries::new(mode);
    for_each_line(input, |line| {
        series.push_line(line);
        Ok(())
    })?;
    write_series(series.values(), cfg, out)?;
    out.flush()?;
    Ok(Summary {
        totals: Totals {
            examined: series.lines(),
            matched: series.lines(),
            skipped: 0,
        },
        keys: 0,
        prunes: 0,
        elapsed: start.elapsed(),
    })
}
