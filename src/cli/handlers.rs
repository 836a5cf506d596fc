use std::io::{self, BufReader, BufWriter};

use log::debug;

use crate::{
    core::{
        bounds::SizePreset,
        color::Palette,
        config::{Config, InputMode},
        constants::{DEFAULT_HEIGHT, DEFAULT_MAX_KEYS, DEFAULT_PRUNE_INTERVAL, DEFAULT_WIDTH},
        error::GraphError,
    },
    run,
};

use super::parse::Cli;

/// Stdin is read in large chunks; a pipeline feeding us is usually fast.
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Turn parsed arguments into a fully resolved `Config`.
pub fn resolve(a: &Cli) -> Result<Config, GraphError> {
    let (mut width, mut height) = (DEFAULT_WIDTH, DEFAULT_HEIGHT);
    if let Some(s) = &a.size {
        (width, height) = s.parse::<SizePreset>()?.dims(a.verbose);
    }
    width = a.width.unwrap_or(width);
    height = a.height.unwrap_or(height);

    let mode = match (a.graph, a.numonly) {
        (Some(o), _) => InputMode::PreTallied(o),
        (None, Some(n)) => InputMode::Numeric(n),
        (None, None) => InputMode::Tokens,
    };

    let palette = match (&a.palette, a.color) {
        (Some(p), _) => Palette::parse(p)?,
        (None, true) => Palette::default_colors()?,
        (None, false) => Palette::plain(),
    };

    let cfg = Config::builder(width, height)
        .tokenize_opt(a.tokenize.as_deref())
        .match_opt(a.match_pattern.as_deref())
        .logarithmic(a.logarithmic)
        .glyphs(&a.char)
        .prune_interval(a.prune_interval.unwrap_or(DEFAULT_PRUNE_INTERVAL))
        .max_keys(a.keys.unwrap_or(DEFAULT_MAX_KEYS))
        .mode(mode)
        .verbose(a.verbose)
        .palette(palette)
        .build()?;
    debug!("resolved configuration: {cfg:?}");
    Ok(cfg)
}

/// Histogram stdin to stdout; everything else goes to stderr.
pub fn histogram(a: &Cli) -> Result<(), GraphError> {
    let cfg = resolve(a)?;

    let stdin = io::stdin();
    let input = BufReader::with_capacity(BUF_CAP, stdin.lock());
    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();

    run(&cfg, input, &mut out, &mut diag)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{NumericMode, Orientation};
    use clap::Parser;

    fn cfg(args: &[&str]) -> Config {
        let cli = Cli::try_parse_from(std::iter::once("distribution").chain(args.iter().copied()))
            .unwrap();
        resolve(&cli).unwrap()
    }

    #[test]
    fn explicit_dims_override_preset() {
        let c = cfg(&["--size=small", "--width=70"]);
        assert_eq!((c.width, c.height), (70, 10));
    }

    #[test]
    fn graph_wins_over_numonly() {
        let c = cfg(&["-g", "-n"]);
        assert_eq!(c.mode, InputMode::PreTallied(Orientation::ValueKey));
        let c = cfg(&["-n=diff"]);
        assert_eq!(c.mode, InputMode::Numeric(NumericMode::Difference));
    }

    #[test]
    fn palette_implies_colour() {
        let c = cfg(&["--palette=0,31,32,33,34"]);
        assert_eq!(c.palette.key.as_str(), "\x1b[31m");
        let c = cfg(&[]);
        assert_eq!(c.palette, Palette::plain());
    }

    #[test]
    fn unknown_size_is_an_error() {
        let cli = Cli::try_parse_from(["distribution", "--size=huge"]).unwrap();
        assert!(matches!(resolve(&cli), Err(GraphError::Config(_))));
    }
}
