use clap::{ArgAction, Parser};

use crate::core::config::{NumericMode, Orientation};

const AFTER_HELP: &str = "\
Glyph presets for --char:
  pl  1/3-width partial lines      pb  1/8-width partial blocks
  ba  ▬   bl  Ξ   em  —   me  ⋯   di  ♦   dt  •   sq  □

Examples:
  du -sb /etc/* | distribution --palette=0,37,34,33,32 --graph
  du -sk /etc/* | awk '{print $2\" \"$1}' | distribution --graph=kv
  zcat /var/log/syslog*gz | distribution --char=o --tokenize=white
  zcat /var/log/syslog*gz | awk '{print $5}' | distribution -t word -m word -h 15 -c /
  find /etc -type f | cut -c 6- | distribution --tokenize=/ -w 90 -h 35 -c dt
  awk '{print length($1)}' /usr/share/dict/words | distribution -c '*' -w 50 -h 10 | sort -n";

/// Command-line flags of `distribution`.
#[derive(Parser, Debug)]
#[command(
    name = "distribution",
    version,
    about = "Streaming histograms in the terminal: use instead of `| sort | uniq -c | sort -rn`",
    after_help = AFTER_HELP,
    disable_help_flag = true
)]
pub struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Report size preset: small, medium, large or full (terminal size)
    #[arg(short, long)]
    pub size: Option<String>,

    /// Report width in characters (overrides --size)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Histogram rows, header not included (overrides --size)
    #[arg(short = 'h', long)]
    pub height: Option<usize>,

    /// Keep at most K keys when pruning the tally
    #[arg(short, long, value_name = "K")]
    pub keys: Option<usize>,

    /// Prune the tally after this many counted tokens
    #[arg(long, value_name = "N")]
    pub prune_interval: Option<u64>,

    /// Bar glyph(s) or preset (see below)
    #[arg(short, long = "char", value_name = "C", default_value = "-")]
    pub char: String,

    /// Colourise the output with the default palette
    #[arg(long, visible_alias = "colour")]
    pub color: bool,

    /// ANSI colours for regular,key,count,percent,graph (implies --color)
    #[arg(short, long, value_name = "P")]
    pub palette: Option<String>,

    /// Split each line on this regexp (`white`, `word` or a pattern)
    #[arg(short, long, value_name = "RE")]
    pub tokenize: Option<String>,

    /// Only count tokens/lines matching this regexp (`word`, `num` or a pattern)
    #[arg(short, long = "match", value_name = "RE")]
    pub match_pattern: Option<String>,

    /// Input is already key/value pairs: vk (default) or kv
    #[arg(
        short,
        long,
        value_name = "ORDER",
        num_args = 0..=1,
        default_missing_value = "vk",
        value_parser = parse_orientation
    )]
    pub graph: Option<Orientation>,

    /// Input is numbers; graph them as-is (absolute) or their differences (diff)
    #[arg(
        short,
        long,
        value_name = "MODE",
        num_args = 0..=1,
        default_missing_value = "absolute",
        value_parser = parse_numeric_mode
    )]
    pub numonly: Option<NumericMode>,

    /// Logarithmic bar scale
    #[arg(short, long)]
    pub logarithmic: bool,

    /// Print statistics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_orientation(s: &str) -> Result<Orientation, String> {
    s.parse().map_err(|e: crate::core::error::ConfigError| e.to_string())
}

fn parse_numeric_mode(s: &str) -> Result<NumericMode, String> {
    s.parse().map_err(|e: crate::core::error::ConfigError| e.to_string())
}
