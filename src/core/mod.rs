//! Input handling, tallying and configuration; nothing here draws.

pub mod bounds;
pub mod classify;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod pattern;
pub mod series;
pub mod tally;

pub use classify::{Classifier, TallyMode, Totals};
pub use color::{AnsiCode, Palette};
pub use config::{Config, ConfigBuilder, InputMode, NumericMode, Orientation};
pub use error::{ColorError, ConfigError, GraphError, MalformedLine};
pub use series::NumericSeries;
pub use tally::TallyStore;
