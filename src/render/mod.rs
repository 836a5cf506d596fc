pub mod bar;
pub mod glyph;
pub mod report;

pub use bar::{Bar, BarRenderer, Scale};
pub use glyph::GlyphSet;
pub use report::{Report, ReportRow, Summary, write_series};
