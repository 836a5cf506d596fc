//! Final report: top rows, aligned columns, one bar per row.
//!
//! The primary stream only ever carries `key|count (pct) bar` rows so it can
//! be piped into `sort`. The header, the key colour prefix for the first row
//! and the verbose summary go to the diagnostic stream.

use std::{io::Write, time::Duration};

use crate::{
    core::{
        classify::Totals,
        config::Config,
        constants::{SERIES_FIXED_COLUMNS, SERIES_PCT_WIDTH},
        tally::TallyStore,
    },
    render::bar::{Bar, BarRenderer},
};

/// `count / total * 100`, or 0 when nothing matched.
#[inline]
#[must_use]
pub fn percent(count: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        0.0
    } else {
        count / total * 100.0
    }
}

#[inline]
fn pct_label(p: f64) -> String {
    format!("({p:.2}%)")
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow<'a> {
    pub token: &'a str,
    pub count: u64,
    pub percent: f64,
    pub bar: Bar,
}

#[derive(Debug)]
pub struct Report<'a> {
    pub rows: Vec<ReportRow<'a>>,
    key_width: usize,
    count_width: usize,
    pct_width: usize,
}

impl<'a> Report<'a> {
    /// Pick the top `cfg.height` entries and render their bars.
    ///
    /// Bars are scaled to the largest *selected* count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn assemble(store: &'a TallyStore, totals: &Totals, cfg: &Config) -> Self {
        let top = store.top(cfg.height);
        let total = totals.matched as f64;

        let key_width = top.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let count_width = top
            .iter()
            .map(|(_, c)| c.to_string().len())
            .max()
            .unwrap_or(0);
        let pct_width = top
            .iter()
            .map(|(_, c)| pct_label(percent(*c as f64, total)).len())
            .max()
            .unwrap_or(0);

        let budget = cfg
            .width
            .saturating_sub(key_width + 1)
            .saturating_sub(count_width + 1)
            .saturating_sub(pct_width + 1);
        let max = top.first().map_or(0.0, |(_, c)| *c as f64);
        let renderer = BarRenderer::new(&cfg.glyphs, cfg.scale);

        let rows = top
            .into_iter()
            .map(|(token, count)| ReportRow {
                token,
                count,
                percent: percent(count as f64, total),
                bar: renderer.render(count as f64, max, budget),
            })
            .collect();

        Self {
            rows,
            key_width,
            count_width,
            pct_width,
        }
    }

    /// Rows to `out`, header to `diag`.
    pub fn write_to<W: Write, E: Write>(
        &self,
        cfg: &Config,
        out: &mut W,
        diag: &mut E,
    ) -> std::io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let p = &cfg.palette;
        let (kw, cw, pw) = (self.key_width, self.count_width, self.pct_width);

        writeln!(
            diag,
            "{:>kw$}|{:<cw$} {:<pw$} Histogram{}",
            "Key", "Ct", "(Pct)", p.key
        )?;
        diag.flush()?;

        let last = self.rows.len() - 1;
        for (i, row) in self.rows.iter().enumerate() {
            // the key colour for the next row rides at the end of this one,
            // so a line-based sort keeps every key first on its line
            let tail = if i == last { p.regular } else { p.key };
            writeln!(
                out,
                "{:>kw$}{}|{}{:>cw$} {}{:>pw$} {}{}{}",
                row.token,
                p.regular,
                p.count,
                row.count,
                p.percent,
                pct_label(row.percent),
                p.graph,
                row.bar.text,
                tail,
            )?;
        }
        Ok(())
    }
}

/// Numeric mode: one row per value, labelled by its integer part.
#[allow(clippy::cast_possible_truncation)]
pub fn write_series<W: Write>(values: &[f64], cfg: &Config, out: &mut W) -> std::io::Result<()> {
    let p = &cfg.palette;
    let max = values.iter().copied().fold(0.0, f64::max);
    let sum: f64 = values.iter().sum();
    let labels: Vec<String> = values.iter().map(|v| (v.trunc() as i64).to_string()).collect();
    let lw = labels.iter().map(String::len).max().unwrap_or(0);
    let pw = SERIES_PCT_WIDTH;
    let budget = cfg.width.saturating_sub(SERIES_FIXED_COLUMNS + lw);
    let renderer = BarRenderer::new(&cfg.glyphs, cfg.scale);

    for (v, label) in values.iter().zip(&labels) {
        writeln!(
            out,
            "{}{label:>lw$}{}{:>pw$} {}{}{}",
            p.key,
            p.percent,
            pct_label(percent(*v, sum)),
            p.graph,
            renderer.render(*v, max, budget).text,
            p.regular,
        )?;
    }
    Ok(())
}

/// Verbose end-of-run statistics.
#[derive(Clone, Copy, Debug)]
pub struct Summary {
    pub totals: Totals,
    pub keys: usize,
    pub prunes: u64,
    pub elapsed: Duration,
}

impl Summary {
    pub fn write_to<E: Write>(&self, diag: &mut E) -> std::io::Result<()> {
        let t = &self.totals;
        writeln!(diag, "tokens/lines examined: {}", group_thousands(t.examined))?;
        writeln!(diag, " tokens/lines matched: {}", group_thousands(t.matched))?;
        writeln!(diag, "       histogram keys: {}", group_thousands(self.keys as u64))?;
        writeln!(diag, "          hash prunes: {}", group_thousands(self.prunes))?;
        if t.skipped > 0 {
            writeln!(diag, "        skipped lines: {}", group_thousands(t.skipped))?;
        }
        writeln!(
            diag,
            "              runtime: {:.2}ms",
            self.elapsed.as_secs_f64() * 1000.0
        )
    }
}

/// `1234567` → `1,234,567`
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Palette;

    fn tallied(pairs: &[(&str, u64)]) -> (TallyStore, Totals) {
        let mut store = TallyStore::new(usize::MAX, u64::MAX);
        let mut totals = Totals::default();
        for (k, n) in pairs {
            store.increment_by(k, *n);
            totals.matched += n;
        }
        (store, totals)
    }

    fn render(report: &Report<'_>, cfg: &Config) -> (String, String) {
        let (mut out, mut diag) = (Vec::new(), Vec::new());
        report.write_to(cfg, &mut out, &mut diag).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
        )
    }

    #[test]
    fn selects_and_orders_top_rows() {
        let cfg = Config::builder(40, 2).build().unwrap();
        let (store, totals) = tallied(&[("a", 3), ("c", 1), ("b", 2)]);
        let report = Report::assemble(&store, &totals, &cfg);
        let got: Vec<_> = report.rows.iter().map(|r| (r.token, r.count)).collect();
        assert_eq!(got, [("a", 3), ("b", 2)]);
        assert_eq!(pct_label(report.rows[0].percent), "(50.00%)");
        assert_eq!(pct_label(report.rows[1].percent), "(33.33%)");
    }

    #[test]
    fn rows_fill_width_exactly() {
        let cfg = Config::builder(40, 5).build().unwrap();
        let (store, totals) = tallied(&[("apple", 10), ("fig", 5)]);
        let report = Report::assemble(&store, &totals, &cfg);
        let (out, diag) = render(&report, &cfg);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0].chars().count(), 40);
        assert!(lines[0].starts_with("apple|10 (66.67%) "));
        assert!(lines[1].starts_with("  fig| 5 (33.33%) "));
        assert_eq!(diag, "  Key|Ct (Pct)    Histogram\n");
    }

    #[test]
    fn colours_wrap_columns() {
        let cfg = Config::builder(30, 5)
            .palette(Palette::parse("0,1,32,35,34").unwrap())
            .build()
            .unwrap();
        let (store, totals) = tallied(&[("x", 2), ("y", 1)]);
        let report = Report::assemble(&store, &totals, &cfg);
        let (out, diag) = render(&report, &cfg);
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("x\x1b[0m|\x1b[32m2 \x1b[35m(66.67%) \x1b[34m"));
        assert!(first.ends_with("\x1b[1m"));
        assert!(out.trim_end().ends_with("\x1b[0m"));
        assert!(diag.ends_with("Histogram\x1b[1m\n"));
    }

    #[test]
    fn zero_total_does_not_divide() {
        let cfg = Config::default();
        let (store, _) = tallied(&[("k", 0)]);
        let report = Report::assemble(&store, &Totals::default(), &cfg);
        assert!(report.rows[0].percent.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_store_writes_nothing() {
        let cfg = Config::default();
        let store = TallyStore::new(10, 10);
        let report = Report::assemble(&store, &Totals::default(), &cfg);
        let (out, diag) = render(&report, &cfg);
        assert!(out.is_empty() && diag.is_empty());
    }

    #[test]
    fn series_rows() {
        let cfg = Config::builder(30, 5).build().unwrap();
        let mut out = Vec::new();
        write_series(&[5.0, -3.0], &cfg, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 5(250.00%) "));
        assert_eq!(lines[0].chars().count(), 30);
        assert_eq!(lines[1], "-3(-150.00%) -");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn summary_lines() {
        let s = Summary {
            totals: Totals {
                examined: 1500,
                matched: 1200,
                skipped: 0,
            },
            keys: 3,
            prunes: 0,
            elapsed: Duration::from_millis(5),
        };
        let mut diag = Vec::new();
        s.write_to(&mut diag).unwrap();
        let diag = String::from_utf8(diag).unwrap();
        assert!(diag.contains("tokens/lines examined: 1,500\n"));
        assert!(diag.contains(" tokens/lines matched: 1,200\n"));
        assert!(diag.contains("runtime: 5.00ms"));
        assert!(!diag.contains("skipped"));
    }
}
