// File: crates/demo/src/main.rs
// Summary: Renders the same series as a plain and a spline chart to PNG/SVG, optionally from a CSV column.

use anyhow::{Context, Result};
use chart_core::{Chart, ChartConfig, ChartProps, RenderOptions, Sizing};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Render the same series as a plain and a basis-spline line chart.
#[derive(Parser, Debug)]
#[command(name = "spline-compare-demo")]
#[command(version, about = "Render plain and spline line charts to target/out as PNG and SVG")]
struct Args {
    /// CSV file to read values from (built-in sample readings when omitted)
    input: Option<String>,

    /// Header of the column to plot (first numeric column when omitted)
    #[arg(long)]
    column: Option<String>,

    /// Move the pointer onto this index and print the tooltip text
    #[arg(long, value_name = "INDEX")]
    probe: Option<usize>,

    /// Theme preset name (light, dark)
    #[arg(long)]
    theme: Option<String>,
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let values = match &args.input {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!(path = %path.display(), "using input file");
            if used_alt {
                info!("extension swapped between .csv/.cvs");
            }
            load_column_csv(&path, args.column.as_deref())
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            info!("no input given; using built-in sample readings");
            chart_core::sample::readings()
        }
    };
    info!(points = values.len(), "series loaded");
    if values.is_empty() {
        anyhow::bail!("no values loaded; check headers/column name.");
    }

    let mut config = ChartConfig { sizing: Sizing::Static { width: 800.0, height: 480.0 }, ..ChartConfig::default() };
    if let Some(name) = &args.theme {
        config.theme = chart_core::theme::find(name);
    }
    let opts = RenderOptions::default();
    let out_dir = PathBuf::from("target/out");

    for (name, smoothing, color) in [("plain", false, "steelblue"), ("spline", true, "red")] {
        let mut chart = Chart::mounted(ChartProps::new(values.clone(), smoothing, color), config);
        if let Some(index) = args.probe {
            probe(&mut chart, index, name);
        }
        let png = out_dir.join(format!("chart_{name}.png"));
        chart.render_to_png(&opts, &png)?;
        chart.render_to_svg(&opts, png.with_extension("svg"))?;
        println!("Wrote {}", png.display());
    }
    Ok(())
}

/// Move the pointer onto `index` and print what the tooltip shows.
fn probe(chart: &mut Chart, index: usize, name: &str) {
    let Some(px) = chart.scene().map(|s| s.x_for_index(index)) else { return };
    if index >= chart.series().len() {
        warn!(index, len = chart.series().len(), "probe index outside series; pointer will be clamped");
    }
    if chart.pointer_move(px, 0.0).is_some() {
        if let Some(t) = chart.tooltip() {
            println!("[{name}] {} | {}", t.time_line(), t.data_line());
        }
    }
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load one numeric column. Picks `column` by header name, otherwise the
/// first column whose first record parses as a number. Unparseable cells are skipped.
fn load_column_csv(path: &Path, column: Option<&str>) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let idx = match column {
        Some(want) => {
            let want = want.to_lowercase();
            headers
                .iter()
                .position(|h| *h == want)
                .with_context(|| format!("column '{want}' not found"))?
        }
        None => records
            .first()
            .and_then(|r| r.iter().position(|cell| cell.trim().parse::<f64>().is_ok()))
            .context("no numeric column found")?,
    };

    let mut skipped = 0usize;
    let mut out = Vec::with_capacity(records.len());
    for rec in &records {
        match rec.get(idx).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(v) => out.push(v),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without a numeric value were skipped");
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).expect("create csv");
        f.write_all(body.as_bytes()).expect("write csv");
        path
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "spline-compare-demo", "values.csv", "--column=Price", "--probe", "3", "--theme", "dark",
        ])
        .expect("parse");
        assert_eq!(args.input.as_deref(), Some("values.csv"));
        assert_eq!(args.column.as_deref(), Some("Price"));
        assert_eq!(args.probe, Some(3));
        assert_eq!(args.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["spline-compare-demo"]).expect("parse");
        assert!(args.input.is_none() && args.column.is_none() && args.probe.is_none());
    }

    #[test]
    fn rejects_bad_probe_and_unknown_flags() {
        assert!(Args::try_parse_from(["spline-compare-demo", "--probe", "-1"]).is_err());
        assert!(Args::try_parse_from(["spline-compare-demo", "--zoom", "2"]).is_err());
        let help = Args::try_parse_from(["spline-compare-demo", "--help"]).expect_err("help exits early");
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn picks_column_by_header_case_insensitively() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(&dir, "v.csv", "time,Price,volume\n0,10.5,3\n1,12,4\n2,9.25,5\n");
        assert_eq!(load_column_csv(&path, Some("price")).expect("load"), vec![10.5, 12.0, 9.25]);
        assert!(load_column_csv(&path, Some("missing")).is_err());
    }

    #[test]
    fn detects_first_numeric_column() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(&dir, "v.csv", "label,value\nmon,1\ntue,2\n");
        assert_eq!(load_column_csv(&path, None).expect("load"), vec![1.0, 2.0]);
    }

    #[test]
    fn skips_rows_without_a_number() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(&dir, "v.csv", "value\n1\nn/a\n\" 3 \"\n\n4\n");
        assert_eq!(load_column_csv(&path, Some("value")).expect("load"), vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn swaps_csv_and_cvs_extensions() {
        assert_eq!(swap_ext(Path::new("data/a.csv")), Some(PathBuf::from("data/a.cvs")));
        assert_eq!(swap_ext(Path::new("a.CVS")), Some(PathBuf::from("a.csv")));
        assert_eq!(swap_ext(Path::new("a.txt")), None);
        assert_eq!(swap_ext(Path::new("noext")), None);
    }

    #[test]
    fn resolve_path_falls_back_to_swapped_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let real = write_csv(&dir, "v.cvs", "value\n1\n");
        let asked = dir.path().join("v.csv");
        let (found, used_alt) = resolve_path(asked.to_str().expect("utf8")).expect("resolve");
        assert_eq!(found, real);
        assert!(used_alt);
    }
}
