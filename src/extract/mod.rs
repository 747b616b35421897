use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    time::Instant,
};
use tracing::{debug, info, instrument};

mod error;

pub use error::{ExtractError, FieldParseError};

/// Values pulled from one column, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericColumn {
    values: Vec<f64>,
    lines_read: usize,
    lines_skipped: usize,
    lines_missing: usize,
}

impl NumericColumn {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Lines whose field could not be parsed as a number.
    pub fn lines_skipped(&self) -> usize {
        self.lines_skipped
    }

    /// Lines whose field was the NaN missing-value marker.
    pub fn lines_missing(&self) -> usize {
        self.lines_missing
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// What happened to a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Accepted(f64),
    /// Field parsed as NaN; dropped without a diagnostic.
    Missing,
    Skipped(FieldParseError),
}

/// Line-at-a-time extractor for one tab-separated column.
pub struct ColumnExtractor {
    /// 0-based field index
    column: usize,

    /// 1-based number of the last line seen
    line_no: usize,

    values: Vec<f64>,
    skipped: usize,
    missing: usize,
}

impl ColumnExtractor {
    pub fn new(column: usize) -> Self {
        Self {
            column,
            line_no: 0,
            values: Vec::new(),
            skipped: 0,
            missing: 0,
        }
    }

    /// Process a single line (without its terminator).
    ///
    /// An unparseable field is reported back as `Skipped` and the extractor keeps
    /// going. A missing column is an error and the caller is expected to stop.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome, ExtractError> {
        self.line_no += 1;

        let field = line
            .split('\t')
            .nth(self.column)
            .ok_or_else(|| ExtractError::ColumnIndex {
                line_no: self.line_no,
                column: self.column,
                line: line.to_string(),
            })?;

        match field.trim().parse::<f64>() {
            Ok(v) if v.is_nan() => {
                self.missing += 1;
                Ok(LineOutcome::Missing)
            }
            Ok(v) => {
                self.values.push(v);
                Ok(LineOutcome::Accepted(v))
            }
            Err(_) => {
                self.skipped += 1;
                Ok(LineOutcome::Skipped(FieldParseError {
                    line_no: self.line_no,
                    text: field.to_string(),
                }))
            }
        }
    }

    pub fn finish(self) -> NumericColumn {
        NumericColumn {
            values: self.values,
            lines_read: self.line_no,
            lines_skipped: self.skipped,
            lines_missing: self.missing,
        }
    }
}

/// Drive a `ColumnExtractor` over every line of `reader`, writing one diagnostic
/// line to `diagnostics` for each skipped field.
pub fn extract_from_reader<R: BufRead, W: Write>(
    reader: R,
    column: usize,
    source: &Path,
    diagnostics: &mut W,
) -> Result<NumericColumn, ExtractError> {
    let mut extractor = ColumnExtractor::new(column);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| ExtractError::Read {
            path: source.to_path_buf(),
            line_no: idx + 1,
            source: source_err,
        })?;

        if let LineOutcome::Skipped(skip) = extractor.process_line(&line)? {
            debug!(line_no = skip.line_no, text = %skip.text, "skipping unparseable field");
            writeln!(diagnostics, "{}", skip).map_err(ExtractError::Diagnostics)?;
        }
    }

    Ok(extractor.finish())
}

/// Open `path` and collect the numbers in `column` (0-based).
#[instrument(level = "info", skip(path, diagnostics), fields(path = %path.as_ref().display()))]
pub fn extract_column<P: AsRef<Path>, W: Write>(
    path: P,
    column: usize,
    diagnostics: &mut W,
) -> Result<NumericColumn, ExtractError> {
    let path = path.as_ref();
    let start = Instant::now();

    let file = File::open(path).map_err(|source| ExtractError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened input");

    let col = extract_from_reader(BufReader::new(file), column, path, diagnostics)?;

    info!(
        lines = col.lines_read(),
        accepted = col.values().len(),
        skipped = col.lines_skipped(),
        missing = col.lines_missing(),
        elapsed = ?start.elapsed(),
        "extraction complete"
    );
    Ok(col)
}
