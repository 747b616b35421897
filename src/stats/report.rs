use std::fmt;

use super::summary::{EmptyDataError, StatisticsReport};

/// Renders a summary the way the command line prints it.
pub struct ColumnReport<'a> {
    pub column: usize,
    pub outcome: &'a Result<StatisticsReport, EmptyDataError>,
}

impl fmt::Display for ColumnReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = match self.outcome {
            Ok(stats) => stats,
            Err(e) => return writeln!(f, "{}", e),
        };

        writeln!(f, "    Column: {}\n\n", self.column)?;
        let rows: [(&str, f64); 8] = [
            ("Count", stats.count as f64),
            ("ValidNum", stats.valid_count as f64),
            ("Average", stats.average),
            ("Maximum", stats.maximum),
            ("Minimum", stats.minimum),
            ("Variance", stats.variance),
            ("Std Dev", stats.std_dev),
            ("Median", stats.median),
        ];
        for (label, value) in rows {
            writeln!(f, "        {:<10}=   {:8.3}", label, value)?;
        }
        Ok(())
    }
}
