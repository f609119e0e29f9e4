//! Full statistics report for a dataset

use crate::config::ReportOptions;
use crate::format::{format_general, format_list};
use sorted_core::{Dataset, Result};
use sorted_descriptive::Summary;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Renders every statistic of a [`Dataset`] as labeled text lines followed
/// by a frequency table
///
/// All statistics are computed before the first byte is written. A dataset
/// that fails any precondition (empty, too short for kurtosis, zero mean for
/// the coefficient of variation) produces the error and no output at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer {
    options: ReportOptions,
}

impl ReportRenderer {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Write the full report for `dataset` to `out`
    pub fn render_all<W: Write + ?Sized>(&self, dataset: &Dataset, out: &mut W) -> Result<()> {
        let summary = Summary::of(dataset)?;
        let report = self.compose(dataset.buffer().as_slice(), &summary);
        out.write_all(report.as_bytes())?;
        Ok(())
    }

    /// The full report as a string
    pub fn render_to_string(&self, dataset: &Dataset) -> Result<String> {
        let summary = Summary::of(dataset)?;
        Ok(self.compose(dataset.buffer().as_slice(), &summary))
    }

    /// Render the report and write it to `path`, replacing any existing file
    ///
    /// The report is rendered in memory first, so a failing statistic leaves
    /// the file system untouched. A file that cannot be created or written is
    /// reported as [`sorted_core::Error::Io`].
    pub fn write_to_file<P: AsRef<Path>>(&self, dataset: &Dataset, path: P) -> Result<()> {
        self.write_report(dataset, path.as_ref())
    }

    #[instrument(skip(self, dataset), fields(n = dataset.len(), mode = dataset.mode().name()))]
    fn write_report(&self, dataset: &Dataset, path: &Path) -> Result<()> {
        let report = self.render_to_string(dataset)?;
        match fs::write(path, report.as_bytes()) {
            Ok(()) => {
                debug!(bytes = report.len(), "report written");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "could not write report");
                Err(e.into())
            }
        }
    }

    fn compose(&self, values: &[f64], summary: &Summary) -> String {
        let digits = self.options.significant_digits;
        let num = |v: f64| format_general(v, digits);
        let mode = summary.mode.name();
        let q = &summary.quartiles;

        let mut lines = vec![
            format!("DATA (sorted, n={}): {}", summary.count, format_data(values, digits)),
            String::new(),
            format!("Min: {}", num(summary.min)),
            format!("Max: {}", num(summary.max)),
            format!("Range: {}", num(summary.range)),
            format!("Sum: {}", num(summary.sum)),
            format!("Mean: {}", num(summary.mean)),
            format!("Median: {}", num(summary.median)),
            format!("Mode(s): {}", format_list(&summary.modes, digits)),
            format!("Variance ({mode}): {}", num(summary.variance)),
            format!("Std Dev ({mode}): {}", num(summary.std_dev)),
            format!("Midrange: {}", num(summary.midrange)),
            format!("Quartiles (Q1,Q2,Q3): {}, {}, {}", num(q.q1), num(q.q2), num(q.q3)),
            format!("IQR: {}", num(summary.iqr)),
            format!("Outliers (Tukey +/- 1.5*IQR): {}", format_list(&summary.outliers, digits)),
            format!("Sum of Squares: {}", num(summary.sum_squares)),
            format!("Mean Abs Deviation: {}", num(summary.mean_abs_deviation)),
            format!("RMS: {}", num(summary.rms)),
            format!("SEM: {}", num(summary.standard_error)),
            format!("Skewness: {}", num(summary.skewness)),
            format!("Kurtosis (Pearson): {}", num(summary.kurtosis)),
            format!("Kurtosis Excess: {}", num(summary.kurtosis_excess)),
            format!("Coefficient of Variation: {}", num(summary.coefficient_of_variation)),
            format!("Relative Std Dev (%): {}", num(summary.relative_std_deviation)),
            String::new(),
            "Frequency Table".to_string(),
            String::new(),
        ];
        lines.extend(self.frequency_rows(summary));

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }

    /// Header and one row per distinct value, left-justified to the column widths
    fn frequency_rows(&self, summary: &Summary) -> Vec<String> {
        let ReportOptions {
            value_width,
            count_width,
            percent_width,
            percent_precision,
            significant_digits,
        } = self.options;

        let header = format!(
            "{:<value_width$}{:<count_width$}Frequency %",
            "Value", "Frequency"
        );
        let rows = summary.frequencies.iter().map(|entry| {
            format!(
                "{:<value_width$}{:<count_width$}{:<percent_width$.percent_precision$}",
                format_general(entry.value, significant_digits),
                entry.count,
                entry.percentage(summary.count),
            )
        });
        std::iter::once(header).chain(rows).collect()
    }
}

fn format_data(values: &[f64], digits: usize) -> String {
    values
        .iter()
        .map(|&v| format_general(v, digits))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write the report for `dataset` to `out` with default options
pub fn render_all<W: Write + ?Sized>(dataset: &Dataset, out: &mut W) -> Result<()> {
    ReportRenderer::default().render_all(dataset, out)
}

/// The report for `dataset` as a string, with default options
pub fn render_to_string(dataset: &Dataset) -> Result<String> {
    ReportRenderer::default().render_to_string(dataset)
}

/// Write the report for `dataset` to the file at `path`, with default options
pub fn write_to_file<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    ReportRenderer::default().write_to_file(dataset, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sorted_core::{Error, EstimationMode};

    fn dataset(mode: EstimationMode, values: &[f64]) -> Dataset {
        let mut dataset = Dataset::new(mode);
        for &x in values {
            dataset.insert(x);
        }
        dataset
    }

    const SAMPLE_REPORT: &str = concat!(
        "DATA (sorted, n=4): 3 3 5 8\n",
        "\n",
        "Min: 3\n",
        "Max: 8\n",
        "Range: 5\n",
        "Sum: 19\n",
        "Mean: 4.75\n",
        "Median: 4\n",
        "Mode(s): 3\n",
        "Variance (sample): 5.58333\n",
        "Std Dev (sample): 2.36291\n",
        "Midrange: 5.5\n",
        "Quartiles (Q1,Q2,Q3): 3, 4, 6.5\n",
        "IQR: 3.5\n",
        "Outliers (Tukey +/- 1.5*IQR): (none)\n",
        "Sum of Squares: 107\n",
        "Mean Abs Deviation: 1.75\n",
        "RMS: 5.17204\n",
        "SEM: 1.18145\n",
        "Skewness: 0.775411\n",
        "Kurtosis (Pearson): 13.9357\n",
        "Kurtosis Excess: 0.435732\n",
        "Coefficient of Variation: 0.497454\n",
        "Relative Std Dev (%): 49.7454\n",
        "\n",
        "Frequency Table\n",
        "\n",
        "Value     Frequency   Frequency %\n",
        "3         2           50.00       \n",
        "5         1           25.00       \n",
        "8         1           25.00       \n",
    );

    #[test]
    fn test_golden_sample_report() {
        let data = dataset(EstimationMode::Sample, &[5.0, 3.0, 8.0, 3.0]);
        assert_eq!(render_to_string(&data).unwrap(), SAMPLE_REPORT);
    }

    #[test]
    fn test_render_all_matches_string() {
        let data = dataset(EstimationMode::Sample, &[5.0, 3.0, 8.0, 3.0]);
        let mut out = Vec::new();
        render_all(&data, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), SAMPLE_REPORT);
    }

    #[test]
    fn test_population_labels() {
        let data = dataset(EstimationMode::Population, &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
        let report = render_to_string(&data).unwrap();
        assert!(report.contains("Variance (population): "));
        assert!(report.contains("Std Dev (population): "));
        assert!(report.contains("Mode(s): (none)\n"));
        assert!(report.contains("Outliers (Tukey +/- 1.5*IQR): 100\n"));
        assert!(!report.contains("(sample)"));
    }

    #[test]
    fn test_errors_leave_output_empty() {
        let mut out = Vec::new();
        let empty = Dataset::new(EstimationMode::Sample);
        assert!(matches!(render_all(&empty, &mut out), Err(Error::EmptyDataset)));
        assert!(out.is_empty());

        let short = dataset(EstimationMode::Sample, &[1.0, 2.0, 3.0]);
        match render_all(&short, &mut out) {
            Err(Error::InsufficientData { statistic, required, .. }) => {
                assert_eq!(statistic, "Kurtosis");
                assert_eq!(required, 4);
            }
            other => panic!("Wrong result: {other:?}"),
        }
        assert!(out.is_empty());

        let zero_mean = dataset(EstimationMode::Sample, &[-5.0, -1.0, 1.0, 5.0]);
        assert!(matches!(
            render_all(&zero_mean, &mut out),
            Err(Error::UndefinedResult { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_custom_options() {
        let data = dataset(EstimationMode::Sample, &[5.0, 3.0, 8.0, 3.0]);
        let renderer = ReportRenderer::new(
            ReportOptions::new()
                .with_value_width(4)
                .with_count_width(3)
                .with_percent_width(0)
                .with_percent_precision(1)
                .with_significant_digits(3),
        );
        let report = renderer.render_to_string(&data).unwrap();
        assert!(report.contains("Variance (sample): 5.58\n"));
        assert!(report.ends_with("3   2  50.0\n5   1  25.0\n8   1  25.0\n"));
        assert_eq!(renderer.options().significant_digits, 3);
    }
}
