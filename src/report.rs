/*!
 * Reporting functionality for codeclip
 *
 * Summarizes what went into the copied Markdown using tabled tables.
 */

use std::collections::HashMap;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{FileReportInfo, ScannerStatistics};
use crate::utils::format_file_size;

/// Number of files listed in full before only the largest are shown
const MAX_LISTED_FILES: usize = 15;
/// Number of largest files shown for big runs
const TOP_FILES: usize = 10;

/// Statistics for a finished run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Where the Markdown went
    pub destination: String,
    /// Time taken to scan and render
    pub duration: Duration,
    /// Size of the Markdown in bytes
    pub output_bytes: usize,
    /// Files whose contents were included
    pub files_included: usize,
    /// Files left out as binary or unreadable
    pub files_skipped: usize,
    /// Paths removed by exclude patterns
    pub files_excluded: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each included file
    pub file_details: HashMap<String, FileReportInfo>,
}

impl ScanReport {
    /// Build a report from scanner statistics
    pub fn new(
        destination: String,
        duration: Duration,
        output_bytes: usize,
        statistics: ScannerStatistics,
    ) -> Self {
        Self {
            destination,
            duration,
            output_bytes,
            files_included: statistics.files_included,
            files_skipped: statistics.files_skipped,
            files_excluded: statistics.files_excluded,
            total_lines: statistics.total_lines,
            total_chars: statistics.total_chars,
            file_details: statistics.file_details,
        }
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for finished runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stderr, keeping stdout free for --print
    pub fn print_report(&self, report: &ScanReport) {
        eprintln!("\n{}", self.generate_report(report));
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Rough token estimate, four characters per token
    fn estimate_tokens(&self, chars: usize) -> String {
        self.format_number(chars / 4)
    }

    /// Keep the tail of long paths, cutting at a separator when possible
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.chars().count() <= max_len {
            return path.to_string();
        }

        let mut kept: Vec<&str> = Vec::new();
        let mut len = 3; // "..."
        for part in path.rsplit('/') {
            let part_len = part.chars().count() + 1;
            if len + part_len > max_len {
                break;
            }
            kept.push(part);
            len += part_len;
        }

        if kept.is_empty() {
            let tail: String = path
                .chars()
                .rev()
                .take(max_len.saturating_sub(3))
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            return format!("...{}", tail);
        }

        kept.reverse();
        format!(".../{}", kept.join("/"))
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📋 Destination".to_string(),
                value: report.destination.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Included".to_string(),
                value: self.format_number(report.files_included),
            },
            SummaryRow {
                key: "🚫 Skipped / Excluded".to_string(),
                value: format!(
                    "{} binary or unreadable / {} excluded",
                    self.format_number(report.files_skipped),
                    self.format_number(report.files_excluded)
                ),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
            SummaryRow {
                key: "📦 Output Size".to_string(),
                value: format_file_size(report.output_bytes as u64),
            },
            SummaryRow {
                key: "🔤 LLM Tokens".to_string(),
                value: format!("{} tokens (estimated)", self.estimate_tokens(report.total_chars)),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        // Largest first, ties broken by path so the output is stable
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(pa, a), (pb, b)| b.chars.cmp(&a.chars).then_with(|| pa.cmp(pb)));

        if files.len() > MAX_LISTED_FILES {
            files.truncate(TOP_FILES);
        }

        let rows: Vec<FileRow> = files
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                tokens: self.estimate_tokens(info.chars),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &ScanReport) -> String {
        let summary_table = self.create_summary_table(report);
        let summary_title = "✅  COPY COMPLETE";

        if report.file_details.is_empty() {
            return format!("{}\n{}", summary_title, summary_table);
        }

        let files_table = self.create_files_table(report);
        let files_title = if report.file_details.len() > MAX_LISTED_FILES {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT  📋"
        } else {
            "📋  INCLUDED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(files: usize) -> ScanReport {
        let mut statistics = ScannerStatistics::default();
        for i in 0..files {
            statistics.file_details.insert(
                format!("src/file{:02}.rs", i),
                FileReportInfo {
                    lines: i + 1,
                    chars: (i + 1) * 100,
                },
            );
            statistics.files_included += 1;
        }
        ScanReport::new(
            "clipboard".to_string(),
            Duration::from_millis(5),
            2048,
            statistics,
        )
    }

    #[test]
    fn test_small_report_lists_every_file() {
        let text = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report(3));
        assert!(text.contains("INCLUDED FILES"));
        assert!(text.contains("src/file00.rs"));
        assert!(text.contains("src/file02.rs"));
        assert!(text.contains("clipboard"));
        assert!(text.contains("2.00 KB"));
    }

    #[test]
    fn test_large_report_shows_top_files() {
        let text = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report(20));
        assert!(text.contains("TOP 10 LARGEST FILES"));
        // Largest files are the last ones generated
        assert!(text.contains("src/file19.rs"));
        assert!(!text.contains("src/file00.rs"));
    }

    #[test]
    fn test_empty_report_has_summary_only() {
        let text = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report(0));
        assert!(text.starts_with("✅  COPY COMPLETE"));
        assert!(!text.contains("File Path"));
    }

    #[test]
    fn test_format_path_keeps_tail() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        assert_eq!(reporter.format_path("src/lib.rs", 60), "src/lib.rs");
        assert_eq!(
            reporter.format_path("very/long/directory/name/file.rs", 20),
            ".../name/file.rs"
        );
        assert_eq!(reporter.format_path("abcdefghij", 8), "...fghij");
    }
}
