//! Plain-text line layout shared by the stream adapters.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Arguments;

use super::{Category, LogLevel};

/// Render one record as a single line, without the trailing newline.
///
/// Layout: `<timestamp> <LEVEL> [<category>] <message>`, with the level
/// padded to the width of the longest name and root rendered as `-`.
pub fn format_line(
    timestamp: DateTime<Utc>,
    category: &Category,
    level: LogLevel,
    args: Arguments<'_>,
) -> String {
    let label = if category.is_root() {
        "-"
    } else {
        category.as_str()
    };
    format!(
        "{} {:<9} [{}] {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        label,
        args
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_format_line_layout() {
        let line = format_line(
            fixed_time(),
            &Category::new("app.db"),
            LogLevel::Info,
            format_args!("connected to {}", "primary"),
        );
        assert_eq!(
            line,
            "2024-03-01T12:30:45.000Z INFO      [app.db] connected to primary"
        );
    }

    #[test]
    fn test_format_line_root_category() {
        let line = format_line(
            fixed_time(),
            &Category::root(),
            LogLevel::Emergency,
            format_args!("down"),
        );
        assert!(line.ends_with("EMERGENCY [-] down"), "got: {}", line);
    }
}
