use chrono::NaiveTime;

use crate::reconcile::ProcessingResult;

/// Render one audit-log line, optionally prefixed with `[HH:MM:SS]`.
pub fn format_line(message: &str, time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => format!("[{}] {message}", t.format("%H:%M:%S")),
        None => message.to_string(),
    }
}

/// Closing lines printed after a pass. Errors only appear when there were some.
pub fn summary_lines(result: &ProcessingResult) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Processing Summary:".to_string(),
        format!("  Files renamed: {}", result.files_renamed),
        format!("  Tags updated: {}", result.tags_updated),
    ];
    if result.errors > 0 {
        lines.push(format!("  Errors: {}", result.errors));
    }
    lines.push("Processing complete!".to_string());
    lines
}
