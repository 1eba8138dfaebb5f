//! Human-readable summary of one estimation run.

use colored::Colorize;
use triloc_types::EstimatedPosition;

pub const ABSENT_NOTICE: &str = "Object might be absent.";
pub const PRESENT_NOTICE: &str = "Object is present within the circle.";
pub const NOT_PRESENT_NOTICE: &str = "Object is not present within the circle.";

/// Result of a run, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub position: EstimatedPosition,
    pub present: bool,
}

impl Report {
    pub fn new(position: EstimatedPosition, present: bool) -> Self {
        Self { position, present }
    }

    /// Plain-text output lines.
    pub fn lines(&self) -> Vec<String> {
        match &self.position {
            EstimatedPosition::Absent { .. } => vec![ABSENT_NOTICE.to_string()],
            EstimatedPosition::Found(p) => {
                let verdict = if self.present { PRESENT_NOTICE } else { NOT_PRESENT_NOTICE };
                vec![format!("Estimated Position: {p}"), verdict.to_string()]
            }
        }
    }

    /// Print [`Report::lines`] to stdout with terminal colours.
    pub fn print(&self) {
        for line in self.lines() {
            let styled = match line.as_str() {
                ABSENT_NOTICE => line.as_str().yellow(),
                PRESENT_NOTICE => line.as_str().green(),
                NOT_PRESENT_NOTICE => line.as_str().red(),
                other => other.bold(),
            };
            println!("{styled}");
        }
    }
}
