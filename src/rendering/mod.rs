//! Output rendering - from score records to report/terminal output.
//!
//! Two consumers:
//! - Markdown report: the persistent "Gravity Index Results" document
//! - Terminal summary: a short colored top-list after a run
//!
//! Rendering is entirely derived from the frozen score records; nothing
//! here touches the graph or recomputes a metric.

mod colors;
mod describe;
mod report;

pub use colors::{colorize, score_style};
pub use describe::describe;
pub use report::ReportRenderer;
