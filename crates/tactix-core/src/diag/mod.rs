mod diagnostic;

pub use diagnostic::{DiagnosticReport, Warning, check_node, diagnose};
