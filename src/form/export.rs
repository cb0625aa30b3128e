use tracing::info;

/// Export hook for the view page's download buttons.
///
/// Intentionally a stub: it records the requested format and produces no
/// file. A real implementation would encode the current grid as a byte
/// stream in the requested format.
pub fn export_timetable(format: &str) {
    info!(format, "export requested; export is not implemented");
}
