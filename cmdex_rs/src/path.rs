//! Command path handling.
//!
//! Paths are space-joined command tokens relative to the program root. Both
//! registration and lookup split them the same way, so runs of whitespace and
//! leading/trailing whitespace never change which node a path names.

/// Split a command path into its segments.
///
/// An empty or whitespace-only path yields no segments (the root).
pub fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split_whitespace()
}

/// Derive the selected command path from the parser's full path.
///
/// `selected` is the full path of the selected command as the parser reports
/// it, program name included (e.g. `app-name config snapshot`). The leading
/// `"<program_name> "` is removed once; no selection resolves to the root.
pub fn command_path(program_name: &str, selected: Option<&str>) -> String {
    let Some(full) = selected else {
        return String::new();
    };

    if full == program_name {
        return String::new();
    }

    match full
        .strip_prefix(program_name)
        .and_then(|rest| rest.strip_prefix(' '))
    {
        Some(rest) => rest.to_string(),
        None => full.to_string(),
    }
}
