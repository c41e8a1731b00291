//! Ruby constant names derived from file names.

/// Turns a path segment into a Ruby constant name.
///
/// Everything from the first `.` on is dropped, the remainder is split on
/// `_`, and the first character of each piece is uppercased:
/// `widgets_controller.rb` → `WidgetsController`.
#[must_use]
pub fn constant_name(segment: &str) -> String {
    let base = segment.split('.').next().unwrap_or(segment);
    base.split('_').filter(|piece| !piece.is_empty()).map(capitalize_first).collect()
}

fn capitalize_first(piece: &str) -> String {
    let mut chars = piece.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
