//! Status bar messages for clipboard commands.

/// Format a status message such as `"Copied 9 characters over 2 selection regions"`.
///
/// The region clause only appears for more than one region.
pub fn format_status(verb: &str, num_chars: usize, num_regions: usize) -> String {
    let mut message = format!(
        "{} {} character{}",
        verb,
        num_chars,
        if num_chars == 1 { "" } else { "s" }
    );
    if num_regions > 1 {
        message.push_str(&format!(" over {} selection regions", num_regions));
    }
    message
}
