//! Centralized text formatting utilities.
//!
//! Every string the tracker writes into the host (chat lines, patched node
//! text, window rows) goes through this module so the wording stays the same
//! across the core and the CLI.

/// Format a progress counter as `value/max`.
///
/// # Examples
/// ```
/// use zodiac_types::formatting::format_progress;
/// assert_eq!(format_progress(117, 40), "117/40");
/// assert_eq!(format_progress(0, 40), "0/40");
/// ```
pub fn format_progress(value: u16, max: u16) -> String {
    format!("{}/{}", value, max)
}

/// Append a line below text the host already rendered.
///
/// The existing text is kept verbatim, including any trailing whitespace.
///
/// # Examples
/// ```
/// use zodiac_types::formatting::append_line;
/// assert_eq!(append_line("Light: Faint", "3/40"), "Light: Faint\n3/40");
/// assert_eq!(append_line("", "3/40"), "\n3/40");
/// ```
pub fn append_line(existing: &str, line: &str) -> String {
    let mut result = String::with_capacity(existing.len() + line.len() + 1);
    result.push_str(existing);
    result.push('\n');
    result.push_str(line);
    result
}

/// Chat line announcing a light gain.
///
/// # Examples
/// ```
/// use zodiac_types::formatting::format_light_gain;
/// assert_eq!(format_light_gain(16), "Light Intensity has increased by 16.");
/// ```
pub fn format_light_gain(intensity: u32) -> String {
    format!("Light Intensity has increased by {}.", intensity)
}

/// Message reported when a duty appears to grant bonus light.
///
/// # Examples
/// ```
/// use zodiac_types::formatting::format_bonus_detected;
/// assert_eq!(
///     format_bonus_detected("Pharos Sirius"),
///     "Light bonus detected on \"Pharos Sirius\""
/// );
/// ```
pub fn format_bonus_detected(duty_name: &str) -> String {
    format!("Light bonus detected on \"{}\"", duty_name)
}
