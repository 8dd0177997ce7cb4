//! Shared console output symbols

use console::Emoji;

/// Environment variable that forces ASCII symbols (set by `--no-emoji`)
pub const NO_EMOJI_ENV: &str = "NO_EMOJI";

/// Wrench emoji for the start of a run
pub const WRENCH: Emoji = Emoji("🔧", "*");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for a failed check
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Truck emoji for moving nodes
pub const TRUCK: Emoji = Emoji("🚚", ">");

/// Broom emoji for filtering fields
pub const BROOM: Emoji = Emoji("🧹", "~");

/// Info emoji for informational notes
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Floppy disk emoji for backups
pub const FLOPPY: Emoji = Emoji("💾", "#");

/// Whether emoji output is enabled for this process
pub fn emoji_enabled() -> bool {
    std::env::var_os(NO_EMOJI_ENV).is_none()
}

/// Render `emoji`, falling back to its ASCII form when emoji are disabled
///
/// # Examples
///
/// ```
/// use menu_refactor::fmt::{icon, CHECKMARK};
///
/// let symbol = icon(CHECKMARK);
/// assert!(symbol == "✅" || symbol == "[OK]");
/// ```
pub fn icon(emoji: Emoji<'_, '_>) -> String {
    if emoji_enabled() {
        emoji.to_string()
    } else {
        emoji.1.to_string()
    }
}
