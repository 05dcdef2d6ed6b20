// Front-end constants: DOM wiring, colors and frame stepping.

use bubbles_core::constants::TICK_HZ;

// Layout
pub const CANVAS_HEIGHT_PX: f64 = 560.0; // fixed; width follows the container
pub const FALLBACK_WIDTH_PX: f64 = 960.0;

// Colors and type
pub const BACKGROUND: &str = "#0b1220";
pub const LABEL_FILL: &str = "#0b1220";
pub const LABEL_SHADOW: &str = "rgba(0,0,0,0.55)";
pub const LABEL_SHADOW_BLUR: f64 = 6.0;
pub const LABEL_FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

// Frame stepping
pub const STEP_SEC: f32 = 1.0 / TICK_HZ;
pub const MAX_STEPS_PER_FRAME: u32 = 5; // drop backlog after a stalled tab

// Export
pub const EXPORT_BUTTON_TEXT: &str = "Export CSV & Reset";
pub const EXPORT_BUTTON_CLASS: &str = "bubbles-export";
pub const EXPORT_PASSPHRASE: Option<&str> = None; // Some("...") to prompt first
pub const EXPORT_PROMPT: &str = "Passphrase to export and reset votes";
