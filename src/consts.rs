//! Shared selectors, class names and numeric constants.

// ── Hooks ───────────────────────────────────────────────────────

/// Header that gains the elevated state once the page scrolls.
pub const HEADER_SELECTOR: &str = "[data-elevate]";
/// Element whose text becomes the current calendar year.
pub const YEAR_SELECTOR: &str = "#year";
pub const NAV_TOGGLE_SELECTOR: &str = ".nav__toggle";
pub const NAV_MENU_SELECTOR: &str = ".nav__menu";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const GLOW_SELECTOR: &str = "#glow";
pub const PROJECT_CARD_SELECTOR: &str = ".project";
/// Only the first match is tilted.
pub const TILT_CARD_SELECTOR: &str = ".card3d";
pub const PARTICLE_CANVAS_SELECTOR: &str = "#fx";
pub const CONTACT_FORM_SELECTOR: &str = "[data-contact-form]";
pub const CONTACT_STATUS_SELECTOR: &str = "#formStatus";
pub const CONTACT_NAME_SELECTOR: &str = "#name";
pub const CONTACT_EMAIL_SELECTOR: &str = "#email";
pub const CONTACT_MESSAGE_SELECTOR: &str = "#message";

/// Attribute on the contact form carrying the destination address.
pub const CONTACT_TO_ATTR: &str = "data-to";
/// Attribute on `<body>` carrying an optional JSON config object.
pub const CONFIG_ATTR: &str = "data-fx-config";

// ── Presentation classes ────────────────────────────────────────

pub const ELEVATED_CLASS: &str = "is-elevated";
pub const NAV_OPEN_CLASS: &str = "is-open";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const POINTER_CLASS: &str = "is-pointer";

// ── Tilt ────────────────────────────────────────────────────────

/// Degrees of rotation per unit of normalized offset from the card centre.
pub const TILT_GAIN_DEG: f64 = 12.0;
/// Rotation is clamped to ±this many degrees on each axis.
pub const TILT_MAX_DEG: f64 = 9.0;
/// Vertical lift applied while tilted, in CSS pixels.
pub const TILT_LIFT_PX: f64 = -1.0;

// ── Particles ───────────────────────────────────────────────────

pub const PARTICLE_MIN_COUNT: usize = 38;
pub const PARTICLE_MAX_COUNT: usize = 70;
/// One particle per this many CSS pixels of viewport width.
pub const PARTICLE_SPACING_PX: f64 = 22.0;
/// Particles wrap once they drift this far outside the viewport.
pub const PARTICLE_WRAP_MARGIN: f64 = 10.0;
/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 125.0;
/// Line alpha for two coincident particles.
pub const LINK_MAX_ALPHA: f64 = 0.08;
pub const LINK_WIDTH_PX: f64 = 1.0;
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

/// Particle fill colour as `r,g,b`.
pub const PARTICLE_RGB: &str = "168,85,247";
/// Link stroke colour as `r,g,b`.
pub const LINK_RGB: &str = "236,72,153";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Contact ─────────────────────────────────────────────────────

pub const STATUS_OPENING: &str = "Opening your email app…";
