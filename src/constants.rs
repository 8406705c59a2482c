/// Effect tuning constants.
///
/// Timings are milliseconds, distances CSS pixels. Selectors name the page
/// elements each effect binds to; an effect whose selector matches nothing
/// is skipped.
// Device gate
pub const MOBILE_MAX_VIEWPORT_PX: f64 = 768.0;
pub const MOBILE_UA_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

// Pointer follower
pub const FOLLOWER_SMOOTHING: f32 = 0.30; // fraction of remaining distance per frame
pub const FOLLOWER_HOVER_SCALE: f32 = 1.3;
pub const FOLLOWER_REVEAL_DELAY_MS: i32 = 100;
pub const FOLLOWER_SELECTOR: &str = ".cursor-follower";
pub const FOLLOWER_HOVER_SELECTOR: &str =
    "a, button, .nav-link, .cta-button, .feature-card, .reel-card, .dropzone";

// Theme
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_TRANSITION: &str = "all 0.3s ease";
pub const THEME_TRANSITION_MS: i32 = 300;

// Parallax
pub const PARALLAX_RATE: f64 = -0.5;
pub const BLOB_SPEED_BASE: f64 = 0.5;
pub const BLOB_SPEED_STEP: f64 = 0.1;
pub const BLOB_ROTATE_PER_PX: f64 = 0.1; // degrees per scrolled pixel
pub const MESSAGE_SPEED_BASE: f64 = 0.2;
pub const MESSAGE_SPEED_STEP: f64 = 0.05;
pub const BLOB_SELECTOR: &str = ".liquid-blob";
pub const MESSAGE_SELECTOR: &str = ".floating-message";

// Floating message ambient sparkle
pub const SPARKLE_INTERVAL_MS: i32 = 2000;
pub const SPARKLE_CHANCE: f64 = 0.3;
pub const SPARKLE_HOLD_MS: i32 = 500;
pub const MESSAGE_CLICK_RESTORE_MS: i32 = 300;

// Bursts
pub const BURST_LAUNCH_DELAY_MS: i32 = 50;
pub const MESSAGE_BURST_COUNT: usize = 8;
pub const MESSAGE_BURST_LIFETIME_MS: i32 = 600;
pub const MESSAGE_BURST_DISTANCE: f32 = 100.0;
pub const BUTTON_BURST_COUNT: usize = 15;
pub const BUTTON_BURST_LIFETIME_MS: i32 = 800;
pub const BUTTON_BURST_DISTANCE_MIN: f32 = 150.0;
pub const BUTTON_BURST_DISTANCE_SPAN: f32 = 100.0;
pub const BUTTON_GLYPHS: [&str; 5] = ["✨", "🌟", "💫", "⭐", "🎆"];
pub const MESSAGE_GLYPH: &str = "✨";
pub const WAND_GLYPH: &str = "🪶";
pub const WAND_GROW_DELAY_MS: i32 = 100;
pub const WAND_HOLD_MS: i32 = 300;
pub const WAND_SHRINK_MS: i32 = 500;
pub const BURST_BUTTON_SELECTOR: &str = ".cta-button, .submit-btn";
pub const BURST_CLASS: &str = "fx-burst";

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_OFFSET_PX: i32 = 30;
pub const REVEAL_SELECTOR: &str = ".feature-card, .showcase-image, .reel-card, .upload-container";

// Typewriter
pub const TYPEWRITER_START_DELAY_MS: u32 = 500;
pub const TYPEWRITER_CHAR_INTERVAL_MS: u32 = 100;
pub const TYPEWRITER_CARET: &str = "2px solid var(--accent-color)";
pub const TITLE_SELECTOR: &str = ".hero-title";

// Card tilt
pub const TILT_DIVISOR: f64 = 10.0;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_LIFT_PX: u32 = 10;
pub const CARD_SELECTOR: &str = ".feature-card, .reel-card";

// Navbar proximity
pub const NAV_EFFECT_RADIUS: f32 = 100.0;
pub const NAV_MAX_SCALE_BOOST: f32 = 0.15;
pub const NAV_LINK_GLOW_PX: f32 = 30.0;
pub const NAV_LINK_BRIGHTNESS_BOOST: f32 = 0.3;
pub const NAV_BRAND_GLOW_PX: f32 = 35.0;
pub const NAV_BRAND_BRIGHTNESS_BOOST: f32 = 0.4;
pub const NAVBAR_SELECTOR: &str = ".glass-nav";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_BRAND_SELECTOR: &str = ".navbar-brand";

// Anchors and forms
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const LOADING_CLASS: &str = "loading";
