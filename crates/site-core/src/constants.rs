// Shared interaction tuning constants used by the web frontend and tests.

// Viewport breakpoints (logical px)
pub const SMALL_VIEWPORT_MAX: f32 = 480.0; // phones
pub const MEDIUM_VIEWPORT_MAX: f32 = 1024.0; // tablets / small laptops
pub const NARROW_LAYOUT_MAX: f32 = 768.0; // below this the carousels go static

// Starfield population per breakpoint
pub const STARS_SMALL: usize = 80;
pub const STARS_MEDIUM: usize = 160;
pub const STARS_LARGE: usize = 300;

// Star generation ranges
pub const STAR_RADIUS_MIN: f32 = 0.4;
pub const STAR_RADIUS_MAX: f32 = 1.6;
pub const STAR_DRIFT_X_MAX: f32 = 0.05; // px/frame, symmetric around 0
pub const STAR_RISE_MIN: f32 = 0.08; // px/frame upward
pub const STAR_RISE_MAX: f32 = 0.28;
pub const STAR_ALPHA_SEED_MIN: f32 = 0.08;
pub const STAR_ALPHA_SEED_MAX: f32 = 0.5;
pub const STAR_ALPHA_STEP_MIN: f32 = 0.0008;
pub const STAR_ALPHA_STEP_MAX: f32 = 0.003;

// Alpha oscillation band; the step sign flips on crossing, so a value may
// overshoot a bound by at most one step before turning around.
pub const STAR_ALPHA_FLOOR: f32 = 0.05;
pub const STAR_ALPHA_CEIL: f32 = 0.6;

// Carousel
pub const DEFAULT_TRACK_GAP: f32 = 18.0; // px, when computed style yields nothing

// Swipe: a release commits a navigation step only past this distance
pub const SWIPE_COMMIT_PX: f32 = 40.0;

// Timings (ms)
pub const RESIZE_DEBOUNCE_MS: i32 = 180;
pub const COPY_LABEL_RESET_MS: i32 = 1500;
pub const STATUS_CLEAR_MS: i32 = 3000;
pub const CONTACT_TIMEOUT_MS: i32 = 15_000;
