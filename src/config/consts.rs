// src/config/consts.rs

// Sheet source
pub const SHEET_ID: &str = "1Rdi7AdcFcNd2hCbvqUkmkO-WVxi1qjVZ9jlu_G4JPm4";
pub const DEFAULT_GID: &str = "0";
pub const ENV_SHEET_ID: &str = "BAND_CARDS_SHEET_ID";
pub const ENV_GID: &str = "BAND_CARDS_GID";

// Net
pub const EXPORT_URL_PREFIX: &str = "https://docs.google.com/spreadsheets/d/";
pub const USER_AGENT: &str = concat!("band_cards/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 20;

// Card artwork
pub const IMAGES_DIR: &str = "images";
pub const IMAGE_EXT: &str = "png";
pub const MISSING_CARD: &str = "missing-card.png";
pub const FALLBACK_OPACITY: f32 = 0.9;

// Grouping defaults
pub const UNNAMED_STUDENT: &str = "Unnamed";

// Tiers (descending; first match wins)
pub const TIER_BLUE: f64 = 200.0;
pub const TIER_GOLD: f64 = 150.0;
pub const TIER_SILVER: f64 = 100.0;
pub const TIER_BRONZE: f64 = 50.0;

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
// Exported pages sit next to `images/` so their relative asset paths resolve.
pub const DEFAULT_PAGE_FILE: &str = "achievements.html";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
pub const WINDOW_TITLE: &str = "Band Achievements";
