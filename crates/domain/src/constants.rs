//! Application constants
//!
//! Endpoint paths, storage keys and defaults shared by the client and the
//! session layer. Paths are relative to the configured base URL and keep the
//! trailing-slash conventions the API expects.

// Connection defaults
pub const DEFAULT_API_BASE_URL: &str = "https://orionai.runagent.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "io.runagent.orion";
pub const DEFAULT_SESSION_FILE: &str = ".orion/session.json";

// Storage keys
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const LANGUAGE_KEY: &str = "language";

// Auth endpoints
pub const LOGIN_PATH: &str = "/api/v1/users/login/";
pub const REGISTER_PATH: &str = "/api/v1/users/register";
pub const CURRENT_USER_PATH: &str = "/api/v1/users/me";
pub const LOGOUT_PATH: &str = "/api/v1/users/logout";
pub const GOOGLE_LOGIN_PATH: &str = "/api/v1/users/login/google";
pub const APPLE_LOGIN_PATH: &str = "/api/v1/users/login/apple";
pub const TOKEN_REFRESH_PATH: &str = "/api/v1/token/refresh/";

// Resource roots
pub const BRANDS_PATH: &str = "/api/v1/brands/";
pub const BRAND_PLATFORMS_PATH: &str = "/api/v1/brands/platforms/";
pub const DATA_SOURCES_PATH: &str = "/api/v1/brands/data-sources/";
pub const CONTENT_PATH: &str = "/api/v1/content/";
pub const CONTENT_TYPES_PATH: &str = "/api/v1/content/content-types/";
pub const CONTENT_ASSETS_PATH: &str = "/api/v1/content/assets/";
pub const CONTENT_SETTINGS_PATH: &str = "/api/v1/content/settings/";
pub const GENERATE_IMAGE_PATH: &str = "/api/v1/content/generate/image-from-text/";
pub const GENERATE_VIDEO_PATH: &str = "/api/v1/content/generate/video-from-images/";

// Session error fallbacks
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
