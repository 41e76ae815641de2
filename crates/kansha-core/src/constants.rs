/// Application constants
// ============================================================================
// Google OAuth2
// ============================================================================

/// Default token endpoint for service-account key files that omit `token_uri`
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// OAuth2 scope requested for the Sheets API
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Grant type for the JWT-bearer token exchange
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion (and access token) lifetime in seconds; Google caps this at one hour
pub const TOKEN_TTL_SECONDS: u64 = 3600;

// ============================================================================
// Google Sheets
// ============================================================================

/// Base URL of the Sheets v4 API
pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";

/// Default A1-notation range rows are appended after
pub const DEFAULT_SHEET_RANGE: &str = "Messages!A2";
