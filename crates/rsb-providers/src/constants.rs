//! Provider Constants
//!
//! Constants specific to provider implementations.

// ============================================================================
// APPLOZIC CONSTANTS
// ============================================================================

/// Fixed origin of the Applozic REST API
pub const APPLOZIC_BASE_URL: &str = "https://apps.applozic.com";

/// Group info endpoint
pub const APPLOZIC_GROUP_INFO_PATH: &str = "/rest/ws/group/v2/info";

/// User profile update endpoint
pub const APPLOZIC_USER_UPDATE_PATH: &str = "/rest/ws/user/update";

/// Application key header (`Application-Key`)
pub const HEADER_APPLICATION_KEY: &str = "application-key";

/// Per-request user identity header for profile updates (`Of-User-Id`)
pub const HEADER_OF_USER_ID: &str = "of-user-id";

/// Body status value signalling a failed operation
pub const APPLOZIC_STATUS_ERROR: &str = "error";

// ============================================================================
// DISCOURSE CONSTANTS
// ============================================================================

/// API key header (`Api-Key`)
pub const HEADER_DISCOURSE_API_KEY: &str = "api-key";

/// API username header (`Api-Username`)
pub const HEADER_DISCOURSE_API_USERNAME: &str = "api-username";

/// Members requested per page when listing a group
pub const DISCOURSE_MEMBERS_PAGE_SIZE: usize = 100;

/// Pixel size substituted into avatar templates
pub const DISCOURSE_AVATAR_SIZE: u32 = 240;

/// Placeholder inside Discourse avatar templates
pub const DISCOURSE_AVATAR_SIZE_PLACEHOLDER: &str = "{size}";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client maximum idle connections per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP client idle connection timeout in seconds
pub const HTTP_CLIENT_IDLE_TIMEOUT_SECS: u64 = 90;
