//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, default endpoints and
//! environment variable names.

/// Default upstream API root. Paths such as `/player-search` are appended to it.
pub const DEFAULT_API_DOMAIN: &str = "https://r6stats.com/api";

/// Default base URL for rank badge artwork
pub const DEFAULT_RANK_IMAGE_BASE_URL: &str = "https://cdn.r6stats.com/seasons/ranks";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Name of the log file written inside the log directory
pub const LOG_FILE_NAME: &str = "siege_profile.log";

/// Rank lookup fallbacks
pub mod rank {
    /// Badge name used when a rank index cannot be resolved
    pub const UNKNOWN_RANK_NAME: &str = "Unknown";

    /// Image file used when a rank index cannot be resolved
    pub const UNRANKED_IMAGE: &str = "unranked.svg";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "SIEGE_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "SIEGE_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "SIEGE_HTTP_TIMEOUT";

    /// Environment variable toggling strict seasonal/region enrichment
    pub const STRICT_ENRICHMENT: &str = "SIEGE_STRICT_ENRICHMENT";
}

/// Retry configuration for the HTTP transport
pub mod retry {
    /// Maximum number of retries after the first attempt
    pub const MAX_RETRIES: u32 = 3;

    /// Initial backoff delay (milliseconds), doubled after every retry
    pub const BASE_DELAY_MS: u64 = 250;
}

/// Summary rendering limits
pub mod display {
    /// Number of operators listed in the profile summary
    pub const TOP_OPERATORS: usize = 5;

    /// Placeholder printed for absent values
    pub const MISSING_VALUE: &str = "-";
}
