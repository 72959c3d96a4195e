//! Constants used throughout the Spinup wizard

/// Default project name offered by the first prompt
pub const DEFAULT_PROJECT_NAME: &str = "laravel";

/// Extensions baked into every image regardless of user selection
pub const DEFAULT_PHP_EXTENSIONS: &[&str] = &[
    "ctype", "curl", "dom", "fileinfo", "filter", "hash", "mbstring", "mysqli",
    "opcache", "openssl", "pcntl", "pcre", "pdo_mysql", "pdo_pgsql", "redis",
    "session", "tokenizer", "xml", "zip",
];

/// Reference documentation for available PHP extensions
pub const PHP_EXTENSIONS_DOCS_URL: &str =
    "https://serversideup.net/docker-php/available-extensions";

/// Maximum accepted length for the server contact email
pub const MAX_SERVER_CONTACT_LENGTH: usize = 255;

/// Configuration key holding the selectable Docker network names
pub const DOCKER_NETWORKS_KEY: &str = "docker_networks";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
