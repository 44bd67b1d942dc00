//! Configuration management for docshelf.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `DOCSHELF_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Example
//!
//! ```ignore
//! use docshelf::config::Config;
//!
//! // Parse from command line and environment
//! let config = Config::parse();
//!
//! println!("Listening on {}", config.bind_address());
//! println!("Documents in {}", config.data_dir.display());
//! ```
//!
//! # Environment Variables
//!
//! - `DOCSHELF_HOST` - Server bind address (default: 127.0.0.1)
//! - `DOCSHELF_PORT` - Server port (default: 3000)
//! - `DOCSHELF_DATA_DIR` - Document directory (default: ./data)
//! - `DOCSHELF_ADMIN_USERNAME` - Admin username (default: admin)
//! - `DOCSHELF_ADMIN_PASSWORD` - Admin password (required)

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default document directory.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default admin username.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

// =============================================================================
// CLI Arguments
// =============================================================================

/// docshelf - A flat-file document server.
///
/// Serves markdown and plain-text documents from a single directory. Anyone
/// can browse; creating, editing, and deleting documents requires signing in
/// with the configured admin credential.
#[derive(Parser, Debug, Clone)]
#[command(name = "docshelf")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "DOCSHELF_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "DOCSHELF_PORT")]
    pub port: u16,

    // =========================================================================
    // Storage Configuration
    // =========================================================================
    /// Directory holding the document files.
    ///
    /// Created on startup if it does not exist.
    #[arg(long, default_value = DEFAULT_DATA_DIR, env = "DOCSHELF_DATA_DIR")]
    pub data_dir: PathBuf,

    // =========================================================================
    // Authentication Configuration
    // =========================================================================
    /// Username of the admin account.
    #[arg(long, default_value = DEFAULT_ADMIN_USERNAME, env = "DOCSHELF_ADMIN_USERNAME")]
    pub admin_username: String,

    /// Password of the admin account.
    ///
    /// If not provided the server will fail to start.
    #[arg(long, env = "DOCSHELF_ADMIN_PASSWORD")]
    pub admin_password: Option<String>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.admin_username.is_empty() {
            return Err(
                "Admin username is required. Set --admin-username or DOCSHELF_ADMIN_USERNAME"
                    .to_string(),
            );
        }

        match self.admin_password {
            None => {
                return Err(
                    "Admin password is required. Set --admin-password or DOCSHELF_ADMIN_PASSWORD"
                        .to_string(),
                )
            }
            Some(ref password) if password.is_empty() => {
                return Err("Admin password must not be empty".to_string())
            }
            Some(_) => {}
        }

        if self.data_dir.as_os_str().is_empty() {
            return Err("Data directory is required. Set --data-dir or DOCSHELF_DATA_DIR".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the admin password, defaulting to empty (call validate() first).
    pub fn admin_password_or_empty(&self) -> &str {
        self.admin_password.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Tests
// =============================================================================
