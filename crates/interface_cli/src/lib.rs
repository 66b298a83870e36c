//! Terminal Interface Layer
//!
//! This crate puts a line-based front end on the in-memory registry.
//!
//! # Architecture
//!
//! - **Session**: login state and the role-gated operations of each role
//! - **Auth**: the permissions granted to each role
//! - **Menu**: main menu, registration, login and one dashboard per role
//! - **Config**: layered configuration for the `insurance-cli` binary
//!
//! # Example
//!
//! ```rust
//! use interface_cli::{Console, Session};
//! use infra_memory::SharedRegistry;
//!
//! let input = "3\n".as_bytes();
//! let mut console = Console::new(input, Vec::new(), Session::new(SharedRegistry::default()));
//! console.run().unwrap();
//!
//! let output = String::from_utf8(console.into_output()).unwrap();
//! assert!(output.contains("Goodbye!"));
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod menu;
pub mod session;

pub use auth::{has_permission, permissions_for, Permission};
pub use config::{CliConfig, LogFormat};
pub use error::{CliError, SessionError};
pub use menu::Console;
pub use session::{PolicySale, Session, SessionState};
