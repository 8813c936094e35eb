//! # Focus
//!
//! Client for the Focus school dashboard backend.
//!
//! The dashboard talks to a remote REST API for students, teachers, classes
//! and reporting data. When the API is down, or nobody is logged in, every
//! read is answered from a bundled demo dataset instead, with identical
//! search behaviour, so the dashboard keeps working offline.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── focus-core/       # Key-value session storage, serde helpers
//! ├── focus-config/     # Environment-driven configuration
//! ├── focus-models/     # Entities, DTOs, schedule views
//! ├── focus-client/     # Remote + fallback data access
//! └── focus-session/    # Login, role selection, persistence
//! src/
//! ├── cli/              # `focus` subcommands
//! ├── logging.rs        # Console + rolling JSON file logging
//! └── state.rs          # AppContext built once at startup
//! ```
//!
//! ## Session Lifecycle
//!
//! ```text
//! Restoring → Unauthenticated → (login) → AwaitingRole → (role) → Established
//!                   ↑                                                 │
//!                   └───────────────────── logout ────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! FOCUS_API_BASE_URL=http://localhost:9090/api
//! FOCUS_SESSION_DIR=storage/session
//! LOG_LEVEL=info
//! ```
//!
//! ```bash
//! focus login --email admin@focus.edu
//! focus students --query 10th
//! focus schedule --teacher 2
//! ```

pub mod cli;
pub mod logging;
pub mod state;

// Re-export workspace crates for convenience
pub use focus_client;
pub use focus_config;
pub use focus_core;
pub use focus_models;
pub use focus_session;
