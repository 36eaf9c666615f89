//! sakura-secret - Fetch secrets from Sakura Cloud Secret Manager.
//!
//! Secrets are unveiled by calling the `usacloud` CLI, which handles
//! authentication. Each name becomes one `usacloud rest request` call and
//! a batch stops at the first failure.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── get           # Print secret values
//! │   ├── run           # Run with injected secrets
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── request       # LookupRequest validation
//!     ├── broker/       # Broker trait
//!     │   └── usacloud  # usacloud implementation
//!     ├── response      # Envelope decoding
//!     ├── resolver      # Ordered, fail-fast batch lookup
//!     ├── binding       # VAR=secret mappings for `run`
//!     └── config        # .sakura-secret.toml defaults
//! ```
//!
//! # Example
//!
//! ```no_run
//! use sakura_secret::{LookupRequest, Resolver, Usacloud};
//!
//! let request = LookupRequest::new(["db-password", "api-token"])
//!     .vault_id("123456789012")
//!     .zone("is1b");
//! let result = Resolver::new(Usacloud::new()).lookup(&request)?;
//! assert_eq!(result.len(), 2);
//! # Ok::<(), sakura_secret::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::broker::{Broker, BrokerCommand, Usacloud};
pub use crate::core::request::LookupRequest;
pub use crate::core::resolver::{lookup, LookupResult, Resolver};
