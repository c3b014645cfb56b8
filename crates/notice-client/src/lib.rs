#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust HTTP client for the Simple Notification API
//!
//! Destinations, groups and routings are all stored as "common service
//! items" behind one collection endpoint. The transport stack bridges the
//! gap between that generic API and the three resource kinds:
//!
//! - list requests get a JSON `Provider.Class` filter as their query string
//! - `null` icons in item responses are rewritten to `{}` so responses
//!   decode into strict types
//!
//! ```no_run
//! use notice_client::{ApiClient, DestinationApi, DestinationOp, TransportOptions};
//!
//! # async fn run() -> notice_client::Result<()> {
//! let client = ApiClient::new(notice_client::DEFAULT_API_ROOT_URL, &TransportOptions::default())
//!     .expect("valid client");
//! let destinations = DestinationOp::new(client).list().await?;
//! println!("{} destinations", destinations.total);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod context;
pub mod error;
pub mod layers;
pub mod ops;
pub mod transport;
pub mod types;

pub use client::{ApiClient, DEFAULT_API_ROOT_URL};
pub use context::ProviderClass;
pub use error::{ApiError, Error, Result, TransportError};
pub use ops::{
    DestinationApi, DestinationOp, GroupApi, GroupOp, HistoryApi, HistoryOp, ItemMeta, RoutingApi, RoutingOp,
    SendNotificationMessageApi, SendNotificationMessageOp,
};
pub use transport::{Credentials, ReqwestTransport, Transport, TransportOptions};
pub use types::*;
