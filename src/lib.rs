//! A typed client for the TDLib JSON interface.
//!
//! Every object on the wire is a JSON object whose `@type` field names its exact shape.
//! This crate decodes such objects into Rust types:
//!
//! - a concrete object ([`Variant`]) is a struct with a fixed `@type`;
//! - an abstract type ([`Family`]) is an enum over its concrete objects, decoded by looking
//!   up `@type` in the family's [`Registry`];
//! - a request ([`Function`]) is a struct that knows its `@type` and the type it returns.
//!
//! [`Client`] sends requests over any [`Transport`] and decodes the responses.
//! An `error` response becomes [`Error::Remote`] before any decoding is attempted.
//! [`Mux`] is a transport over the engine's single stream of JSON objects.
//!
//! ```no_run
//! use tdcall::{Client, Mux, MuxOptions, enums::InternalLinkType, functions::GetInternalLinkType};
//! use tokio::process::Command;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let (mux, _updates) = Mux::from_command(&mut Command::new("tdjson-cli"), &MuxOptions::default())?;
//!     let client = Client::new(mux);
//!     let link = client
//!         .send(&GetInternalLinkType {
//!             link: "tg://socks?server=1.2.3.4&port=1080".to_string(),
//!         })
//!         .await?;
//!     if let InternalLinkType::Proxy(proxy) = link {
//!         println!("{}:{}", proxy.server, proxy.port);
//!     }
//!     Ok(())
//! }
//! ```
#[macro_use]
mod macros;

mod client;
pub mod codec;
mod envelope;
mod error;
pub mod int64;
mod mux;
mod payload;
mod registry;
mod transport;

pub mod enums;
pub mod functions;
pub mod types;

pub use client::*;
pub use codec::{Family, Function, Object, Variant};
pub use envelope::*;
pub use error::*;
pub use mux::*;
pub use payload::*;
pub use registry::*;
pub use transport::*;
