//! # protoc-gen-twirp-js
//!
//! Library for the `protoc-gen-twirp_js` plugin, which generates Twirp
//! JavaScript RPC clients from protobuf service definitions.
//!
//! The binary speaks the standard protoc plugin protocol: a
//! `CodeGeneratorRequest` on stdin, a `CodeGeneratorResponse` on stdout.
//! Everything in between is a single deterministic pass over the request.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`selector`] - Picks the generation targets out of the request
//! - [`naming`] - Identifier derivation for generated client code
//! - [`comments`] - Lookup of leading doc comments by descriptor path
//! - [`emitter`] - Line-oriented output accumulator
//! - [`generator`] - Walks services and methods and emits client code
//! - [`error`] - Error types and handling

pub mod comments;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod naming;
pub mod selector;

// Re-export main types for convenience
pub use comments::CommentIndex;
pub use emitter::Emitter;
pub use error::{CliError, CliResult};
pub use generator::{ClientGenerator, GeneratedFile, GenerationOutput};
pub use selector::{files_to_generate, Selection};

/// Version marker stamped into generated file headers and handed to the
/// Twirp runtime constructor in emitted code.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
