//! Stencil Domain - Pure value types and leaf helpers
//!
//! This crate defines the placeholder model used by the resolver together
//! with small stateless helpers (byte sizes, durations, network checks,
//! HTTP methods, text, ranges, encoding).
//! All types here are pure Rust with no I/O dependencies.

pub mod bytes;
pub mod date_layout;
pub mod duration;
pub mod encoding;
pub mod env_value;
pub mod error;
pub mod http;
pub mod network;
pub mod placeholder;
pub mod ranges;
pub mod text;

pub use bytes::{format_bytes, parse_bytes};
pub use date_layout::DateLayout;
pub use duration::{format_duration, parse_duration};
pub use encoding::{base64_decode, base64_encode, deep_copy, deep_copy_into, is_base64, is_json};
pub use env_value::{parse_bool, parse_int};
pub use error::{DomainError, DomainResult};
pub use http::{HttpMethod, find_invalid_methods, normalize_http_methods};
pub use network::{AddressKind, classify_address, is_cidr, is_ip_address, is_valid_listen_addr};
pub use placeholder::{EnvSyntax, Placeholder, PlaceholderKind, ResolvedPlaceholder, Substitution};
pub use ranges::{MAX_RANGE_VALUES, parse_range, parse_ranges};
pub use text::{
    has_whitespace, normalize_url_path, remove_duplicates, route_path, slug, truncate_text,
    url_path,
};
