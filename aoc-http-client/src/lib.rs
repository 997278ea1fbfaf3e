//! AOC HTTP Client Library
//!
//! Downloads personalized puzzle inputs from the Advent of Code website.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Session cookie sent as a sensitive header, temporary copies zeroized
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! let input = client.fetch_input(2022, 1, session)?;
//! std::fs::write("days/day_01/input.txt", input)?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{AocClient, AocClientBuilder};
pub use error::AocError;
