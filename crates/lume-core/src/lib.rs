//! # lume-core
//!
//! Sits between a native windowing/input layer and a scripted host.
//!
//! - [`translator`] drains a native event queue and emits at most one
//!   [`event::NormalizedEvent`] per poll.
//! - [`fuzzy`] scores approximate, in-order subsequence matches for
//!   interactive list filtering.
//! - [`cursor`] memoizes native pointer shapes.
//! - [`fs`], [`clock`], [`dialog`], and [`platform`] are thin host-callable
//!   forwarders to the platform.
//!
//! Native layers plug in through the traits in [`source`], [`cursor`], and
//! [`platform`]; `lume-term` provides a terminal implementation.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod clock;
pub mod cursor;
pub mod dialog;
pub mod event;
pub mod fs;
pub mod fuzzy;
pub mod platform;
pub mod source;
pub mod translator;

pub use event::NormalizedEvent;
pub use fuzzy::{fuzzy_match, rank};
pub use translator::EventTranslator;
