//! `ntrack` is a collection of libraries for reading particle track data
//! from neutronics simulations
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[cfg(feature = "ptrac")]
#[cfg_attr(docsrs, doc(cfg(feature = "ptrac")))]
#[doc(inline)]
pub use ntrack_ptrac as ptrac;
