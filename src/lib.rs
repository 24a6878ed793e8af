//! Sanskrit-aware scripture retrieval service.
//!
//! A question goes through one pipeline:
//!
//! ```text
//! question ─→ semantic analysis ─→ query expansion (lexicon, six passes)
//!          ─→ hosted retrieval ─→ verse extraction ─→ adaptive filtering
//!          ─→ theme clustering ─→ response
//! ```
//!
//! The lexicon merges three sources (document metadata, a classical synonym
//! corpus, a built-in fallback table) at startup and stays immutable for the
//! life of the process. Retrieval talks to a hosted search/answer service;
//! when its payload yields nothing parsable, a canonical verse set stands in.

pub mod api;
pub mod cluster;
pub mod config;
pub mod error;
pub mod expand;
pub mod extract;
pub mod filter;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod retrieval;
pub mod scoring;
pub mod semantics;
pub mod state;
