//! Quantum Translator: a translation web service with automatic language
//! detection.
//!
//! The core of the crate is the request orchestration pipeline
//! ([`pipeline::Pipeline`]): language-code normalization ([`i18n`]),
//! detection with graceful degradation ([`detector`]), and dispatch to the
//! external translation backend ([`provider`]). The HTTP scaffold around it
//! lives in [`server`].

pub mod config;
pub mod detector;
pub mod i18n;
pub mod pipeline;
pub mod provider;
pub mod server;
