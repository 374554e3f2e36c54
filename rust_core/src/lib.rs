//! Halftime Core - first-half goal likelihood filtering for daily football fixtures.
//!
//! This crate provides:
//! - Provider payload normalization into fixed model shapes
//! - Per-team indicators from recent history (half-time goal rate, shot proxy)
//! - Per-fixture expected goals with a shots fallback
//! - Threshold verdict and composite score per fixture
//! - A concurrent daily pipeline that ranks fixtures by score
//! - API-Football client

pub mod clients;
pub mod config;
pub mod enrich;
pub mod filter;
pub mod indicators;
pub mod models;
pub mod pipeline;
pub mod providers;

pub use config::ApiFootballConfig;
pub use enrich::{enrich_match, FixtureEvidence};
pub use filter::{evaluate, score_and_filter};
pub use models::{FilterResult, FilterVerdict, MatchRecord};
pub use pipeline::{rank_by_score, FilterPipeline, PipelineError};
pub use providers::{ApiFootballProvider, FetchError, FixtureDataProvider};
