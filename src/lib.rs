//! phishscope — URL legitimacy scanner.
//!
//! A URL is classified in three stages: a pure pre-filter (domain entropy and
//! public-suffix checks) that can short-circuit with a reason, a 30-column
//! integer feature extractor (lexical rules plus bounded network probes), and
//! a pluggable pretrained classifier behind the [`model::Classifier`] trait.
//!
//! ```no_run
//! use phishscope::{LinearModel, ScanConfig, ScanEngine};
//! use std::sync::Arc;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let engine = ScanEngine::new(ScanConfig::default(), Arc::new(LinearModel::baseline()))?;
//! let result = engine.classify("http://bit.ly/abc123").await?;
//! println!("{}", result.verdict);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod features;
pub mod model;
pub mod net;
pub mod prefilter;

pub use config::ScanConfig;
pub use domain::DomainInfo;
pub use engine::{Classification, ScanEngine, Verdict};
pub use features::{FeatureVector, FEATURE_DIM};
pub use model::{Classifier, LinearModel, ModelError};
pub use prefilter::FlagReason;
