use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::similarity::rate::RateParams;
use crate::text::stopwords::StopWordList;
use crate::text::traits::SegmentMode;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Every setting has a
/// default, so an empty environment reproduces the standard scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Segmentation mode (PAPERCHECK_SEGMENT_MODE, default precise)
    pub segment_mode: SegmentMode,
    /// Stop-word list (PAPERCHECK_STOP_WORDS, default core)
    pub stop_words: StopWordList,
    /// Chunking and weighting thresholds
    pub rate: RateParams,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set-but-malformed keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = RateParams::default();

        let config = Self {
            segment_mode: parse_var(&lookup, "PAPERCHECK_SEGMENT_MODE")?.unwrap_or_default(),
            stop_words: parse_var(&lookup, "PAPERCHECK_STOP_WORDS")?.unwrap_or_default(),
            rate: RateParams {
                chunk_size: parse_var(&lookup, "PAPERCHECK_CHUNK_SIZE")?
                    .unwrap_or(defaults.chunk_size),
                chunk_threshold: parse_var(&lookup, "PAPERCHECK_CHUNK_THRESHOLD")?
                    .unwrap_or(defaults.chunk_threshold),
                long_form_threshold: parse_var(&lookup, "PAPERCHECK_LONG_FORM_THRESHOLD")?
                    .unwrap_or(defaults.long_form_threshold),
            },
        };

        if config.rate.chunk_size == 0 {
            anyhow::bail!("PAPERCHECK_CHUNK_SIZE must be greater than zero");
        }

        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("invalid value for {key}: '{raw}'"))
}
