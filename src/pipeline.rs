//! Word lookup pipeline
//!
//! Runs search, homonym selection, details and paradigm fetches, and renders
//! the result. The steps are sequential because each depends on the previous
//! one.

use tracing::{debug, warn};

use crate::cache::{Cache, CacheError};
use crate::error::LookupError;
use crate::projector::{
    build_display_model, filter_by_language, parse_details, parse_paradigms, parse_search,
    select_homonym, SOURCE_LANG,
};
use crate::render::render;
use crate::source::{CachingSource, WordSource};

/// Options controlling a single lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// 1-based homonym to show
    pub homonym: usize,
    /// Show every form instead of the curated subset
    pub show_all: bool,
    /// Tab-separated output without header
    pub quiet: bool,
    /// Print the raw paradigm JSON instead of formatted forms
    pub json: bool,
    /// Ignore cached responses but still refresh the cache
    pub refresh: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            homonym: 1,
            show_all: false,
            quiet: false,
            json: false,
            refresh: false,
        }
    }
}

/// Looks up `word` through `source` and returns the text to print
pub async fn run(
    word: &str,
    options: &RunOptions,
    source: &dyn WordSource,
) -> Result<String, LookupError> {
    let search = parse_search(&source.search(word).await?)?;
    let candidates = filter_by_language(&search.words, SOURCE_LANG);
    if candidates.is_empty() {
        return Err(LookupError::NotFound(word.to_string()));
    }

    let selected = select_homonym(&candidates, options.homonym)?;
    debug!(
        word_id = selected.word_id,
        homonyms = candidates.len(),
        "Selected homonym"
    );

    let mut details = parse_details(&source.details(selected.word_id).await?)?;
    let paradigm_payload = source.paradigm(selected.word_id).await?;

    if options.json {
        return pretty_json(&paradigm_payload);
    }

    details.paradigms = parse_paradigms(&paradigm_payload)?;

    let headword = if selected.word_value.is_empty() {
        word
    } else {
        selected.word_value.as_str()
    };
    let model = build_display_model(
        headword,
        &details,
        options.homonym,
        candidates.len(),
        options.show_all,
    );

    Ok(render(&model, options.quiet))
}

/// Re-serializes a JSON payload with two-space indentation
fn pretty_json(payload: &[u8]) -> Result<String, LookupError> {
    let value: serde_json::Value = serde_json::from_slice(payload)?;
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}

/// Runs a lookup through the cache, closing it on every exit path
pub async fn lookup<S: WordSource>(
    word: &str,
    options: &RunOptions,
    upstream: S,
    cache: Option<Cache>,
) -> Result<String, LookupError> {
    let source = CachingSource::new(upstream, cache, options.refresh);
    let result = run(word, options, &source).await;

    if let Err(e) = source.close() {
        warn!(error = %e, "Failed to close cache");
    }

    result
}

/// Opens the default cache, degrading to no cache if that fails
pub fn open_default_cache() -> Option<Cache> {
    cache_or_none(Cache::open())
}

/// Keeps an opened cache, or logs the failure and runs without one
pub fn cache_or_none(opened: Result<Cache, CacheError>) -> Option<Cache> {
    match opened {
        Ok(cache) => Some(cache),
        Err(e) => {
            warn!(error = %e, "Cache unavailable, continuing without cache");
            None
        }
    }
}

/// Removes every entry from the default cache
pub fn clear_cache() -> Result<(), LookupError> {
    let cache = Cache::open()?;
    debug!(path = %cache.path().display(), "Clearing cache");
    let cleared = cache.clear();
    cache.close()?;
    cleared?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use tempfile::TempDir;

    const PUU_SEARCH: &str = r#"{"words":[
        {"wordId":1,"wordValue":"puu","lang":"est"},
        {"wordId":9,"wordValue":"puu","lang":"fin"},
        {"wordId":2,"wordValue":"puu","lang":"est"}
    ]}"#;

    const PUU_DETAILS: &str = r#"{
        "wordClass": "",
        "lexemes": [{
            "pos": [{"code": "s", "value": "nimisõna"}],
            "synonymLangGroups": [
                {"lang": "eng", "synonyms": [{"words": [
                    {"wordValue": "tree", "lang": "eng"},
                    {"wordValue": "wood", "lang": "eng"}
                ]}]}
            ]
        }]
    }"#;

    const PUU_PARADIGMS: &str = r#"[{
        "inflectionTypeNr": "22",
        "paradigmForms": [
            {"morphCode": "SgN", "value": "puu"},
            {"morphCode": "SgG", "value": "puu"},
            {"morphCode": "SgP", "value": "puud"},
            {"morphCode": "PlP", "value": "puid"}
        ]
    }]"#;

    /// Serves fixed payloads regardless of the query
    struct FixedSource {
        search: &'static str,
        details: &'static str,
        paradigm: Result<&'static str, StatusCode>,
    }

    impl FixedSource {
        fn puu() -> Self {
            Self {
                search: PUU_SEARCH,
                details: PUU_DETAILS,
                paradigm: Ok(PUU_PARADIGMS),
            }
        }
    }

    #[async_trait]
    impl WordSource for FixedSource {
        async fn search(&self, _term: &str) -> Result<Vec<u8>, SourceError> {
            Ok(self.search.as_bytes().to_vec())
        }

        async fn details(&self, _word_id: i64) -> Result<Vec<u8>, SourceError> {
            Ok(self.details.as_bytes().to_vec())
        }

        async fn paradigm(&self, _word_id: i64) -> Result<Vec<u8>, SourceError> {
            self.paradigm
                .map(|body| body.as_bytes().to_vec())
                .map_err(SourceError::Status)
        }
    }

    #[tokio::test]
    async fn test_run_renders_curated_forms() {
        let output = run("puu", &RunOptions::default(), &FixedSource::puu())
            .await
            .unwrap();

        assert!(output.starts_with("puu (noun, type 22)  [1 of 2"));
        assert!(output.contains("  English: tree, wood\n"));
        assert!(output.contains("ainsuse nimetav:"));
        assert!(output.trim_end().ends_with("puid"));
    }

    #[tokio::test]
    async fn test_run_quiet_output() {
        let options = RunOptions {
            quiet: true,
            ..RunOptions::default()
        };

        let output = run("puu", &options, &FixedSource::puu()).await.unwrap();

        assert_eq!(output, "SgN\tpuu\nSgG\tpuu\nSgP\tpuud\nPlP\tpuid\n");
    }

    #[tokio::test]
    async fn test_run_json_passes_paradigm_payload_through() {
        let options = RunOptions {
            json: true,
            ..RunOptions::default()
        };

        let output = run("puu", &options, &FixedSource::puu()).await.unwrap();

        let reparsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let original: serde_json::Value = serde_json::from_str(PUU_PARADIGMS).unwrap();
        assert_eq!(reparsed, original);
        assert!(output.contains("\n  {"), "Should be indented by two spaces");
        assert!(output.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_run_without_estonian_words_is_not_found() {
        let source = FixedSource {
            search: r#"{"words":[{"wordId":5,"wordValue":"tree","lang":"eng"}]}"#,
            ..FixedSource::puu()
        };

        let result = run("tree", &RunOptions::default(), &source).await;

        assert!(matches!(result, Err(LookupError::NotFound(ref w)) if w == "tree"));
    }

    #[tokio::test]
    async fn test_run_rejects_missing_homonym() {
        let options = RunOptions {
            homonym: 3,
            ..RunOptions::default()
        };

        let result = run("puu", &options, &FixedSource::puu()).await;

        assert!(matches!(
            result,
            Err(LookupError::IndexOutOfRange { index: 3, available: 2 })
        ));
    }

    #[tokio::test]
    async fn test_run_reports_malformed_payload() {
        let source = FixedSource {
            details: "not json",
            ..FixedSource::puu()
        };

        let result = run("puu", &RunOptions::default(), &source).await;

        assert!(matches!(result, Err(LookupError::MalformedPayload(_))));
    }

    #[tokio::test]
    async fn test_run_propagates_transport_errors() {
        let source = FixedSource {
            paradigm: Err(StatusCode::UNAUTHORIZED),
            ..FixedSource::puu()
        };

        let result = run("puu", &RunOptions::default(), &source).await;

        assert!(matches!(
            result,
            Err(LookupError::Transport(SourceError::Status(code))) if code == StatusCode::UNAUTHORIZED
        ));
    }

    #[tokio::test]
    async fn test_run_without_paradigms_prints_no_data() {
        let source = FixedSource {
            paradigm: Ok("[]"),
            ..FixedSource::puu()
        };

        let output = run("puu", &RunOptions::default(), &source).await.unwrap();

        assert_eq!(output, "no data available\n");
    }

    #[tokio::test]
    async fn test_lookup_without_cache() {
        let output = lookup("puu", &RunOptions::default(), FixedSource::puu(), None)
            .await
            .unwrap();

        assert!(output.starts_with("puu"));
    }

    #[tokio::test]
    async fn test_unopenable_cache_falls_back_to_no_cache() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let opened = Cache::open_at(blocker.join("cache.db"));
        assert!(matches!(opened, Err(CacheError::CreateDir { .. })));
        let cache = cache_or_none(opened);

        assert!(cache.is_none());
        let output = lookup("puu", &RunOptions::default(), FixedSource::puu(), cache)
            .await
            .unwrap();
        assert!(output.starts_with("puu"));
    }

    #[test]
    fn test_opened_cache_is_kept() {
        let temp_dir = TempDir::new().unwrap();

        let cache = cache_or_none(Cache::open_at(temp_dir.path().join("cache.db")));

        assert!(cache.is_some());
    }

    #[test]
    fn test_default_options_select_first_homonym() {
        let options = RunOptions::default();

        assert_eq!(options.homonym, 1);
        assert!(!options.show_all && !options.quiet && !options.json && !options.refresh);
    }
}
