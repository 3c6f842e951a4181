//! End-to-end tests for the analysis pipeline

use std::io::Write;
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;
use textlens_core::language::Detection;
use textlens_core::{
    AnalysisResponse, Analyzer, AnalyzerConfig, LanguageDetector, ProfileRegistry, SentimentLabel,
};

const ENGLISH_ARTICLE: &str = "The city council approved a new plan for public parks on Monday. \
    The plan adds playgrounds, walking paths and benches across every district. \
    Council members said the parks would give families more space to relax. \
    Funding for the parks comes from a voter approved bond measure. \
    Construction is scheduled to start next spring and finish within two years. \
    Local residents have asked for better parks for more than a decade.";

/// Detector that always reports the same language
struct Always(&'static str);

impl LanguageDetector for Always {
    fn detect(&self, _text: &str) -> Detection {
        Detection::Detected(self.0.to_string())
    }
}

fn completed(response: AnalysisResponse) -> textlens_core::AnalysisResult {
    match response {
        AnalysisResponse::Completed(result) => result,
        AnalysisResponse::Rejected { error } => panic!("unexpected rejection: {error}"),
    }
}

#[test]
fn test_english_article() {
    let analyzer = Analyzer::new();
    let result = completed(analyzer.analyze(ENGLISH_ARTICLE));

    assert_eq!(result.language, "en");
    assert_eq!(result.keywords.len(), 5);
    assert_eq!(result.keywords[0], "the");
    assert!(result.keywords.contains(&"parks".to_string()));
    assert!(!result.summary.trim().is_empty());
    assert!(result.summary.len() < ENGLISH_ARTICLE.len());
    assert_eq!(result.character_count, ENGLISH_ARTICLE.chars().count());
}

#[test]
fn test_statistical_summary_keeps_document_order() {
    let analyzer = Analyzer::new();
    let result = completed(analyzer.analyze(ENGLISH_ARTICLE));

    let positions: Vec<usize> = ENGLISH_ARTICLE
        .split(". ")
        .filter_map(|sentence| result.summary.find(sentence.trim_end_matches('.')))
        .collect();
    assert_eq!(positions.len(), 2, "summary: {}", result.summary);
    assert!(positions[0] < positions[1]);
}

#[test]
fn test_positive_and_negative_reviews() {
    let analyzer = Analyzer::new();

    let positive = completed(analyzer.analyze(
        "This is a wonderful restaurant. The food was excellent and the staff were friendly.",
    ));
    assert_eq!(positive.sentiment, SentimentLabel::Positive);
    assert!(positive.polarity_score > 0.1);

    let negative = completed(analyzer.analyze(
        "The food was terrible and the service was awful. I will never return.",
    ));
    assert_eq!(negative.sentiment, SentimentLabel::Negative);
    assert!(negative.polarity_score < -0.1);
}

#[test]
fn test_rejected_response_json() {
    let analyzer = Analyzer::new();
    let json = serde_json::to_string(&analyzer.analyze("   \n ")).unwrap();
    assert_eq!(json, r#"{"error":"Text cannot be empty"}"#);
}

#[test]
fn test_disabled_statistical_stage_uses_fallback() {
    let config = AnalyzerConfig::builder()
        .statistical_summary(false)
        .build()
        .unwrap();
    let analyzer = Analyzer::builder().config(config).build();
    let result = completed(analyzer.analyze(ENGLISH_ARTICLE));

    // six sentences: first two mentioning "the", "for" or "parks"
    assert_eq!(
        result.summary,
        "The city council approved a new plan for public parks on Monday. \
         The plan adds playgrounds, walking paths and benches across every district."
    );
}

#[test]
fn test_custom_profile_enables_statistical_stage() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[metadata]
code = "sw"
name = "Swahili"

[terminators]
chars = [".", "!", "?"]

[stopwords]
words = ["na", "ya", "wa", "ni"]
"#
    )
    .unwrap();

    let profiles = ProfileRegistry::with_files(&[file.path()]).unwrap();
    assert!(profiles.get("sw").is_some());

    let analyzer = Analyzer::builder()
        .profiles(profiles)
        .detector(Always("sw"))
        .build();
    let text = "Simba ni mnyama mkubwa. Tembo ni mnyama mkubwa sana. Paka analala. \
                Mbwa anabweka. Ndege anaimba.";
    let result = completed(analyzer.analyze(text));
    assert_eq!(result.language, "sw");
    assert!(!result.summary.is_empty());
}

#[test]
fn test_unsupported_language_falls_back() {
    let analyzer = Analyzer::builder().detector(Always("sw")).build();
    let result = completed(analyzer.analyze("Paka analala. Mbwa anabweka. Ndege anaimba."));
    assert_eq!(result.language, "sw");
    assert_eq!(result.summary, "Paka analala. Mbwa anabweka.");
}

fn council_minutes(sentences: usize, template: &str) -> String {
    (0..sentences)
        .map(|i| template.replace("{i}", &i.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_long_texts_finish_promptly() {
    let analyzer = Analyzer::new();
    let cases = [
        // over the byte limit
        council_minutes(3000, "The council approved plan number {i} for parks and roads."),
        // under the byte limit, over the sentence limit
        council_minutes(1000, "Plan {i} passed."),
    ];

    for text in &cases {
        let started = Instant::now();
        let result = completed(analyzer.analyze(text));
        let elapsed = started.elapsed();

        assert!(
            elapsed < Duration::from_secs(10),
            "analysis of {} bytes took {elapsed:?}",
            text.len()
        );
        assert!(!result.summary.is_empty());
        assert!(result.summary.len() < text.len());
    }
}
