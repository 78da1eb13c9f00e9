//! Skill Analyzer: one prompt, one model call, one JSON parse.

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::analysis::audit::log_audit;
use crate::analysis::models::{AnalysisFailure, AnalysisOutcome, SkillAnalysis};
use crate::analysis::prompts::{build_skill_analysis_prompt, ANALYSIS_TEMPERATURE};
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};

/// Compares a resume against a job description via the external model.
///
/// Never returns an error: transport failures, API errors and unparseable
/// replies all become `AnalysisOutcome::Failed`.
pub async fn analyze_skills(
    resume_text: &str,
    jd_text: &str,
    generator: &dyn TextGenerator,
) -> AnalysisOutcome {
    info!(
        "Analyzing skills (resume: {} chars, job description: {} chars)",
        resume_text.chars().count(),
        jd_text.chars().count()
    );

    match request_analysis(resume_text, jd_text, generator).await {
        Ok(report) => {
            // Audited only when the reply fits the schema; the JSON goes back untouched.
            match SkillAnalysis::deserialize(&report) {
                Ok(analysis) => {
                    log_audit(&analysis);
                }
                Err(e) => warn!("Reply does not follow the report schema, audit skipped: {e}"),
            }
            AnalysisOutcome::Report(report)
        }
        Err(e) => {
            error!("Error during skill analysis call or processing: {e}");
            AnalysisOutcome::Failed(AnalysisFailure::new(e.to_string()))
        }
    }
}

async fn request_analysis(
    resume_text: &str,
    jd_text: &str,
    generator: &dyn TextGenerator,
) -> Result<Value, LlmError> {
    let prompt = build_skill_analysis_prompt(resume_text, jd_text);
    let reply = generator.generate(&prompt, ANALYSIS_TEMPERATURE).await?;
    parse_analysis_reply(&reply)
}

/// Strips Markdown fences and parses the reply as JSON. The shape is left to the model.
pub fn parse_analysis_reply(reply: &str) -> Result<Value, LlmError> {
    Ok(serde_json::from_str(strip_json_fences(reply))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubGenerator;
    use serde_json::json;

    const REPLY: &str = r#"{
        "jd_skills": ["Python", "AWS", "Kubernetes"],
        "matched_skills": ["Python", "AWS"],
        "missing_skills": ["Kubernetes"],
        "resume_skills": ["Python", "AWS", "Git"],
        "score": 67,
        "suggestions_for_improvements": "Add container orchestration experience."
    }"#;

    fn expect_report(outcome: AnalysisOutcome) -> Value {
        match outcome {
            AnalysisOutcome::Report(r) => r,
            AnalysisOutcome::Failed(f) => panic!("unexpected failure: {f:?}"),
        }
    }

    fn expect_failure(outcome: AnalysisOutcome) -> AnalysisFailure {
        match outcome {
            AnalysisOutcome::Failed(f) => f,
            AnalysisOutcome::Report(r) => panic!("unexpected report: {r:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_reply_parsed() {
        let stub = StubGenerator::replying(REPLY);
        let report = expect_report(analyze_skills("resume", "jd", &stub).await);
        assert_eq!(report["score"], 67);
        assert_eq!(report["missing_skills"], json!(["Kubernetes"]));
    }

    #[tokio::test]
    async fn test_fenced_reply_matches_plain_reply() {
        let plain = expect_report(analyze_skills("r", "j", &StubGenerator::replying(REPLY)).await);
        let fenced_reply = format!("```json\n{REPLY}\n```");
        let fenced =
            expect_report(analyze_skills("r", "j", &StubGenerator::replying(&fenced_reply)).await);
        assert_eq!(plain, fenced);
    }

    #[tokio::test]
    async fn test_prompt_and_temperature_sent_once() {
        let stub = StubGenerator::replying(REPLY);
        analyze_skills("RUST DEVELOPER CV", "SENIOR RUST ROLE", &stub).await;

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (prompt, temperature) = &calls[0];
        assert!(prompt.contains("RUST DEVELOPER CV"));
        assert!(prompt.contains("SENIOR RUST ROLE"));
        assert!((temperature - 0.2).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_malformed_reply_becomes_failure_record() {
        let stub = StubGenerator::replying("Sorry, I cannot help with that.");
        let failure = expect_failure(analyze_skills("r", "j", &stub).await);
        assert_eq!(failure.error, "Could not process skill analysis");
        assert!(failure.details.starts_with("JSON parse error"));
    }

    #[tokio::test]
    async fn test_reply_missing_schema_fields_passes_through() {
        let stub = StubGenerator::replying(r#"{"jd_skills": [], "score": 0}"#);
        let report = expect_report(analyze_skills("r", "j", &stub).await);
        assert_eq!(report, json!({"jd_skills": [], "score": 0}));
    }

    #[tokio::test]
    async fn test_off_schema_values_and_extra_keys_pass_through() {
        let reply = r#"{
            "jd_skills": ["Python"],
            "matched_skills": ["Python"],
            "missing_skills": [],
            "resume_skills": ["Python"],
            "score": "100",
            "suggestions_for_improvements": ["Add metrics", "Mention AWS"],
            "seniority": "senior"
        }"#;
        let stub = StubGenerator::replying(reply);
        let report = expect_report(analyze_skills("r", "j", &stub).await);
        assert_eq!(report, serde_json::from_str::<Value>(reply).unwrap());
    }

    #[test]
    fn test_parse_reply_keeps_float_score() {
        let reply = REPLY.replace("\"score\": 67", "\"score\": 100.0");
        let report = parse_analysis_reply(&reply).unwrap();
        assert_eq!(report["score"], json!(100.0));
        assert_eq!(report["jd_skills"], json!(["Python", "AWS", "Kubernetes"]));
    }

    #[tokio::test]
    async fn test_api_error_becomes_failure_record() {
        let stub = StubGenerator::failing(429);
        let failure = expect_failure(analyze_skills("r", "j", &stub).await);
        assert_eq!(failure.details, "API error (status 429): quota exceeded");
    }

    #[test]
    fn test_parse_reply_with_bare_fence() {
        let reply = format!("```\n{REPLY}\n```");
        assert_eq!(parse_analysis_reply(&reply).unwrap()["score"], 67);
    }
}
