use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Message carried in `error` whenever the analysis round trip fails.
pub const ANALYSIS_FAILED: &str = "Could not process skill analysis";

/// Typed view of a report that follows the prompt schema, used by the score audit.
///
/// The client always receives the model's JSON as returned; this view is only
/// built when the reply happens to fit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub jd_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub resume_skills: Vec<String>,
    /// Percentage 0 – 100, computed by the model.
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u32,
    pub suggestions_for_improvements: String,
}

/// Accepts `67` and `67.0`; rejects fractions, negatives and strings.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_u64() {
        return u32::try_from(n).map_err(de::Error::custom);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) => Ok(f as u32),
        _ => Err(de::Error::custom(format!("invalid score {number}"))),
    }
}

/// Returned with HTTP 200 when the model call or reply parsing fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
    pub details: String,
}

impl AnalysisFailure {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            error: ANALYSIS_FAILED.to_string(),
            details: details.into(),
        }
    }
}

/// Either shape is sent to the client as-is; callers inspect the body for `error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(Value),
    Failed(AnalysisFailure),
}

impl AnalysisOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisOutcome::Failed(_))
    }
}
