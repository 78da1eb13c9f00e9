//! Score audit: cross-checks the model's arithmetic against its own skill lists.
//!
//! The report is never rewritten. Discrepancies are logged so drift in the
//! external model shows up in the service logs.

use tracing::{debug, warn};

use crate::analysis::fuzzy::{fuzzy_match, DEFAULT_MATCH_THRESHOLD};
use crate::analysis::models::SkillAnalysis;

/// Allowed gap between the reported and recomputed score, in percentage points.
const SCORE_TOLERANCE: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreAudit {
    pub reported_score: u32,
    pub expected_score: u32,
    pub score_consistent: bool,
    pub score_out_of_range: bool,
    /// Matched skills with no fuzzy counterpart among `resume_skills`.
    pub unsupported_matches: Vec<String>,
}

impl ScoreAudit {
    pub fn is_clean(&self) -> bool {
        self.score_consistent && !self.score_out_of_range && self.unsupported_matches.is_empty()
    }
}

/// `round(100 * matched / jd_skills)`, or 0 when the JD yielded no skills.
pub fn expected_score(analysis: &SkillAnalysis) -> u32 {
    let total = analysis.jd_skills.len();
    if total == 0 {
        return 0;
    }
    (100.0 * analysis.matched_skills.len() as f64 / total as f64).round() as u32
}

pub fn audit_analysis(analysis: &SkillAnalysis) -> ScoreAudit {
    let expected = expected_score(analysis);
    let reported = analysis.score;

    let unsupported_matches = analysis
        .matched_skills
        .iter()
        .filter(|skill| !fuzzy_match(skill, &analysis.resume_skills, DEFAULT_MATCH_THRESHOLD))
        .cloned()
        .collect();

    ScoreAudit {
        reported_score: reported,
        expected_score: expected,
        score_consistent: reported.abs_diff(expected) <= SCORE_TOLERANCE,
        score_out_of_range: reported > 100,
        unsupported_matches,
    }
}

/// Runs the audit and logs every discrepancy.
pub fn log_audit(analysis: &SkillAnalysis) -> ScoreAudit {
    let audit = audit_analysis(analysis);
    if audit.is_clean() {
        debug!("Score audit passed (score {})", audit.reported_score);
        return audit;
    }

    if audit.score_out_of_range {
        warn!("Model reported score {} outside 0-100", audit.reported_score);
    }
    if !audit.score_consistent {
        warn!(
            "Model score {} disagrees with its skill lists (expected {} from {}/{} matched)",
            audit.reported_score,
            audit.expected_score,
            analysis.matched_skills.len(),
            analysis.jd_skills.len()
        );
    }
    if !audit.unsupported_matches.is_empty() {
        warn!(
            "Matched skills not found on resume side: {:?}",
            audit.unsupported_matches
        );
    }

    audit
}
