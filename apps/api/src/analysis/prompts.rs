// Prompt for the resume vs job description skills analysis.

/// Sampling temperature for analysis calls. Low to keep lists and scores stable.
pub const ANALYSIS_TEMPERATURE: f32 = 0.2;

/// Replace `{resume_text}` and `{jd_text}` before sending.
pub const SKILL_ANALYSIS_PROMPT_TEMPLATE: &str = r#"
Analyze the following resume against the job description.

1. Extract a bullet-point list of skills mentioned in the job description as "jd_skills".
2. Extract a bullet-point list of skills mentioned in the resume as "resume_skills".
3. From the jd_skills, identify the "matched_skills" that are also present (or closely related) in the resume_skills.
4. Identify the "missing_skills" that are in jd_skills but not in resume_skills.
5. Calculate the "score" as the percentage of matched_skills over total jd_skills (rounded to nearest integer).
6. Based on the missing_skills and the overall job description, provide concrete "suggestions_for_improvements" for the candidate to better align their resume or skills with the job requirements. This should be a concise paragraph.

Provide the output *only* as a JSON object in the following format:
{
    "jd_skills": [list of bullet-point JD skills],
    "matched_skills": [list of bullet-point skills matched from the resume],
    "missing_skills": [list of bullet-point skills from the JD not found in the resume],
    "resume_skills": [list of bullet-point resume skills],
    "score": integer (match percentage),
    "suggestions_for_improvements": "A concise paragraph with actionable advice for the candidate."
}

Do not include any explanation, formatting, or text outside the JSON response.

Resume:
'''
{resume_text}
'''

Job Description:
'''
{jd_text}
'''
"#;

/// Embeds both documents verbatim. Each placeholder is replaced once, so a literal
/// `{jd_text}` or `{resume_text}` inside either document survives.
pub fn build_skill_analysis_prompt(resume_text: &str, jd_text: &str) -> String {
    SKILL_ANALYSIS_PROMPT_TEMPLATE
        .replacen("{jd_text}", jd_text, 1)
        .replacen("{resume_text}", resume_text, 1)
}
