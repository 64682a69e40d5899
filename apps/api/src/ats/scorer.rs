//! ATS scoring: a fixed-weight heuristic over keyword lists and word counts.
//!
//! Four sub-scores, each nominally 0–100:
//! - keywords:   distinct preset keywords found in the text blob / list size
//! - formatting: 85 base, +10 email & phone, +5 summary over 50 chars (uncapped)
//! - sections:   25 per non-empty summary / experience / education / skills
//! - length:     40 under 200 words, 60 over 800 words, else 90
//!
//! `overall` is the rounded mean of the four. Never fails.

use serde::{Deserialize, Serialize};

use crate::ats::keywords::Industry;
use crate::models::resume::Resume;

const KEYWORD_SUGGESTION_THRESHOLD: f64 = 30.0;
const SUGGESTED_KEYWORD_COUNT: usize = 5;
const FORMAT_BASE: f64 = 85.0;
const SECTION_POINTS: f64 = 25.0;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 800;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Keyword,
    Format,
    Section,
    Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall: u32,
    pub keywords: u32,
    pub formatting: u32,
    pub sections: u32,
    pub length: u32,
}

/// Score bucket used for the headline badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    NeedsWork,
}

impl Rating {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Rating::Excellent
        } else if score >= 60 {
            Rating::Good
        } else {
            Rating::NeedsWork
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: AtsScore,
    pub suggestions: Vec<AtsSuggestion>,
    pub rating: Rating,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume against the default (tech) keyword preset.
pub fn score_resume(resume: &Resume) -> AtsReport {
    score_resume_for(resume, Industry::default())
}

pub fn score_resume_for(resume: &Resume, industry: Industry) -> AtsReport {
    let text = scoring_text(resume);
    let mut suggestions = Vec::new();

    let keywords = keyword_score(&text, industry, &mut suggestions);
    let formatting = formatting_score(resume);
    let sections = section_score(resume, &mut suggestions);
    let length = length_score(&text, &mut suggestions);

    let overall = ((keywords + formatting + sections + length) / 4.0).round() as u32;

    let score = AtsScore {
        overall,
        keywords: keywords.round() as u32,
        formatting: formatting.round() as u32,
        sections: sections.round() as u32,
        length: length.round() as u32,
    };

    AtsReport {
        score,
        suggestions,
        rating: Rating::from_score(overall),
    }
}

/// Summary, experience descriptions and skills joined into one blob.
pub fn scoring_text(resume: &Resume) -> String {
    let descriptions: Vec<&str> = resume
        .experience
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    format!(
        "{} {} {}",
        resume.summary,
        descriptions.join(" "),
        resume.skills.join(" ")
    )
}

fn keyword_score(text: &str, industry: Industry, suggestions: &mut Vec<AtsSuggestion>) -> f64 {
    let haystack = text.to_lowercase();
    let keywords = industry.keywords();

    let (found, missing): (Vec<&str>, Vec<&str>) = keywords
        .iter()
        .copied()
        .partition(|kw| haystack.contains(&kw.to_lowercase()));

    let score = (found.len() as f64 * 100.0 / keywords.len() as f64).min(100.0);

    if score < KEYWORD_SUGGESTION_THRESHOLD {
        let examples: Vec<&str> = missing
            .into_iter()
            .take(SUGGESTED_KEYWORD_COUNT)
            .collect();
        suggestions.push(AtsSuggestion {
            kind: SuggestionKind::Keyword,
            severity: Severity::High,
            title: "Low Keyword Density".to_string(),
            description: "Your resume lacks industry-relevant keywords".to_string(),
            suggestion: format!(
                "Add more {} keywords like: {}",
                industry.label(),
                examples.join(", ")
            ),
            field: None,
        });
    }

    score
}

fn formatting_score(resume: &Resume) -> f64 {
    let info = &resume.personal_info;
    let mut score = FORMAT_BASE;
    if !info.email.is_empty() && !info.phone.is_empty() {
        score += 10.0;
    }
    if resume.summary.chars().count() > 50 {
        score += 5.0;
    }
    score
}

fn section_score(resume: &Resume, suggestions: &mut Vec<AtsSuggestion>) -> f64 {
    let present = [
        !resume.summary.is_empty(),
        !resume.experience.is_empty(),
        !resume.education.is_empty(),
        !resume.skills.is_empty(),
    ];
    let score = present.iter().filter(|p| **p).count() as f64 * SECTION_POINTS;

    if score < 100.0 {
        suggestions.push(AtsSuggestion {
            kind: SuggestionKind::Section,
            severity: Severity::Medium,
            title: "Missing Sections".to_string(),
            description: "Some important resume sections are missing".to_string(),
            suggestion: "Ensure you have Summary, Experience, Education, and Skills sections"
                .to_string(),
            field: None,
        });
    }

    score
}

fn length_score(text: &str, suggestions: &mut Vec<AtsSuggestion>) -> f64 {
    let words = text.split_whitespace().count();

    if words < MIN_WORDS {
        suggestions.push(AtsSuggestion {
            kind: SuggestionKind::Length,
            severity: Severity::High,
            title: "Resume Too Short".to_string(),
            description: "Your resume content is too brief".to_string(),
            suggestion: "Add more details to your experience and achievements".to_string(),
            field: None,
        });
        40.0
    } else if words > MAX_WORDS {
        suggestions.push(AtsSuggestion {
            kind: SuggestionKind::Length,
            severity: Severity::Medium,
            title: "Resume Too Long".to_string(),
            description: "Your resume might be too lengthy for ATS systems".to_string(),
            suggestion: "Consider condensing your content to 1-2 pages".to_string(),
            field: None,
        });
        60.0
    } else {
        90.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn full_resume() -> Resume {
        Resume {
            personal_info: PersonalInfo {
                name: "Grace Hopper".to_string(),
                email: "grace@example.com".to_string(),
                phone: "555-0100".to_string(),
                address: String::new(),
            },
            summary: "Seasoned engineer building compilers and developer tooling for decades."
                .to_string(),
            experience: vec![ExperienceEntry {
                id: "1".to_string(),
                company: "Navy".to_string(),
                position: "Engineer".to_string(),
                description: "Built Python services on AWS with Docker".to_string(),
                ..Default::default()
            }],
            education: vec![EducationEntry {
                id: "1".to_string(),
                institution: "Yale".to_string(),
                degree: "PhD".to_string(),
                ..Default::default()
            }],
            skills: vec!["Git".to_string(), "Scrum".to_string()],
            ..Default::default()
        }
    }

    fn has_suggestion(report: &AtsReport, title: &str) -> bool {
        report.suggestions.iter().any(|s| s.title == title)
    }

    #[test]
    fn test_full_resume_formatting_and_sections() {
        let report = score_resume(&full_resume());
        assert!(
            report.score.formatting >= 95,
            "Expected ≥95, got {}",
            report.score.formatting
        );
        assert_eq!(report.score.sections, 100);
        assert!(!has_suggestion(&report, "Missing Sections"));
    }

    #[test]
    fn test_formatting_full_marks_and_summary_bonus() {
        let report = score_resume(&full_resume());
        assert_eq!(report.score.formatting, 100);

        let mut resume = full_resume();
        resume.summary = "short".to_string();
        assert_eq!(score_resume(&resume).score.formatting, 95);
    }

    #[test]
    fn test_formatting_base_without_contact() {
        let report = score_resume(&Resume::default());
        assert_eq!(report.score.formatting, 85);
    }

    #[test]
    fn test_length_150_words_too_short() {
        let resume = Resume {
            summary: words(150),
            ..Default::default()
        };
        let report = score_resume(&resume);
        assert_eq!(report.score.length, 40);
        assert!(has_suggestion(&report, "Resume Too Short"));
    }

    #[test]
    fn test_length_801_words_too_long() {
        let resume = Resume {
            summary: words(801),
            ..Default::default()
        };
        let report = score_resume(&resume);
        assert_eq!(report.score.length, 60);
        assert!(has_suggestion(&report, "Resume Too Long"));
    }

    #[test]
    fn test_length_500_words_ok() {
        let resume = Resume {
            summary: words(500),
            ..Default::default()
        };
        let report = score_resume(&resume);
        assert_eq!(report.score.length, 90);
        assert!(report
            .suggestions
            .iter()
            .all(|s| s.kind != SuggestionKind::Length));
    }

    #[test]
    fn test_length_counts_whole_blob() {
        let mut resume = full_resume();
        resume.summary = words(100);
        resume.experience[0].description = words(100);
        resume.skills = vec![];
        // 100 + 100 words across summary and experience
        assert_eq!(score_resume(&resume).score.length, 90);
    }

    #[test]
    fn test_keyword_score_monotonic_and_capped() {
        let mut resume = Resume::default();
        let mut previous = score_resume(&resume).score.keywords;
        assert_eq!(previous, 0);

        for keyword in Industry::Tech.keywords() {
            resume = resume.add_skill(keyword);
            let current = score_resume(&resume).score.keywords;
            assert!(current >= previous, "{current} < {previous}");
            previous = current;
        }
        assert_eq!(previous, 100);

        // Duplicates never push past the cap.
        resume = resume.add_skill("docker").add_skill("Kubernetes");
        assert_eq!(score_resume(&resume).score.keywords, 100);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        let resume = Resume {
            summary: "I write javascript and use github daily".to_string(),
            ..Default::default()
        };
        // "javascript" and "git" (inside "github")
        assert_eq!(score_resume(&resume).score.keywords, 20);
    }

    #[test]
    fn test_low_keywords_suggests_missing_ones() {
        let resume = Resume {
            summary: "JavaScript".to_string(),
            ..Default::default()
        };
        let report = score_resume(&resume);
        let suggestion = report
            .suggestions
            .iter()
            .find(|s| s.kind == SuggestionKind::Keyword)
            .unwrap();
        assert_eq!(suggestion.severity, Severity::High);
        assert_eq!(
            suggestion.suggestion,
            "Add more tech keywords like: Python, React, Node.js, AWS, Docker"
        );
    }

    #[test]
    fn test_keyword_suggestion_absent_at_30() {
        let resume = Resume {
            skills: vec!["React".to_string(), "AWS".to_string(), "Agile".to_string()],
            ..Default::default()
        };
        let report = score_resume(&resume);
        assert_eq!(report.score.keywords, 30);
        assert!(!has_suggestion(&report, "Low Keyword Density"));
    }

    #[test]
    fn test_sections_partial() {
        let resume = Resume {
            summary: "x".to_string(),
            skills: vec!["y".to_string()],
            ..Default::default()
        };
        let report = score_resume(&resume);
        assert_eq!(report.score.sections, 50);
        let missing = report
            .suggestions
            .iter()
            .find(|s| s.kind == SuggestionKind::Section)
            .unwrap();
        assert_eq!(missing.severity, Severity::Medium);
    }

    #[test]
    fn test_overall_is_rounded_mean() {
        // keywords 0, formatting 85, sections 0, length 40 → 31.25 → 31
        let report = score_resume(&Resume::default());
        assert_eq!(report.score.overall, 31);
        assert_eq!(report.rating, Rating::NeedsWork);
    }

    #[test]
    fn test_industry_preset() {
        let resume = Resume {
            skills: vec!["SEO".to_string(), "CRM".to_string()],
            ..Default::default()
        };
        let report = score_resume_for(&resume, Industry::Marketing);
        assert_eq!(report.score.keywords, 25);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.suggestion.starts_with("Add more marketing keywords like: SEM")));
    }

    #[test]
    fn test_rating_buckets() {
        assert_eq!(Rating::from_score(80), Rating::Excellent);
        assert_eq!(Rating::from_score(79), Rating::Good);
        assert_eq!(Rating::from_score(60), Rating::Good);
        assert_eq!(Rating::from_score(59), Rating::NeedsWork);
    }
}
