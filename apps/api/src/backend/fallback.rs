//! Local substitutes used when the resume backend cannot answer.

use chrono::Utc;

const GENERIC_DEFAULT: &str = "Enhanced professional content with improved clarity and impact.";

/// Canned text per section for when there is nothing to enhance.
fn default_content(section: &str) -> Option<&'static str> {
    let text = match section {
        "summary" => "Dynamic and results-driven professional with proven expertise in delivering high-impact solutions. Demonstrated track record of driving organizational success through innovative approaches and collaborative leadership.",
        "experience" => "Successfully delivered exceptional results through strategic problem-solving and innovative approaches. Consistently exceeded performance targets while maintaining the highest standards of quality and efficiency.",
        "education" => "Comprehensive academic foundation with strong analytical and critical thinking skills. Developed expertise through rigorous coursework and practical application of theoretical concepts.",
        "skills" => "Advanced proficiency with extensive hands-on experience and continuous learning mindset to stay current with industry best practices.",
        _ => return None,
    };
    Some(text)
}

/// Templated rewrite of `content` for known sections.
fn templated(section: &str, content: &str) -> Option<String> {
    let lower = content.to_lowercase();
    let text = match section {
        "summary" => format!("Dynamic and results-driven professional with {lower}. Proven track record of delivering high-impact solutions and driving organizational success through innovative approaches and collaborative leadership."),
        "experience" => format!("Successfully {lower}. Demonstrated exceptional problem-solving abilities and consistently exceeded performance targets while maintaining the highest standards of quality and efficiency."),
        "education" => format!("Comprehensive academic foundation in {lower}. Developed strong analytical and critical thinking skills through rigorous coursework and practical application of theoretical concepts."),
        "skills" => format!("Advanced proficiency in {lower} with extensive hands-on experience and continuous learning mindset to stay current with industry best practices."),
        _ => return None,
    };
    Some(text)
}

/// Enhancement text used when the backend is down, slow, or returns garbage.
pub fn fallback_enhancement(section: &str, content: &str) -> String {
    if content.trim().is_empty() {
        return default_content(section)
            .unwrap_or(GENERIC_DEFAULT)
            .to_string();
    }
    templated(section, content).unwrap_or_else(|| {
        format!("Enhanced {content} with improved clarity and professional impact.")
    })
}

/// `resume_<epoch-millis>` id for a save that never reached the backend.
pub fn local_resume_id() -> String {
    format!("resume_{}", Utc::now().timestamp_millis())
}
