// Edit operations are the editor-facing model API; the HTTP routes only use a subset.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact block shown in the resume header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Free text. Each non-blank line renders as its own bullet.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<bool>,
}

/// The resume document exchanged with the editor UI.
///
/// Field names are camelCase on the wire. Every edit below is copy-on-write:
/// it borrows the current value and returns a new `Resume`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    /// Sections marked "AI enhanced". No duplicates.
    pub enhanced_sections: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution,
    Degree,
    StartDate,
    EndDate,
    Description,
}

fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

impl Resume {
    pub fn with_personal_info(&self, field: PersonalField, value: &str) -> Resume {
        let mut next = self.clone();
        let slot = match field {
            PersonalField::Name => &mut next.personal_info.name,
            PersonalField::Email => &mut next.personal_info.email,
            PersonalField::Phone => &mut next.personal_info.phone,
            PersonalField::Address => &mut next.personal_info.address,
        };
        *slot = value.to_string();
        next
    }

    pub fn with_summary(&self, value: &str) -> Resume {
        Resume {
            summary: value.to_string(),
            ..self.clone()
        }
    }

    /// Appends a blank experience entry with a fresh id.
    pub fn add_experience(&self) -> Resume {
        let mut next = self.clone();
        next.experience.push(ExperienceEntry {
            id: new_entry_id(),
            ..Default::default()
        });
        next
    }

    /// Unknown ids leave the resume unchanged.
    pub fn update_experience(&self, id: &str, field: ExperienceField, value: &str) -> Resume {
        let mut next = self.clone();
        if let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) {
            let slot = match field {
                ExperienceField::Company => &mut entry.company,
                ExperienceField::Position => &mut entry.position,
                ExperienceField::StartDate => &mut entry.start_date,
                ExperienceField::EndDate => &mut entry.end_date,
                ExperienceField::Description => &mut entry.description,
            };
            *slot = value.to_string();
        }
        next
    }

    pub fn remove_experience(&self, id: &str) -> Resume {
        Resume {
            experience: self
                .experience
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    pub fn add_education(&self) -> Resume {
        let mut next = self.clone();
        next.education.push(EducationEntry {
            id: new_entry_id(),
            ..Default::default()
        });
        next
    }

    pub fn update_education(&self, id: &str, field: EducationField, value: &str) -> Resume {
        let mut next = self.clone();
        if let Some(entry) = next.education.iter_mut().find(|e| e.id == id) {
            let slot = match field {
                EducationField::Institution => &mut entry.institution,
                EducationField::Degree => &mut entry.degree,
                EducationField::StartDate => &mut entry.start_date,
                EducationField::EndDate => &mut entry.end_date,
                EducationField::Description => &mut entry.description,
            };
            *slot = value.to_string();
        }
        next
    }

    pub fn remove_education(&self, id: &str) -> Resume {
        Resume {
            education: self
                .education
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Blank skills are ignored.
    pub fn add_skill(&self, skill: &str) -> Resume {
        let mut next = self.clone();
        if !skill.trim().is_empty() {
            next.skills.push(skill.to_string());
        }
        next
    }

    pub fn remove_skill(&self, index: usize) -> Resume {
        let mut next = self.clone();
        if index < next.skills.len() {
            next.skills.remove(index);
        }
        next
    }

    /// Current text of a section, as sent to the enhancer.
    pub fn section_content(&self, section: &str) -> Option<String> {
        match section {
            "summary" => Some(self.summary.clone()),
            "experience" => Some(
                self.experience
                    .iter()
                    .map(|e| e.description.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            "education" => Some(
                self.education
                    .iter()
                    .map(|e| e.description.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            "skills" => Some(self.skills.join(", ")),
            _ => None,
        }
    }

    /// Records an enhancement result. Only the summary text is replaced;
    /// every section gets (re)marked as enhanced, moving it to the end.
    pub fn apply_enhancement(&self, section: &str, enhanced: &str) -> Resume {
        let mut next = if section == "summary" {
            self.with_summary(enhanced)
        } else {
            self.clone()
        };
        next.enhanced_sections.retain(|s| s != section);
        next.enhanced_sections.push(section.to_string());
        next
    }

    /// Name shown in headers and file names.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.personal_info.name.as_str();
        (!name.is_empty()).then_some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Resume {
        Resume {
            personal_info: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                ..Default::default()
            },
            summary: "Engineer".to_string(),
            skills: vec!["Rust".to_string(), "Go".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_deserializes_camel_case_with_missing_fields() {
        let resume: Resume = serde_json::from_value(json!({
            "personalInfo": { "name": "Ada" },
            "experience": [{ "id": "1", "company": "Acme", "startDate": "2020-01" }],
            "enhancedSections": ["summary"]
        }))
        .unwrap();

        assert_eq!(resume.personal_info.name, "Ada");
        assert_eq!(resume.personal_info.email, "");
        assert_eq!(resume.experience[0].start_date, "2020-01");
        assert!(resume.education.is_empty());
        assert_eq!(resume.enhanced_sections, vec!["summary"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("personalInfo").is_some());
        assert!(value.get("enhancedSections").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_edits_do_not_mutate_original() {
        let original = sample();
        let edited = original
            .with_personal_info(PersonalField::Email, "ada@example.com")
            .with_summary("Mathematician");

        assert_eq!(original.personal_info.email, "");
        assert_eq!(original.summary, "Engineer");
        assert_eq!(edited.personal_info.email, "ada@example.com");
        assert_eq!(edited.summary, "Mathematician");
    }

    #[test]
    fn test_experience_add_update_remove() {
        let resume = sample().add_experience().add_experience();
        assert_eq!(resume.experience.len(), 2);
        assert_ne!(resume.experience[0].id, resume.experience[1].id);

        let first_id = resume.experience[0].id.clone();
        let updated = resume.update_experience(&first_id, ExperienceField::Company, "Acme");
        assert_eq!(updated.experience[0].company, "Acme");
        assert_eq!(updated.experience[1].company, "");

        let removed = updated.remove_experience(&first_id);
        assert_eq!(removed.experience.len(), 1);
        assert_ne!(removed.experience[0].id, first_id);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let resume = sample().add_education();
        let updated = resume.update_education("missing", EducationField::Degree, "BSc");
        assert_eq!(updated, resume);
    }

    #[test]
    fn test_education_update_and_remove() {
        let resume = sample().add_education();
        let id = resume.education[0].id.clone();
        let updated = resume.update_education(&id, EducationField::Institution, "MIT");
        assert_eq!(updated.education[0].institution, "MIT");
        assert!(updated.remove_education(&id).education.is_empty());
    }

    #[test]
    fn test_skills_ignore_blank_and_bad_index() {
        let resume = sample().add_skill("   ").add_skill("Docker");
        assert_eq!(resume.skills, vec!["Rust", "Go", "Docker"]);

        let removed = resume.remove_skill(1);
        assert_eq!(removed.skills, vec!["Rust", "Docker"]);
        assert_eq!(removed.remove_skill(10), removed);
    }

    #[test]
    fn test_apply_enhancement_replaces_summary_only() {
        let resume = sample().apply_enhancement("summary", "Better summary");
        assert_eq!(resume.summary, "Better summary");

        let resume = resume.apply_enhancement("skills", "ignored text");
        assert_eq!(resume.skills, vec!["Rust", "Go"]);
        assert_eq!(resume.enhanced_sections, vec!["summary", "skills"]);
    }

    #[test]
    fn test_apply_enhancement_moves_existing_mark_to_end() {
        let resume = sample()
            .apply_enhancement("summary", "a")
            .apply_enhancement("experience", "b")
            .apply_enhancement("summary", "c");
        assert_eq!(resume.enhanced_sections, vec!["experience", "summary"]);
    }

    #[test]
    fn test_section_content() {
        let resume = sample();
        assert_eq!(resume.section_content("skills").as_deref(), Some("Rust, Go"));
        assert_eq!(resume.section_content("summary").as_deref(), Some("Engineer"));
        assert!(resume.section_content("hobbies").is_none());
    }
}
