//! Data model shared by the portfolio frontend.
//!
//! Holds the typed schema of the remotely fetched bilingual content
//! document, the persisted UI preference values and the contact-form
//! rules. Nothing in here touches browser APIs, so the whole crate runs
//! under plain `cargo test`.

pub mod prefs;
pub mod validation;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prefs::Language;

/// The full content bundle, one entry per supported language.
///
/// Fetched exactly once per session and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    /// English content.
    pub en: LocalizedContent,
    /// Macedonian content.
    pub mk: LocalizedContent,
}

impl PortfolioDocument {
    /// Content for the currently selected language.
    pub fn for_language(&self, language: Language) -> &LocalizedContent {
        match language {
            Language::En => &self.en,
            Language::Mk => &self.mk,
        }
    }

    /// Post-decode sanity check. The decoder fails closed: a document that
    /// parses but carries duplicate project ids is rejected rather than
    /// rendered.
    pub fn validate(&self) -> Result<(), DocumentError> {
        for (language, content) in [(Language::En, &self.en), (Language::Mk, &self.mk)] {
            let projects = &content.projects.projects_arr;
            for (index, project) in projects.iter().enumerate() {
                if projects[..index].iter().any(|other| other.id == project.id) {
                    return Err(DocumentError::DuplicateProjectId {
                        language,
                        id: project.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Structural problems in an otherwise well-formed document body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// Two projects in one language share an id.
    #[error("duplicate project id `{id}` in `{}` projects", .language.as_str())]
    DuplicateProjectId {
        /// Language entry carrying the duplicate.
        language: Language,
        /// The repeated identifier.
        id: String,
    },
}

/// All four page sections for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedContent {
    /// Hero banner fields.
    pub home: HomeSection,
    /// Biography, technologies and education.
    pub about: AboutSection,
    /// Project gallery.
    pub projects: ProjectsSection,
    /// Contact form labels and links.
    pub contact: ContactSection,
}

/// Identity fields for the hero banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSection {
    /// Profile picture URL.
    pub pfp_img: String,
    /// First name.
    pub name: String,
    /// Last name.
    pub last_name: String,
    /// Professional status line.
    pub status: String,
    /// Hero slogan.
    pub slogan: String,
}

/// Biography plus technology and education lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    /// Long-form biography text.
    pub about_text: String,
    /// Technologies, in display order.
    pub tech: Vec<TechEntry>,
    /// Education history, in display order.
    pub edu: Vec<EducationEntry>,
    /// GitHub profile URL.
    pub git_hub_link: String,
    /// CV download URL.
    pub cv_download_link: String,
}

/// One technology chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechEntry {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name_tech: String,
}

/// One education record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Stable identifier.
    pub id: String,
    /// Institution name.
    pub institute: String,
    /// Degree or programme title.
    pub title: String,
}

/// Gallery title plus the ordered project list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSection {
    /// Section heading.
    pub title: String,
    /// Projects, in display order.
    pub projects_arr: Vec<Project>,
}

impl ProjectsSection {
    /// Distinct tags across all projects, in first-seen order.
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for project in &self.projects_arr {
            for tag in &project.tags {
                if !names.contains(&tag.as_str()) {
                    names.push(tag);
                }
            }
        }
        names
    }

    /// Projects carrying `tag`; `None` selects every project.
    pub fn filter_by_tag(&self, tag: Option<&str>) -> Vec<&Project> {
        match tag {
            None => self.projects_arr.iter().collect(),
            Some(tag) => self
                .projects_arr
                .iter()
                .filter(|project| project.tags.iter().any(|t| t == tag))
                .collect(),
        }
    }
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier, unique within the projects list.
    pub id: String,
    /// Filter tags, in display order.
    pub tags: Vec<String>,
    /// Project title.
    pub title: String,
    /// Cover image URL.
    pub src: String,
    /// External project link.
    pub cta_link: String,
    /// Long-form detail text.
    pub content: String,
    /// Short card description.
    pub description: String,
}

/// Contact form labels, placeholders and outbound links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    /// Name field label.
    pub name_label: String,
    /// Name field placeholder.
    pub name_input: String,
    /// Phone field label.
    pub phone_label: String,
    /// Phone field placeholder. The upstream document capitalises this key.
    #[serde(rename = "PhoneInput")]
    pub phone_input: String,
    /// Email field label.
    pub email_label: String,
    /// Email field placeholder.
    pub email_input: String,
    /// Message field label.
    pub message_label: String,
    /// Message field placeholder.
    pub message_input: String,
    /// Submit button caption.
    pub button_text: String,
    /// Outbound contact links.
    pub contact_links: Vec<ContactLink>,
}

/// One outbound contact link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLink {
    /// Display name, e.g. `Email` or `LinkedIn`.
    pub link_name: String,
    /// Target address. Bare e-mail addresses get a `mailto:` prefix in the
    /// view layer.
    #[serde(rename = "URL")]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document_json() -> String {
        let section = r#"{
            "home": {
                "pfpImg": "/pfp.jpg",
                "name": "Tome",
                "lastName": "Jeftimov",
                "status": "Frontend Developer",
                "slogan": "Turning ideas into products."
            },
            "about": {
                "aboutText": "I build things for the web.",
                "tech": [{ "id": "t1", "nameTech": "Rust" }],
                "edu": [{ "id": "e1", "institute": "FINKI", "title": "BSc" }],
                "gitHubLink": "https://github.com/example",
                "cvDownloadLink": "/cv.pdf"
            },
            "projects": {
                "title": "Projects",
                "projectsArr": [
                    {
                        "id": "p1",
                        "tags": ["web", "rust"],
                        "title": "First",
                        "src": "/p1.png",
                        "ctaLink": "https://example.com/p1",
                        "content": "Long text",
                        "description": "Short text"
                    },
                    {
                        "id": "p2",
                        "tags": ["web"],
                        "title": "Second",
                        "src": "/p2.png",
                        "ctaLink": "https://example.com/p2",
                        "content": "Long text",
                        "description": "Short text"
                    }
                ]
            },
            "contact": {
                "nameLabel": "Name",
                "nameInput": "Your name",
                "phoneLabel": "Phone",
                "PhoneInput": "Your phone",
                "emailLabel": "Email",
                "emailInput": "Your email",
                "messageLabel": "Message",
                "messageInput": "Your message",
                "buttonText": "Send",
                "contactLinks": [{ "linkName": "Email", "URL": "me@example.com" }]
            }
        }"#;
        format!("{{ \"en\": {section}, \"mk\": {section} }}")
    }

    #[test]
    fn decodes_two_language_document() {
        let document: PortfolioDocument =
            serde_json::from_str(&sample_document_json()).expect("document should decode");

        assert_eq!(document.en.home.name, "Tome");
        assert_eq!(document.mk.projects.projects_arr.len(), 2);
        assert_eq!(document.en.contact.phone_input, "Your phone");
        assert_eq!(document.en.contact.contact_links[0].url, "me@example.com");
        assert!(document.validate().is_ok());
    }

    #[test]
    fn selects_content_by_language() {
        let mut document: PortfolioDocument =
            serde_json::from_str(&sample_document_json()).expect("document should decode");
        document.mk.home.name = "Томе".to_string();

        assert_eq!(document.for_language(Language::En).home.name, "Tome");
        assert_eq!(document.for_language(Language::Mk).home.name, "Томе");
    }

    #[test]
    fn malformed_body_fails_closed() {
        let result: Result<PortfolioDocument, _> = serde_json::from_str(r#"{ "en": {} }"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_project_ids() {
        let mut document: PortfolioDocument =
            serde_json::from_str(&sample_document_json()).expect("document should decode");
        document.en.projects.projects_arr[1].id = "p1".to_string();

        assert_eq!(
            document.validate(),
            Err(DocumentError::DuplicateProjectId {
                language: Language::En,
                id: "p1".to_string(),
            })
        );
    }

    #[test]
    fn tag_names_are_deduplicated_in_first_seen_order() {
        let document: PortfolioDocument =
            serde_json::from_str(&sample_document_json()).expect("document should decode");

        assert_eq!(document.en.projects.tag_names(), vec!["web", "rust"]);
    }

    #[test]
    fn filter_by_tag_selects_matching_projects() {
        let document: PortfolioDocument =
            serde_json::from_str(&sample_document_json()).expect("document should decode");
        let projects = &document.en.projects;

        assert_eq!(projects.filter_by_tag(None).len(), 2);
        assert_eq!(
            projects
                .filter_by_tag(Some("rust"))
                .iter()
                .map(|p| p.id.as_str())
                .collect::<Vec<_>>(),
            vec!["p1"]
        );
        assert!(projects.filter_by_tag(Some("missing")).is_empty());
    }
}
