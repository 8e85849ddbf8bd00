//! Static UI chrome labels.
//!
//! Page content comes from the fetched document; these cover navigation,
//! headings and status messages that exist before (or without) content.

mod en;
mod mk;

use portfolio_shared::prefs::Language;

/// Label set for one UI language.
pub struct Labels {
    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_projects: &'static str,
    pub nav_contact: &'static str,
    pub open_menu_aria: &'static str,
    pub close_menu_aria: &'static str,
    pub language_menu_aria: &'static str,
    pub switch_to_light: &'static str,
    pub switch_to_dark: &'static str,

    pub loading: &'static str,
    pub load_failed_title: &'static str,

    pub about_title: &'static str,
    pub technologies_title: &'static str,
    pub education_title: &'static str,
    pub download_cv: &'static str,
    pub github_profile: &'static str,

    pub filter_all: &'static str,
    pub visit_project: &'static str,
    pub close_dialog_aria: &'static str,

    pub contact_title: &'static str,
    pub connect_title: &'static str,
    pub contact_blurb: &'static str,
    pub sending: &'static str,
    pub message_sent: &'static str,
    pub submission_failed: &'static str,

    pub not_found_title: &'static str,
    pub not_found_back: &'static str,

    pub copyright: &'static str,
}

/// Labels for the given language.
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &en::LABELS,
        Language::Mk => &mk::LABELS,
    }
}
