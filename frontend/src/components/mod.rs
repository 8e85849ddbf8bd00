// Reusable components live here.

pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod project_card;
pub mod status_banner;
pub mod theme_toggle;
