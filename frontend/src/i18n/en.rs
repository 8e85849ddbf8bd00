use super::Labels;

pub(super) const LABELS: Labels = Labels {
    nav_home: "Home",
    nav_about: "About",
    nav_projects: "Projects",
    nav_contact: "Contact",
    open_menu_aria: "Open menu",
    close_menu_aria: "Close menu",
    language_menu_aria: "Choose language",
    switch_to_light: "Switch to light mode",
    switch_to_dark: "Switch to dark mode",

    loading: "Loading...",
    load_failed_title: "Could not load content",

    about_title: "About Me",
    technologies_title: "Technologies",
    education_title: "Education",
    download_cv: "Download CV",
    github_profile: "GitHub",

    filter_all: "All",
    visit_project: "Visit Project",
    close_dialog_aria: "Close project details",

    contact_title: "Get In Touch",
    connect_title: "Connect With Me",
    contact_blurb: "I'm always open to discussing new projects, creative ideas, or \
                    opportunities to be part of your vision. Feel free to reach out!",
    sending: "Sending...",
    message_sent: "Message sent! Thank you for reaching out. I will get back to you soon.",
    submission_failed: "There was an error sending your message. Please try again.",

    not_found_title: "Page not found",
    not_found_back: "Back to home",

    copyright: "© 2025 Tome Jeftimov. All rights reserved.",
};
