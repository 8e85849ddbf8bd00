use super::Labels;

pub(super) const LABELS: Labels = Labels {
    nav_home: "Почетна",
    nav_about: "За мене",
    nav_projects: "Проекти",
    nav_contact: "Контакт",
    open_menu_aria: "Отвори мени",
    close_menu_aria: "Затвори мени",
    language_menu_aria: "Избери јазик",
    switch_to_light: "Светла тема",
    switch_to_dark: "Темна тема",

    loading: "Се вчитува...",
    load_failed_title: "Содржината не може да се вчита",

    about_title: "За мене",
    technologies_title: "Технологии",
    education_title: "Едукација",
    download_cv: "Преземи CV",
    github_profile: "GitHub",

    filter_all: "Сите",
    visit_project: "Посети го проектот",
    close_dialog_aria: "Затвори ги деталите",

    contact_title: "Контактирајте ме",
    connect_title: "Поврзете се",
    contact_blurb: "Секогаш сум отворен за дискусија за нови проекти, креативни идеи или \
                    можности да бидам дел од вашата визија. Слободно контактирајте ме!",
    sending: "Се испраќа...",
    message_sent: "Пораката е испратена! Ви благодарам, ќе ви одговорам наскоро.",
    submission_failed: "Настана грешка при испраќање на пораката. Обидете се повторно.",

    not_found_title: "Страницата не е пронајдена",
    not_found_back: "Назад кон почетна",

    copyright: "© 2025 Томе Јефтимов. Сите права се задржани.",
};
