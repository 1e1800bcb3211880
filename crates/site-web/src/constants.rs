// DOM ids/selectors and web-only tuning for the site widgets.

// Starfield
pub const STARFIELD_CANVAS_ID: &str = "starfield";

// Cursor spotlight
pub const SPOTLIGHT_ID: &str = "cursor-spotlight";

// Mobile menu
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_MENU_LINKS_SELECTOR: &str = ".nav-menu a";

// Carousels
pub const PRIMARY_TRACK_SELECTOR: &str = ".carousel-track:not(.experience)";
pub const EXPERIENCE_TRACK_SELECTOR: &str = ".carousel-track.experience";
pub const NEXT_BUTTON_SELECTOR: &str = ".carousel-btn.next";
pub const PREV_BUTTON_SELECTOR: &str = ".carousel-btn.prev";

// Scroll effects
pub const REVEAL_SELECTOR: &str = ".fade";
pub const REVEAL_CLASS: &str = "visible";
pub const PROGRESS_BAR_SELECTOR: &str = ".scroll-progress-bar";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links a";
pub const NAV_ACTIVE_CLASS: &str = "active";

// Copy-to-clipboard contact fields: (box, value, label) element ids
pub const COPY_FIELDS: [(&str, &str, &str); 2] = [
    ("contact-discord", "discord-name", "discord-copied"),
    ("contact-email", "email-name", "email-copied"),
];
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_PROMPT_LABEL: &str = "Click to copy";

// Contact form; the form's `action` attribute overrides the default endpoint
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_STATUS_ID: &str = "status";
pub const CONTACT_SUBMIT_ID: &str = "contactSubmit";
pub const CONTACT_ENDPOINT: &str = "https://contact-form.itsluis1507.workers.dev";
