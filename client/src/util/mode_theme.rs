//! Per-mode presentation table.
//!
//! Every visual and copy difference between the design modes is a row in
//! this table. Components read `theme(mode)` once per render instead of
//! branching on the mode themselves.

#[cfg(test)]
#[path = "mode_theme_test.rs"]
mod mode_theme_test;

use crate::content;
use crate::state::mode::Mode;

/// Heading and lead text for a page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Label/placeholder triple for the contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormText {
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
}

/// Presentation parameters for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeTheme {
    pub mode: Mode,
    /// Class on the page root; stylesheets key off it.
    pub root_class: &'static str,
    pub nav_class: &'static str,
    pub button_class: &'static str,
    pub form_control_class: &'static str,
    pub project_card_class: &'static str,
    /// Extra class for sections rendered as raised panels.
    pub panel_class: &'static str,
    pub hover_lift_px: u8,
    pub skill_bar_radius_px: u8,
    pub message_rows: u8,
    /// Gradients, overlays and the hero call-out.
    pub decorative: bool,
    /// Period badge, role line and technology chips on project cards.
    pub project_details: bool,
    /// Social links carry a text label next to the icon.
    pub labelled_links: bool,
    pub required_hint: Option<&'static str>,
    pub labels: FormText,
    pub placeholders: FormText,
    pub submit_label: &'static str,
    pub email_label: &'static str,
    pub phone_label: &'static str,
    pub hero: SectionCopy,
    pub about: SectionCopy,
    pub education_title: &'static str,
    pub experience_title: &'static str,
    pub philosophy_title: &'static str,
    pub projects: SectionCopy,
    pub skills: SectionCopy,
    pub contact: SectionCopy,
    pub contact_details_title: &'static str,
    pub profiles_title: &'static str,
    pub form_title: &'static str,
    pub footer_blurb: &'static str,
    pub footer_current: &'static str,
}

pub const SUBMITTING_LABEL: &str = "Sending...";

const HERO: SectionCopy = SectionCopy {
    title: "Design that communicates & connects",
    subtitle: "Explore how UI and UX approaches create different experiences through this interactive portfolio showcase.",
};

const SKILLS: SectionCopy = SectionCopy {
    title: "Design Skills",
    subtitle: "Proficiency across UI and UX disciplines",
};

static THEMES: [ModeTheme; 3] = [
    ModeTheme {
        mode: Mode::Ui,
        root_class: "ui-mode",
        nav_class: "ui-nav",
        button_class: "btn btn-ui",
        form_control_class: "ui-form-control",
        project_card_class: "ui-project-card",
        panel_class: "",
        hover_lift_px: 10,
        skill_bar_radius_px: 5,
        message_rows: 4,
        decorative: true,
        project_details: false,
        labelled_links: false,
        required_hint: None,
        labels: FormText { name: "Your Name", email: "Your Email", message: "Your Message" },
        placeholders: FormText { name: "Your name", email: "Your email", message: "Share your thoughts..." },
        submit_label: "Send Message \u{2728}",
        email_label: "Email Address",
        phone_label: "Phone Number",
        hero: HERO,
        about: SectionCopy {
            title: "The Designer & Vision",
            subtitle: "The creative mind behind these captivating digital experiences",
        },
        education_title: "Academic Excellence",
        experience_title: "Professional Journey",
        philosophy_title: "Creative Vision",
        projects: SectionCopy {
            title: "Stunning Creations",
            subtitle: "Explore a curated gallery of masterfully crafted digital experiences",
        },
        skills: SKILLS,
        contact: SectionCopy {
            title: "Connect & Collaborate",
            subtitle: "Let's create something extraordinary together",
        },
        contact_details_title: "Reach Out",
        profiles_title: "Digital Presence",
        form_title: "Let's Chat",
        footer_blurb: "Showcasing the beauty of creative UI design with vibrant colors and engaging animations.",
        footer_current: "Currently in UI Mode - focused on aesthetic beauty and visual delight",
    },
    ModeTheme {
        mode: Mode::Ux,
        root_class: "ux-mode",
        nav_class: "ux-nav",
        button_class: "btn btn-ux",
        form_control_class: "ux-form-control",
        project_card_class: "ux-project-card",
        panel_class: "",
        hover_lift_px: 0,
        skill_bar_radius_px: 4,
        message_rows: 5,
        decorative: false,
        project_details: true,
        labelled_links: true,
        required_hint: Some("All fields marked with * are required."),
        labels: FormText { name: "Name *", email: "Email *", message: "Message *" },
        placeholders: FormText {
            name: "Enter your name",
            email: "Enter your email",
            message: "Enter your message",
        },
        submit_label: "Submit Message",
        email_label: "Email",
        phone_label: "Phone",
        hero: HERO,
        about: SectionCopy {
            title: "About Me & This Project",
            subtitle: "Education, experience, and design philosophy",
        },
        education_title: "Education",
        experience_title: "Work Experience",
        philosophy_title: "Design Philosophy",
        projects: SectionCopy {
            title: "Project Experience",
            subtitle: "A collection of development projects with details on technologies and responsibilities",
        },
        skills: SKILLS,
        contact: SectionCopy {
            title: "Contact Information",
            subtitle: "How to reach me for professional inquiries",
        },
        contact_details_title: "Contact Details",
        profiles_title: "Online Profiles",
        form_title: "Send Message",
        footer_blurb: "This portfolio showcases the difference between UI-focused design and UX-focused design approaches.",
        footer_current: "You are currently viewing the UX-focused version with emphasis on clarity, accessibility, and usability.",
    },
    ModeTheme {
        mode: Mode::Balanced,
        root_class: "balanced-mode",
        nav_class: "balanced-nav",
        button_class: "btn btn-balanced",
        form_control_class: "balanced-form-control",
        project_card_class: "balanced-project-card",
        panel_class: "section--panel",
        hover_lift_px: 5,
        skill_bar_radius_px: 5,
        message_rows: 6,
        decorative: false,
        project_details: true,
        labelled_links: false,
        required_hint: None,
        labels: FormText { name: "Your Name", email: "Your Email", message: "Your Message" },
        placeholders: FormText {
            name: "Your name",
            email: "Your email",
            message: "What would you like to discuss?",
        },
        submit_label: "Send Message",
        email_label: "Email Address",
        phone_label: "Phone Number",
        hero: HERO,
        about: SectionCopy { title: "About Me", subtitle: content::PROFILE.summary },
        education_title: "Education",
        experience_title: "Work Experience",
        philosophy_title: "Design Philosophy",
        projects: SectionCopy {
            title: "Featured Projects",
            subtitle: "Showcasing recent work across various technologies and domains",
        },
        skills: SKILLS,
        contact: SectionCopy {
            title: "Get in Touch",
            subtitle: "Interested in discussing collaboration opportunities or have questions about my work?",
        },
        contact_details_title: "Contact Information",
        profiles_title: "Professional Profiles",
        form_title: "Send a Message",
        footer_blurb: "Attractive where it helps, plain where it matters: a middle path between UI and UX.",
        footer_current: "Currently in Balanced Mode - visual appeal without sacrificing clarity",
    },
];

/// Presentation row for `mode`.
#[must_use]
pub fn theme(mode: Mode) -> &'static ModeTheme {
    &THEMES[mode.index()]
}

/// Design philosophy card shown in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Philosophy {
    pub mode: Mode,
    pub title: &'static str,
    pub summary: &'static str,
    pub features: [&'static str; 4],
}

pub const PHILOSOPHIES: [Philosophy; 3] = [
    Philosophy {
        mode: Mode::Ui,
        title: "UI-Focused Design",
        summary: "Aesthetic-driven approach prioritizing visual impact and creative expression.",
        features: [
            "Bold, vibrant color schemes with creative contrast",
            "Expressive typography with decorative elements",
            "Dramatic spacing and layout choices",
            "Animated interactions and visual feedback",
        ],
    },
    Philosophy {
        mode: Mode::Balanced,
        title: "Balanced Design",
        summary: "A middle ground that keeps visual polish while protecting usability.",
        features: [
            "Visually attractive without sacrificing readability",
            "Purposeful animations that enhance usability",
            "Clear information hierarchy with aesthetic appeal",
            "Modern design patterns aligned with user expectations",
        ],
    },
    Philosophy {
        mode: Mode::Ux,
        title: "UX-Focused Design",
        summary: "User-centered approach prioritizing clarity, accessibility and task completion.",
        features: [
            "Clear, accessible color schemes with sufficient contrast",
            "Readable typography with consistent hierarchy",
            "Consistent spacing and predictable layouts",
            "Focused on seamless task completion and clarity",
        ],
    },
];
