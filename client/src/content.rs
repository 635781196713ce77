//! Static portfolio content.
//!
//! Every mode renders the same records; only presentation differs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Short glyph shown when the link is rendered icon-only.
    pub glyph: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0..=100.
    pub percentage: u8,
    pub description: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    title: "Product Designer & Front-end Developer",
    summary: "Designer and developer building interfaces that look good and stay out of the user's way.",
    email: "hello@example.com",
    phone: "+1 (555) 010-0200",
    location: "Remote",
};

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/", glyph: "in" },
    SocialLink { label: "GitHub", href: "https://github.com/", glyph: "gh" },
    SocialLink { label: "Dribbble", href: "https://dribbble.com/", glyph: "dr" },
];

pub const EDUCATION: [Education; 1] = [Education {
    school: "State University",
    degree: "B.Sc. Computer Science, Human-Computer Interaction track",
    period: "2015 - 2019",
}];

pub const EXPERIENCE: [Experience; 2] = [
    Experience {
        role: "Senior Product Designer",
        company: "Northwind Studio",
        period: "2022 - Present",
        highlights: &[
            "Led the redesign of a booking flow, cutting drop-off during checkout",
            "Maintained the component library shared by four product teams",
        ],
    },
    Experience {
        role: "Front-end Developer",
        company: "Contoso Labs",
        period: "2019 - 2022",
        highlights: &[
            "Built accessible dashboards for internal analytics",
            "Introduced visual regression testing for the design system",
        ],
    },
];

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Transit Planner",
        description: "Trip planning app that puts the next departure first and hides everything else behind one tap.",
        role: "Design lead",
        period: "2024",
        technologies: &["Figma", "TypeScript", "Mapbox"],
        link: Some("https://example.com/transit"),
    },
    Project {
        title: "Studio Analytics",
        description: "Reporting dashboard for a creative agency with per-client drill-downs and exportable summaries.",
        role: "Full-stack developer",
        period: "2023",
        technologies: &["Rust", "Axum", "PostgreSQL"],
        link: None,
    },
    Project {
        title: "Recipe Box",
        description: "Cooking companion with step-by-step mode, large type and hands-free timers.",
        role: "UX researcher & designer",
        period: "2022",
        technologies: &["User interviews", "Prototyping", "Usability testing"],
        link: Some("https://example.com/recipes"),
    },
    Project {
        title: "Design Mode Portfolio",
        description: "This site: the same content rendered three ways to compare UI-led, UX-led and balanced design.",
        role: "Designer & developer",
        period: "2025",
        technologies: &["Rust", "Leptos", "WebAssembly"],
        link: None,
    },
];

pub const SKILLS: [Skill; 5] = [
    Skill { name: "Visual Design", percentage: 90, description: "Layout, colour, typography and brand systems" },
    Skill { name: "Interaction Design", percentage: 85, description: "Flows, states and micro-interactions" },
    Skill { name: "User Research", percentage: 75, description: "Interviews, usability studies and synthesis" },
    Skill { name: "Prototyping", percentage: 88, description: "From paper sketches to coded prototypes" },
    Skill { name: "Front-end Development", percentage: 80, description: "Accessible, responsive component code" },
];

pub const TOOLS: [&str; 8] =
    ["Figma", "Sketch", "Adobe XD", "Illustrator", "Rust", "TypeScript", "CSS", "Git"];
