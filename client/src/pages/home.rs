//! Single-page portfolio: every section in scroll order.

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::contact_section::ContactSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero_section::HeroSection;
use crate::components::projects_section::ProjectsSection;
use crate::components::skills_section::SkillsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main class="page">
            <HeroSection/>
            <AboutSection/>
            <ProjectsSection/>
            <SkillsSection/>
            <ContactSection/>
        </main>
        <Footer/>
    }
}
