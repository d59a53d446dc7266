//! Hero section: who, what, and where to go next.

use leptos::*;
use portfolio::Section;

use super::scroll_to_section;
use crate::config::{
    GITHUB_URL, LINKEDIN_URL, MAILTO_URL, OWNER_DEGREE, OWNER_INITIALS, OWNER_NAME, OWNER_SCHOOL,
};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id=Section::Home.anchor() class="hero">
            <div class="hero-content">
                <div class="avatar">
                    <div class="avatar-inner">{OWNER_INITIALS}</div>
                </div>

                <h1 class="hero-title">{OWNER_NAME}</h1>

                <div class="hero-subtitle">
                    <span class="pill">{OWNER_DEGREE}</span>
                    <p class="school">{OWNER_SCHOOL}</p>
                </div>

                <p class="hero-bio">
                    "Aspiring engineer passionate about building anything and everything. "
                    "Turning ideas into reality through design, innovation, and problem-solving."
                </p>

                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| scroll_to_section(Section::Projects)>
                        "View My Work"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| scroll_to_section(Section::Contact)>
                        "Get In Touch"
                    </button>
                </div>

                <div class="social-links">
                    <a href=GITHUB_URL class="social-link" title="GitHub">"GitHub"</a>
                    <a href=LINKEDIN_URL class="social-link" target="_blank" rel="noopener noreferrer" title="LinkedIn">
                        "LinkedIn"
                    </a>
                    <a href=MAILTO_URL class="social-link" target="_blank" rel="noopener noreferrer" title="Email me directly">
                        "Email"
                    </a>
                </div>
            </div>

            <button class="scroll-indicator" aria-label="Scroll to about" on:click=move |_| scroll_to_section(Section::About)>
                "⌄"
            </button>
        </section>
    }
}
