use leptos::*;
use portfolio::Section;

use crate::config::SKILLS;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor() class="section section-alt">
            <h2 class="section-title">"My " <span class="highlight">"Skills"</span></h2>
            <div class="skills">
                {SKILLS
                    .iter()
                    .map(|&(name, level)| {
                        view! {
                            <div class="skill">
                                <div class="skill-header">
                                    <span class="skill-name">{name}</span>
                                    <span class="skill-level">{format!("{}%", level)}</span>
                                </div>
                                <div class="skill-track">
                                    <div class="skill-bar" style=format!("width: {}%", level)></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
