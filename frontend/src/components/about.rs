use leptos::*;
use portfolio::Section;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="section section-alt">
            <h2 class="section-title">"About " <span class="highlight">"Me"</span></h2>
            <div class="about-text">
                <p>
                    "I'm a second-year Mechanical Engineering Technology student at University of Greenwich, "
                    "driven by a passion for creating innovative solutions to real-world problems."
                </p>
                <p>
                    "My journey in engineering combines theoretical knowledge with hands-on experience in "
                    "3D modelling, circuit design, and website development. I believe in the power of "
                    "engineering to transform ideas into tangible solutions that make a difference."
                </p>
            </div>
        </section>
    }
}
