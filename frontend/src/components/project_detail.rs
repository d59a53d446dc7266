//! Expanded project panel: media, rich content blocks, and highlights.
//!
//! Code blocks are highlighted with highlight.js when the page loads it;
//! without it they render as plain preformatted text.

use leptos::*;
use portfolio::{ContentBlock, ProjectRecord, VideoSource};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = hljs, js_name = highlightElement)]
    fn highlight_element(element: &web_sys::HtmlElement) -> Result<(), JsValue>;
}

#[component]
pub fn ProjectDetail(record: ProjectRecord, on_close: Callback<()>) -> impl IntoView {
    let ProjectRecord {
        title,
        image,
        full_description,
        details,
        video_url,
        model_url,
        blocks,
        ..
    } = record;

    view! {
        <div class="project-detail">
            <div class="detail-hero">
                <img src=image alt=title.clone()/>
                <button class="detail-close" aria-label="Close" on:click=move |_| on_close.call(())>
                    "✕"
                </button>
                <div class="detail-heading">
                    <h2>{title}</h2>
                </div>
            </div>

            <div class="detail-body">
                {video_url.map(|url| view! { <ProjectVideo url=url/> })}

                {model_url.map(|url| {
                    view! {
                        <div class="detail-block">
                            <h3 class="detail-subheading model">"3D Model Preview"</h3>
                            <model-viewer
                                src=url
                                alt="3D model"
                                camera-controls=""
                                auto-rotate=""
                                shadow-intensity="1"
                                class="model-viewer"
                            ></model-viewer>
                        </div>
                    }
                })}

                <div class="content-blocks">
                    {blocks.into_iter().map(render_block).collect_view()}
                </div>

                <p class="full-description">{full_description}</p>

                <div class="detail-grid">
                    {details
                        .into_iter()
                        .map(|detail| view! { <div class="detail-tile"><p>{detail}</p></div> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectVideo(url: String) -> impl IntoView {
    let player = match VideoSource::classify(&url) {
        VideoSource::Embed(src) => view! {
            <div class="video-frame">
                <iframe
                    src=src
                    title="YouTube video player"
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                ></iframe>
            </div>
        }
        .into_view(),
        VideoSource::File(src) => view! {
            <video controls=true class="video-file">
                <source src=src type="video/mp4"/>
                "Your browser does not support the video tag."
            </video>
        }
        .into_view(),
    };

    view! {
        <div class="detail-block">
            <h3 class="detail-subheading">"Project Video"</h3>
            {player}
        </div>
    }
}

fn render_block(block: ContentBlock) -> View {
    match block {
        ContentBlock::Image { src } => view! {
            <img class="block-image" src=src alt="Project image" loading="lazy"/>
        }
        .into_view(),
        ContentBlock::Text { text } => view! { <p class="block-text">{text}</p> }.into_view(),
        ContentBlock::Code { code, language } => view! { <CodeBlock code=code language=language/> }.into_view(),
    }
}

#[component]
fn CodeBlock(code: String, language: String) -> impl IntoView {
    let code_ref = create_node_ref::<html::Code>();

    code_ref.on_load(move |element| {
        if let Err(err) = highlight_element(&element) {
            log::debug!("Syntax highlighting unavailable: {:?}", err);
        }
    });

    view! {
        <pre class="block-code">
            <code node_ref=code_ref class=format!("language-{}", language)>{code}</code>
        </pre>
    }
}
