use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{HERO_SUBTITLE, HERO_TAGLINE, HERO_TITLE};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero__glow"></div>
            <div class="hero__content fade-in-up">
                <h1 class="hero__title gradient-text">{HERO_TITLE}</h1>
                <h2 class="hero__subtitle">{HERO_SUBTITLE}</h2>
                <p class="hero__tagline">{HERO_TAGLINE}</p>
                <div class="hero__actions">
                    <button class="cta-button" onclick={go_to(Section::Services)}>
                        <span>{"Explore Our Work"}</span>
                        <IconSvg icon={Icon::ArrowRight} size={20} class="cta-button__arrow" />
                    </button>
                    <button class="outline-button" onclick={go_to(Section::Contact)}>
                        {"Start a Project"}
                    </button>
                </div>
            </div>

            <button class="hero__scroll-hint" aria-label="Scroll to about" onclick={go_to(Section::About)}>
                <IconSvg icon={Icon::ChevronDown} size={32} />
            </button>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                }

                .hero__glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(147, 51, 234, 0.2), rgba(219, 39, 119, 0.2));
                }

                .hero__content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .hero__title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                    background-size: 200% 200%;
                    animation: gradientX 3s ease infinite;
                }

                .hero__subtitle {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin: 0 0 2rem;
                    color: #e2e8f0;
                }

                .hero__tagline {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                    line-height: 1.6;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }

                .hero__actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    justify-content: center;
                    align-items: center;
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #9333ea, #db2777);
                    color: white;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    transform: scale(1.05);
                    background: linear-gradient(90deg, #7e22ce, #be185d);
                }

                .cta-button__arrow {
                    transition: transform 0.3s ease;
                }

                .cta-button:hover .cta-button__arrow {
                    transform: translateX(4px);
                }

                .outline-button {
                    padding: 1rem 2rem;
                    border: 2px solid #c084fc;
                    border-radius: 9999px;
                    background: transparent;
                    color: #c084fc;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .outline-button:hover {
                    background: #c084fc;
                    color: white;
                    transform: scale(1.05);
                }

                .hero__scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: none;
                    border: none;
                    color: #94a3b8;
                    cursor: pointer;
                    animation: bounce 1s infinite;
                }

                .hero__scroll-hint:hover {
                    color: #c084fc;
                }

                @keyframes gradientX {
                    0%, 100% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                }

                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, -25%); }
                    50% { transform: translate(-50%, 0); }
                }

                @media (min-width: 640px) {
                    .hero__actions {
                        flex-direction: row;
                    }
                }

                @media (min-width: 768px) {
                    .hero__title { font-size: 6rem; }
                    .hero__subtitle { font-size: 3.75rem; }
                    .hero__tagline { font-size: 1.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
