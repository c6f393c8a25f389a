use yew::prelude::*;

use crate::components::icons::IconSvg;
use crate::content::{Feature, Stat, ABOUT_INTRO, ABOUT_TITLE, FEATURES, STATS};
use crate::state::Section;

fn feature_card(feature: &Feature) -> Html {
    html! {
        <div key={feature.title} class="card feature-card">
            <div class="feature-card__icon">
                <IconSvg icon={feature.icon} size={40} class={feature.accent} />
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

fn stat_tile(stat: &Stat) -> Html {
    html! {
        <div key={stat.label} class="stat">
            <div class="stat__number gradient-text">{stat.number}</div>
            <div class="stat__label">{stat.label}</div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="page-section page-section--tinted">
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="gradient-text">{ABOUT_TITLE}</h2>
                    <p>{ABOUT_INTRO}</p>
                </div>

                <div class="feature-grid">
                    { for FEATURES.iter().map(feature_card) }
                </div>

                <div class="stat-grid">
                    { for STATS.iter().map(stat_tile) }
                </div>
            </div>

            <style>
                {r#"
                .feature-grid {
                    display: grid;
                    gap: 2rem;
                    margin-bottom: 4rem;
                }

                .feature-card__icon {
                    margin-bottom: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .feature-card:hover .feature-card__icon {
                    transform: scale(1.1);
                }

                .accent-yellow { color: #facc15; }
                .accent-green { color: #4ade80; }
                .accent-blue { color: #60a5fa; }

                .stat-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    margin-bottom: 3rem;
                    text-align: center;
                }

                .stat__number {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .stat__label {
                    color: #cbd5e1;
                    font-weight: 500;
                }

                @media (min-width: 768px) {
                    .feature-grid { grid-template-columns: repeat(3, 1fr); }
                    .stat-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
