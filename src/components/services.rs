use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{Service, SERVICES, SERVICES_INTRO, SERVICES_TITLE};
use crate::state::Section;

fn service_card(service: &Service) -> Html {
    html! {
        <div key={service.title} class="card service-card">
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul class="service-card__features">
                {
                    for service.features.iter().map(|feature| html! {
                        <li key={*feature}>
                            <IconSvg icon={Icon::Star} size={12} class="accent-purple" />
                            {*feature}
                        </li>
                    })
                }
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="page-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="gradient-text">{SERVICES_TITLE}</h2>
                    <p>{SERVICES_INTRO}</p>
                </div>

                <div class="service-grid">
                    { for SERVICES.iter().map(service_card) }
                </div>
            </div>

            <style>
                {r#"
                .service-grid {
                    display: grid;
                    gap: 2rem;
                }

                .service-card {
                    background: linear-gradient(135deg, rgba(51, 65, 85, 0.5), rgba(30, 41, 59, 0.5));
                    border: 1px solid rgba(71, 85, 105, 0.2);
                }

                .service-card h3 {
                    transition: color 0.2s ease;
                }

                .service-card:hover h3 {
                    color: #c084fc;
                }

                .service-card__features {
                    list-style: none;
                    padding: 0;
                    margin: 1.5rem 0 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .service-card__features li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #94a3b8;
                }

                .accent-purple { color: #c084fc; }

                @media (min-width: 768px) {
                    .service-grid { grid-template-columns: repeat(2, 1fr); }
                }

                @media (min-width: 1024px) {
                    .service-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
