use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::{Icon, IconSvg};
use crate::content::BRAND;
use crate::state::{NavStyle, Section};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub style: NavStyle,
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<Section>,
}

fn nav_links(on_navigate: &Callback<Section>, link_class: &'static str) -> Html {
    Section::ALL
        .into_iter()
        .map(|section| {
            let on_navigate = on_navigate.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(section);
            });
            html! {
                <button key={section.id()} class={link_class} onclick={onclick}>
                    {section.label()}
                </button>
            }
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { style, menu_open, on_toggle, on_navigate } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", style.class())}>
            <div class="nav-content">
                <div class="nav-bar">
                    <h1 class="nav-logo gradient-text">{BRAND}</h1>

                    <div class="nav-links">
                        { nav_links(on_navigate, "nav-link") }
                    </div>

                    <button
                        class="burger-menu"
                        aria-label="Toggle menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <IconSvg icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>

                {
                    if *menu_open {
                        html! {
                            <div class="mobile-menu">
                                { nav_links(on_navigate, "nav-link nav-link--mobile") }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s ease;
                }

                .top-nav--transparent {
                    background: transparent;
                }

                .top-nav--solid {
                    background: rgba(15, 23, 42, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }

                .nav-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0;
                }

                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    color: #cbd5e1;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .burger-menu:hover {
                    color: #c084fc;
                }

                .nav-link--mobile {
                    text-align: left;
                    padding: 0;
                }

                .burger-menu {
                    background: none;
                    border: none;
                    color: #cbd5e1;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 1rem;
                    padding: 1rem 0;
                    border-top: 1px solid #334155;
                }

                @media (min-width: 768px) {
                    .nav-links {
                        display: flex;
                    }

                    .burger-menu,
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
