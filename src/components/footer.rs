use yew::prelude::*;

use crate::content::{BRAND, FOOTER_COPYRIGHT, FOOTER_TAGLINE};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="site-footer__content">
                <h3 class="gradient-text">{BRAND}</h3>
                <p class="site-footer__tagline">{FOOTER_TAGLINE}</p>
                <div class="site-footer__legal">{FOOTER_COPYRIGHT}</div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1.5rem;
                    border-top: 1px solid #334155;
                }

                .site-footer__content {
                    max-width: 72rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .site-footer h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .site-footer__tagline {
                    color: #94a3b8;
                    margin: 0 0 1.5rem;
                }

                .site-footer__legal {
                    color: #64748b;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
