use log::{debug, error};
use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, nav::Nav, services::Services,
};
use crate::dom::{self, BrowserViewport, ScrollListener};
use crate::state::{navigate_to_section, PageAction, PageState, Section};

/// The whole site: owns the menu flag and scroll offset and hands the
/// sections what they need to render and navigate.
#[function_component(Home)]
pub fn home() -> Html {
    let page = use_reducer_eq(|| PageState::new(dom::current_scroll_offset()));

    // Scroll listener lives exactly as long as the page.
    {
        let dispatcher = page.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move |offset| {
                    dispatcher.dispatch(PageAction::Scrolled(offset));
                })
                .map_err(|err| error!("Failed to attach scroll listener: {:?}", err))
                .ok();

                move || drop(listener)
            },
            (),
        );
    }

    // Sections do not exist yet when the browser tries to honour #fragment on
    // load, so jump there once they are mounted.
    {
        let dispatcher = page.dispatcher();
        use_effect_with_deps(
            move |_| {
                if let Some(fragment) = dom::location_fragment() {
                    debug!("Following deep link to #{}", fragment);
                    dispatcher.dispatch(navigate_to_section(&BrowserViewport, &fragment));
                }
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let dispatcher = page.dispatcher();
        use_callback(move |_: (), _| dispatcher.dispatch(PageAction::ToggleMenu), ())
    };

    let on_navigate = {
        let dispatcher = page.dispatcher();
        use_callback(
            move |section: Section, _| {
                debug!("Navigating to #{}", section.id());
                dispatcher.dispatch(navigate_to_section(&BrowserViewport, section.id()));
            },
            (),
        )
    };

    html! {
        <div class="site">
            <Nav
                style={page.nav_style()}
                menu_open={page.menu_open}
                on_toggle={on_toggle}
                on_navigate={on_navigate.clone()}
            />
            <Hero on_navigate={on_navigate} />
            <About />
            <Services />
            <Contact />
            <Footer />

            <style>
                {r#"
                .site {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #0f172a, #581c87, #0f172a);
                    color: #e2e8f0;
                    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
                }

                .gradient-text {
                    background: linear-gradient(90deg, #c084fc, #f472b6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .page-section {
                    padding: 5rem 1.5rem;
                }

                .page-section--tinted {
                    background: rgba(30, 41, 59, 0.5);
                }

                .section-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-header h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }

                .section-header p {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                    line-height: 1.6;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .card {
                    background: rgba(51, 65, 85, 0.5);
                    padding: 2rem;
                    border-radius: 1rem;
                    transition: all 0.3s ease;
                }

                .card:hover {
                    background: rgba(51, 65, 85, 0.8);
                    transform: translateY(-8px);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                    color: #e2e8f0;
                }

                .card p {
                    color: #cbd5e1;
                    line-height: 1.6;
                    margin: 0;
                }

                .fade-in-up {
                    animation: fadeInUp 0.8s ease-out both;
                }

                @keyframes fadeInUp {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{window, Element, Event, HtmlElement};
    use yew::AppHandle;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount() -> (Element, AppHandle<Home>) {
        let document = window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let app = yew::Renderer::<Home>::with_root(root.clone()).render();
        (root, app)
    }

    fn unmount(root: Element, app: AppHandle<Home>) {
        app.destroy();
        root.remove();
        window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    }

    /// Lets the scheduler flush pending renders.
    async fn settle() {
        TimeoutFuture::new(50).await;
    }

    fn find(root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).unwrap()
    }

    fn click(root: &Element, selector: &str) {
        find(root, selector)
            .unwrap_or_else(|| panic!("nothing matches {}", selector))
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn nav_class(root: &Element) -> String {
        find(root, "nav.top-nav").unwrap().class_name()
    }

    fn fire_scroll() {
        let event = Event::new("scroll").unwrap();
        window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn burger_shows_panel_and_swaps_icon() {
        let (root, app) = mount();
        settle().await;

        assert!(find(&root, ".mobile-menu").is_none());
        assert!(find(&root, ".burger-menu line").is_some());
        assert_eq!(
            find(&root, ".burger-menu").unwrap().get_attribute("aria-expanded").as_deref(),
            Some("false")
        );

        click(&root, ".burger-menu");
        settle().await;

        assert!(find(&root, ".mobile-menu").is_some());
        assert!(find(&root, ".burger-menu line").is_none());
        assert!(find(&root, ".burger-menu path").is_some());
        assert_eq!(
            find(&root, ".burger-menu").unwrap().get_attribute("aria-expanded").as_deref(),
            Some("true")
        );

        click(&root, ".burger-menu");
        settle().await;

        assert!(find(&root, ".mobile-menu").is_none());
        assert!(find(&root, ".burger-menu line").is_some());

        unmount(root, app);
    }

    #[wasm_bindgen_test]
    async fn mobile_link_closes_panel_and_scrolls() {
        let (root, app) = mount();
        settle().await;

        click(&root, ".burger-menu");
        settle().await;

        let about = find(&root, ".mobile-menu .nav-link:nth-child(2)").unwrap();
        assert_eq!(about.text_content().as_deref(), Some("About"));
        click(&root, ".mobile-menu .nav-link:nth-child(2)");
        settle().await;

        assert!(find(&root, ".mobile-menu").is_none());

        TimeoutFuture::new(1_500).await;
        assert!(window().unwrap().scroll_y().unwrap() > 0.0);

        unmount(root, app);
    }

    #[wasm_bindgen_test]
    async fn nav_turns_solid_past_fifty_pixels() {
        let (root, app) = mount();
        settle().await;
        assert!(nav_class(&root).contains("top-nav--transparent"));

        window().unwrap().scroll_to_with_x_and_y(0.0, 100.0);
        fire_scroll();
        settle().await;
        assert!(nav_class(&root).contains("top-nav--solid"));

        window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
        fire_scroll();
        settle().await;
        assert!(nav_class(&root).contains("top-nav--transparent"));

        unmount(root, app);
    }
}
