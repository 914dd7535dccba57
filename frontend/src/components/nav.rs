use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::navigation::{use_navigation, SectionId};

#[function_component(Nav)]
pub fn nav() -> Html {
    let navigation = use_navigation();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::HEADER_SCROLLED_OFFSET;

    let toggle_menu = {
        let navigation = navigation.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigation.toggle_menu();
        })
    };

    let go_to = {
        let navigation = navigation.clone();
        Callback::from(move |target: SectionId| navigation.navigate(target.as_str()))
    };

    let menu_class = if navigation.is_menu_open() {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(250, 247, 242, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #e8e1d7;
                        transition: box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: var(--primary);
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        font-size: 1rem;
                        color: var(--foreground);
                        cursor: pointer;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: var(--primary);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: var(--foreground);
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem;
                            background: var(--background);
                            border-bottom: 1px solid #e8e1d7;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <nav class="nav-content">
                <button class="nav-logo" onclick={
                    let go_to = go_to.clone();
                    move |_| go_to.emit(SectionId::Hero)
                }>
                    {"Psychosomatics"}
                </button>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for SectionId::ALL.into_iter().map(|id| {
                            let go_to = go_to.clone();
                            html! {
                                <button class="nav-link" onclick={move |_| go_to.emit(id)}>
                                    {id.label()}
                                </button>
                            }
                        })
                    }
                </div>
            </nav>
        </header>
    }
}
