use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// Section names; each links to the lowercase anchor of the same name.
    pub sections: &'static [&'static str],
    pub cta_label: AttrValue,
}

pub fn section_anchor(section: &str) -> String {
    format!("#{}", section.to_lowercase())
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |onclick: Option<Callback<MouseEvent>>| -> Html {
        props
            .sections
            .iter()
            .map(|section| {
                html! {
                    <a href={section_anchor(section)} class="nav-link" onclick={onclick.clone()}>
                        {*section}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-mark">{"✨"}</span>
                    <span class="nav-logo-text">
                        <strong>{config::COMPANY_SHORT}</strong>
                        <small>{"Commercial Cleaning"}</small>
                    </span>
                </a>
                <nav class="nav-links">
                    { links(None) }
                </nav>
                <a href="#contact" class="nav-cta">{props.cta_label.clone()}</a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <nav class="mobile-menu">
                            { links(Some(close_menu.clone())) }
                            <a href="#contact" class="nav-cta" onclick={close_menu}>{props.cta_label.clone()}</a>
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_lowercase() {
        assert_eq!(section_anchor("FAQ"), "#faq");
        assert_eq!(section_anchor("Services"), "#services");
    }
}
