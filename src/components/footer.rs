use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub services: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub blurb: AttrValue,
}

fn link_column(title: &'static str, items: &'static [&'static str]) -> Html {
    html! {
        <div class="footer-column">
            <h4>{title}</h4>
            <ul>
                { for items.iter().map(|item| html! { <li><a href="#">{*item}</a></li> }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <div class="footer-brand">
                        <span class="nav-logo-mark">{"✨"}</span>
                        <div>
                            <h3>{config::COMPANY_SHORT}</h3>
                            <p class="footer-tagline">{"Commercial Cleaning"}</p>
                        </div>
                    </div>
                    <p>{props.blurb.clone()}</p>
                </div>
                { link_column("Services", props.services) }
                { link_column("Industries", props.industries) }
                <div class="footer-column">
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li>{"📞 "}<a href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a></li>
                        <li>{"✉️ "}<a href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a></li>
                        <li>{"📍 "}{config::LOCATION}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-legal">
                <p>{format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)}</p>
            </div>
        </footer>
    }
}
