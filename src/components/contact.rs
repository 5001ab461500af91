use yew::prelude::*;

use crate::config;

const FIELDS: &[(&str, &str, &str, &str)] = &[
    ("company", "Company/Business Name", "text", "Enter your business name"),
    ("email", "Email", "email", "Enter your email"),
    ("phone", "Phone Number", "tel", "Enter your phone number"),
    ("facility-type", "Facility Type", "text", "e.g., Restaurant, Medical Office, etc."),
];

fn field(id: &'static str, label: &'static str, kind: &'static str, placeholder: &'static str) -> Html {
    html! {
        <div class="form-field">
            <label for={id}>{label}</label>
            <input id={id} type={kind} placeholder={placeholder} />
        </div>
    }
}

/// Proposal request form. Markup only; nothing is submitted anywhere.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id="contact" class="contact-section">
            <div class="contact-info reveal">
                <div class="section-badge">{"Get In Touch"}</div>
                <h2>{"Request Your Free Proposal"}</h2>
                <p class="section-lead">
                    {"Ready to experience the Commercial Cleaning Associates difference? Contact us today for a customized proposal tailored to your facility's unique needs."}
                </p>
                <div class="contact-details">
                    <div class="contact-detail">
                        <span class="contact-icon">{"📍"}</span>
                        <div>
                            <h3>{"Service Area"}</h3>
                            <p>{"Phoenix, Scottsdale, Tempe, Mesa, Chandler & surrounding areas"}</p>
                        </div>
                    </div>
                    <div class="contact-detail">
                        <span class="contact-icon">{"✉️"}</span>
                        <div>
                            <h3>{"Email Us"}</h3>
                            <p>{config::EMAIL}</p>
                        </div>
                    </div>
                    <div class="contact-detail">
                        <span class="contact-icon">{"📞"}</span>
                        <div>
                            <h3>{"Call Us"}</h3>
                            <p>{config::PHONE_DISPLAY}</p>
                        </div>
                    </div>
                </div>
            </div>
            <div class="contact-card reveal">
                <h3>{"Request Proposal"}</h3>
                <p class="contact-card-lead">
                    {"Fill out the form below and we'll provide a customized quote within 24 hours."}
                </p>
                <form class="proposal-form">
                    <div class="form-row">
                        { field("first-name", "First name", "text", "Enter your first name") }
                        { field("last-name", "Last name", "text", "Enter your last name") }
                    </div>
                    { for FIELDS.iter().map(|&(id, label, kind, placeholder)| field(id, label, kind, placeholder)) }
                    <div class="form-field">
                        <label for="message">{"Additional Details"}</label>
                        <textarea
                            id="message"
                            placeholder="Tell us about your cleaning needs, facility size, frequency, etc."
                        />
                    </div>
                    <button type="button" class="primary-button full-width">{"Request Free Proposal"}</button>
                </form>
            </div>
        </section>
    }
}
