use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::feature_grid::FeatureGrid;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::site_style::SiteStyle;
use crate::components::testimonials::AnimatedTestimonials;
use crate::config;
use crate::content;
use crate::dom::scroll_to_top;

const SECTIONS: &[&str] = &["Services", "About", "Industries", "Testimonials", "Contact"];
const FOOTER_SERVICES: &[&str] = &["Nightly Janitorial", "Deep Cleaning", "Sanitization", "Floor Care"];
const FOOTER_INDUSTRIES: &[&str] = &["Restaurants", "Medical Facilities", "Auto Dealerships", "Resorts"];

#[function_component(Boutique)]
pub fn boutique() -> Html {
    let testimonials = use_memo(|_| content::testimonials(), ());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page boutique">
            <SiteStyle />
            <style>
                {r#"
                    .boutique .hero-grid, .boutique .about-grid {
                        display: grid;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .boutique .hero h1 {
                        font-size: 3rem;
                        letter-spacing: -0.03em;
                    }
                    .boutique .gradient-text {
                        background: linear-gradient(to right, var(--primary), #1d4ed8);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .boutique .hero-image, .boutique .about-image {
                        height: 450px;
                        overflow: hidden;
                        border-radius: 1.5rem;
                    }
                    .boutique .hero-image img, .boutique .about-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .boutique .hero-actions {
                        display: flex;
                        gap: 0.75rem;
                        flex-wrap: wrap;
                    }
                    @media (min-width: 1024px) {
                        .boutique .hero-grid, .boutique .about-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <Nav sections={SECTIONS} cta_label="Get Proposal" />

            <main>
                <section class="hero">
                    <div class="container hero-grid">
                        <div class="reveal">
                            <div class="section-badge">{"🏆 Arizona's Premier Cleaning Service"}</div>
                            <h1>
                                {"Commercial Cleaning Services for Clients Who "}
                                <span class="gradient-text">{"Expect More"}</span>
                            </h1>
                            <p class="section-lead">
                                {"Delivering exceptional commercial cleaning services to Arizona's most discerning establishments. Where quality meets reliability."}
                            </p>
                            <div class="hero-actions">
                                <a href="#contact" class="primary-button">{"Request Free Proposal →"}</a>
                                <a href={config::PHONE_HREF} class="outline-button">{format!("Call {}", config::PHONE_DISPLAY)}</a>
                            </div>
                        </div>
                        <div class="hero-image reveal">
                            <img src="/cleaningimage1.jpg" alt="Professional cleaning team" />
                        </div>
                    </div>
                </section>

                <section>
                    <div class="container">
                        <div class="section-header reveal">
                            <div class="section-badge">{"Our Values"}</div>
                            <h2>{"What Sets Us Apart"}</h2>
                        </div>
                        <FeatureGrid items={content::VALUES} columns={3} />
                    </div>
                </section>

                <section id="about">
                    <div class="container about-grid">
                        <div class="reveal">
                            <div class="section-badge">{"About Us"}</div>
                            <h2>{"Elevating Standards in Commercial Cleaning"}</h2>
                            <p class="section-lead">
                                {"For over a decade, Commercial Cleaning Associates has been Arizona's trusted partner for premium commercial cleaning. We understand that your business environment reflects your brand, and we're committed to ensuring it always makes the right impression."}
                            </p>
                            <p class="section-lead">
                                {"Our team of trained professionals uses state-of-the-art equipment and eco-friendly products to deliver results that exceed expectations. From nightly janitorial services to specialized deep cleaning, we tailor our approach to meet the unique needs of each client."}
                            </p>
                            <div class="hero-actions">
                                <a href="#services" class="primary-button">{"Learn More About Us"}</a>
                                <a href="#contact" class="outline-button">{"View Certifications"}</a>
                            </div>
                        </div>
                        <div class="about-image reveal">
                            <img src="/cleaningimage2.jpeg" alt="Professional cleaning equipment" />
                        </div>
                    </div>
                </section>

                <section id="services">
                    <div class="container">
                        <div class="section-header reveal">
                            <div class="section-badge">{"Our Services"}</div>
                            <h2>{"Comprehensive Cleaning Solutions"}</h2>
                            <p class="section-lead">
                                {"From routine maintenance to specialized cleaning, we offer a full range of services tailored to your business needs"}
                            </p>
                        </div>
                        <FeatureGrid items={content::BOUTIQUE_SERVICES} columns={3} />
                    </div>
                </section>

                <section id="industries" class="muted-band">
                    <div class="container">
                        <div class="section-header reveal">
                            <div class="section-badge">{"Industries We Serve"}</div>
                            <h2>{"Specialized Expertise Across Industries"}</h2>
                        </div>
                        <FeatureGrid items={content::INDUSTRIES} columns={3} />
                    </div>
                </section>

                <section id="testimonials">
                    <div class="container">
                        <div class="section-header reveal">
                            <div class="section-badge">{"Testimonials"}</div>
                            <h2>{"What Our Clients Say"}</h2>
                        </div>
                        <AnimatedTestimonials testimonials={(*testimonials).clone()} autoplay={true} />
                    </div>
                </section>

                <ContactSection />
            </main>

            <Footer
                services={FOOTER_SERVICES}
                industries={FOOTER_INDUSTRIES}
                blurb="Arizona's trusted partner for premium commercial cleaning, serving the Valley's most discerning businesses."
            />
        </div>
    }
}
