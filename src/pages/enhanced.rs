use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::before_after::BeforeAfterSlider;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::process_timeline::ProcessTimeline;
use crate::components::service_card::ServiceCard3D;
use crate::components::site_style::SiteStyle;
use crate::config;
use crate::content;
use crate::dom::scroll_to_top;

const SECTIONS: &[&str] = &["Services", "Process", "Industries", "About", "FAQ", "Contact"];
const FOOTER_SERVICES: &[&str] = &["Ceiling Restoration", "Kitchen Compliance", "High Dusting", "Industrial Cleaning"];
const FOOTER_INDUSTRIES: &[&str] = &["Manufacturing", "Restaurants", "Medical Facilities", "Auto Dealerships"];

const BEFORE_IMAGE: &str = "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=800";
const AFTER_IMAGE: &str = "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800";
const HERO_VIDEO: &str = "https://assets.mixkit.co/videos/preview/mixkit-person-cleaning-a-window-43377-large.mp4";

fn section_header(badge: &'static str, title: &'static str, lead: &'static str) -> Html {
    html! {
        <div class="section-header reveal">
            <span class="section-badge">{badge}</span>
            <h2>{title}</h2>
            <p class="section-lead">{lead}</p>
        </div>
    }
}

#[function_component(Enhanced)]
pub fn enhanced() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page enhanced">
            <SiteStyle />
            <style>
                {r#"
                    .enhanced .video-hero {
                        position: relative;
                        height: 100vh;
                        overflow: hidden;
                        padding: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: #fff;
                    }
                    .enhanced .video-hero video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .enhanced .video-hero .shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0,0,0,0.5), rgba(0,0,0,0.3), #fff);
                    }
                    .enhanced .video-hero .hero-copy {
                        position: relative;
                        z-index: 2;
                        padding: 0 1rem;
                    }
                    .enhanced .video-hero h1 {
                        font-size: 3.5rem;
                        margin: 1.5rem 0;
                    }
                    .enhanced .video-hero .accent {
                        background: linear-gradient(to right, #60a5fa, #22d3ee);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .enhanced .hero-pill {
                        display: inline-flex;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                    }
                    .enhanced .hero-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .enhanced .scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        z-index: 2;
                        animation: nudge 2s infinite;
                    }
                    @keyframes nudge {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    .enhanced .stats {
                        background: linear-gradient(135deg, rgba(37,99,235,0.05), rgba(37,99,235,0.1));
                    }
                    .enhanced .stat {
                        text-align: center;
                    }
                    .enhanced .stat-number {
                        font-size: 2.75rem;
                        font-weight: 700;
                        color: var(--primary);
                    }
                    .enhanced .cta-band {
                        background: linear-gradient(to right, var(--primary), #3b82f6);
                        color: #fff;
                        text-align: center;
                    }
                    .enhanced .guarantees {
                        display: grid;
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .enhanced .narrow {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .enhanced .floating-contact {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        z-index: 50;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        border: none;
                        background: var(--primary);
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    @media (min-width: 768px) {
                        .enhanced .video-hero h1 { font-size: 4.5rem; }
                        .enhanced .guarantees { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
            <Nav sections={SECTIONS} cta_label="Get Free Quote" />
            <a href="#contact" class="floating-contact" title="Get Free Estimate">{"💬"}</a>

            <main>
                <section class="video-hero">
                    <video autoplay={true} loop={true} muted={true} playsinline={true}>
                        <source src={HERO_VIDEO} type="video/mp4" />
                    </video>
                    <div class="shade"></div>
                    <div class="hero-copy reveal">
                        <div class="hero-pill">{"⚡ Arizona's #1 Commercial Cleaning Service"}</div>
                        <h1>
                            {"Restoring Excellence,"}
                            <br />
                            <span class="accent">{"One Surface at a Time"}</span>
                        </h1>
                        <p class="section-lead">
                            {"From ceiling restoration to industrial facility cleaning, we deliver exceptional results that exceed expectations"}
                        </p>
                        <div class="hero-actions">
                            <a href="#contact" class="primary-button">{"Get Free Estimate →"}</a>
                            <a href="#process" class="outline-button">{"Watch Our Process ▶"}</a>
                        </div>
                    </div>
                    <div class="scroll-hint">{"⌄"}</div>
                </section>

                <section class="stats">
                    <div class="container feature-grid cols-4">
                        { for content::STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-number">
                                    <AnimatedCounter end={stat.end} suffix={stat.suffix} />
                                </div>
                                <p>{stat.label}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="services">
                    <div class="container">
                        { section_header(
                            "Our Services",
                            "Comprehensive Cleaning Solutions",
                            "Specialized services designed to restore and maintain your facility at the highest standards",
                        ) }
                        <div class="feature-grid cols-2">
                            { for content::ENHANCED_SERVICES.iter().enumerate().map(|(index, service)| html! {
                                <ServiceCard3D service={service} index={index} />
                            }) }
                        </div>
                    </div>
                </section>

                <section id="industries" class="muted-band">
                    <div class="container">
                        { section_header(
                            "See The Difference",
                            "Dramatic Transformations",
                            "Experience the remarkable difference our ceiling restoration services can make",
                        ) }
                        <BeforeAfterSlider
                            before_image={BEFORE_IMAGE}
                            after_image={AFTER_IMAGE}
                            before_label="Before Restoration"
                            after_label="After Restoration"
                        />
                    </div>
                </section>

                <section id="process">
                    <div class="container narrow">
                        { section_header(
                            "Our Process",
                            "How We Work",
                            "A systematic approach to delivering exceptional cleaning services",
                        ) }
                        <ProcessTimeline steps={content::PROCESS_STEPS} />
                    </div>
                </section>

                <section id="faq" class="muted-band">
                    <div class="container narrow">
                        { section_header(
                            "FAQ",
                            "Frequently Asked Questions",
                            "Get answers to common questions about our commercial cleaning services",
                        ) }
                        <FaqAccordion items={content::FAQ} />
                    </div>
                </section>

                <section id="contact" class="cta-band">
                    <div class="container reveal" id="about">
                        <h2>{"Ready to Transform Your Facility?"}</h2>
                        <p class="section-lead">
                            {"Get your free estimate today and discover why Arizona's leading businesses trust CCA"}
                        </p>
                        <div class="hero-actions">
                            <a href="#contact" class="outline-button">{"Get Free Estimate →"}</a>
                            <a href={config::PHONE_HREF} class="outline-button">{format!("📞 {}", config::PHONE_DISPLAY)}</a>
                        </div>
                        <div class="guarantees">
                            { for content::GUARANTEES.iter().map(|(icon, text)| html! {
                                <div class="guarantee">{*icon}{" "}<strong>{*text}</strong></div>
                            }) }
                        </div>
                    </div>
                </section>
            </main>

            <Footer
                services={FOOTER_SERVICES}
                industries={FOOTER_INDUSTRIES}
                blurb="Arizona's premier commercial cleaning service, delivering exceptional results since 2009."
            />
        </div>
    }
}
