use yew::prelude::*;

/// Page-wide rules shared by both landing variants. Widget-specific rules
/// live next to their widgets.
#[function_component(SiteStyle)]
pub fn site_style() -> Html {
    html! {
        <style>
            {r#"
                :root {
                    --primary: #2563eb;
                    --muted: #f1f5f9;
                    --muted-text: #64748b;
                    --border: rgba(15, 23, 42, 0.1);
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #0f172a;
                    background: linear-gradient(135deg, #fff, #fff, var(--muted));
                }
                .container {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                section {
                    padding: 6rem 0;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(37, 99, 235, 0.1);
                    color: var(--primary);
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }
                .section-header h2 {
                    font-size: 2.5rem;
                    margin: 0 0 1rem;
                }
                .section-lead {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: var(--muted-text);
                    font-size: 1.125rem;
                }
                .muted-band {
                    background: rgba(241, 245, 249, 0.6);
                }
                .reveal {
                    opacity: 0;
                    animation: reveal 0.6s ease-out forwards;
                }
                @keyframes reveal {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    backdrop-filter: blur(12px);
                    background: rgba(255, 255, 255, 0.6);
                    border-bottom: 1px solid var(--border);
                    transition: background 0.3s, box-shadow 0.3s;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    height: 5rem;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    color: inherit;
                }
                .nav-logo-text {
                    display: flex;
                    flex-direction: column;
                }
                .nav-links {
                    display: none;
                    gap: 2rem;
                }
                .nav-link {
                    color: inherit;
                    text-decoration: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .nav-link:hover {
                    color: var(--primary);
                }
                .nav-cta, .primary-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: var(--primary);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 500;
                    cursor: pointer;
                }
                .outline-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border: 1px solid currentColor;
                    border-radius: 9999px;
                    background: transparent;
                    color: inherit;
                    text-decoration: none;
                    cursor: pointer;
                }
                .full-width {
                    width: 100%;
                    justify-content: center;
                }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: currentColor;
                }
                .mobile-menu {
                    display: grid;
                    gap: 0.75rem;
                    padding: 1.5rem 1rem 2rem;
                    background: #fff;
                }

                .feature-grid {
                    display: grid;
                    gap: 1.5rem;
                    grid-template-columns: 1fr;
                }
                .feature-card, .service-card-inner {
                    border: 1px solid var(--border);
                    border-radius: 1.5rem;
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.8);
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .feature-card:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                }
                .feature-card-icon, .service-card-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .feature-card p, .service-card-inner p {
                    color: var(--muted-text);
                }
                .service-card-bullets {
                    list-style: none;
                    padding: 0;
                    font-size: 0.875rem;
                }
                .service-card-3d:hover {
                    scale: 1.05;
                }

                .contact-section {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 1.5rem;
                    padding-left: 1rem;
                    padding-right: 1rem;
                }
                .contact-detail {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }
                .contact-card {
                    border: 1px solid var(--border);
                    border-radius: 1.5rem;
                    padding: 1.5rem;
                    background: #fff;
                }
                .proposal-form {
                    display: grid;
                    gap: 1rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .form-field {
                    display: grid;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                }
                .form-field input, .form-field textarea {
                    padding: 0.6rem 1rem;
                    border: 1px solid var(--border);
                    border-radius: 9999px;
                    font: inherit;
                }
                .form-field textarea {
                    min-height: 120px;
                    border-radius: 1rem;
                }

                .site-footer {
                    border-top: 1px solid var(--border);
                    background: #fff;
                    padding: 3rem 1rem;
                }
                .footer-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: 1fr;
                }
                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    color: var(--muted-text);
                    font-size: 0.875rem;
                }
                .footer-column a {
                    color: inherit;
                    text-decoration: none;
                }
                .footer-brand {
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                }
                .footer-legal {
                    max-width: 72rem;
                    margin: 2rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid var(--border);
                    text-align: center;
                    font-size: 0.875rem;
                    color: var(--muted-text);
                }

                @media (min-width: 768px) {
                    .nav-links { display: flex; }
                    .burger-menu, .mobile-menu { display: none; }
                    .feature-grid.cols-2 { grid-template-columns: repeat(2, 1fr); }
                    .feature-grid.cols-3 { grid-template-columns: repeat(3, 1fr); }
                    .feature-grid.cols-4 { grid-template-columns: repeat(4, 1fr); }
                    .contact-section { grid-template-columns: 1fr 1fr; align-items: center; }
                    .footer-grid { grid-template-columns: repeat(4, 1fr); }
                }
            "#}
        </style>
    }
}
