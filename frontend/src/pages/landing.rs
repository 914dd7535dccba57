use yew::prelude::*;
use yew_hooks::prelude::*;
use chrono::Datelike;
use web_sys::Event;

use crate::components::contact::ContactSection;
use crate::config;
use crate::content::{
    self, Benefit, Certificate, Icon, Service, Testimonial, BENEFITS, CERTIFICATES, SERVICES,
    TESTIMONIALS,
};
use crate::navigation::{use_navigation, SectionId};
use crate::reveal::Reveal;

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigation = use_navigation();

    // Deep links: honour the fragment on first render and whenever it changes.
    {
        let navigation = navigation.clone();
        use_effect_with_deps(
            move |_| {
                navigation.follow_fragment();
                || ()
            },
            (),
        );
    }
    use_event_with_window("hashchange", move |_: Event| navigation.follow_fragment());

    html! {
        <div class="landing-page">
            <style>{LANDING_STYLES}</style>
            <Hero />
            <About />
            <Methods />
            <Benefits />
            <Testimonials />
            <Certificates />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let navigation = use_navigation();
    let book = Callback::from(move |_: MouseEvent| navigation.navigate(SectionId::Contact.as_str()));

    html! {
        <section id={SectionId::Hero.as_str()} class="hero fade-in">
            <div class="container hero-grid">
                <div>
                    <h1 class="hero-title">{"Harmony of body and mind"}</h1>
                    <p class="hero-subtitle">
                        {"Massage practices that release psychosomatic blocks and restore your inner balance"}
                    </p>
                    <button class="cta-button" onclick={book}>{"Book a session"}</button>
                </div>
                <div class="hero-image">
                    <img src={config::asset_url(content::HERO_IMAGE)} alt="Massage" />
                    <div class="hero-badge scale-in">
                        <p class="hero-badge-caption">{"Certified specialist"}</p>
                        <p class="hero-badge-value">{"10+ years of experience"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={SectionId::About.as_str()} class="section muted">
            <Reveal name="about" class={classes!("container", "narrow")}>
                <h2 class="section-title">{"About me"}</h2>
                <div class="card about-card">
                    <img class="portrait" src={config::asset_url(content::PORTRAIT_IMAGE)} alt="Specialist" />
                    <div>
                        <h3 class="card-title">{content::PRACTITIONER}</h3>
                        <p class="muted-text">
                            {"I work with psychosomatic conditions through body-oriented practices. My approach rests on a deep understanding of how emotions, thoughts and the physical body are connected."}
                        </p>
                        <p class="muted-text">
                            {"Over the years I have helped hundreds of people let go of chronic tension, pain and blocks that kept them from living fully. Every session is an individual path back to your inner balance."}
                        </p>
                        <div class="highlights">
                            { for content::HIGHLIGHTS.iter().map(|(icon, text)| html! {
                                <span class="highlight">
                                    <span class="accent">{icon.glyph()}</span>
                                    {*text}
                                </span>
                            }) }
                        </div>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(Methods)]
fn methods() -> Html {
    html! {
        <section id={SectionId::Methods.as_str()} class="section">
            <Reveal name="methods" class={classes!("container")}>
                <h2 class="section-title">{"Methods"}</h2>
                <div class="card-grid three">
                    { for SERVICES.iter().enumerate().map(|(index, service)| service_card(index, service)) }
                </div>
            </Reveal>
        </section>
    }
}

fn service_card(index: usize, service: &Service) -> Html {
    html! {
        <div class="card service-card scale-in" style={content::stagger_delay(index)}>
            <div class="service-icon">{service.icon.glyph()}</div>
            <h3 class="card-title">{service.title}</h3>
            <p class="muted-text">{service.description}</p>
        </div>
    }
}

#[function_component(Benefits)]
fn benefits() -> Html {
    html! {
        <section class="section muted">
            <Reveal name="benefits" class={classes!("container", "two-columns")}>
                <div>
                    <h3 class="section-subtitle">{"What therapy gives you"}</h3>
                    <ul class="benefit-list">
                        { for BENEFITS.iter().enumerate().map(|(index, benefit)| benefit_item(index, benefit)) }
                    </ul>
                </div>
                <img class="results-image scale-in" src={config::asset_url(content::RESULTS_IMAGE)} alt="Results" />
            </Reveal>
        </section>
    }
}

fn benefit_item(index: usize, benefit: &Benefit) -> Html {
    html! {
        <li class="benefit fade-in" style={content::stagger_delay(index)}>
            <span class="accent">{Icon::Check.glyph()}</span>
            <span>{benefit.text}</span>
        </li>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="section">
            <Reveal name="testimonials" class={classes!("container")}>
                <h2 class="section-title">{"Testimonials"}</h2>
                <div class="card-grid three">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, t)| testimonial_card(index, t)) }
                </div>
            </Reveal>
        </section>
    }
}

fn testimonial_card(index: usize, testimonial: &Testimonial) -> Html {
    html! {
        <div class="card testimonial-card scale-in" style={content::stagger_delay(index)}>
            <div class="stars" aria-label={format!("{} out of 5", testimonial.rating)}>
                {content::stars(testimonial.rating)}
            </div>
            <p class="muted-text">{testimonial.text}</p>
            <p class="testimonial-name">{testimonial.name}</p>
        </div>
    }
}

#[function_component(Certificates)]
fn certificates() -> Html {
    html! {
        <section class="section muted">
            <Reveal name="certificates" class={classes!("container")}>
                <h2 class="section-title">{"Certificates"}</h2>
                <div class="card-grid four">
                    { for CERTIFICATES.iter().enumerate().map(|(index, c)| certificate_card(index, c)) }
                </div>
            </Reveal>
        </section>
    }
}

fn certificate_card(index: usize, certificate: &Certificate) -> Html {
    html! {
        <div class="card certificate-card scale-in" style={content::stagger_delay(index)}>
            <div class="service-icon">{Icon::Award.glyph()}</div>
            <h3 class="card-title">{certificate.title}</h3>
            <p class="muted-text">{format!("{}, {}", certificate.issuer, certificate.year)}</p>
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <h4>{"Contacts"}</h4>
                    <p><a href={format!("tel:{}", content::PHONE.replace(['(', ')', ' ', '-'], ""))}>{content::PHONE}</a></p>
                    <p><a href={format!("mailto:{}", content::EMAIL)}>{content::EMAIL}</a></p>
                </div>
                <div>
                    <h4>{"Working hours"}</h4>
                    { for content::WORKING_HOURS.iter().map(|line| html! { <p>{*line}</p> }) }
                </div>
                <div>
                    <h4>{"Social media"}</h4>
                    <div class="social-links">
                        { for content::SOCIAL_LINKS.iter().map(|(icon, name)| html! {
                            <span class="social-link" title={*name}>{icon.glyph()}</span>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} Psychosomatic therapy. All rights reserved.", year)}
            </div>
        </footer>
    }
}

const LANDING_STYLES: &str = r#"
    :root {
        --background: #faf7f2;
        --foreground: #3d3a36;
        --primary: #6b7b5e;
        --primary-foreground: #ffffff;
        --accent: #c9a27e;
        --muted: #f1ece4;
        --muted-foreground: #7a746c;
    }
    body {
        margin: 0;
        background: var(--background);
        color: var(--foreground);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes scaleIn {
        from { opacity: 0; transform: scale(0.95); }
        to { opacity: 1; transform: scale(1); }
    }
    .fade-in { animation: fadeIn 0.6s ease-out both; }
    .scale-in { animation: scaleIn 0.5s ease-out both; }
    .reveal { transition: opacity 0.7s ease-out, transform 0.7s ease-out; }
    .reveal-hidden { opacity: 0; transform: scale(0.97); }
    .reveal-hidden .scale-in, .reveal-hidden .fade-in { animation-play-state: paused; }
    .reveal-visible { opacity: 1; transform: none; }
    .container { max-width: 1152px; margin: 0 auto; padding: 0 1rem; }
    .container.narrow { max-width: 896px; }
    .section { padding: 5rem 0; }
    .section.muted { background: var(--muted); }
    .section-title {
        font-size: 2.5rem;
        font-weight: 700;
        text-align: center;
        color: var(--primary);
        margin: 0 0 3rem;
    }
    .section-subtitle { font-size: 2rem; color: var(--primary); margin: 0 0 1.5rem; }
    .section-lead { text-align: center; color: var(--muted-foreground); margin: -1.5rem 0 3rem; }
    .muted-text { color: var(--muted-foreground); line-height: 1.7; }
    .accent { color: var(--accent); }
    .card {
        background: #fff;
        border-radius: 24px;
        padding: 2rem;
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
    }
    .card-title { font-size: 1.25rem; font-weight: 600; color: var(--primary); margin: 0 0 1rem; }
    .card-grid { display: grid; gap: 2rem; }
    .card-grid.three { grid-template-columns: repeat(3, 1fr); }
    .card-grid.four { grid-template-columns: repeat(4, 1fr); }
    .cta-button {
        background: var(--primary);
        color: var(--primary-foreground);
        border: none;
        border-radius: 999px;
        padding: 1rem 2rem;
        font-size: 1.1rem;
        cursor: pointer;
        transition: opacity 0.2s ease;
    }
    .cta-button:hover { opacity: 0.9; }
    .hero { padding: 8rem 0 5rem; }
    .hero-grid, .two-columns { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
    .hero-title { font-size: 3.5rem; line-height: 1.1; color: var(--primary); margin: 0 0 1.5rem; }
    .hero-subtitle { font-size: 1.15rem; color: var(--muted-foreground); line-height: 1.7; margin: 0 0 2rem; }
    .hero-image { position: relative; }
    .hero-image img, .results-image {
        width: 100%;
        object-fit: cover;
        border-radius: 24px;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
    }
    .hero-image img { height: 500px; }
    .results-image { height: 400px; }
    .hero-badge {
        position: absolute;
        bottom: -1.5rem;
        left: -1.5rem;
        background: var(--accent);
        color: #fff;
        padding: 1.5rem;
        border-radius: 16px;
    }
    .hero-badge p { margin: 0; }
    .hero-badge-caption { font-size: 0.875rem; }
    .hero-badge-value { font-size: 1.5rem; font-weight: 700; }
    .about-card { display: flex; gap: 2rem; align-items: center; }
    .portrait { width: 12rem; height: 12rem; border-radius: 50%; object-fit: cover; flex-shrink: 0; }
    .highlights { display: flex; gap: 1.5rem; margin-top: 1.5rem; font-size: 0.9rem; }
    .highlight { display: flex; gap: 0.5rem; align-items: center; }
    .service-icon {
        width: 4rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2rem;
        background: var(--muted);
        border-radius: 16px;
        margin-bottom: 1.5rem;
    }
    .service-card { transition: transform 0.3s ease, box-shadow 0.3s ease; }
    .service-card:hover { transform: translateY(-8px); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.12); }
    .benefit-list { list-style: none; padding: 0; margin: 0; }
    .benefit { display: flex; gap: 0.75rem; margin-bottom: 1rem; }
    .stars { color: var(--accent); letter-spacing: 0.15rem; margin-bottom: 1rem; }
    .testimonial-name { font-weight: 600; margin: 1rem 0 0; }
    .footer { background: var(--primary); color: var(--primary-foreground); padding: 3rem 0; }
    .footer a { color: inherit; text-decoration: none; opacity: 0.8; }
    .footer-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-bottom: 2rem; }
    .footer h4 { font-size: 1.25rem; margin: 0 0 1rem; }
    .social-links { display: flex; gap: 1rem; font-size: 1.5rem; }
    .social-link { cursor: pointer; transition: opacity 0.2s ease; }
    .social-link:hover { opacity: 0.8; }
    .footer-bottom {
        text-align: center;
        opacity: 0.6;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.2);
    }
    @media (max-width: 768px) {
        .hero-grid, .two-columns, .card-grid.three, .card-grid.four, .footer-grid {
            grid-template-columns: 1fr;
        }
        .about-card { flex-direction: column; }
        .hero-title { font-size: 2.5rem; }
        .section-title { font-size: 2rem; }
    }
"#;
