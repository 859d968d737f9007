use crate::components::common::{go_to, Button, ButtonVariant, SectionHeading, SectionText};
use crate::config::images;
use crate::navigation::Page;
use crate::pages::PageProps;
use yew::prelude::*;

struct Principle {
    title: &'static str,
    body: &'static str,
}

const HOW_WE_WORK: &[Principle] = &[
    Principle {
        title: "Analytical & Adaptive",
        body: "We bring together strategic insight and technical capability to deliver outcomes that stand up to real-world conditions.",
    },
    Principle {
        title: "Execution Focused",
        body: "Whether advising leadership teams or managing aviation projects, Avalon is built for environments where precision defines success.",
    },
    Principle {
        title: "Global Perspective",
        body: "Cross-border commerce and management requires a nuanced understanding of regulatory and operational landscapes.",
    },
];

#[function_component]
fn Hero(props: &PageProps) -> Html {
    html! {
        <header class="hero">
            <div class="hero-background">
                <img src={images::HERO} alt="Avalon Global Capability" />
                <div class="hero-overlay"></div>
            </div>
            <div class="container hero-content">
                <h1 class="hero-title">
                    {"Precision."}<br/>
                    {"Performance."}<br/>
                    {"Perspective."}
                </h1>
                <p class="hero-subtitle">
                    {"A world of capability. Avalon combines strategic management consulting with precise global trading operations."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta hero-cta-primary" onclick={go_to(&props.navigate, Page::Consulting)}>
                        {"Our Consulting "}<i class="fas fa-arrow-right"></i>
                    </button>
                    <button class="hero-cta hero-cta-outline" onclick={go_to(&props.navigate, Page::Trading)}>
                        {"Global Trading "}<i class="fas fa-globe"></i>
                    </button>
                </div>
            </div>
        </header>
    }
}

#[function_component]
pub fn HomePage(props: &PageProps) -> Html {
    let navigate = &props.navigate;
    html! {
        <div class="page page-home fade-in">
            <Hero navigate={navigate.clone()} />

            <section class="section section-white">
                <div class="container two-column">
                    <div>
                        <span class="eyebrow">{"Who We Are"}</span>
                        <SectionHeading>{"Designed for impact on the ground and in the air."}</SectionHeading>
                    </div>
                    <div>
                        <SectionText>
                            {"Avalon is a consulting and trading company specializing in management, aviation, and cross-border commerce."}
                        </SectionText>
                        <SectionText>
                            {"We help organizations design strategies, optimize operations, and execute complex projects with precision."}
                        </SectionText>
                        <div class="spaced-top">
                            <Button variant={ButtonVariant::Text} onclick={go_to(navigate, Page::Firm)}>
                                {"Read more about The Firm"}
                            </Button>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container card-grid">
                    <div class="practice-card" onclick={go_to(navigate, Page::Consulting)}>
                        <i class="fas fa-briefcase practice-icon"></i>
                        <h3>{"Consulting Expertise"}</h3>
                        <p>
                            {"We combine management consulting with aviation advisory to address strategic and operational challenges. From organizational transformation to aviation infrastructure like hangars and terminals."}
                        </p>
                        <span class="card-link">{"Explore Consulting "}<i class="fas fa-arrow-right"></i></span>
                    </div>
                    <div class="practice-card" onclick={go_to(navigate, Page::Trading)}>
                        <i class="fas fa-anchor practice-icon"></i>
                        <h3>{"Global Trade & Commerce"}</h3>
                        <p>
                            {"Managing international sourcing and distribution through established logistics networks. We specialize in tobacco products, metals, and coal with a focus on regulatory alignment and execution."}
                        </p>
                        <span class="card-link">{"Explore Trading "}<i class="fas fa-arrow-right"></i></span>
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container narrow-left">
                    <h2 class="dark-heading">{"How We Work"}</h2>
                    <div class="three-column bordered-top">
                        { for HOW_WE_WORK.iter().map(|principle| html! {
                            <div>
                                <h4>{principle.title}</h4>
                                <p>{principle.body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>
        </div>
    }
}
