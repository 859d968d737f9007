use crate::components::common::SectionText;
use crate::config::images;
use yew::prelude::*;

const MANAGEMENT_CORE_AREAS: &[&str] = &[
    "Strategy & Corporate Planning",
    "Operational Efficiency",
    "Organizational Design",
    "Process Optimization",
];

const AVIATION_SERVICES: &[(&str, &str)] = &[
    ("Infrastructure", "Airport & Facility Development including Domes, Hangars, and Terminals."),
    ("Project Management", "Aviation Project & Program Management aimed at delivery excellence."),
    ("ORAT", "Operational Readiness & Efficiency planning."),
    ("Advisory", "Safety, Compliance & Regulatory Advisory."),
];

const FOCUS_TILES: &[(&str, &str)] = &[
    (images::AVIATION, "Aviation Infrastructure"),
    (images::STRATEGY, "Corporate Strategy"),
];

#[function_component]
pub fn ConsultingPage() -> Html {
    html! {
        <div class="page page-consulting slide-in">
            <div class="page-banner banner-light">
                <div class="container">
                    <h1 class="page-title">{"Consulting"}</h1>
                    <p class="page-lead">
                        {"Improving organizational performance, operational efficiency, and project delivery for government entities and private operators."}
                    </p>
                </div>
            </div>

            <div class="container section with-sidebar">
                <div class="main-column">
                    <section>
                        <div class="icon-heading">
                            <i class="fas fa-users accent"></i>
                            <h2>{"Management Consulting"}</h2>
                        </div>
                        <SectionText>
                            {"Our management consulting practice supports organizations in defining strategy, optimizing operations, and leading transformation. We help clients align strategic priorities with execution realities—ensuring that performance, governance, and decision-making frameworks translate effectively into results."}
                        </SectionText>
                        <div class="core-areas">
                            <h4>{"Core Areas:"}</h4>
                            <ul class="bullet-grid">
                                { for MANAGEMENT_CORE_AREAS.iter().map(|area| html! {
                                    <li key={*area}><span class="dot"></span>{*area}</li>
                                }) }
                            </ul>
                        </div>
                    </section>

                    <section>
                        <div class="icon-heading">
                            <i class="fas fa-plane accent"></i>
                            <h2>{"Aviation Consulting"}</h2>
                        </div>
                        <SectionText>
                            {"Avalon’s aviation practice combines industry insight with technical program management. We advise on the planning, development, and delivery of aviation infrastructure — from hangars and maintenance domes to terminals and support facilities."}
                        </SectionText>
                        <SectionText>
                            {"Our team brings an understanding of both operational requirements and commercial outcomes, enabling projects that are efficient, compliant, and future-ready."}
                        </SectionText>
                        <div class="service-grid">
                            { for AVIATION_SERVICES.iter().map(|(title, body)| html! {
                                <div class="service-tile">
                                    <h4>{*title}</h4>
                                    <p>{*body}</p>
                                </div>
                            }) }
                        </div>
                    </section>

                    <section>
                        <h3 class="subheading">{"Our Approach"}</h3>
                        <p class="pull-quote">
                            {"\"We diagnose issues precisely, design tailored frameworks, and stay involved through delivery to ensure impact.\""}
                        </p>
                    </section>
                </div>

                <aside class="sidebar">
                    <div class="sidebar-panel">
                        <h3>{"Project Focus"}</h3>
                        <p>{"From strategic boardrooms to aviation hangars, we bridge the gap between concept and completion."}</p>
                        { for FOCUS_TILES.iter().map(|(src, caption)| html! {
                            <div class="focus-tile">
                                <img src={*src} alt={*caption} />
                                <div class="focus-caption">{*caption}</div>
                            </div>
                        }) }
                    </div>
                </aside>
            </div>
        </div>
    }
}
