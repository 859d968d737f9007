use crate::components::common::{go_to, SectionText};
use crate::navigation::Page;
use crate::pages::PageProps;
use yew::prelude::*;

struct ProductCard {
    page: Page,
    icon: &'static str,
    theme: &'static str,
    summary: &'static str,
    call_to_action: &'static str,
}

const PRODUCT_CARDS: &[ProductCard] = &[
    ProductCard {
        page: Page::Tobacco,
        icon: "fas fa-leaf",
        theme: "product-card-amber",
        summary: "Supplying a complete range of cigarette products including Nano, Slim, and King Size formats with customized blends and packaging options.",
        call_to_action: "View Specifications",
    },
    ProductCard {
        page: Page::Metals,
        icon: "fas fa-industry",
        theme: "product-card-slate",
        summary: "Sourcing industrial and energy materials including Copper, Steel, Aluminum, and Coal with a focus on supply chain consistency.",
        call_to_action: "View Materials",
    },
];

const PARTNER_REASONS: &[(&str, &str, &str)] = &[
    ("fas fa-shield-halved", "Regulated Processes", "Every shipment managed within formal compliance frameworks."),
    ("fas fa-briefcase", "Commercial Clarity", "Transparent terms, structured documentation, and defined timelines."),
    ("fas fa-industry", "Technical Expertise", "Understanding of both manufacturing and market-side requirements."),
    ("fas fa-users", "Long-term Orientation", "Partnerships built on continuity and trust, not single transactions."),
];

#[function_component]
pub fn TradingPage(props: &PageProps) -> Html {
    html! {
        <div class="page page-trading slide-in">
            <div class="page-banner banner-light">
                <div class="container">
                    <h1 class="page-title">{"Trading"}</h1>
                    <p class="page-lead">
                        {"Precision, reliability, and control in the global movement of key commodities."}
                    </p>
                </div>
            </div>

            <div class="container section">
                <section class="intro">
                    <SectionText>
                        {"Avalon operates a global trading business specializing in the movement of tobacco products, metals, and coal across key markets. Our work centers on precision—ensuring every engagement, from sourcing to delivery, meets the expectations of professional distributors and import partners."}
                    </SectionText>
                </section>

                <div class="card-grid product-cards">
                    { for PRODUCT_CARDS.iter().map(|card| html! {
                        <div class={classes!("product-card", card.theme)} onclick={go_to(&props.navigate, card.page)}>
                            <div class="product-card-header">
                                <i class={classes!(card.icon, "product-icon")}></i>
                                <i class="fas fa-arrow-right product-arrow"></i>
                            </div>
                            <h2>{card.page.title()}</h2>
                            <p>{card.summary}</p>
                            <span class="product-cta">{card.call_to_action}</span>
                        </div>
                    }) }
                </div>

                <section class="partners-panel">
                    <h2>{"Why Partners Work With Us"}</h2>
                    <div class="four-column">
                        { for PARTNER_REASONS.iter().map(|(icon, title, body)| html! {
                            <div>
                                <i class={classes!(*icon, "partner-icon")}></i>
                                <h4>{*title}</h4>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                </section>
            </div>
        </div>
    }
}
