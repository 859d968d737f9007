use crate::components::common::{go_to, SectionText};
use crate::config::images;
use crate::navigation::Page;
use crate::pages::PageProps;
use yew::prelude::*;

const SPECIFICATIONS: &[(&str, &str)] = &[
    ("Formats", "Nano, Slim, Super Slim, King Size, Regular"),
    ("Filter Types", "Standard, Ventilated, Single Capsule, Dual Capsule"),
    ("Packaging", "Hard/Soft packs, Beveled edges, Specialized finishes (Fan-edged designs)"),
];

const COMPLIANCE_POINTS: &[&str] = &[
    "Market-specific blends",
    "Regulatory packaging alignment",
    "Quality assurance testing",
];

#[function_component]
pub fn TobaccoPage(props: &PageProps) -> Html {
    html! {
        <div class="page page-tobacco slide-in">
            <div class="page-banner banner-amber">
                <div class="container">
                    <div class="back-link" onclick={go_to(&props.navigate, Page::Trading)}>
                        <i class="fas fa-arrow-left"></i>{" Back to Trading"}
                    </div>
                    <h1 class="page-title">{"Tobacco Products"}</h1>
                    <p class="page-lead">
                        {"Complete range of cigarette products across multiple formats, blends, and packaging types."}
                    </p>
                </div>
            </div>

            <div class="container section two-column">
                <div>
                    <SectionText>
                        {"Avalon supplies a comprehensive portfolio of tobacco products designed to meet diverse market preferences. We combine structured commercial processes with strong supplier relationships to ensure consistency and quality."}
                    </SectionText>
                    <SectionText>
                        {"Each product category is sourced and produced within strict quality parameters and in accordance with destination market regulations."}
                    </SectionText>

                    <div class="spec-panel">
                        <h3><i class="fas fa-leaf accent-amber"></i>{" Key Specifications"}</h3>
                        <ul class="spec-list">
                            { for SPECIFICATIONS.iter().enumerate().map(|(index, (label, detail))| html! {
                                <li>
                                    <div class="spec-number">{format!("{:02}", index + 1)}</div>
                                    <div>
                                        <strong>{*label}</strong>
                                        <span>{*detail}</span>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="stacked">
                    <div class="dark-panel">
                        <h3>{"Customization & Compliance"}</h3>
                        <p>
                            {"Specifications are customized to the buyer’s requirements, aligned with market standards, and confirmed at the time of order."}
                        </p>
                        <div class="check-list">
                            { for COMPLIANCE_POINTS.iter().map(|point| html! {
                                <div><i class="fas fa-shield-halved"></i>{" "}{*point}</div>
                            }) }
                        </div>
                    </div>
                    <div class="image-panel">
                        <img src={images::TOBACCO_FIELDS} alt="Tobacco Fields" />
                    </div>
                </div>
            </div>
        </div>
    }
}
