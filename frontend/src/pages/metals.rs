use crate::components::common::{go_to, SectionText};
use crate::config::images;
use crate::navigation::Page;
use crate::pages::PageProps;
use yew::prelude::*;

const INDUSTRIAL_METALS: &[&str] = &["Copper", "Steel", "Aluminum", "Nickel"];
const COAL_GRADES: &[&str] = &["Coking Coal", "Steam Coal"];

#[function_component]
pub fn MetalsPage(props: &PageProps) -> Html {
    html! {
        <div class="page page-metals slide-in">
            <div class="page-banner banner-slate">
                <div class="container">
                    <div class="back-link" onclick={go_to(&props.navigate, Page::Trading)}>
                        <i class="fas fa-arrow-left"></i>{" Back to Trading"}
                    </div>
                    <h1 class="page-title">{"Metals & Coal"}</h1>
                    <p class="page-lead">
                        {"Sourcing industrial and energy materials with a focus on supply chain consistency."}
                    </p>
                </div>
            </div>

            <div class="container section two-column">
                <div>
                    <SectionText>
                        {"We manage the sourcing and distribution of industrial metals and energy materials, serving manufacturing partners and industrial clients. Our network spans established manufacturing partners and logistics providers across multiple regions."}
                    </SectionText>

                    <div class="spec-panel">
                        <h3><i class="fas fa-industry"></i>{" Core Materials"}</h3>
                        <div>
                            <h4 class="material-heading">{"Industrial Metals"}</h4>
                            <div class="material-grid">
                                { for INDUSTRIAL_METALS.iter().map(|metal| html! {
                                    <div class="material-tile"><span>{*metal}</span></div>
                                }) }
                            </div>
                        </div>
                        <div>
                            <h4 class="material-heading">{"Coal"}</h4>
                            <p>{"Reliable supply of energy materials for industrial applications."}</p>
                            <div class="pill-row">
                                { for COAL_GRADES.iter().map(|grade| html! {
                                    <span class="pill">{*grade}</span>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>

                <div class="stacked">
                    <div class="dark-panel">
                        <h3>{"Supply Chain Reliability"}</h3>
                        <p>
                            {"We coordinate the full process — from specification and compliance documentation to shipment and delivery — ensuring consistency, visibility, and discretion throughout the transaction."}
                        </p>
                    </div>
                    <div class="image-panel image-panel-tall">
                        <img src={images::INDUSTRIAL_PLANT} alt="Industrial Plant" />
                    </div>
                </div>
            </div>
        </div>
    }
}
