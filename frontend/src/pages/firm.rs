use crate::components::common::{SectionHeading, SectionText};
use crate::config::images;
use yew::prelude::*;

const VALUES: &[(&str, &str)] = &[
    ("Precision", "In thought, design, and execution."),
    ("Reliability", "In commitments, partnerships, and delivery."),
    ("Integrity", "In how we operate and represent our clients."),
    ("Adaptability", "In responding to new challenges and market dynamics."),
];

#[function_component]
pub fn FirmPage() -> Html {
    html! {
        <div class="page page-firm slide-in">
            <div class="firm-banner">
                <div class="firm-banner-image">
                    <img src={images::OFFICE} alt="Office" />
                </div>
                <div class="container firm-banner-content">
                    <h1 class="page-title light">{"The Firm"}</h1>
                    <p class="page-lead light">
                        {"Built on the principles of precision, performance, and reliability."}
                    </p>
                </div>
            </div>

            <div class="container section">
                <div class="narrow">
                    <SectionHeading>{"About Avalon"}</SectionHeading>
                    <SectionText>
                        {"Avalon is a consulting and trading company built on the principles of precision, performance, and reliability. We operate across management, aviation, and international trade — helping clients and partners design, manage, and deliver with confidence."}
                    </SectionText>
                    <SectionText>
                        {"Our work combines strategic insight, technical capability, and operational control across industries where accuracy matters most."}
                    </SectionText>

                    <div class="values-block">
                        <h3>{"Our Values"}</h3>
                        <div class="values-grid">
                            { for VALUES.iter().enumerate().map(|(index, (name, line))| html! {
                                <div class="value">
                                    <div class="value-number">{format!("{:02}", index + 1)}</div>
                                    <div>
                                        <h4>{*name}</h4>
                                        <p>{*line}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="perspective-panel">
                        <h3>{"Our Perspective"}</h3>
                        <p>
                            {"We believe effective organizations balance vision with structure. At Avalon, we translate complex ideas into executable plans, and plans into measurable outcomes. Whether guiding leadership decisions or coordinating global trade operations, our focus remains constant — clarity, integrity, and follow-through."}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
