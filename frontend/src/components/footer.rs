use crate::components::common::go_to;
use crate::config;
use crate::navigation::Page;
use yew::prelude::*;

const PRACTICE_LINKS: &[(&str, Page)] = &[
    ("Management Consulting", Page::Consulting),
    ("Aviation Infrastructure", Page::Consulting),
    ("Tobacco Trading", Page::Tobacco),
    ("Industrial Metals", Page::Metals),
];

const FIRM_LINKS: &[(&str, Page)] = &[
    ("About Us", Page::Firm),
    ("Our Values", Page::Firm),
    ("Careers", Page::Contact),
];

const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Use", "Compliance"];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub navigate: Callback<Page>,
}

fn link_list(navigate: &Callback<Page>, links: &[(&str, Page)]) -> Html {
    links
        .iter()
        .map(|(label, page)| {
            html! {
                <li class="footer-link" onclick={go_to(navigate, *page)}>{*label}</li>
            }
        })
        .collect()
}

#[function_component]
pub fn Footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h2 class="footer-brand">{config::BRAND}</h2>
                        <p class="footer-tagline">
                            {config::TAGLINE}<br/>
                            {"Global consulting and trading operations."}
                        </p>
                    </div>
                    <div>
                        <h4>{"Practices"}</h4>
                        <ul>{link_list(&props.navigate, PRACTICE_LINKS)}</ul>
                    </div>
                    <div>
                        <h4>{"The Firm"}</h4>
                        <ul>{link_list(&props.navigate, FIRM_LINKS)}</ul>
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <ul>
                            { for config::FOOTER_OFFICES.iter().map(|office| html! { <li>{*office}</li> }) }
                            <li class="footer-link footer-cta" onclick={go_to(&props.navigate, Page::Contact)}>
                                {"Get in Touch →"}
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{config::COPYRIGHT}</p>
                    <div class="footer-legal">
                        // Placeholders until the legal pages exist.
                        { for LEGAL_LINKS.iter().map(|label| html! { <span>{*label}</span> }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
