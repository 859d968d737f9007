//! Static facts about the firm shown across the site.

pub const BRAND: &str = "AVALON";
pub const TAGLINE: &str = "Precision. Performance. Perspective.";
pub const CONTACT_EMAIL: &str = "contact@avalon-group.com";
pub const HEADQUARTERS: &[&str] = &["London", "Dubai", "Singapore"];
pub const FOOTER_OFFICES: &[&str] = &["London, UK", "Dubai, UAE"];
pub const COPYRIGHT: &str = "© 2025 Avalon Group. All rights reserved.";

pub mod images {
    pub const HERO: &str = "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2670&auto=format&fit=crop";
    pub const AVIATION: &str = "https://images.unsplash.com/photo-1542296332-2e44a996aa0a?auto=format&fit=crop&q=80&w=600";
    pub const STRATEGY: &str = "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?auto=format&fit=crop&q=80&w=600";
    pub const TOBACCO_FIELDS: &str = "https://images.unsplash.com/photo-1627807663249-c146e3794715?auto=format&fit=crop&q=80&w=1000";
    pub const INDUSTRIAL_PLANT: &str = "https://images.unsplash.com/photo-1504917595217-d4dc5ebe6122?auto=format&fit=crop&q=80&w=1000";
    pub const OFFICE: &str = "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=2300";
}

pub fn headquarters_line() -> String {
    HEADQUARTERS.join(" • ")
}
