//! Application configuration.
//!
//! The feed location is baked in at build time (`PORTFOLIO_CSV_URL=... trunk build`),
//! the rest are fixed constants.

use portfolio::config::{CSV_URL_ENV, ROW_ORDER_ENV};
use portfolio::contact::EMAIL_ENDPOINT;
use portfolio::{DispatchConfig, FeedConfig, FeedError};

/// Published CSV export of the projects sheet.
pub const PROJECTS_CSV_URL: Option<&str> = option_env!("PORTFOLIO_CSV_URL");

/// `sheet` or `newest-first`.
pub const PROJECTS_ROW_ORDER: Option<&str> = option_env!("PORTFOLIO_ROW_ORDER");

/// EmailJS routing identifiers.
pub const EMAILJS_SERVICE_ID: &str = "service_zbqgrk8";
pub const EMAILJS_TEMPLATE_ID: &str = "template_e5xhmtb";
pub const EMAILJS_PUBLIC_KEY: &str = "AgRIIQTGiGlh_8A8s";

/// Site owner, shown in the hero, nav logo, and footer.
pub const OWNER_NAME: &str = "Arham Mobarat";
pub const OWNER_INITIALS: &str = "AM";
pub const OWNER_DEGREE: &str = "BSc Mechanical Engineering Technology";
pub const OWNER_SCHOOL: &str = "University of Greenwich • Year 2";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/arham-mobarat-63a47334a/";
pub const GITHUB_URL: &str = "#";
pub const MAILTO_URL: &str = "mailto:arhammob566@gmail.com?subject=Portfolio%20Contact&body=Hi%20Arham,%0A%0AI%20found%20your%20portfolio%20and%20would%20like%20to%20get%20in%20touch.";

/// Skill bars: name and level in percent.
pub const SKILLS: &[(&str, u8)] = &[
    ("CAD/CAM", 90),
    ("Circuit Design", 85),
    ("3D Modelling", 92),
    ("Technical Writing", 88),
    ("Prototyping", 80),
    ("Problem Solving", 95),
];

/// Feed settings from the build-time environment.
pub fn feed_config() -> Result<FeedConfig, FeedError> {
    FeedConfig::from_lookup(|key| match key {
        CSV_URL_ENV => PROJECTS_CSV_URL.map(str::to_string),
        ROW_ORDER_ENV => PROJECTS_ROW_ORDER.map(str::to_string),
        _ => None,
    })
}

pub fn dispatch_config() -> DispatchConfig {
    DispatchConfig {
        endpoint: EMAIL_ENDPOINT.to_string(),
        service_id: EMAILJS_SERVICE_ID.to_string(),
        template_id: EMAILJS_TEMPLATE_ID.to_string(),
        user_id: EMAILJS_PUBLIC_KEY.to_string(),
    }
}
