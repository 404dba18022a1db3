//! Dashboard page navigation and greeting.
//!
//! Navigation is carried explicitly in the request path; there is no
//! session state.

use serde::Serialize;

use crate::error::CoreError;

pub const PAGE_HOME: &str = "home";
pub const PAGE_MONITORING: &str = "monitoring";

/// All valid page values.
pub const VALID_PAGES: &[&str] = &[PAGE_HOME, PAGE_MONITORING];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Monitoring,
}

impl Page {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            PAGE_HOME => Ok(Self::Home),
            PAGE_MONITORING => Ok(Self::Monitoring),
            _ => Err(CoreError::NotFound {
                entity: "Page",
                id: s.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => PAGE_HOME,
            Self::Monitoring => PAGE_MONITORING,
        }
    }

    /// Page reached with the "Next" control. The last page stays put.
    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Monitoring,
            Self::Monitoring => Self::Monitoring,
        }
    }

    /// Page reached with the "Back" control. The first page stays put.
    pub fn back(&self) -> Self {
        match self {
            Self::Home => Self::Home,
            Self::Monitoring => Self::Home,
        }
    }
}

/// Greeting for the local hour of day (0-23).
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning!",
        12..=17 => "Good Afternoon!",
        _ => "Good Evening!",
    }
}
