//! Route access policy.
//!
//! Two guards compose here. The coarse guard admits any signed-in staff
//! member to authenticated routes. The fine guard additionally requires a
//! per-visit code on the secured sections, and always wins over the coarse
//! guard for those sections.

use serde::{Deserialize, Serialize};

/// Sections that require a second code on every visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProtectedSection {
    Accounts,
    Communication,
}

/// All protected sections in sidebar order.
pub const PROTECTED_SECTIONS: &[ProtectedSection] =
    &[ProtectedSection::Accounts, ProtectedSection::Communication];

impl ProtectedSection {
    /// Route path of the section.
    pub fn path(&self) -> &'static str {
        match self {
            ProtectedSection::Accounts => "/accounts",
            ProtectedSection::Communication => "/communication",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProtectedSection::Accounts => "Accounts",
            ProtectedSection::Communication => "Communication",
        }
    }
}

/// Which guard applies to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardClass {
    /// Reachable without a session (login, not-found).
    Public,
    /// Requires a session.
    Authenticated,
    /// Requires a session and an unlocked secondary challenge.
    Secured(ProtectedSection),
}

impl GuardClass {
    pub fn protected_section(&self) -> Option<ProtectedSection> {
        match self {
            GuardClass::Secured(section) => Some(*section),
            _ => None,
        }
    }
}

/// Outcome of evaluating a navigation against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Render,
    RedirectToLogin,
    Challenge(ProtectedSection),
}

/// Decide whether a view may render.
///
/// `secondary_unlocked` is the state of the challenge for the current mount
/// of the view; it is ignored for routes that are not secured.
pub fn evaluate(class: GuardClass, authenticated: bool, secondary_unlocked: bool) -> AccessDecision {
    match class {
        GuardClass::Public => AccessDecision::Render,
        GuardClass::Authenticated if authenticated => AccessDecision::Render,
        GuardClass::Authenticated => AccessDecision::RedirectToLogin,
        GuardClass::Secured(_) if !authenticated => AccessDecision::RedirectToLogin,
        GuardClass::Secured(section) if !secondary_unlocked => AccessDecision::Challenge(section),
        GuardClass::Secured(_) => AccessDecision::Render,
    }
}
