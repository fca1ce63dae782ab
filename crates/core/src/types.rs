//! Core types used throughout Fleet Dashboard
//!
//! Identifiers, the fixed set of regional state codes, and feedback
//! severity levels shared by the model, the UI, and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FleetError;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Identifier of a user; equal to the authentication provider's uid
pub type UserId = String;

/// Identifier of a vehicle
pub type VehicleId = uuid::Uuid;

// ============================================================================
// Provider Identity
// ============================================================================

/// The authenticated subject as reported by the identity provider
///
/// Distinct from the stored profile: the provider owns these values and the
/// dashboard only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderIdentity {
    pub uid: UserId,
    pub display_name: String,
    pub email: String,
    pub photo_url: String,
}

impl Default for ProviderIdentity {
    fn default() -> Self {
        Self {
            uid: "local-user".to_string(),
            display_name: "Local User".to_string(),
            email: "local@example.com".to_string(),
            photo_url: String::new(),
        }
    }
}

impl ProviderIdentity {
    /// Initials used by the avatar when no photo is available
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

// ============================================================================
// State Codes
// ============================================================================

/// Two-letter code of a Brazilian federative unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StateCode {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

impl StateCode {
    /// All codes, in the order they are offered in the state selector
    pub const ALL: [StateCode; 27] = [
        StateCode::AC,
        StateCode::AL,
        StateCode::AP,
        StateCode::AM,
        StateCode::BA,
        StateCode::CE,
        StateCode::DF,
        StateCode::ES,
        StateCode::GO,
        StateCode::MA,
        StateCode::MT,
        StateCode::MS,
        StateCode::MG,
        StateCode::PA,
        StateCode::PB,
        StateCode::PR,
        StateCode::PE,
        StateCode::PI,
        StateCode::RJ,
        StateCode::RN,
        StateCode::RS,
        StateCode::RO,
        StateCode::RR,
        StateCode::SC,
        StateCode::SP,
        StateCode::SE,
        StateCode::TO,
    ];

    /// The two-letter code
    pub fn as_str(&self) -> &'static str {
        match self {
            StateCode::AC => "AC",
            StateCode::AL => "AL",
            StateCode::AP => "AP",
            StateCode::AM => "AM",
            StateCode::BA => "BA",
            StateCode::CE => "CE",
            StateCode::DF => "DF",
            StateCode::ES => "ES",
            StateCode::GO => "GO",
            StateCode::MA => "MA",
            StateCode::MT => "MT",
            StateCode::MS => "MS",
            StateCode::MG => "MG",
            StateCode::PA => "PA",
            StateCode::PB => "PB",
            StateCode::PR => "PR",
            StateCode::PE => "PE",
            StateCode::PI => "PI",
            StateCode::RJ => "RJ",
            StateCode::RN => "RN",
            StateCode::RS => "RS",
            StateCode::RO => "RO",
            StateCode::RR => "RR",
            StateCode::SC => "SC",
            StateCode::SP => "SP",
            StateCode::SE => "SE",
            StateCode::TO => "TO",
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateCode {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        StateCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| FleetError::field_validation("state", format!("Unknown state code '{}'", s)))
    }
}

impl TryFrom<String> for StateCode {
    type Error = FleetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> Self {
        code.as_str().to_string()
    }
}

// ============================================================================
// Feedback Severity
// ============================================================================

/// Severity of a feedback notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// CSS modifier used by the feedback banner
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Icon shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
