// src/models.rs
use serde::{Serialize, Deserialize};

/// Rate model of a certificate. `Variable` carries a flat rate for the
/// whole term exactly like `Fixed`; banks label these products
/// differently but the published rate does not change mid-term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    Fixed,
    Variable,
    Graduated,
}

/// How often accrued profit is paid out, independent of the rate model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutCadence {
    Monthly,
    Quarterly,
    Annual,
}

/// Annual percentage per year of a 3-year graduated certificate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraduatedRates {
    pub year1: f64,
    pub year2: f64,
    pub year3: f64,
}

/// One savings certificate as it appears in the catalog document.
/// Percentages are stored as whole numbers (16.5 means 16.5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub name: String,
    /// Term in months, whole years expected.
    pub duration: u32,
    pub interest_rate: f64,
    pub return_type: ReturnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduated_rates: Option<GraduatedRates>,
    /// Payout cadence; the catalog document calls this field `type`.
    #[serde(rename = "type")]
    pub payout: PayoutCadence,
    pub min_amount: f64,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub certificates: Vec<Certificate>,
}

/// Top-level catalog document, stored on disk and delivered wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankData {
    #[serde(default)]
    pub banks: Vec<Bank>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub certificate_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBreakdown {
    pub periodic_profit: f64,
    pub yearly_profit: f64,
}

/// Per-year figures for graduated certificates, years 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    pub year1: YearBreakdown,
    pub year2: YearBreakdown,
    pub year3: YearBreakdown,
}

/// Result of one profit calculation. Derived and transient, never
/// persisted; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_profit: f64,
    pub periodic_profit: f64,
    pub total_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_breakdown: Option<YearlyBreakdown>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
