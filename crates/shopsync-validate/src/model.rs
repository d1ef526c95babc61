use serde::{Deserialize, Serialize};

/// Report contract version for serialized validation reports.
pub const REPORT_VERSION: &str = "0.1";

/// Closed set of validation rules.
///
/// Consumers filter on these instead of parsing message text; the string
/// form is the snake_case serde tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    MissingRequiredField,
    InvalidEmailFormat,
    DuplicateEmail,
    DuplicatePrimaryKey,
    NegativePrice,
    NegativeStock,
    NonPositiveQuantity,
    UnknownCustomer,
    UnknownProduct,
    PriceDrift,
    StockImplausible,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::MissingRequiredField => "missing_required_field",
            Rule::InvalidEmailFormat => "invalid_email_format",
            Rule::DuplicateEmail => "duplicate_email",
            Rule::DuplicatePrimaryKey => "duplicate_primary_key",
            Rule::NegativePrice => "negative_price",
            Rule::NegativeStock => "negative_stock",
            Rule::NonPositiveQuantity => "non_positive_quantity",
            Rule::UnknownCustomer => "unknown_customer",
            Rule::UnknownProduct => "unknown_product",
            Rule::PriceDrift => "price_drift",
            Rule::StockImplausible => "stock_implausible",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding.
///
/// `affected_keys` holds the primary keys of the offending records; for
/// duplicate-detection rules it names every record in the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub rule: Rule,
    pub affected_keys: Vec<i64>,
    pub detail: String,
}

impl Issue {
    pub fn new(rule: Rule, affected_keys: Vec<i64>, detail: impl Into<String>) -> Self {
        Self {
            rule,
            affected_keys,
            detail: detail.into(),
        }
    }
}

/// Outcome of one checker over one collection or relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub valid: bool,
    pub issues: Vec<Issue>,
}

impl SectionReport {
    /// An empty collection is trivially valid.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            valid: issues.is_empty(),
            issues,
        }
    }
}

/// Combined validation report over one snapshot.
///
/// `overall_valid` is the AND of the four hard sections only; the
/// `consistency` section is advisory and never participates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub report_version: String,
    pub customers: SectionReport,
    pub products: SectionReport,
    pub orders: SectionReport,
    pub foreign_keys: SectionReport,
    pub consistency: SectionReport,
    pub overall_valid: bool,
}

impl ValidationReport {
    /// Hard sections in report order, for uniform rendering.
    pub fn hard_sections(&self) -> [(&'static str, &SectionReport); 4] {
        [
            ("customers", &self.customers),
            ("products", &self.products),
            ("orders", &self.orders),
            ("foreign_keys", &self.foreign_keys),
        ]
    }

    /// Total number of hard issues across the four gating sections.
    pub fn hard_issue_count(&self) -> usize {
        self.hard_sections()
            .iter()
            .map(|(_, section)| section.issues.len())
            .sum()
    }
}
