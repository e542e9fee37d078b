//! Form field names and values

use crate::{Result, TemplateError};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Keys of the Letter of Intent form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Date,
    SellerName,
    SellerCompany,
    SellerAddress,
    BuyerName,
    BuyerAddress,
    PropertyName,
    PropertyAddress,
    PropertyDescription,
    PropertyType,
    PurchasePrice,
    AcquisitionType,
    DepositAmount,
    EscrowAgent,
    DepositDays,
    DueDiligenceDays,
    ClosingDays,
    FinancingContingent,
    FinancingType,
    Contingencies,
    BuyerBroker,
    BuyerBrokerFirm,
    BuyerBrokerLicense,
    SellerBroker,
    SellerBrokerFirm,
    SellerBrokerLicense,
    ExpirationDate,
    BuyerAuthorizedSigner,
    BuyerTitle,
    SellerAuthorizedSigner,
    SellerTitle,
}

impl FieldName {
    /// Every field, in form order
    pub const ALL: [FieldName; 31] = [
        FieldName::Date,
        FieldName::SellerName,
        FieldName::SellerCompany,
        FieldName::SellerAddress,
        FieldName::BuyerName,
        FieldName::BuyerAddress,
        FieldName::PropertyName,
        FieldName::PropertyAddress,
        FieldName::PropertyDescription,
        FieldName::PropertyType,
        FieldName::PurchasePrice,
        FieldName::AcquisitionType,
        FieldName::DepositAmount,
        FieldName::EscrowAgent,
        FieldName::DepositDays,
        FieldName::DueDiligenceDays,
        FieldName::ClosingDays,
        FieldName::FinancingContingent,
        FieldName::FinancingType,
        FieldName::Contingencies,
        FieldName::BuyerBroker,
        FieldName::BuyerBrokerFirm,
        FieldName::BuyerBrokerLicense,
        FieldName::SellerBroker,
        FieldName::SellerBrokerFirm,
        FieldName::SellerBrokerLicense,
        FieldName::ExpirationDate,
        FieldName::BuyerAuthorizedSigner,
        FieldName::BuyerTitle,
        FieldName::SellerAuthorizedSigner,
        FieldName::SellerTitle,
    ];

    /// Wire name used by the form (camelCase)
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Date => "date",
            FieldName::SellerName => "sellerName",
            FieldName::SellerCompany => "sellerCompany",
            FieldName::SellerAddress => "sellerAddress",
            FieldName::BuyerName => "buyerName",
            FieldName::BuyerAddress => "buyerAddress",
            FieldName::PropertyName => "propertyName",
            FieldName::PropertyAddress => "propertyAddress",
            FieldName::PropertyDescription => "propertyDescription",
            FieldName::PropertyType => "propertyType",
            FieldName::PurchasePrice => "purchasePrice",
            FieldName::AcquisitionType => "acquisitionType",
            FieldName::DepositAmount => "depositAmount",
            FieldName::EscrowAgent => "escrowAgent",
            FieldName::DepositDays => "depositDays",
            FieldName::DueDiligenceDays => "dueDiligenceDays",
            FieldName::ClosingDays => "closingDays",
            FieldName::FinancingContingent => "financingContingent",
            FieldName::FinancingType => "financingType",
            FieldName::Contingencies => "contingencies",
            FieldName::BuyerBroker => "buyerBroker",
            FieldName::BuyerBrokerFirm => "buyerBrokerFirm",
            FieldName::BuyerBrokerLicense => "buyerBrokerLicense",
            FieldName::SellerBroker => "sellerBroker",
            FieldName::SellerBrokerFirm => "sellerBrokerFirm",
            FieldName::SellerBrokerLicense => "sellerBrokerLicense",
            FieldName::ExpirationDate => "expirationDate",
            FieldName::BuyerAuthorizedSigner => "buyerAuthorizedSigner",
            FieldName::BuyerTitle => "buyerTitle",
            FieldName::SellerAuthorizedSigner => "sellerAuthorizedSigner",
            FieldName::SellerTitle => "sellerTitle",
        }
    }

    /// Whether the form marks this field as required
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FieldName::Date
                | FieldName::SellerName
                | FieldName::BuyerName
                | FieldName::PropertyAddress
                | FieldName::PurchasePrice
        )
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| TemplateError::UnknownField(s.to_string()))
    }
}

/// Values supplied for one document
///
/// A field counts as provided only when its value is non-empty after
/// trimming; absent and blank are indistinguishable to readers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<FieldName, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field (raw, untrimmed)
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) -> &mut Self {
        self.values.insert(name, value.into());
        self
    }

    /// Builder-style [`FieldValues::set`]
    pub fn with(mut self, name: FieldName, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Trimmed value, `None` when absent or blank
    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.values
            .get(&name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Trimmed value, or `placeholder` when not provided
    pub fn value_or<'a>(&'a self, name: FieldName, placeholder: &'a str) -> &'a str {
        self.get(name).unwrap_or(placeholder)
    }

    pub fn is_provided(&self, name: FieldName) -> bool {
        self.get(name).is_some()
    }

    /// Provided fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .iter()
            .filter_map(move |&name| self.get(name).map(|value| (name, value)))
    }

    /// Build from a JSON object keyed by wire names
    ///
    /// Unknown keys are ignored, `null` is absent, numbers and booleans are
    /// stringified. Anything other than an object is a parse error.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        crate::parser::fields_from_value(value)
    }

    /// Parse from JSON text (see [`FieldValues::from_json_value`])
    pub fn from_json_str(json: &str) -> Result<Self> {
        crate::parser::parse_fields(json)
    }
}

impl FromIterator<(FieldName, String)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Required fields that are not provided, in form order
pub fn missing_required(fields: &FieldValues) -> Vec<FieldName> {
    FieldName::ALL
        .iter()
        .copied()
        .filter(|name| name.is_required() && !fields.is_provided(*name))
        .collect()
}

/// Fail with [`TemplateError::MissingFields`] when a required field is missing
///
/// Document generation itself never calls this; it is offered to callers that
/// want to enforce what the form enforces.
pub fn validate_required(fields: &FieldValues) -> Result<()> {
    let missing = missing_required(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(TemplateError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_names_round_trip() {
        for name in FieldName::ALL {
            assert_eq!(name.as_str().parse::<FieldName>().unwrap(), name);
        }
    }

    #[test]
    fn test_unknown_field_name() {
        let err = "sellerPhone".parse::<FieldName>().unwrap_err();
        assert!(matches!(err, TemplateError::UnknownField(ref s) if s == "sellerPhone"));
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<&str> = FieldName::ALL
            .iter()
            .filter(|name| name.is_required())
            .map(|name| name.as_str())
            .collect();
        assert_eq!(
            required,
            vec!["date", "sellerName", "buyerName", "propertyAddress", "purchasePrice"]
        );
    }

    #[test]
    fn test_get_trims_and_treats_blank_as_absent() {
        let fields = FieldValues::new()
            .with(FieldName::SellerName, "  John Doe  ")
            .with(FieldName::SellerCompany, "   ")
            .with(FieldName::BuyerName, "");

        assert_eq!(fields.get(FieldName::SellerName), Some("John Doe"));
        assert_eq!(fields.get(FieldName::SellerCompany), None);
        assert_eq!(fields.get(FieldName::BuyerName), None);
        assert_eq!(fields.get(FieldName::Date), None);
        assert_eq!(fields.value_or(FieldName::Date, "[Date]"), "[Date]");
    }

    #[test]
    fn test_iter_skips_blank_in_form_order() {
        let fields = FieldValues::new()
            .with(FieldName::PurchasePrice, "500,000")
            .with(FieldName::SellerCompany, " ")
            .with(FieldName::Date, "2024-01-15");

        let provided: Vec<(FieldName, &str)> = fields.iter().collect();
        assert_eq!(
            provided,
            vec![
                (FieldName::Date, "2024-01-15"),
                (FieldName::PurchasePrice, "500,000")
            ]
        );
    }

    #[test]
    fn test_missing_required() {
        let fields = FieldValues::new()
            .with(FieldName::Date, "2024-01-15")
            .with(FieldName::BuyerName, "  ");

        assert_eq!(
            missing_required(&fields),
            vec![
                FieldName::SellerName,
                FieldName::BuyerName,
                FieldName::PropertyAddress,
                FieldName::PurchasePrice
            ]
        );
    }

    #[test]
    fn test_validate_required_message() {
        let err = validate_required(&FieldValues::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: date, sellerName, buyerName, propertyAddress, purchasePrice"
        );
    }

    #[test]
    fn test_validate_required_ok() {
        let fields: FieldValues = FieldName::ALL
            .iter()
            .filter(|name| name.is_required())
            .map(|&name| (name, "x".to_string()))
            .collect();
        assert!(validate_required(&fields).is_ok());
    }
}
