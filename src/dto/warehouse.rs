use crate::errors::{FieldViolations, ServiceError};
use serde::{Deserialize, Serialize};

/// Required fields, in the order they are reported when missing.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "warehouse_name",
    "address1",
    "areaLocality",
    "state",
    "city",
    "totalLotArea",
    "coveredArea",
];

/// A text field as it arrives from a form or JSON client.
///
/// Numbers are accepted and kept as their decimal text (pincodes are often
/// sent as bare numbers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Text(String),
    Number(serde_json::Number),
}

impl TextInput {
    fn normalized(&self) -> Option<String> {
        let text = match self {
            TextInput::Text(s) => s.trim().to_string(),
            TextInput::Number(n) => n.to_string(),
        };
        (!text.is_empty()).then_some(text)
    }
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        TextInput::Text(value.to_string())
    }
}

/// A numeric field as it arrives from a form or JSON client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

enum Coerced {
    Blank,
    Value(f64),
    Invalid,
}

impl NumericInput {
    fn coerce(&self) -> Coerced {
        match self {
            NumericInput::Number(n) if n.is_finite() => Coerced::Value(*n),
            NumericInput::Number(_) => Coerced::Invalid,
            NumericInput::Text(s) if s.trim().is_empty() => Coerced::Blank,
            NumericInput::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Coerced::Value(n),
                _ => Coerced::Invalid,
            },
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// Raw create/update body for a warehouse listing.
///
/// Every field is optional at this stage; [`WarehousePayload::validate_for_create`]
/// and [`WarehousePayload::validate_for_update`] decide what is actually required.
/// Identity, status and timestamps are not accepted here and are ignored if sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarehousePayload {
    #[serde(default)]
    pub warehouse_name: Option<TextInput>,
    #[serde(default)]
    pub address1: Option<TextInput>,
    #[serde(default)]
    pub address2: Option<TextInput>,
    #[serde(default, rename = "areaLocality")]
    pub area_locality: Option<TextInput>,
    #[serde(default)]
    pub state: Option<TextInput>,
    #[serde(default)]
    pub city: Option<TextInput>,
    #[serde(default)]
    pub pincode: Option<TextInput>,
    #[serde(default)]
    pub gstno: Option<TextInput>,
    #[serde(default, rename = "totalLotArea")]
    pub total_lot_area: Option<NumericInput>,
    #[serde(default, rename = "coveredArea")]
    pub covered_area: Option<NumericInput>,
    #[serde(default, rename = "noOfDocs")]
    pub no_of_docs: Option<NumericInput>,
    #[serde(default, rename = "noOfGate")]
    pub no_of_gate: Option<NumericInput>,
    #[serde(default, rename = "storageHeight")]
    pub storage_height: Option<NumericInput>,
    #[serde(default, rename = "parkingArea")]
    pub parking_area: Option<NumericInput>,
    /// On create: the listing's images. On update: images to append.
    #[serde(default, rename = "warehouseImages")]
    pub warehouse_images: Option<Vec<String>>,
}

/// Validated, coerced fields for a new listing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWarehouse {
    pub warehouse_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub area_locality: String,
    pub state: String,
    pub city: String,
    pub pincode: String,
    pub gstno: Option<String>,
    pub total_lot_area: f64,
    pub covered_area: f64,
    pub no_of_docs: Option<f64>,
    pub no_of_gate: Option<f64>,
    pub storage_height: Option<f64>,
    pub parking_area: Option<f64>,
    pub warehouse_images: Vec<String>,
}

/// Validated changes for an existing listing.
///
/// `None` leaves a field untouched. For optional columns `Some(None)` clears
/// the stored value (sent as an empty string).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarehousePatch {
    pub warehouse_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<Option<String>>,
    pub area_locality: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub gstno: Option<Option<String>>,
    pub total_lot_area: Option<f64>,
    pub covered_area: Option<f64>,
    pub no_of_docs: Option<Option<f64>>,
    pub no_of_gate: Option<Option<f64>>,
    pub storage_height: Option<Option<f64>>,
    pub parking_area: Option<Option<f64>>,
    pub new_images: Vec<String>,
}

fn required_text(
    value: &Option<TextInput>,
    field: &str,
    violations: &mut FieldViolations,
) -> Option<String> {
    let text = value.as_ref().and_then(TextInput::normalized);
    if text.is_none() {
        violations.missing(field);
    }
    text
}

fn required_area(
    value: &Option<NumericInput>,
    field: &str,
    violations: &mut FieldViolations,
) -> Option<f64> {
    match value.as_ref().map(NumericInput::coerce) {
        None | Some(Coerced::Blank) => {
            violations.missing(field);
            None
        }
        Some(Coerced::Invalid) => {
            violations.invalid(field, "must be a number");
            None
        }
        Some(Coerced::Value(n)) if n <= 0.0 => {
            violations.invalid(field, "must be greater than 0");
            None
        }
        Some(Coerced::Value(n)) => Some(n),
    }
}

fn optional_number(
    value: &Option<NumericInput>,
    field: &str,
    violations: &mut FieldViolations,
) -> Option<Option<f64>> {
    match value.as_ref().map(NumericInput::coerce) {
        None => None,
        Some(Coerced::Blank) => Some(None),
        Some(Coerced::Invalid) => {
            violations.invalid(field, "must be a number");
            None
        }
        Some(Coerced::Value(n)) => Some(Some(n)),
    }
}

fn optional_text(value: &Option<TextInput>) -> Option<Option<String>> {
    value.as_ref().map(TextInput::normalized)
}

impl WarehousePayload {
    /// Checks a create body, reporting every missing or malformed field at once.
    pub fn validate_for_create(&self) -> Result<NewWarehouse, ServiceError> {
        let mut violations = FieldViolations::new();

        let warehouse_name = required_text(&self.warehouse_name, "warehouse_name", &mut violations);
        let address1 = required_text(&self.address1, "address1", &mut violations);
        let area_locality = required_text(&self.area_locality, "areaLocality", &mut violations);
        let state = required_text(&self.state, "state", &mut violations);
        let city = required_text(&self.city, "city", &mut violations);
        let total_lot_area = required_area(&self.total_lot_area, "totalLotArea", &mut violations);
        let covered_area = required_area(&self.covered_area, "coveredArea", &mut violations);

        let no_of_docs = optional_number(&self.no_of_docs, "noOfDocs", &mut violations);
        let no_of_gate = optional_number(&self.no_of_gate, "noOfGate", &mut violations);
        let storage_height = optional_number(&self.storage_height, "storageHeight", &mut violations);
        let parking_area = optional_number(&self.parking_area, "parkingArea", &mut violations);

        let images = self.warehouse_images.clone().unwrap_or_default();
        if images.len() > crate::models::MAX_WAREHOUSE_IMAGES {
            violations.invalid(
                "warehouseImages",
                format!(
                    "warehouseImages exceeds the limit of {}",
                    crate::models::MAX_WAREHOUSE_IMAGES
                ),
            );
        }

        // a required value is None exactly when a violation was recorded for it
        let (
            Some(warehouse_name),
            Some(address1),
            Some(area_locality),
            Some(state),
            Some(city),
            Some(total_lot_area),
            Some(covered_area),
        ) = (
            warehouse_name,
            address1,
            area_locality,
            state,
            city,
            total_lot_area,
            covered_area,
        )
        else {
            return Err(ServiceError::ValidationError(violations));
        };
        violations.into_result()?;

        Ok(NewWarehouse {
            warehouse_name,
            address1,
            address2: optional_text(&self.address2).flatten(),
            area_locality,
            state,
            city,
            pincode: optional_text(&self.pincode).flatten().unwrap_or_default(),
            gstno: optional_text(&self.gstno).flatten(),
            total_lot_area,
            covered_area,
            no_of_docs: no_of_docs.flatten(),
            no_of_gate: no_of_gate.flatten(),
            storage_height: storage_height.flatten(),
            parking_area: parking_area.flatten(),
            warehouse_images: images,
        })
    }

    /// Checks an update body. Only supplied fields are validated; a required
    /// field that is supplied blank is reported as missing.
    pub fn validate_for_update(&self) -> Result<WarehousePatch, ServiceError> {
        let mut violations = FieldViolations::new();

        let mut present_text = |value: &Option<TextInput>, field: &str| match value {
            None => None,
            Some(_) => required_text(value, field, &mut violations),
        };
        let warehouse_name = present_text(&self.warehouse_name, "warehouse_name");
        let address1 = present_text(&self.address1, "address1");
        let area_locality = present_text(&self.area_locality, "areaLocality");
        let state = present_text(&self.state, "state");
        let city = present_text(&self.city, "city");

        let total_lot_area = match self.total_lot_area {
            None => None,
            Some(_) => required_area(&self.total_lot_area, "totalLotArea", &mut violations),
        };
        let covered_area = match self.covered_area {
            None => None,
            Some(_) => required_area(&self.covered_area, "coveredArea", &mut violations),
        };

        let no_of_docs = optional_number(&self.no_of_docs, "noOfDocs", &mut violations);
        let no_of_gate = optional_number(&self.no_of_gate, "noOfGate", &mut violations);
        let storage_height = optional_number(&self.storage_height, "storageHeight", &mut violations);
        let parking_area = optional_number(&self.parking_area, "parkingArea", &mut violations);

        violations.into_result()?;

        Ok(WarehousePatch {
            warehouse_name,
            address1,
            address2: optional_text(&self.address2),
            area_locality,
            state,
            city,
            pincode: optional_text(&self.pincode).map(Option::unwrap_or_default),
            gstno: optional_text(&self.gstno),
            total_lot_area,
            covered_area,
            no_of_docs,
            no_of_gate,
            storage_height,
            parking_area,
            new_images: self.warehouse_images.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn complete() -> WarehousePayload {
        WarehousePayload {
            warehouse_name: Some("North Hub".into()),
            address1: Some("12 Dock Road".into()),
            area_locality: Some("Peenya".into()),
            state: Some("Karnataka".into()),
            city: Some("Bengaluru".into()),
            total_lot_area: Some("12000".into()),
            covered_area: Some(8000.0.into()),
            ..Default::default()
        }
    }

    fn missing_of(err: ServiceError) -> Vec<String> {
        match err {
            ServiceError::ValidationError(v) => v.missing,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn complete_payload_is_coerced() {
        let new = complete().validate_for_create().unwrap();
        assert_eq!(new.warehouse_name, "North Hub");
        assert_eq!(new.total_lot_area, 12000.0);
        assert_eq!(new.covered_area, 8000.0);
        assert_eq!(new.pincode, "");
        assert!(new.warehouse_images.is_empty());
    }

    #[test]
    fn empty_payload_lists_all_seven_fields_in_order() {
        let err = WarehousePayload::default().validate_for_create().unwrap_err();
        assert_eq!(missing_of(err), REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut payload = complete();
        payload.city = Some("   ".into());
        payload.covered_area = Some("".into());
        let err = payload.validate_for_create().unwrap_err();
        assert_eq!(missing_of(err), vec!["city", "coveredArea"]);
    }

    #[test]
    fn unparsable_numbers_are_invalid_not_missing() {
        let mut payload = complete();
        payload.total_lot_area = Some("lots".into());
        payload.no_of_gate = Some("two".into());
        payload.state = None;
        let err = payload.validate_for_create().unwrap_err();
        assert_matches!(err, ServiceError::ValidationError(v) => {
            assert_eq!(v.missing, vec!["state"]);
            let fields: Vec<_> = v.invalid.iter().map(|i| i.field.as_str()).collect();
            assert_eq!(fields, vec!["totalLotArea", "noOfGate"]);
        });
    }

    #[test]
    fn non_positive_area_is_rejected() {
        let mut payload = complete();
        payload.covered_area = Some(0.0.into());
        assert_matches!(
            payload.validate_for_create(),
            Err(ServiceError::ValidationError(v)) if v.invalid[0].field == "coveredArea"
        );
    }

    #[test]
    fn deserializes_form_style_json() {
        let payload: WarehousePayload = serde_json::from_value(json!({
            "warehouse_name": "South Yard",
            "address1": "4 Canal St",
            "areaLocality": "Guindy",
            "state": "Tamil Nadu",
            "city": "Chennai",
            "pincode": 600032,
            "totalLotArea": "5000.5",
            "coveredArea": 4000,
            "noOfDocs": "",
            "status": "publish",
            "warehouseImages": ["/uploads/warehouses/WHIMG-1.jpg"]
        }))
        .unwrap();

        let new = payload.validate_for_create().unwrap();
        assert_eq!(new.pincode, "600032");
        assert_eq!(new.total_lot_area, 5000.5);
        assert_eq!(new.no_of_docs, None);
        assert_eq!(new.warehouse_images.len(), 1);
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        let payload = WarehousePayload {
            city: Some("Mysuru".into()),
            gstno: Some("".into()),
            no_of_docs: Some("6".into()),
            ..Default::default()
        };
        let patch = payload.validate_for_update().unwrap();
        assert_eq!(patch.city.as_deref(), Some("Mysuru"));
        assert_eq!(patch.gstno, Some(None));
        assert_eq!(patch.no_of_docs, Some(Some(6.0)));
        assert_eq!(patch.warehouse_name, None);
    }

    #[test]
    fn update_rejects_blanking_a_required_field() {
        let payload = WarehousePayload {
            warehouse_name: Some("".into()),
            total_lot_area: Some("-3".into()),
            ..Default::default()
        };
        assert_matches!(payload.validate_for_update(), Err(ServiceError::ValidationError(v)) => {
            assert_eq!(v.missing, vec!["warehouse_name"]);
            assert_eq!(v.invalid[0].field, "totalLotArea");
        });
    }
}
