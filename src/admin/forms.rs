use crate::models::Operation;
use crate::store::NewPropertyRow;

/// Raw text fields as the admin forms collect them. Conversion to a store
/// record applies one numeric policy for both the create and the edit
/// form: required numbers default to 0, optional numbers stay
/// unspecified (`None`) when blank, never 0; listing cards render the
/// two differently.
#[derive(Debug, Clone, Default)]
pub struct PropertyFormFields {
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub category: String,
    pub operation: String,
    pub area: String,
    pub builded_area: String,
    pub currency: String,
    pub bathrooms: String,
    pub parking_spots: String,
    pub ceiling_height: String,
    pub dock_doors: String,
    pub air_conditioning: String,
    pub office_area: String,
    pub maintenance_cost: String,
}

impl PropertyFormFields {
    pub fn to_record(&self) -> NewPropertyRow {
        NewPropertyRow {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            operation: Operation::parse(&self.operation).wire_value().to_string(),
            location: self.location.clone(),
            area: required_number(&self.area),
            builded_area: required_number(&self.builded_area),
            price: required_number(&self.price),
            currency: self.currency.clone(),
            bathrooms: optional_number(&self.bathrooms),
            parking_spots: optional_count(&self.parking_spots),
            ceiling_height: optional_number(&self.ceiling_height),
            dock_doors: optional_count(&self.dock_doors),
            air_conditioning: flag(&self.air_conditioning),
            office_area: optional_number(&self.office_area),
            maintenance_cost: optional_number(&self.maintenance_cost),
        }
    }
}

/// Form submission for a brand-new property.
#[derive(Debug, Clone, Default)]
pub struct CreatePropertyInput {
    pub fields: PropertyFormFields,
}

/// Form submission editing an existing property.
#[derive(Debug, Clone)]
pub struct UpdatePropertyInput {
    pub propertie_id: i64,
    pub fields: PropertyFormFields,
}

fn required_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn optional_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn optional_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn flag(raw: &str) -> i64 {
    if raw.trim().parse::<f64>().unwrap_or(0.0) != 0.0 {
        1
    } else {
        0
    }
}
