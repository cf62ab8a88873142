use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl From<u32> for VariantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents one sellable configuration of a product (a size, a pack type).
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing the catalog to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for VariantRecord`](#impl-ActorEntity-for-VariantRecord) for details on:
/// - Update parameters ([`VariantUpdate`])
/// - Load-time validation
///
/// The serde representation is the wire format of the variant API (camelCase keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    pub id: VariantId,
    pub name: String,
    pub description: String,
    pub product_id: u32,
    pub price: f64,
    pub stock: u32,
    pub image_url: String,
    /// Dispensing slot in the vending unit.
    pub tray_number: u32,
}

impl VariantRecord {
    /// Creates a new VariantRecord with a placeholder image and tray slot 0.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the catalog
    /// * `name` - Category label, e.g. `"SMALL"`
    /// * `product_id` - Parent product
    /// * `price` - Unit price
    /// * `stock` - Units available
    pub fn new(
        id: impl Into<VariantId>,
        name: impl Into<String>,
        product_id: u32,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            product_id,
            price,
            stock,
            image_url: "string".to_string(),
            tray_number: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tray_number(mut self, tray_number: u32) -> Self {
        self.tray_number = tray_number;
        self
    }

    /// Copy of this record carrying the edited price and stock.
    ///
    /// Every other field is immutable from the operator's point of view.
    pub fn with_update(&self, update: &VariantUpdate) -> Self {
        Self {
            price: update.price,
            stock: update.stock,
            ..self.clone()
        }
    }
}

/// DTO for variant updates: the two operator-editable fields, already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantUpdate {
    pub price: f64,
    pub stock: u32,
}

impl VariantUpdate {
    pub fn new(price: f64, stock: u32) -> Self {
        Self { price, stock }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_field_names() {
        let record = VariantRecord::new(1028, "MEDIUM", 1023, 15.0, 11).with_tray_number(1);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], json!(1028));
        assert_eq!(value["productId"], json!(1023));
        assert_eq!(value["imageUrl"], json!("string"));
        assert_eq!(value["trayNumber"], json!(1));
        assert_eq!(value["stock"], json!(11));
        assert!(value.get("product_id").is_none());
    }

    #[test]
    fn deserializes_integer_price() {
        let record: VariantRecord = serde_json::from_value(json!({
            "id": 1030,
            "name": "WIPES",
            "description": "Perfect for keeping your baby's skin clean and comfortable",
            "productId": 1023,
            "price": 5,
            "stock": 12,
            "imageUrl": "string",
            "trayNumber": 3
        }))
        .unwrap();

        assert_eq!(record.id, VariantId(1030));
        assert_eq!(record.price, 5.0);
        assert_eq!(record.tray_number, 3);
    }

    #[test]
    fn with_update_keeps_immutable_fields() {
        let record = VariantRecord::new(1027, "SMALL", 1023, 10.0, 6)
            .with_description("Preemie")
            .with_tray_number(0);
        let updated = record.with_update(&VariantUpdate::new(12.5, 40));

        assert_eq!(updated.price, 12.5);
        assert_eq!(updated.stock, 40);
        assert_eq!(updated.id, record.id);
        assert_eq!(updated.description, "Preemie");
        assert_eq!(updated.image_url, record.image_url);
    }
}
