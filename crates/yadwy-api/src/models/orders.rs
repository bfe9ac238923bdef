//! Seller orders and order placement

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Order ids arrive as numbers from some backends and strings from others;
/// both are kept as strings.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "string_or_number")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(id)| id))
}

/// One line of a seller order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerOrderItem {
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

impl SellerOrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The part of a customer order that belongs to the current seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerOrder {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Parent customer order
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub order_id: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub items: Vec<SellerOrderItem>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SellerOrder {
    /// Stated total, or the sum of the lines when the backend omits it
    pub fn total_amount(&self) -> f64 {
        self.total
            .unwrap_or_else(|| self.items.iter().map(SellerOrderItem::line_total).sum())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSource {
    #[default]
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "COD")]
    CashOnDelivery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderItem {
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub customer_name: String,
    pub address: String,
    pub province: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Order placed on behalf of a customer from the seller dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub source: OrderSource,
    pub items: Vec<PlaceOrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

impl PlaceOrderRequest {
    /// Direct, cash-on-delivery order
    pub fn direct(items: Vec<PlaceOrderItem>, shipping_address: ShippingAddress) -> Self {
        Self {
            source: OrderSource::Direct,
            items,
            shipping_address,
            payment_method: PaymentMethod::CashOnDelivery,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_string_ids() {
        let numeric: SellerOrder =
            serde_json::from_value(json!({"id": 15, "orderId": 9, "status": "PENDING"})).unwrap();
        assert_eq!(numeric.id, "15");
        assert_eq!(numeric.order_id.as_deref(), Some("9"));

        let text: SellerOrder = serde_json::from_value(json!({"id": "ord_15"})).unwrap();
        assert_eq!(text.id, "ord_15");
        assert!(text.order_id.is_none());
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let order: SellerOrder =
            serde_json::from_value(json!({"id": 1, "channel": "web", "tags": ["vip"]})).unwrap();
        assert_eq!(order.extra.get("channel"), Some(&json!("web")));
    }

    #[test]
    fn test_total_falls_back_to_lines() {
        let order: SellerOrder = serde_json::from_value(json!({
            "id": 2,
            "items": [
                {"productId": 1, "quantity": 2, "price": 10.0},
                {"productId": 2, "quantity": 1, "price": 5.5}
            ]
        }))
        .unwrap();
        assert_eq!(order.total_amount(), 25.5);
    }

    #[test]
    fn test_place_order_wire_format() {
        let request = PlaceOrderRequest::direct(
            vec![PlaceOrderItem {
                product_id: 3,
                quantity: 2,
            }],
            ShippingAddress {
                customer_name: "Mona".into(),
                address: "12 Nile St".into(),
                province: "Cairo".into(),
                phone: "+201001234567".into(),
                notes: None,
            },
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "source": "DIRECT",
                "items": [{"productId": 3, "quantity": 2}],
                "shippingAddress": {
                    "customerName": "Mona",
                    "address": "12 Nile St",
                    "province": "Cairo",
                    "phone": "+201001234567"
                },
                "paymentMethod": "COD"
            })
        );
    }
}
