use serde::{Deserialize, Serialize};

/// Role claim attached to a login, controlling console access.
///
/// - `Admin` — store administrator; the only role allowed into the console.
/// - `Cashier` — till staff; can use the POS terminal but not this console.
/// - `Unknown` — any unrecognized claim. Never authorizes anything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    Cashier,
    #[default]
    Unknown,
}

impl Role {
    /// Parse from the backend's `role` claim. Unknown values stay `Unknown`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "cashier" => Role::Cashier,
            _ => Role::Unknown,
        }
    }

    /// Lowercase string for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Cashier => "cashier",
            Role::Unknown => "unknown",
        }
    }
}

/// An authenticated console session: the bearer token plus the role it was
/// issued for. Held in app context and persisted behind typed storage
/// accessors; no expiry is tracked client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }

    /// Whether this session may enter the console. A token with the wrong
    /// role is as unusable as no token at all.
    pub fn authorizes(&self) -> bool {
        !self.token.is_empty() && self.role == Role::Admin
    }
}

/// Login request body (canonical JSON contract).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: String,
}

/// One line item inside a recorded sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleItem {
    pub name: String,
    pub quantity: i64,
}

/// A completed POS transaction as returned by the sales report endpoint.
/// Never mutated client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: i64,
    #[serde(default)]
    pub items: Vec<SaleItem>,
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    /// ISO-8601 timestamp string, e.g. "2024-01-01T09:30:00".
    pub date: String,
}

impl Sale {
    /// Calendar date portion of the sale timestamp.
    pub fn calendar_date(&self) -> &str {
        self.date.split('T').next().unwrap_or(&self.date)
    }

    /// Payment method label, with missing methods grouped under "Unknown".
    pub fn payment_method_label(&self) -> &str {
        self.payment_method.as_deref().unwrap_or("Unknown")
    }
}

/// Stock status of an inventory item.
///
/// The backend may omit the field entirely, in which case it defaults to
/// `InStock`. Missing name/quantity/price are deserialization errors — the
/// status default is the only repair applied at the boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StockStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// Display label, matching the backend's wire strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Parse a filter label. Anything unrecognized (including "all") is `None`.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "In Stock" => Some(StockStatus::InStock),
            "Low Stock" => Some(StockStatus::LowStock),
            "Out of Stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }
}

/// A stock record as returned by the inventory report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    #[serde(default)]
    pub status: StockStatus,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("Admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("ADMIN"), Role::Admin);
        assert_eq!(Role::from_str_or_default("cashier"), Role::Cashier);
    }

    #[test]
    fn unknown_role_claims_stay_unknown() {
        assert_eq!(Role::from_str_or_default(""), Role::Unknown);
        assert_eq!(Role::from_str_or_default("Store Owner"), Role::Unknown);
        assert_eq!(Role::from_str_or_default("manager"), Role::Unknown);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in [Role::Admin, Role::Cashier] {
            assert_eq!(Role::from_str_or_default(role.as_str()), role);
        }
    }

    #[test]
    fn admin_session_authorizes() {
        assert!(Session::new("tok-123", Role::Admin).authorizes());
    }

    #[test]
    fn session_denies_every_missing_or_mismatched_combination() {
        // token present, wrong role
        assert!(!Session::new("tok-123", Role::Cashier).authorizes());
        assert!(!Session::new("tok-123", Role::Unknown).authorizes());
        // token absent, role irrelevant
        assert!(!Session::new("", Role::Admin).authorizes());
        assert!(!Session::new("", Role::Cashier).authorizes());
        assert!(!Session::new("", Role::Unknown).authorizes());
    }

    #[test]
    fn session_roundtrips_through_json() {
        let session = Session::new("tok-abc", Role::Admin);
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, parsed);
    }

    #[test]
    fn sale_deserializes_from_api_json() {
        let json = r#"{
            "id": 7,
            "items": [{"name": "Cola", "quantity": 2}],
            "total_amount": 12.5,
            "payment_method": "Cash",
            "date": "2024-01-01T09:30:00"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.id, 7);
        assert_eq!(sale.items[0].name, "Cola");
        assert_eq!(sale.calendar_date(), "2024-01-01");
        assert_eq!(sale.payment_method_label(), "Cash");
    }

    #[test]
    fn sale_without_payment_method_is_unknown() {
        let json = r#"{"id": 1, "items": [], "total_amount": 5.0, "date": "2024-02-02T00:00:00"}"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.payment_method, None);
        assert_eq!(sale.payment_method_label(), "Unknown");
    }

    #[test]
    fn calendar_date_tolerates_date_only_strings() {
        let json = r#"{"id": 1, "items": [], "total_amount": 5.0, "date": "2024-02-02"}"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.calendar_date(), "2024-02-02");
    }

    #[test]
    fn inventory_item_missing_status_defaults_to_in_stock() {
        let json = r#"{"id": 3, "name": "Rice 5kg", "quantity": 40, "price": 89.99}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, StockStatus::InStock);
        assert_eq!(item.status.as_str(), "In Stock");
    }

    #[test]
    fn inventory_item_missing_price_is_rejected() {
        let json = r#"{"id": 3, "name": "Rice 5kg", "quantity": 40}"#;
        assert!(serde_json::from_str::<InventoryItem>(json).is_err());
    }

    #[test]
    fn stock_status_uses_wire_labels() {
        let json = r#"{"id": 1, "name": "Soap", "quantity": 0, "price": 3.0, "status": "Out of Stock"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, StockStatus::OutOfStock);

        assert_eq!(StockStatus::from_label("Low Stock"), Some(StockStatus::LowStock));
        assert_eq!(StockStatus::from_label("all"), None);
        assert_eq!(StockStatus::from_label("low stock"), None);
    }

    #[test]
    fn login_request_serializes_as_json_body() {
        let req = LoginRequest {
            username: "ama".into(),
            password: "s3cret".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["username"], "ama");
        assert_eq!(json["password"], "s3cret");
    }

    #[test]
    fn login_response_deserializes_token_and_role() {
        let json = r#"{"access_token": "tok-xyz", "role": "Admin"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "tok-xyz");
        assert_eq!(Role::from_str_or_default(&resp.role), Role::Admin);
    }
}
