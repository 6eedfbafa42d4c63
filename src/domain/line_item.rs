use crate::{
    domain::{ProductRef, requests::CreateOrderItemRequest},
    errors::ServiceError,
};

/// One validated entry of an order: a product reference, a positive
/// quantity and the unit price snapshot (integer cents) captured at
/// order-creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub product: ProductRef,
    pub quantity: i32,
    pub unit_price: i64,
}

impl LineItem {
    pub fn total_price(&self) -> i64 {
        self.unit_price * self.quantity as i64
    }

    /// Validates a raw request item. Rejects items naming zero or both
    /// product kinds, non-positive quantities or prices, and lines whose
    /// total would not fit in an `i64`, so `total_price` never overflows
    /// on a validated line.
    pub fn try_from_request(req: &CreateOrderItemRequest) -> Result<Self, ServiceError> {
        let product = match ProductRef::from_columns(req.laptop_id, req.mouse_id) {
            Some(product) => product,
            None => {
                return Err(ServiceError::InvalidLineItem(
                    "each item must reference either a laptop or a mouse, but not both".into(),
                ));
            }
        };

        if req.quantity <= 0 {
            return Err(ServiceError::InvalidLineItem(format!(
                "quantity must be positive, got {}",
                req.quantity
            )));
        }

        if req.unit_price <= 0 {
            return Err(ServiceError::InvalidLineItem(format!(
                "unit price must be positive, got {}",
                req.unit_price
            )));
        }

        if req.unit_price.checked_mul(req.quantity as i64).is_none() {
            return Err(ServiceError::InvalidLineItem(format!(
                "line total {} x {} exceeds the representable amount",
                req.unit_price, req.quantity
            )));
        }

        Ok(LineItem {
            product,
            quantity: req.quantity,
            unit_price: req.unit_price,
        })
    }
}
