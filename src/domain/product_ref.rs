use std::fmt;

/// Which of the two disjoint catalog tables a product lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Laptop,
    Mouse,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Laptop => "Laptop",
            ProductKind::Mouse => "Mouse",
        }
    }
}

/// A tagged reference to exactly one catalog item. Replaces the pair of
/// nullable foreign keys on `order_items`: a `ProductRef` cannot name both
/// kinds or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductRef {
    Laptop(i64),
    Mouse(i64),
}

impl ProductRef {
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductRef::Laptop(_) => ProductKind::Laptop,
            ProductRef::Mouse(_) => ProductKind::Mouse,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ProductRef::Laptop(id) | ProductRef::Mouse(id) => *id,
        }
    }

    /// Builds a reference from the two nullable FK columns. Returns `None`
    /// when both or neither are set.
    pub fn from_columns(laptop_id: Option<i64>, mouse_id: Option<i64>) -> Option<Self> {
        match (laptop_id, mouse_id) {
            (Some(id), None) => Some(ProductRef::Laptop(id)),
            (None, Some(id)) => Some(ProductRef::Mouse(id)),
            _ => None,
        }
    }

    /// Inverse of [`from_columns`](Self::from_columns): `(laptop_id, mouse_id)`.
    pub fn into_columns(self) -> (Option<i64>, Option<i64>) {
        match self {
            ProductRef::Laptop(id) => (Some(id), None),
            ProductRef::Mouse(id) => (None, Some(id)),
        }
    }
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductRef::Laptop(id) => write!(f, "laptop {id}"),
            ProductRef::Mouse(id) => write!(f, "mouse {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_columns_accepts_exactly_one_side() {
        assert_eq!(
            ProductRef::from_columns(Some(3), None),
            Some(ProductRef::Laptop(3))
        );
        assert_eq!(
            ProductRef::from_columns(None, Some(7)),
            Some(ProductRef::Mouse(7))
        );
        assert_eq!(ProductRef::from_columns(None, None), None);
        assert_eq!(ProductRef::from_columns(Some(1), Some(2)), None);
    }

    #[test]
    fn columns_round_trip() {
        let laptop = ProductRef::Laptop(42);
        let (l, m) = laptop.into_columns();
        assert_eq!(ProductRef::from_columns(l, m), Some(laptop));

        let mouse = ProductRef::Mouse(9);
        let (l, m) = mouse.into_columns();
        assert_eq!(ProductRef::from_columns(l, m), Some(mouse));
    }

    #[test]
    fn display_names_the_kind() {
        assert_eq!(ProductRef::Laptop(1).to_string(), "laptop 1");
        assert_eq!(ProductRef::Mouse(2).to_string(), "mouse 2");
        assert_eq!(ProductRef::Mouse(2).kind().as_str(), "Mouse");
    }
}
