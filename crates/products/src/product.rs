use shopdesk_core::{DomainError, DomainResult, Entity, Money, Repository};

shopdesk_core::sequential_id!(ProductId, "ProductId");

/// Validated data for a product that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: String,
    price: Money,
}

impl NewProduct {
    /// Validate a catalog record before it is committed.
    ///
    /// The name is trimmed and must not be empty. Prices are `Money`, which is
    /// non-negative by construction, so a zero price (a free item) is allowed.
    pub fn new(name: impl Into<String>, price: Money) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

/// Catalog record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;
    type Draft = NewProduct;
    const KIND: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_draft(id: ProductId, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}  Name: {}  Price: {}",
            self.id, self.name, self.price
        )
    }
}

/// Product-specific lookups on the product repository.
pub trait ProductCatalog {
    /// Exact, case-sensitive name lookup.
    ///
    /// Names are not unique; when several products share a name the one added
    /// first wins.
    fn find_by_name(&self, name: &str) -> DomainResult<&Product>;
}

impl ProductCatalog for Repository<Product> {
    fn find_by_name(&self, name: &str) -> DomainResult<&Product> {
        let name = name.trim();
        self.find_by(|p| p.name == name)
            .ok_or_else(DomainError::not_found)
    }
}
