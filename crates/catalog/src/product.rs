use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Entity, Price, ProductId, Rating};

/// A purchasable product. Immutable once loaded into a [`crate::Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    title: String,
    price: Price,
    category: String,
    description: String,
    rating: Rating,
    image: String,
}

impl Product {
    /// Create a product with the required attributes.
    ///
    /// Rejects an empty (or whitespace-only) title.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        category: impl Into<String>,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation(format!("product {id}: title cannot be empty")));
        }

        Ok(Self {
            id,
            title,
            price,
            category: category.into(),
            description: String::new(),
            rating: Rating::default(),
            image: String::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
