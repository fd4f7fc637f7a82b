use super::{DataSource, Page};
use crate::{
    filter::Gender,
    plan::{Aggregate, OrderDirection, OrderKey, OrderSpec, QueryDescriptor, fields},
    predicate::{FieldPresence, Row, Value},
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, convert::Infallible};

///
/// Variant
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub color_id: String,
    pub size_id: String,
    pub price: f64,
}

impl Row for Variant {
    fn field(&self, name: &str) -> FieldPresence {
        match name {
            "id" => FieldPresence::Present(self.id.as_str().into()),
            fields::COLOR_ID => FieldPresence::Present(self.color_id.as_str().into()),
            "size_id" => FieldPresence::Present(self.size_id.as_str().into()),
            fields::PRICE => FieldPresence::Present(self.price.into()),
            _ => FieldPresence::Missing,
        }
    }
}

///
/// Image
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub color_id: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub position: Option<i32>,
}

///
/// Product
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub gender: Gender,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default = "published_default")]
    pub is_published: bool,

    /// Creation time as a unix timestamp; larger is newer.
    pub created_at: i64,

    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub images: Vec<Image>,
}

const fn published_default() -> bool {
    true
}

impl Product {
    fn price_span(&self) -> (Option<f64>, Option<f64>) {
        let prices = self.variants.iter().map(|variant| variant.price);

        (
            prices.clone().reduce(f64::min),
            prices.reduce(f64::max),
        )
    }

    // With a color filter, only images of the selected colors; otherwise
    // primary and colorless images. Ordered by position.
    fn listing_images(&self, color_filter_ids: &[String]) -> Vec<Image> {
        let mut images: Vec<Image> = self
            .images
            .iter()
            .filter(|image| {
                if color_filter_ids.is_empty() {
                    image.is_primary || image.color_id.is_none()
                } else {
                    image
                        .color_id
                        .as_ref()
                        .is_some_and(|color| color_filter_ids.contains(color))
                }
            })
            .cloned()
            .collect();

        images.sort_by_key(|image| image.position.unwrap_or(0));
        images
    }

    fn summary(&self, color_filter_ids: &[String]) -> ProductSummary {
        let (min_price, max_price) = self.price_span();

        ProductSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            gender: self.gender,
            category_id: self.category_id.clone(),
            brand_id: self.brand_id.clone(),
            min_price,
            max_price,
            images: self.listing_images(color_filter_ids),
        }
    }
}

impl Row for Product {
    #[expect(clippy::cast_precision_loss)]
    fn field(&self, name: &str) -> FieldPresence {
        match name {
            "id" => FieldPresence::Present(self.id.as_str().into()),
            fields::NAME => FieldPresence::Present(self.name.as_str().into()),
            "slug" => FieldPresence::Present(self.slug.as_str().into()),
            fields::DESCRIPTION => self.description.as_deref().into(),
            fields::GENDER => FieldPresence::Present(self.gender.as_str().into()),
            fields::CATEGORY_ID => self.category_id.as_deref().into(),
            fields::BRAND_ID => self.brand_id.as_deref().into(),
            fields::IS_PUBLISHED => FieldPresence::Present(self.is_published.into()),
            fields::CREATED_AT => FieldPresence::Present(Value::Number(self.created_at as f64)),
            _ => FieldPresence::Missing,
        }
    }

    fn related(&self, relation: &str) -> Vec<&dyn Row> {
        match relation {
            fields::VARIANTS => self.variants.iter().map(|v| v as &dyn Row).collect(),
            _ => Vec::new(),
        }
    }
}

///
/// ProductSummary
///
/// Listing row: the product with its variant price span and the images
/// chosen for the current color filter.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub gender: Gender,
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub images: Vec<Image>,
}

///
/// InMemoryCatalog
///
/// Reference [`DataSource`] over a product list. Products without variants
/// never match, mirroring an inner join against the variant table.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a JSON array of products.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source).map(Self::new)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl DataSource for InMemoryCatalog {
    type Row = ProductSummary;
    type Error = Infallible;

    fn fetch(&self, descriptor: &QueryDescriptor) -> Result<Page<Self::Row>, Self::Error> {
        let mut matched: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| !product.variants.is_empty() && descriptor.matches(*product))
            .collect();
        let total_count = matched.len();

        matched.sort_by(|a, b| compare_rows(*a, *b, &descriptor.order));

        let rows: Vec<ProductSummary> = matched
            .into_iter()
            .skip(descriptor.page.offset as usize)
            .take(descriptor.page.limit as usize)
            .map(|product| product.summary(&descriptor.color_filter_ids))
            .collect();

        tracing::trace!(
            scanned = self.products.len(),
            total_count,
            returned = rows.len(),
            "in-memory catalog fetch"
        );

        Ok(Page::new(rows, total_count))
    }
}

///
/// Ordering
///

fn compare_rows<R: Row + ?Sized>(a: &R, b: &R, order: &OrderSpec) -> Ordering {
    order
        .fields
        .iter()
        .map(|(key, direction)| {
            compare_keys(
                order_value(a, key).as_ref(),
                order_value(b, key).as_ref(),
                *direction,
            )
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn order_value<R: Row + ?Sized>(row: &R, key: &OrderKey) -> Option<Value> {
    match key {
        OrderKey::Field(name) => match row.field(name) {
            FieldPresence::Present(value) => Some(value),
            FieldPresence::Missing => None,
        },
        OrderKey::Aggregate {
            func,
            relation,
            field,
        } => {
            let numbers = row.related(relation).into_iter().filter_map(|child| {
                match child.field(field) {
                    FieldPresence::Present(Value::Number(n)) => Some(n),
                    _ => None,
                }
            });
            let folded = match func {
                Aggregate::Min => numbers.reduce(f64::min),
                Aggregate::Max => numbers.reduce(f64::max),
            };
            folded.map(Value::Number)
        }
    }
}

// Missing values sort last in either direction.
fn compare_keys(a: Option<&Value>, b: Option<&Value>, direction: OrderDirection) -> Ordering {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (None, None) => return Ordering::Equal,
    };

    let ordering = match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    };

    match direction {
        OrderDirection::Asc => ordering,
        OrderDirection::Desc => ordering.reverse(),
    }
}
