use crate::{
    filter::Gender,
    source::{Image, InMemoryCatalog, Product, Variant},
};

pub(crate) struct ProductFixture {
    product: Product,
}

impl ProductFixture {
    pub(crate) fn new(id: &str, name: &str, gender: Gender, created_at: i64) -> Self {
        Self {
            product: Product {
                id: id.to_string(),
                name: name.to_string(),
                slug: id.to_string(),
                description: None,
                gender,
                category_id: None,
                brand_id: None,
                is_published: true,
                created_at,
                variants: Vec::new(),
                images: Vec::new(),
            },
        }
    }

    pub(crate) fn description(mut self, text: &str) -> Self {
        self.product.description = Some(text.to_string());
        self
    }

    pub(crate) fn category(mut self, id: &str) -> Self {
        self.product.category_id = Some(id.to_string());
        self
    }

    pub(crate) fn brand(mut self, id: &str) -> Self {
        self.product.brand_id = Some(id.to_string());
        self
    }

    pub(crate) fn unpublished(mut self) -> Self {
        self.product.is_published = false;
        self
    }

    pub(crate) fn variant(mut self, color_id: &str, price: f64) -> Self {
        let n = self.product.variants.len();
        self.product.variants.push(Variant {
            id: format!("{}-v{n}", self.product.id),
            color_id: color_id.to_string(),
            size_id: "m".to_string(),
            price,
        });
        self
    }

    pub(crate) fn image(mut self, color_id: Option<&str>, is_primary: bool, position: i32) -> Self {
        let n = self.product.images.len();
        self.product.images.push(Image {
            id: format!("{}-i{n}", self.product.id),
            url: format!("/img/{}/{n}.webp", self.product.id),
            alt: None,
            color_id: color_id.map(str::to_string),
            is_primary,
            position: Some(position),
        });
        self
    }

    pub(crate) fn build(self) -> Product {
        self.product
    }
}

/// Six products: four listable, one unpublished, one without variants.
pub(crate) fn sample_products() -> Vec<Product> {
    vec![
        ProductFixture::new("air-runner", "Air Runner", Gender::Men, 500)
            .category("shoes")
            .brand("nike")
            .variant("red", 90.0)
            .variant("blue", 120.0)
            .image(Some("red"), false, 2)
            .image(None, true, 1)
            .image(Some("blue"), false, 3)
            .build(),
        ProductFixture::new("trail-boot", "Trail Boot", Gender::Women, 400)
            .category("boots")
            .brand("acg")
            .variant("black", 180.0)
            .variant("red", 210.0)
            .build(),
        ProductFixture::new("court-classic", "Court Classic", Gender::Unisex, 300)
            .category("sneakers")
            .brand("nike")
            .variant("white", 75.0)
            .build(),
        ProductFixture::new("canvas-low", "Canvas Low", Gender::Kids, 200)
            .category("sneakers")
            .brand("vans")
            .description("Canvas upper, 100% cotton")
            .variant("blue", 45.0)
            .variant("white", 55.0)
            .build(),
        ProductFixture::new("draft-sample", "Draft Sample", Gender::Men, 600)
            .category("shoes")
            .brand("nike")
            .unpublished()
            .variant("red", 50.0)
            .build(),
        ProductFixture::new("ghost-listing", "Ghost Listing", Gender::Men, 700)
            .category("shoes")
            .brand("nike")
            .build(),
    ]
}

pub(crate) fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(sample_products())
}
