//! Deterministic demo catalog.
//!
//! Fixed sample rows instead of generated fakes, so the REPL and tests
//! see the same data on every run.

use clerk_core::types::{Category, Product};

use crate::store::MemoryCatalog;

/// The storefront's category lineup.
const CATEGORY_NAMES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Books",
    "Home & Kitchen",
    "Sports & Outdoors",
    "Beauty & Personal Care",
    "Toys & Games",
    "Health & Household",
    "Automotive",
    "Garden & Outdoor",
];

/// Build the demo catalog with the default result cap.
pub fn demo_catalog() -> MemoryCatalog {
    demo_catalog_with_limit(10)
}

/// Build the demo catalog with an explicit result cap.
pub fn demo_catalog_with_limit(max_results: usize) -> MemoryCatalog {
    let categories: Vec<Category> = CATEGORY_NAMES
        .iter()
        .map(|name| Category::new(*name, format!("Products in {} category", name)))
        .collect();

    let mut products = vec![
        Product::new(
            "Samsung Pro Smartphone",
            "Flagship smartphone with a 6.5 inch display",
            899.0,
            "Electronics",
            "Samsung",
            vec!["smartphone".into(), "mobile".into(), "phone".into()],
            4.6,
            32,
        ),
        Product::new(
            "Dell Ultra Laptop",
            "Thin and light laptop for everyday work",
            949.0,
            "Electronics",
            "Dell",
            vec!["laptop".into(), "computer".into()],
            4.4,
            18,
        ),
        Product::new(
            "HP Lite Laptop",
            "Budget laptop for browsing and documents",
            499.0,
            "Electronics",
            "HP",
            vec!["laptop".into(), "computer".into()],
            4.0,
            25,
        ),
        Product::new(
            "Sony Max Headphones",
            "Over-ear wireless headphones with noise cancelling",
            299.0,
            "Electronics",
            "Sony",
            vec!["headphones".into(), "audio".into()],
            4.7,
            40,
        ),
        Product::new(
            "Apple Elite Tablet",
            "10 inch tablet with all-day battery",
            649.0,
            "Electronics",
            "Apple",
            vec!["tablet".into()],
            4.5,
            12,
        ),
        Product::new(
            "Asus Plus Smartwatch",
            "Fitness tracking smartwatch",
            199.0,
            "Electronics",
            "Asus",
            vec!["smartwatch".into(), "wearable".into()],
            4.1,
            50,
        ),
        Product::new(
            "Nike Sport Shoes",
            "Lightweight running shoes",
            89.0,
            "Clothing",
            "Nike",
            vec!["shoes".into(), "running".into()],
            4.3,
            60,
        ),
        Product::new(
            "Adidas Casual T-Shirt",
            "Cotton t-shirt for everyday wear",
            25.0,
            "Clothing",
            "Adidas",
            vec!["t-shirt".into(), "casual".into()],
            4.2,
            120,
        ),
        Product::new(
            "Levi's Vintage Jeans",
            "Classic straight-cut denim jeans",
            75.0,
            "Clothing",
            "Levi's",
            vec!["jeans".into(), "denim".into()],
            4.4,
            45,
        ),
        Product::new(
            "Zara Formal Jacket",
            "Tailored jacket for formal occasions",
            150.0,
            "Clothing",
            "Zara",
            vec!["jacket".into(), "formal".into()],
            4.0,
            20,
        ),
        Product::new(
            "The Silent Harbor",
            "Mystery novel by Jane Doe",
            15.0,
            "Books",
            "Harbor Press",
            vec!["mystery".into(), "fiction".into(), "novel".into()],
            4.6,
            80,
        ),
        Product::new(
            "Systems at Scale",
            "Non-fiction on distributed systems by John Smith",
            42.0,
            "Books",
            "Tech House",
            vec!["non-fiction".into(), "technology".into()],
            4.8,
            30,
        ),
        Product::new(
            "Stainless Cookware Set",
            "Ten-piece stainless steel cookware set",
            180.0,
            "Home & Kitchen",
            "KitchenPro",
            vec!["cookware".into(), "kitchen".into()],
            4.5,
            15,
        ),
        Product::new(
            "Trail Tent 2P",
            "Two-person waterproof camping tent",
            129.0,
            "Sports & Outdoors",
            "TrailGear",
            vec!["camping".into(), "tent".into(), "outdoor".into()],
            4.3,
            22,
        ),
        Product::new(
            "Yoga Mat Plus",
            "Non-slip exercise mat",
            35.0,
            "Sports & Outdoors",
            "FlexFit",
            vec!["yoga".into(), "fitness".into()],
            4.2,
            90,
        ),
        Product::new(
            "Wooden Block Set",
            "Building blocks for ages three and up",
            29.0,
            "Toys & Games",
            "PlayWood",
            vec!["toys".into(), "blocks".into()],
            4.7,
            55,
        ),
    ];

    // One retired product so inactive filtering is observable in demos.
    let mut discontinued = Product::new(
        "LG Legacy Phone",
        "Discontinued smartphone",
        99.0,
        "Electronics",
        "LG",
        vec!["smartphone".into()],
        3.5,
        0,
    );
    discontinued.is_active = false;
    products.push(discontinued);

    MemoryCatalog::with_limit(products, categories, max_results)
}
