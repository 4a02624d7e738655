use std::collections::HashMap;

use crate::error::{KiranaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Fruit,
    Vegetable,
    Dairy,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fruit => "Fruit",
            Category::Vegetable => "Vegetable",
            Category::Dairy => "Dairy",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub name: String,
    pub category: Category,
    pub unit_price: f64,
}

// (name, unit price in rupees)
const FRUITS: &[(&str, f64)] = &[
    ("apple", 100.0),
    ("banana", 40.0),
    ("orange", 70.0),
    ("grapes", 120.0),
    ("mango", 180.0),
];

const VEGETABLES: &[(&str, f64)] = &[
    ("carrot", 30.0),
    ("broccoli", 60.0),
    ("spinach", 25.0),
    ("potato", 40.0),
    ("tomato", 40.0),
];

const DAIRY: &[(&str, f64)] = &[
    ("milk", 24.0),
    ("curd", 28.0),
    ("butter", 170.0),
    ("cheese", 18.0),
];

/// Read-only product catalog, fixed for the process lifetime.
///
/// A name must be unique across all three categories; `from_entries`
/// rejects catalogs where lookup would be ambiguous.
#[derive(Debug)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    pub fn standard() -> Result<Catalog> {
        Self::from_entries(&[
            (Category::Fruit, FRUITS),
            (Category::Vegetable, VEGETABLES),
            (Category::Dairy, DAIRY),
        ])
    }

    pub fn from_entries(entries: &[(Category, &[(&str, f64)])]) -> Result<Catalog> {
        let mut products = HashMap::new();
        for (category, table) in entries {
            for (name, price) in table.iter() {
                let key = name.to_lowercase();
                if products
                    .insert(
                        key.clone(),
                        Product {
                            name: key,
                            category: *category,
                            unit_price: *price,
                        },
                    )
                    .is_some()
                {
                    return Err(KiranaError::DuplicateProduct(name.to_string()));
                }
            }
        }
        Ok(Catalog { products })
    }

    pub fn lookup(&self, name: &str) -> Option<&Product> {
        self.products.get(&name.to_lowercase())
    }

    /// All products, grouped by category in menu order, alphabetical within.
    pub fn by_category(&self) -> Vec<(Category, Vec<&Product>)> {
        [Category::Fruit, Category::Vegetable, Category::Dairy]
            .into_iter()
            .map(|cat| {
                let mut items: Vec<&Product> = self
                    .products
                    .values()
                    .filter(|p| p.category == cat)
                    .collect();
                items.sort_by(|a, b| a.name.cmp(&b.name));
                (cat, items)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}
