//! Demo catalog inserted by the seed endpoint.

use crate::models::NewProduct;

const IMAGE_PARAMS: &str = "?q=80&w=1200&auto=format&fit=crop";

fn demo(title: &str, description: &str, price: f64, category: &str, photo: &str) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: Some(description.to_string()),
        price,
        category: category.to_string(),
        in_stock: true,
        image: Some(format!(
            "https://images.unsplash.com/photo-{}{}",
            photo, IMAGE_PARAMS
        )),
    }
}

/// The fixed demo set, in insertion order.
pub fn demo_products() -> Vec<NewProduct> {
    vec![
        demo(
            "Essential Tee",
            "Ultra-soft cotton tee with a relaxed fit.",
            24.00,
            "Tops",
            "1520975922215-c994c6a8dffd",
        ),
        demo(
            "Everyday Hoodie",
            "Cozy fleece hoodie for all-day comfort.",
            58.00,
            "Hoodies",
            "1521572163474-6864f9cf17ab",
        ),
        demo(
            "Slim Chinos",
            "Tailored chinos with stretch for movement.",
            64.00,
            "Bottoms",
            "1520975916090-3105956dac38",
        ),
        demo(
            "Classic Denim Jacket",
            "Timeless denim with a modern wash.",
            89.00,
            "Outerwear",
            "1520975693416-35b05b6cb4f2",
        ),
        demo(
            "Athletic Joggers",
            "Lightweight joggers for lounge or gym.",
            49.00,
            "Bottoms",
            "1541099649105-f69ad21f3246",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_demo_products_are_valid() {
        let products = demo_products();
        assert_eq!(products.len(), 5);

        for product in &products {
            assert!(product.validate().is_ok(), "{} is invalid", product.title);
            assert!(product.in_stock);
            assert!(product.image.as_deref().unwrap().starts_with("https://"));
        }
    }

    #[test]
    fn test_demo_categories() {
        let mut categories: Vec<_> = demo_products().into_iter().map(|p| p.category).collect();
        categories.sort();
        categories.dedup();
        assert_eq!(categories, vec!["Bottoms", "Hoodies", "Outerwear", "Tops"]);
    }
}
