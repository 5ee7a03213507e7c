//! Client-side product search.
//!
//! The list screen already holds every product, so search is a plain
//! case-insensitive substring match on the name. Order is preserved.

use crate::types::ProductDto;

/// Returns the products whose name contains `term`, ignoring case.
///
/// An empty term matches everything.
///
/// ```rust
/// use stockroom_core::search::filter_products;
/// use stockroom_core::ProductDto;
///
/// let products = vec![ProductDto {
///     id: "550e8400-e29b-41d4-a716-446655440000".into(),
///     name: "Laptop Dell".into(),
///     description: None,
///     price: 15_000_000.0,
///     stock_quantity: 10,
///     status: None,
/// }];
/// assert_eq!(filter_products(&products, "DELL").len(), 1);
/// assert!(filter_products(&products, "mouse").is_empty());
/// ```
pub fn filter_products<'a>(products: &'a [ProductDto], term: &str) -> Vec<&'a ProductDto> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> ProductDto {
        ProductDto {
            id: format!("id-{name}"),
            name: name.to_string(),
            description: None,
            price: 1.0,
            stock_quantity: 1,
            status: None,
        }
    }

    #[test]
    fn test_empty_term_matches_all() {
        let products = vec![product("Laptop"), product("Mouse")];
        assert_eq!(filter_products(&products, "").len(), 2);
    }

    #[test]
    fn test_case_insensitive_and_ordered() {
        let products = vec![
            product("Laptop Dell"),
            product("Mouse"),
            product("dell Monitor"),
        ];
        let names: Vec<&str> = filter_products(&products, "DeLL")
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Laptop Dell", "dell Monitor"]);
    }

    #[test]
    fn test_vietnamese_names() {
        let products = vec![product("Điện thoại"), product("Tai nghe")];
        let found = filter_products(&products, "điện");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Điện thoại");
    }

    #[test]
    fn test_term_is_not_trimmed() {
        let products = vec![product("Laptop")];
        assert!(filter_products(&products, " laptop").is_empty());
    }
}
