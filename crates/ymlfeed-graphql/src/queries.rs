//! GraphQL documents sent to the catalog endpoint.

/// All categories, flat.
pub const FILTER_CATEGORIES: &str = r"
query FilterCategory {
  filterCategory {
    id
    name
  }
}
";

/// Products with their category chain (four ancestor levels), prices,
/// images, page slug and codes.
pub const FILTER_PRODUCTS: &str = r"
query FilterProduct {
  filterProduct {
    id
    name
    statusId
    category {
      id
      name
      page { url }
      parentCategory {
        id
        name
        page { url }
        parentCategory {
          id
          name
          page { url }
          parentCategory {
            id
            name
            page { url }
          }
        }
      }
    }
    price
    priceToShow {
      name
      value
      suffix
    }
    images {
      image
    }
    page {
      url
      links {
        parentUrl
      }
    }
    itemCode
    vendorCode
  }
}
";
