use super::repository;
use crate::shared::error::AppError;
use contracts::domain::a001_product::Product;
use uuid::Uuid;

pub async fn search(query: &str) -> Result<Vec<Product>, AppError> {
    Ok(repository::search_by_name(query).await?)
}

/// Overwrite the stock counter with the caller-computed value. The
/// read happened client-side at basket time, so concurrent checkouts
/// of the same product can lose an update. No floor check: negative
/// values are storable.
pub async fn update_stock(id: Uuid, stock: i32) -> Result<Product, AppError> {
    repository::update_stock(id, stock)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))
}

/// Seed a small grocery catalog so the checkout and search flows can
/// be exercised against a fresh database.
pub async fn insert_test_data() -> Result<usize, AppError> {
    let seed = [
        ("Milk", 32.5, "milk.png", "Dairy", 40),
        ("Bread", 12.0, "bread.png", "Bakery", 60),
        ("Eggs", 48.0, "eggs.png", "Dairy", 30),
        ("Apple", 9.75, "apple.png", "Fruit", 100),
        ("Cheese", 120.0, "cheese.png", "Dairy", 15),
    ];

    let mut inserted = 0;
    for (name, price, image, category, stock) in seed {
        let mut product = Product::new_for_insert(
            name.to_string(),
            price,
            image.to_string(),
            category.to_string(),
            stock,
        );
        product
            .validate()
            .map_err(AppError::Validation)?;
        product.before_write();
        repository::insert(&product).await?;
        inserted += 1;
    }

    tracing::info!("Inserted {} test products", inserted);
    Ok(inserted)
}

