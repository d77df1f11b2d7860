//! Product store: an ordered `Vec<Product>` behind a single exclusive lock.

use crate::error::{AppError, AppResult};
use crate::models::product::{seed_products, Product};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// CRUD over the in-memory product sequence.
///
/// Every operation, reads included, holds the lock from the range check to the
/// snapshot it returns. Callers get clones, never references into the store.
#[derive(Clone, Default)]
pub struct ProductService {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductService {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(Mutex::new(products)),
        }
    }

    /// Store with the three startup entries.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    pub async fn list(&self) -> Vec<Product> {
        let products = self.products.lock().await;
        products.clone()
    }

    pub async fn get(&self, id: usize) -> AppResult<Product> {
        let products = self.products.lock().await;
        products.get(id).cloned().ok_or(AppError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn create(&self, product: Product) -> Product {
        let mut products = self.products.lock().await;
        products.push(product.clone());
        info!(id = products.len() - 1, name = %product.name, "product created");
        product
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: usize, patch: Product) -> AppResult<Product> {
        let mut products = self.products.lock().await;
        let product = products.get_mut(id).ok_or(AppError::NotFound)?;
        product.apply_patch(&patch);
        info!(id, name = %product.name, price = product.price, "product updated");
        Ok(product.clone())
    }

    /// Remove by swapping with the last element, so the last element takes `id`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: usize) -> AppResult<Product> {
        let mut products = self.products.lock().await;
        if id >= products.len() {
            debug!(id, len = products.len(), "delete out of range");
            return Err(AppError::NotFound);
        }
        let removed = products.swap_remove(id);
        info!(id, name = %removed.name, remaining = products.len(), "product deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_matches_list_position() {
        let svc = ProductService::seeded();
        let all = svc.list().await;
        assert_eq!(all.len(), 3);
        for (id, expected) in all.iter().enumerate() {
            assert_eq!(&svc.get(id).await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn get_out_of_range_is_not_found() {
        let svc = ProductService::seeded();
        assert!(matches!(svc.get(99).await, Err(AppError::NotFound)));
        assert!(matches!(svc.get(3).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn create_appends_at_previous_length() {
        let svc = ProductService::seeded();
        let before = svc.list().await.len();
        let created = svc.create(Product::new("Lamp", 12.5)).await;
        assert_eq!(created, Product::new("Lamp", 12.5));
        assert_eq!(svc.get(before).await.unwrap(), created);
        assert_eq!(svc.list().await.len(), before + 1);
    }

    #[tokio::test]
    async fn delete_first_swaps_in_last() {
        let svc = ProductService::seeded();
        let removed = svc.delete(0).await.unwrap();
        assert_eq!(removed, Product::new("Shoes", 25.0));
        assert_eq!(
            svc.list().await,
            vec![Product::new("Mic", 20.0), Product::new("Webcam", 50.0)]
        );
    }

    #[tokio::test]
    async fn delete_keeps_other_values() {
        let svc = ProductService::seeded();
        svc.create(Product::new("Lamp", 12.5)).await;
        let mut before = svc.list().await;
        let removed = svc.delete(1).await.unwrap();
        assert_eq!(removed, before.remove(1));

        let mut after = svc.list().await;
        let key = |p: &Product| p.name.clone();
        before.sort_by_key(key);
        after.sort_by_key(key);
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn delete_last_and_out_of_range() {
        let svc = ProductService::seeded();
        svc.delete(2).await.unwrap();
        assert_eq!(svc.list().await.len(), 2);
        assert!(matches!(svc.delete(2).await, Err(AppError::NotFound)));
        assert_eq!(svc.list().await.len(), 2);
    }

    #[tokio::test]
    async fn update_is_sparse() {
        let svc = ProductService::seeded();
        let p = svc.update(1, Product::new("", 0.0)).await.unwrap();
        assert_eq!(p, Product::new("Webcam", 50.0));

        let p = svc.update(1, Product::new("", 42.0)).await.unwrap();
        assert_eq!(p, Product::new("Webcam", 42.0));
        assert_eq!(svc.get(1).await.unwrap(), p);

        assert!(matches!(
            svc.update(7, Product::new("x", 1.0)).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_are_not_lost() {
        let svc = ProductService::seeded();
        let initial = svc.list().await.len();
        let n = 64;

        let handles: Vec<_> = (0..n)
            .map(|i| {
                let svc = svc.clone();
                tokio::spawn(async move {
                    svc.create(Product::new(format!("p{i}"), i as f64)).await
                })
            })
            .collect();
        for h in handles {
            h.await.unwrap();
        }

        assert_eq!(svc.list().await.len(), initial + n);
    }

    #[tokio::test]
    async fn empty_store() {
        let svc = ProductService::default();
        assert!(svc.list().await.is_empty());
        assert!(matches!(svc.get(0).await, Err(AppError::NotFound)));
    }
}
