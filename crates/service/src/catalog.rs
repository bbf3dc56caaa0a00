use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::product::{NewProduct, Product};

use crate::errors::ServiceError;
use crate::storage::json_list_store::JsonListStore;

/// Product listing and creation atop the Record Store.
pub struct CatalogService {
    store: Arc<JsonListStore<Product>>,
}

impl CatalogService {
    pub fn new(store: Arc<JsonListStore<Product>>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    /// Full catalog; empty on a missing or corrupt store.
    pub async fn list(&self) -> Vec<Product> {
        self.store.load().await
    }

    /// Create a product with the next sequential id.
    ///
    /// The id is recomputed as max+1 from the current contents rather than
    /// kept as a counter; the id assignment and the append share one store
    /// update so concurrent creates cannot collide.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewProduct) -> Result<Product, ServiceError> {
        let (name, price) = input.validate()?;
        let image = input.image.unwrap_or_default();
        let category = input.category.filter(|c| !c.trim().is_empty());

        let product = self
            .store
            .update(move |products| {
                let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
                let product = Product { id, name, price, image, category };
                products.push(product.clone());
                Ok(product)
            })
            .await?;

        info!(id = product.id, name = %product.name, "product_created");
        Ok(product)
    }

    /// Attach an uploaded image path to an existing product.
    ///
    /// An unknown id is a no-op: the uploaded file stays on disk
    /// unassociated. That mirrors the source behavior, so uploads and
    /// product creation can arrive in any order.
    #[instrument(skip(self, image_path))]
    pub async fn attach_image(&self, product_id: u64, image_path: &str) -> Result<(), ServiceError> {
        let attached = self
            .store
            .update(|products| match products.iter_mut().find(|p| p.id == product_id) {
                Some(product) => {
                    product.image = image_path.to_string();
                    Ok(true)
                }
                None => Ok(false),
            })
            .await?;

        if attached {
            info!(product_id, image_path, "image_attached");
        } else {
            warn!(product_id, "image upload referenced an unknown product; file stored unassociated");
        }
        Ok(())
    }
}
