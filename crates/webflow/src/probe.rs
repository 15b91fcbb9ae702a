//! Startup connectivity check.

use crate::catalog::ExternalCatalog;
use crate::error::WebflowError;

/// Lists the collection once and logs what came back.
///
/// Returns the number of items listed. Callers treat a failure as a
/// warning; the service can run while the external catalog is down.
#[tracing::instrument(skip(catalog))]
pub async fn check_connection<E>(catalog: &E) -> Result<usize, WebflowError>
where
    E: ExternalCatalog + ?Sized,
{
    let list = catalog.list_items().await?;

    let item_ids: Vec<String> = list.item_ids().iter().map(ToString::to_string).collect();
    tracing::info!(
        items = list.items.len(),
        ?item_ids,
        "external catalog connected"
    );
    for item in &list.items {
        tracing::debug!(item = %item.raw(), "external catalog item");
    }

    Ok(list.items.len())
}

#[cfg(test)]
mod tests {
    use domain::ProductFields;

    use super::*;
    use crate::memory::InMemoryExternalCatalog;

    #[tokio::test]
    async fn test_counts_listed_items() {
        let catalog = InMemoryExternalCatalog::new();
        catalog
            .create_item(&ProductFields::new("Widget", 9.99, "A widget", 5))
            .await
            .unwrap();

        assert_eq!(check_connection(&catalog).await.unwrap(), 1);
    }
}
