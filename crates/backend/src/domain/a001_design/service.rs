use contracts::domain::a001_design::aggregate::{search_designs, Design, DesignDto, DesignId};

use super::repository::DesignStore;
use crate::shared::error::ServiceError;

/// Catalog, optionally filtered by a search query (name or reference id)
pub async fn list(store: &dyn DesignStore, search: Option<&str>) -> Result<Vec<Design>, ServiceError> {
    let catalog = store.list_all().await.map_err(ServiceError::persistence)?;
    Ok(search_designs(&catalog, search.unwrap_or("")))
}

pub async fn get_by_id(store: &dyn DesignStore, id: &DesignId) -> Result<Design, ServiceError> {
    store
        .get_by_id(id)
        .await
        .map_err(ServiceError::persistence)?
        .ok_or_else(|| ServiceError::NotFound(format!("Design {}", id)))
}

/// Upload a new design (admin)
pub async fn create(store: &dyn DesignStore, dto: DesignDto) -> Result<Design, ServiceError> {
    let valid = dto.normalize_and_validate().map_err(|e| {
        tracing::debug!("Design rejected: {}", e);
        ServiceError::from(e)
    })?;

    let design = store.create(valid).await.map_err(ServiceError::persistence)?;
    tracing::info!(
        design_id = %design.id,
        measurements = design.measurements.len(),
        "Design created: {}",
        design.name
    );
    Ok(design)
}

/// Seed the demo catalog when no design exists yet. Returns the number inserted.
pub async fn insert_test_data(store: &dyn DesignStore) -> anyhow::Result<usize> {
    if !store.list_all().await?.is_empty() {
        return Ok(0);
    }

    let data = vec![
        DesignDto {
            name: "Elegant Evening Gown".into(),
            category: "Evening Wear".into(),
            measurements: vec![
                "Bust".into(),
                "Waist".into(),
                "Hip".into(),
                "Length".into(),
                "Shoulder Width".into(),
            ],
            image: None,
        },
        DesignDto {
            name: "Traditional Saree Blouse".into(),
            category: "Traditional".into(),
            measurements: vec![
                "Bust".into(),
                "Waist".into(),
                "Blouse Length".into(),
                "Sleeve Length".into(),
                "Shoulder Width".into(),
            ],
            image: None,
        },
        DesignDto {
            name: "Business Suit".into(),
            category: "Formal".into(),
            measurements: vec![
                "Chest".into(),
                "Waist".into(),
                "Hip".into(),
                "Jacket Length".into(),
                "Sleeve Length".into(),
                "Trouser Length".into(),
            ],
            image: None,
        },
    ];

    let count = data.len();
    for dto in data {
        let valid = dto
            .normalize_and_validate()
            .map_err(|e| anyhow::anyhow!("demo design is invalid: {}", e))?;
        store.create(valid).await?;
    }
    tracing::info!("Seeded {} demo designs", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::MemoryDesignStore;

    #[tokio::test]
    async fn test_seed_then_search() {
        let store = MemoryDesignStore::default();
        assert_eq!(insert_test_data(&store).await.unwrap(), 3);
        assert_eq!(insert_test_data(&store).await.unwrap(), 0);

        let saree = list(&store, Some("saree")).await.unwrap();
        assert_eq!(saree.len(), 1);
        assert_eq!(saree[0].id, DesignId::new("RN002"));

        let by_id: Vec<String> = list(&store, Some("rn00"))
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id.0)
            .collect();
        assert_eq!(by_id, vec!["RN001", "RN002", "RN003"]);

        assert_eq!(list(&store, None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_keeps_surrounding_spaces() {
        let store = MemoryDesignStore::default();
        insert_test_data(&store).await.unwrap();

        assert!(list(&store, Some("gown ")).await.unwrap().is_empty());
        assert!(list(&store, Some("   ")).await.unwrap().is_empty());
        assert_eq!(list(&store, Some("")).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_missing_design() {
        let store = MemoryDesignStore::default();
        let err = get_by_id(&store, &DesignId::new("RN999")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_validates_input() {
        let store = MemoryDesignStore::default();
        let err = create(
            &store,
            DesignDto {
                name: "Gown".into(),
                category: "".into(),
                measurements: vec!["Bust".into()],
                image: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(list(&store, None).await.unwrap().is_empty());
    }
}
