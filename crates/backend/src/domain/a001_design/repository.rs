use async_trait::async_trait;
use contracts::domain::a001_design::aggregate::{Design, DesignId, ValidDesignDto};
use contracts::domain::common::{AggregateRoot, EntityMetadata};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::sequence::ReferenceSequence;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_design")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    /// JSON array of measurement names, in display order
    pub measurements: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Design {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let measurements: Vec<String> = serde_json::from_str(&m.measurements)
            .map_err(|e| anyhow::anyhow!("design {}: bad measurements column: {}", m.id, e))?;
        Ok(Design {
            id: DesignId(m.id),
            name: m.name,
            category: m.category,
            image: m.image,
            measurements,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
                version: m.version,
            },
        })
    }
}

/// Catalog read and design authoring collaborator
#[async_trait]
pub trait DesignStore: Send + Sync {
    /// Whole catalog in catalog order (oldest first)
    async fn list_all(&self) -> anyhow::Result<Vec<Design>>;

    async fn get_by_id(&self, id: &DesignId) -> anyhow::Result<Option<Design>>;

    /// Allocate the next reference code and store the design
    async fn create(&self, dto: ValidDesignDto) -> anyhow::Result<Design>;
}

pub struct SqliteDesignStore {
    conn: DatabaseConnection,
    sequence: ReferenceSequence,
}

impl SqliteDesignStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            sequence: ReferenceSequence::new(Design::id_prefix()),
        }
    }

    async fn existing_ids(&self) -> anyhow::Result<Vec<String>> {
        Ok(Entity::find()
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect())
    }
}

#[async_trait]
impl DesignStore for SqliteDesignStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Design>> {
        Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Design::try_from)
            .collect()
    }

    async fn get_by_id(&self, id: &DesignId) -> anyhow::Result<Option<Design>> {
        Entity::find_by_id(id.as_str().to_string())
            .one(&self.conn)
            .await?
            .map(Design::try_from)
            .transpose()
    }

    async fn create(&self, dto: ValidDesignDto) -> anyhow::Result<Design> {
        let code = self.sequence.allocate(|| self.existing_ids()).await?;
        let design = Design::new_for_insert(DesignId(code), dto);

        let active = ActiveModel {
            id: Set(design.id.as_str().to_string()),
            name: Set(design.name.clone()),
            category: Set(design.category.clone()),
            image: Set(design.image.clone()),
            measurements: Set(serde_json::to_string(&design.measurements)?),
            created_at: Set(design.metadata.created_at),
            updated_at: Set(design.metadata.updated_at),
            version: Set(design.metadata.version),
        };
        active.insert(&self.conn).await?;
        Ok(design)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;
    use contracts::domain::a001_design::aggregate::DesignDto;

    async fn store() -> (tempfile::TempDir, SqliteDesignStore) {
        let dir = tempfile::tempdir().unwrap();
        let conn = db::connect(&dir.path().join("designs.db")).await.unwrap();
        db::ensure_schema(&conn).await.unwrap();
        (dir, SqliteDesignStore::new(conn))
    }

    fn dto(name: &str, measurements: &[&str]) -> ValidDesignDto {
        DesignDto {
            name: name.into(),
            category: "Formal".into(),
            measurements: measurements.iter().map(|s| s.to_string()).collect(),
            image: None,
        }
        .normalize_and_validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_allocates_sequential_codes() {
        let (_dir, store) = store().await;
        let first = store.create(dto("Gown", &["Bust", "Waist"])).await.unwrap();
        let second = store.create(dto("Suit", &["Chest"])).await.unwrap();
        assert_eq!(first.id, DesignId::new("RN001"));
        assert_eq!(second.id, DesignId::new("RN002"));
    }

    #[tokio::test]
    async fn test_round_trip_keeps_measurement_order() {
        let (_dir, store) = store().await;
        let created = store
            .create(dto("Gown", &["Shoulder Width", "Bust", "Length"]))
            .await
            .unwrap();

        let loaded = store.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(loaded.measurements, vec!["Shoulder Width", "Bust", "Length"]);
        assert_eq!(loaded.image, "/placeholder.svg");

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(store
            .get_by_id(&DesignId::new("RN404"))
            .await
            .unwrap()
            .is_none());
    }
}
