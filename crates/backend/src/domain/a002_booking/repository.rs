use async_trait::async_trait;
use contracts::domain::a001_design::aggregate::DesignId;
use contracts::domain::a002_booking::aggregate::{Booking, BookingId};
use contracts::domain::a002_booking::draft::MeasurementForm;
use contracts::domain::common::{AggregateRoot, EntityMetadata};
use contracts::enums::{BookingStatus, MeasurementUnit};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::sequence::ReferenceSequence;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub design_id: String,
    pub design_name: String,
    pub customer_name: String,
    pub phone: String,
    pub extra_requirements: String,
    pub unit: String,
    /// JSON array of `{name, value}` in form order
    pub measurements: String,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Booking {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let measurements: MeasurementForm = serde_json::from_str(&m.measurements)
            .map_err(|e| anyhow::anyhow!("booking {}: bad measurements column: {}", m.id, e))?;
        let unit = MeasurementUnit::from_code(&m.unit)
            .ok_or_else(|| anyhow::anyhow!("booking {}: unknown unit '{}'", m.id, m.unit))?;
        let status: BookingStatus = m
            .status
            .parse()
            .map_err(|e| anyhow::anyhow!("booking {}: {}", m.id, e))?;

        Ok(Booking {
            id: BookingId(m.id),
            design_id: DesignId(m.design_id),
            design_name: m.design_name,
            customer_name: m.customer_name,
            phone: m.phone,
            extra_requirements: m.extra_requirements,
            unit,
            measurements,
            status,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
                version: m.version,
            },
        })
    }
}

fn to_active(booking: &Booking) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(booking.id.as_str().to_string()),
        design_id: Set(booking.design_id.as_str().to_string()),
        design_name: Set(booking.design_name.clone()),
        customer_name: Set(booking.customer_name.clone()),
        phone: Set(booking.phone.clone()),
        extra_requirements: Set(booking.extra_requirements.clone()),
        unit: Set(booking.unit.code().to_string()),
        measurements: Set(serde_json::to_string(&booking.measurements)?),
        status: Set(booking.status.as_str().to_string()),
        created_at: Set(booking.metadata.created_at),
        updated_at: Set(booking.metadata.updated_at),
        version: Set(booking.metadata.version),
    })
}

/// Booking persistence collaborator
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// All bookings, newest first
    async fn list_all(&self) -> anyhow::Result<Vec<Booking>>;

    async fn get_by_id(&self, id: &BookingId) -> anyhow::Result<Option<Booking>>;

    /// Reserve a reference code never handed out before by this store
    async fn allocate_id(&self) -> anyhow::Result<BookingId>;

    async fn create(&self, booking: &Booking) -> anyhow::Result<()>;

    /// Set the status of one booking. `None` when the id is unknown.
    async fn update_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
    ) -> anyhow::Result<Option<Booking>>;
}

pub struct SqliteBookingStore {
    conn: DatabaseConnection,
    sequence: ReferenceSequence,
}

impl SqliteBookingStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            sequence: ReferenceSequence::new(Booking::id_prefix()),
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
impl BookingStore for SqliteBookingStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Booking>> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }

    async fn get_by_id(&self, id: &BookingId) -> anyhow::Result<Option<Booking>> {
        Entity::find_by_id(id.as_str().to_string())
            .one(&self.conn)
            .await?
            .map(Booking::try_from)
            .transpose()
    }

    async fn allocate_id(&self) -> anyhow::Result<BookingId> {
        let code = self.sequence.allocate(|| self.existing_ids()).await?;
        Ok(BookingId(code))
    }

    async fn create(&self, booking: &Booking) -> anyhow::Result<()> {
        to_active(booking)?.insert(&self.conn).await?;
        Ok(())
    }

    async fn update_status(
        &self,
        id: &BookingId,
        status: BookingStatus,
    ) -> anyhow::Result<Option<Booking>> {
        // Version is incremented by the database, not from a value read earlier
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .col_expr(Column::Version, Expr::col(Column::Version).add(1))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(Column::Id.eq(id.as_str()))
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.get_by_id(id).await
    }
}
