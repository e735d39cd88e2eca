use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Username (unique)
    #[sea_orm(unique)]
    pub username: String,

    /// Password hash
    pub password_hash: String,

    /// Role name; may hold values outside the role table
    pub role: String,

    /// Organization (optional)
    pub organization: Option<String>,

    /// Expertise (optional)
    pub expertise: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// User sessions relation
    #[sea_orm(has_many = "super::user_session::Entity")]
    UserSessions,
}

impl Related<super::user_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to the domain user
    pub fn to_domain_user(&self) -> crate::core::models::User {
        crate::core::models::User {
            id: self.id,
            username: self.username.clone(),
            password_hash: self.password_hash.clone(),
            role: self.role.clone(),
            organization: self.organization.clone(),
            expertise: self.expertise.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
        }
    }

    /// Build an insertable model from the domain user
    pub fn from_domain_user(user: &crate::core::models::User) -> ActiveModel {
        ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.clone()),
            organization: Set(user.organization.clone()),
            expertise: Set(user.expertise.clone()),
            created_at: Set(user.created_at.into()),
        }
    }
}
