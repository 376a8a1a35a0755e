use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::series_categories::Entity")]
    SeriesCategories,
    #[sea_orm(has_many = "super::model_categories::Entity")]
    ModelCategories,
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
}

impl Related<super::series_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeriesCategories.def()
    }
}

impl Related<super::model_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelCategories.def()
    }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
