use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "branches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company_id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub address: String,
    pub photo: String,
    pub instagram_url: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub google_business_url: String,
    pub youtube_url: String,
    pub is_main: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id",
        on_delete = "Cascade"
    )]
    Companies,
    #[sea_orm(has_many = "super::branch_phone_numbers::Entity")]
    BranchPhoneNumbers,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::branch_phone_numbers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BranchPhoneNumbers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
