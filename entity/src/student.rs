use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub admission_no: String,
    pub passout_year: i32,
    pub profile_file_id: Option<String>,
    #[sea_orm(unique)]
    pub telegram_id: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_choice::Entity")]
    MealChoice,
    #[sea_orm(has_many = "super::weekly_choice::Entity")]
    WeeklyChoice,
}

impl Related<super::meal_choice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealChoice.def()
    }
}

impl Related<super::weekly_choice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeeklyChoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
