use serde::{Deserialize, Serialize};

/// Menu for one weekday, used both as the upsert request body and as the lookup response.
///
/// Meal slots that are not served are `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MenuDto {
    /// Canonical weekday name, `Monday` through `Sunday`
    pub weekday: String,
    #[serde(default)]
    pub breakfast: Option<String>,
    #[serde(default)]
    pub lunch: Option<String>,
    #[serde(default)]
    pub snacks: Option<String>,
    #[serde(default)]
    pub dinner: Option<String>,
}

impl From<entity::menu::Model> for MenuDto {
    fn from(menu: entity::menu::Model) -> Self {
        Self {
            weekday: menu.weekday,
            breakfast: menu.breakfast,
            lunch: menu.lunch,
            snacks: menu.snacks,
            dinner: menu.dinner,
        }
    }
}
