
use messbot_test_utils::prelude::*;

use crate::{
    model::menu::MenuDto,
    server::{
        error::{mess::MessError, Error},
        service::menu::MenuService,
    },
};

fn monday_menu() -> MenuDto {
    MenuDto {
        weekday: "Monday".to_string(),
        breakfast: Some("Idli".to_string()),
        lunch: Some("Rice".to_string()),
        snacks: None,
        dinner: Some("Soup".to_string()),
    }
}
