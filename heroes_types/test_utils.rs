use chrono::Utc;
use uuid::Uuid;

use crate::hero::{CreateHeroRequest, Effectiveness, Hero};

#[derive(Default, Clone)]
pub struct HeroFactoryOptions<'a> {
    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub real_name: Option<&'a str>,
    pub powers: Option<Vec<&'a str>>,
    pub effectiveness: Option<i32>,
    pub is_alive: Option<bool>,
}

pub fn hero_factory(options: HeroFactoryOptions) -> Hero {
    let now = Utc::now();
    let id = options
        .id
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Hero {
        name: options
            .name
            .map(str::to_uppercase)
            .unwrap_or_else(|| format!("HERO {}", &id[..id.len().min(8)])),
        id,
        real_name: options.real_name.map(str::to_string),
        powers: options
            .powers
            .unwrap_or(vec!["Super strength"])
            .into_iter()
            .map(str::to_string)
            .collect(),
        weaknesses: vec![],
        effectiveness: Effectiveness::new(options.effectiveness.unwrap_or(75))
            .expect("factory effectiveness must be within 1..=100"),
        is_alive: options.is_alive.unwrap_or(true),
        image_url: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn create_request(name: &str, effectiveness: i32, powers: &[&str]) -> CreateHeroRequest {
    CreateHeroRequest {
        name: name.to_string(),
        real_name: None,
        powers: powers.iter().map(|p| p.to_string()).collect(),
        weaknesses: vec![],
        effectiveness,
        is_alive: true,
        image_url: None,
    }
}
