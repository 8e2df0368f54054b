use heroes_types::hero::{CreateHeroRequest, Hero, UpdateHeroRequest};

use crate::cqrs::Command;

#[derive(Debug, Clone)]
pub struct CreateHero {
    pub request: CreateHeroRequest,
}

impl Command for CreateHero {
    type Output = Hero;
}

#[derive(Debug, Clone)]
pub struct UpdateHero {
    pub request: UpdateHeroRequest,
}

impl Command for UpdateHero {
    type Output = Hero;
}

#[derive(Debug, Clone)]
pub struct DeleteHero {
    pub id: String,
}

impl Command for DeleteHero {
    type Output = bool;
}
