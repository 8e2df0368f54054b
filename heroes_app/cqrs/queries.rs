use heroes_types::hero::Hero;

use crate::cqrs::Query;

/// Fetch the whole roster.
pub struct ListHeroes;

impl Query for ListHeroes {
    type Output = Vec<Hero>;
}

/// Fetch a single hero, `None` when the id is unknown.
pub struct GetHeroById {
    pub id: String,
}

impl Query for GetHeroById {
    type Output = Option<Hero>;
}

/// Search heroes by name or real name.
pub struct SearchHeroes {
    pub term: String,
}

impl Query for SearchHeroes {
    type Output = Vec<Hero>;
}
