mod create_hero;
mod delete_hero;
mod update_hero;

pub use create_hero::CreateHeroCommandHandler;
pub use delete_hero::DeleteHeroCommandHandler;
pub use update_hero::UpdateHeroCommandHandler;
