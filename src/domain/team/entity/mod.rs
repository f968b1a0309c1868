pub mod team;
pub mod user_team;
