pub mod bookmark;
pub mod health;
pub mod retrospective;
pub mod section;
pub mod team;
pub mod user;
