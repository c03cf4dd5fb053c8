pub mod health;
pub mod hotel;
