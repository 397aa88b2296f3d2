pub mod contact;
pub mod ground;
pub mod hover;
pub mod integrate;
pub mod obstacles;
pub mod spawner;
