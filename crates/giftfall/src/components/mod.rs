pub mod body;
pub mod obstacle;
