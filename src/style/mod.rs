pub mod hideout;
pub mod legend;
pub mod resolver;
