mod advisor;
mod facts;
mod food_db;
mod open_food_facts;
mod risk;

pub use advisor::*;
pub use facts::*;
pub use food_db::*;
pub use open_food_facts::*;
pub use risk::*;
