// Game modules: characters, level entities, levels, the tick driver and the session

pub mod characters;
pub mod entities;
pub mod level;
pub mod session;
pub mod world;
