// Level entities
//
// - Platforms: immutable, owned by the level
// - Enemies: patrol along X until stomped
// - Collectibles: picked up once by overlap

pub mod collectible;
pub mod enemy;
pub mod platform;

pub use collectible::{Collectible, CollectibleId, CollectibleKind, CollectibleSpawn};
pub use enemy::{Enemy, EnemyId, EnemySpawn, PatrolDirection};
pub use platform::{Platform, PlatformId};
