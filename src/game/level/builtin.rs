// Built-in campaign levels

use super::{Level, LevelError};
use crate::game::entities::{CollectibleKind, EnemySpawn, PatrolDirection};

use CollectibleKind::{DoubleJump, Score};
use PatrolDirection::{Left, Right};

/// Bottom-edge y of the Quarry floor
const QUARRY_FLOOR: f32 = 430.0;

/// Long run over ground segments and stepped platforms. There is no floor
/// under the gaps between ground segments, so missing a jump is fatal.
pub fn meadow() -> Result<Level, LevelError> {
    Level::builder("Meadow")
        .spawn(50.0, 300.0)
        // Ground
        .platform(1, 0.0, 380.0, 800.0, 20.0)
        .platform(2, 200.0, 300.0, 150.0, 20.0)
        .platform(3, 600.0, 250.0, 200.0, 20.0)
        .platform(4, 1000.0, 200.0, 250.0, 20.0)
        .platform(5, 1400.0, 300.0, 200.0, 20.0)
        .platform(6, 1800.0, 250.0, 200.0, 20.0)
        .platform(7, 2200.0, 300.0, 250.0, 20.0)
        // Ground extension
        .platform(8, 2600.0, 380.0, 800.0, 20.0)
        .platform(9, 3400.0, 300.0, 200.0, 20.0)
        .platform(10, 3800.0, 250.0, 250.0, 20.0)
        .platform(11, 4200.0, 200.0, 300.0, 20.0)
        .platform(12, 4600.0, 300.0, 200.0, 20.0)
        // Ground extension
        .platform(13, 5000.0, 380.0, 800.0, 20.0)
        .platform(14, 5800.0, 350.0, 250.0, 20.0)
        .platform(15, 6200.0, 250.0, 250.0, 20.0)
        .platform(16, 6600.0, 200.0, 300.0, 20.0)
        .platform(17, 7000.0, 350.0, 200.0, 20.0)
        // Final stretch under the flag
        .platform(18, 7400.0, 380.0, 800.0, 20.0)
        .collectible(1, 300.0, 270.0, DoubleJump)
        .collectible(2, 700.0, 230.0, Score)
        .collectible(3, 1150.0, 180.0, Score)
        .collectible(4, 1500.0, 270.0, Score)
        .collectible(5, 1900.0, 230.0, DoubleJump)
        .collectible(6, 3300.0, 280.0, Score)
        .collectible(7, 3700.0, 230.0, DoubleJump)
        .collectible(8, 4400.0, 180.0, Score)
        .collectible(9, 5200.0, 270.0, DoubleJump)
        .enemy(EnemySpawn::new(1, 400.0, 350.0).patrol(100.0, 1.0, Right))
        .enemy(EnemySpawn::new(2, 800.0, 220.0).patrol(100.0, 1.0, Right))
        .enemy(EnemySpawn::new(3, 1400.0, 270.0).patrol(150.0, 1.0, Right))
        .enemy(EnemySpawn::new(4, 2000.0, 350.0).patrol(100.0, 1.0, Left))
        .enemy(EnemySpawn::new(5, 3000.0, 350.0).patrol(200.0, 1.0, Left))
        .enemy(EnemySpawn::new(6, 3800.0, 230.0).patrol(100.0, 1.0, Right))
        .enemy(EnemySpawn::new(7, 4500.0, 180.0).patrol(150.0, 1.0, Left))
        .enemy(EnemySpawn::new(8, 6000.0, 350.0).patrol(100.0, 1.0, Right))
        .goal(7400.0, 300.0, 50.0, 80.0)
        .build()
}

/// Shorter level with faster default-patrol enemies. A quarry floor runs
/// 50 units under the main platforms, so a missed jump costs time, not a life.
pub fn quarry() -> Result<Level, LevelError> {
    Level::builder("Quarry")
        .spawn(50.0, 300.0)
        .ground_level(QUARRY_FLOOR)
        .platform(1, 0.0, 380.0, 800.0, 20.0)
        .platform(2, 300.0, 300.0, 150.0, 20.0)
        .platform(3, 700.0, 250.0, 100.0, 20.0)
        .platform(4, 1200.0, 200.0, 200.0, 20.0)
        .platform(5, 1600.0, 300.0, 150.0, 20.0)
        .platform(6, 2000.0, 250.0, 200.0, 20.0)
        .platform(7, 2500.0, 300.0, 150.0, 20.0)
        .platform(8, 3000.0, 350.0, 800.0, 20.0)
        .collectible(1, 400.0, 250.0, DoubleJump)
        .collectible(2, 1000.0, 200.0, Score)
        .collectible(3, 1800.0, 250.0, Score)
        .collectible(4, 2400.0, 200.0, DoubleJump)
        .enemy(EnemySpawn::new(1, 600.0, 350.0))
        .enemy(EnemySpawn::new(2, 1200.0, 350.0))
        .enemy(EnemySpawn::new(3, 1800.0, 350.0))
        .enemy(EnemySpawn::new(4, 2600.0, 350.0))
        .goal(2700.0, 300.0, 50.0, 80.0)
        .build()
}

/// All built-in levels in play order
pub fn campaign() -> Result<Vec<Level>, LevelError> {
    Ok(vec![meadow()?, quarry()?])
}
