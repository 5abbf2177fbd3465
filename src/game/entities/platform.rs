// Static platforms

use crate::core::Aabb;

/// Level-scoped platform identifier
pub type PlatformId = u32;

/// A solid rectangle the character can stand on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub id: PlatformId,
    pub bounds: Aabb,
}

impl Platform {
    pub fn new(id: PlatformId, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            bounds: Aabb::new(x, y, width, height),
        }
    }

    /// Y of the walkable top edge
    pub fn surface(&self) -> f32 {
        self.bounds.top()
    }
}
