use crate::core::Aabb;

/// How a moving body touches an enemy box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    /// Descending onto the enemy's top band; the enemy dies
    Stomp,
    /// Any other overlap; the body dies
    Touch,
}

/// Whether a body lands on `surface` this tick.
///
/// The body must be falling or at rest vertically, overlap the surface
/// horizontally, and have its bottom edge inside the tolerance band under the
/// surface's top edge.
pub fn lands_on(body: &Aabb, velocity_y: f32, surface: &Aabb, tolerance: f32) -> bool {
    velocity_y >= 0.0
        && body.overlaps_horizontally(surface)
        && body.bottom_within(surface.top(), tolerance)
}

/// Classify contact between a body and an enemy box.
///
/// A stomp needs strictly downward motion and wins over a touch whenever both
/// would apply.
pub fn classify_enemy_contact(
    body: &Aabb,
    velocity_y: f32,
    enemy: &Aabb,
    stomp_tolerance: f32,
) -> Option<EnemyContact> {
    let stomp = velocity_y > 0.0
        && body.overlaps_horizontally(enemy)
        && body.bottom_within(enemy.top(), stomp_tolerance);

    if stomp {
        Some(EnemyContact::Stomp)
    } else if body.overlaps(enemy) {
        Some(EnemyContact::Touch)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATFORM: Aabb = Aabb::new(0.0, 380.0, 800.0, 20.0);
    const ENEMY: Aabb = Aabb::new(400.0, 350.0, 30.0, 30.0);

    fn body(x: f32, y: f32) -> Aabb {
        Aabb::new(x, y, 30.0, 50.0)
    }

    #[test]
    fn test_lands_inside_band() {
        assert!(lands_on(&body(50.0, 330.0), 0.0, &PLATFORM, 10.0));
        assert!(lands_on(&body(50.0, 335.0), 6.0, &PLATFORM, 10.0));
        assert!(lands_on(&body(50.0, 340.0), 10.0, &PLATFORM, 10.0));
    }

    #[test]
    fn test_no_landing_above_band() {
        assert!(!lands_on(&body(50.0, 301.0), 1.0, &PLATFORM, 10.0));
        assert!(!lands_on(&body(50.0, 329.0), 1.0, &PLATFORM, 10.0));
    }

    #[test]
    fn test_no_landing_below_band() {
        assert!(!lands_on(&body(50.0, 341.0), 10.0, &PLATFORM, 10.0));
    }

    #[test]
    fn test_no_landing_while_rising() {
        assert!(!lands_on(&body(50.0, 335.0), -1.0, &PLATFORM, 10.0));
    }

    #[test]
    fn test_no_landing_past_platform_edge() {
        // Right edge of the body exactly on the platform's left edge
        let platform = Aabb::new(200.0, 300.0, 150.0, 20.0);
        assert!(!lands_on(&body(170.0, 255.0), 1.0, &platform, 10.0));
        assert!(lands_on(&body(171.0, 255.0), 1.0, &platform, 10.0));
        assert!(!lands_on(&body(350.0, 255.0), 1.0, &platform, 10.0));
    }

    #[test]
    fn test_stomp_while_falling_onto_top() {
        // Bottom edge at 353, three units into the enemy
        let contact = classify_enemy_contact(&body(405.0, 303.0), 5.0, &ENEMY, 5.0);
        assert_eq!(contact, Some(EnemyContact::Stomp));
    }

    #[test]
    fn test_side_touch_when_not_falling() {
        // Standing on the ground next to the enemy, overlapping its side
        let contact = classify_enemy_contact(&body(380.0, 330.0), 0.0, &ENEMY, 5.0);
        assert_eq!(contact, Some(EnemyContact::Touch));
    }

    #[test]
    fn test_falling_too_deep_is_a_touch() {
        let contact = classify_enemy_contact(&body(405.0, 320.0), 5.0, &ENEMY, 5.0);
        assert_eq!(contact, Some(EnemyContact::Touch));
    }

    #[test]
    fn test_rising_into_enemy_is_a_touch() {
        let contact = classify_enemy_contact(&body(405.0, 302.0), -3.0, &ENEMY, 5.0);
        assert_eq!(contact, Some(EnemyContact::Touch));
    }

    #[test]
    fn test_no_contact_when_apart() {
        assert_eq!(classify_enemy_contact(&body(0.0, 330.0), 0.0, &ENEMY, 5.0), None);
        // Exactly touching the top edge while standing still is not a contact
        assert_eq!(classify_enemy_contact(&body(405.0, 300.0), 0.0, &ENEMY, 5.0), None);
    }
}
