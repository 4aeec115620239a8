//! Viewport offset derived from the player position

/// Offset subtracted from every world-space draw call
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub x: f32,
    /// Always 0, there is no vertical scroll
    pub y: f32,
}

impl Camera {
    /// Center on `target_x`, clamped so the viewport never leaves the world.
    ///
    /// A world narrower than the viewport pins the camera at 0.
    pub fn follow(&mut self, target_x: f32, world_w: f32, view_w: f32) {
        self.x = (target_x - view_w / 2.0).min(world_w - view_w).max(0.0);
        self.y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_follow_centers_player() {
        let mut cam = Camera::default();
        cam.follow(2000.0, 4800.0, 960.0);
        assert_eq!(cam.x, 1520.0);
        assert_eq!(cam.y, 0.0);
    }

    #[test]
    fn test_follow_clamps_both_ends() {
        let mut cam = Camera::default();
        cam.follow(100.0, 4800.0, 960.0);
        assert_eq!(cam.x, 0.0);
        cam.follow(4790.0, 4800.0, 960.0);
        assert_eq!(cam.x, 4800.0 - 960.0);
    }

    #[test]
    fn test_narrow_world_pins_to_zero() {
        let mut cam = Camera { x: 50.0, y: 3.0 };
        cam.follow(300.0, 480.0, 960.0);
        assert_eq!(cam, Camera::default());
    }

    proptest! {
        #[test]
        fn camera_stays_inside_world(target in 0.0f32..4800.0) {
            let mut cam = Camera::default();
            cam.follow(target, 4800.0, 960.0);
            prop_assert!(cam.x >= 0.0);
            prop_assert!(cam.x <= 4800.0 - 960.0);
            prop_assert_eq!(cam.y, 0.0);
        }
    }
}
