use super::params::{AvatarParams, OrbFrame};
use super::particles::{ParticleField, Point3};
use super::SceneError;

const NEAR_PLANE: f32 = 0.1;
const MIN_PARTICLE_PX: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Perspective camera on the +Z axis looking at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub distance: f32,
    pub fov_degrees: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 3.5,
            fov_degrees: 50.0,
        }
    }
}

impl Camera {
    fn focal(&self) -> f32 {
        1.0 / (self.fov_degrees.to_radians() / 2.0).tan()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbSprite {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    /// Spin about the vertical axis, radians.
    pub spin: f32,
    pub rim_intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
}

impl OrbSprite {
    /// Outlines of `count` meridians, spun by the orb's current rotation.
    pub fn meridians(&self, count: usize) -> Vec<Ellipse> {
        (0..count)
            .map(|i| {
                let angle = self.spin + i as f32 * std::f32::consts::PI / count as f32;
                Ellipse {
                    cx: self.cx,
                    cy: self.cy,
                    rx: self.radius * angle.cos().abs(),
                    ry: self.radius,
                }
            })
            .collect()
    }

    /// Outlines of `count` parallels between the poles, seen slightly from above.
    pub fn parallels(&self, count: usize) -> Vec<Ellipse> {
        (1..=count)
            .map(|i| {
                let latitude = -std::f32::consts::FRAC_PI_2
                    + i as f32 * std::f32::consts::PI / (count + 1) as f32;
                let rx = self.radius * latitude.cos();
                Ellipse {
                    cx: self.cx,
                    cy: self.cy - self.radius * latitude.sin(),
                    rx,
                    ry: rx * 0.2,
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSprite {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Nearer particles render brighter.
    pub opacity: f32,
}

/// Drawable snapshot of one frame, in viewport pixels. Particles are sorted
/// far to near.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub orb: OrbSprite,
    pub particles: Vec<ParticleSprite>,
}

pub struct Scene<'a> {
    viewport: Viewport,
    camera: Camera,
    params: &'a AvatarParams,
    field: &'a ParticleField,
}

impl<'a> Scene<'a> {
    pub fn new(
        viewport: Viewport,
        camera: Camera,
        params: &'a AvatarParams,
        field: &'a ParticleField,
    ) -> Result<Self, SceneError> {
        let usable = viewport.width.is_finite()
            && viewport.height.is_finite()
            && viewport.width > 0.0
            && viewport.height > 0.0;
        if !usable {
            return Err(SceneError::EmptyViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            viewport,
            camera,
            params,
            field,
        })
    }

    pub fn frame(&self, elapsed: f32) -> SceneFrame {
        let orb_frame = OrbFrame::at(self.params, elapsed);
        let half_h = self.viewport.height / 2.0;
        let focal = self.camera.focal();

        let orb = OrbSprite {
            cx: self.viewport.width / 2.0,
            cy: half_h,
            radius: orb_frame.scale * focal / self.camera.distance * half_h,
            spin: orb_frame.rotation_y,
            rim_intensity: orb_frame.rim_intensity,
        };

        let (rx, ry) = self.params.field_rotation(elapsed);
        let mut projected: Vec<(f32, ParticleSprite)> = self
            .field
            .points()
            .iter()
            .take(self.params.particle_count)
            .filter_map(|point| self.project(point.rotated(rx, ry)))
            .collect();
        projected.sort_by(|a, b| b.0.total_cmp(&a.0));

        SceneFrame {
            orb,
            particles: projected.into_iter().map(|(_, sprite)| sprite).collect(),
        }
    }

    /// Returns (depth, sprite) for points in front of the camera and inside
    /// the frustum.
    fn project(&self, point: Point3) -> Option<(f32, ParticleSprite)> {
        let depth = self.camera.distance - point.z;
        if depth <= NEAR_PLANE {
            return None;
        }
        let focal = self.camera.focal();
        let ndc_x = point.x * focal / self.viewport.aspect() / depth;
        let ndc_y = point.y * focal / depth;
        if ndc_x.abs() > 1.0 || ndc_y.abs() > 1.0 {
            return None;
        }

        let half_h = self.viewport.height / 2.0;
        let size = (self.params.particle_size * focal / depth * half_h).max(MIN_PARTICLE_PX);
        let far = self.field.range();
        let nearness = (1.0 - depth / (self.camera.distance + far)).clamp(0.2, 1.0);

        Some((
            depth,
            ParticleSprite {
                x: (ndc_x + 1.0) / 2.0 * self.viewport.width,
                y: (1.0 - ndc_y) / 2.0 * self.viewport.height,
                size,
                opacity: self.params.particle_opacity * nearness,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;
    use crate::types::ThemeMode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params() -> AvatarParams {
        AvatarParams::derive(ThemeMode::Dark, Mood::Happy, false, 200)
    }

    fn field() -> ParticleField {
        let mut rng = StdRng::seed_from_u64(9);
        ParticleField::generate(200, 20.0, 2.0, &mut rng).unwrap()
    }

    #[test]
    fn test_zero_viewport_is_an_error() {
        let params = params();
        let field = field();
        let err = Scene::new(Viewport::new(0.0, 300.0), Camera::default(), &params, &field)
            .err()
            .unwrap();
        assert_eq!(
            err,
            SceneError::EmptyViewport {
                width: 0.0,
                height: 300.0
            }
        );
    }

    #[test]
    fn test_orb_is_centred() {
        let params = params();
        let field = field();
        let scene = Scene::new(Viewport::new(400.0, 300.0), Camera::default(), &params, &field)
            .unwrap();
        let frame = scene.frame(0.0);
        assert_eq!(frame.orb.cx, 200.0);
        assert_eq!(frame.orb.cy, 150.0);
        assert!(frame.orb.radius > 0.0 && frame.orb.radius < 150.0);
    }

    #[test]
    fn test_particles_land_inside_viewport_far_to_near() {
        let params = params();
        let field = field();
        let viewport = Viewport::new(400.0, 300.0);
        let scene = Scene::new(viewport, Camera::default(), &params, &field).unwrap();
        let frame = scene.frame(2.5);

        assert!(frame.particles.len() <= field.len());
        for sprite in &frame.particles {
            assert!((0.0..=viewport.width).contains(&sprite.x));
            assert!((0.0..=viewport.height).contains(&sprite.y));
            assert!(sprite.size >= MIN_PARTICLE_PX);
            assert!(sprite.opacity > 0.0 && sprite.opacity <= params.particle_opacity);
        }
        let sizes: Vec<f32> = frame.particles.iter().map(|s| s.size).collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1] + 1e-6));
    }

    #[test]
    fn test_wireframe_outlines_stay_on_the_orb() {
        let orb = OrbSprite {
            cx: 50.0,
            cy: 50.0,
            radius: 20.0,
            spin: 0.4,
            rim_intensity: 0.4,
        };
        let meridians = orb.meridians(6);
        assert_eq!(meridians.len(), 6);
        assert!(meridians.iter().all(|e| e.rx <= orb.radius && e.ry == orb.radius));

        let parallels = orb.parallels(5);
        assert_eq!(parallels.len(), 5);
        for ellipse in &parallels {
            assert!(ellipse.rx <= orb.radius + 1e-4);
            assert!((ellipse.cy - orb.cy).abs() < orb.radius);
        }
        // the middle parallel is the equator
        assert!((parallels[2].rx - orb.radius).abs() < 1e-4);
    }

    #[test]
    fn test_particle_count_limits_drawn_particles() {
        let params = AvatarParams::derive(ThemeMode::Dark, Mood::Happy, false, 5);
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::generate(400, 20.0, 2.0, &mut rng).unwrap();
        let scene = Scene::new(Viewport::new(400.0, 300.0), Camera::default(), &params, &field)
            .unwrap();
        assert!(scene.frame(0.0).particles.len() <= 5);

        let none = AvatarParams::derive(ThemeMode::Dark, Mood::Happy, false, 0);
        let scene = Scene::new(Viewport::new(400.0, 300.0), Camera::default(), &none, &field)
            .unwrap();
        assert!(scene.frame(0.0).particles.is_empty());
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let params = params();
        let field = field();
        let scene = Scene::new(Viewport::new(100.0, 100.0), Camera::default(), &params, &field)
            .unwrap();
        assert!(scene.project(Point3::new(0.0, 0.0, 5.0)).is_none());
        assert!(scene.project(Point3::new(0.0, 0.0, -1.0)).is_some());
    }
}
