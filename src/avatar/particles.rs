use super::SceneError;
use rand::Rng;

pub const DEFAULT_RANGE: f32 = 20.0;
pub const DEFAULT_EXCLUSION_RADIUS: f32 = 2.0;

/// Give up on a configuration once a single particle has needed this many draws.
const MAX_DRAWS_PER_PARTICLE: usize = 10_000;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rotate about X by `rx`, then about Y by `ry`.
    pub fn rotated(self, rx: f32, ry: f32) -> Self {
        let (sin_x, cos_x) = rx.sin_cos();
        let (sin_y, cos_y) = ry.sin_cos();

        let y = self.y * cos_x - self.z * sin_x;
        let z = self.y * sin_x + self.z * cos_x;

        Self {
            x: self.x * cos_y + z * sin_y,
            y,
            z: -self.x * sin_y + z * cos_y,
        }
    }
}

/// Points scattered through a cube of side `range` centred on the orb, keeping
/// clear of a sphere of `exclusion_radius` around it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    points: Vec<Point3>,
    range: f32,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        range: f32,
        exclusion_radius: f32,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        if !range.is_finite() || range <= 0.0 {
            return Err(SceneError::InvalidRange(range));
        }
        let exclusion_radius = exclusion_radius.max(0.0);
        let half = range / 2.0;
        // the cube's corners are the farthest points from the centre
        if half * 3f32.sqrt() <= exclusion_radius {
            return Err(SceneError::UnplaceableParticles {
                range,
                exclusion_radius,
            });
        }

        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let point = sample_outside(half, exclusion_radius, rng).ok_or(
                SceneError::UnplaceableParticles {
                    range,
                    exclusion_radius,
                },
            )?;
            points.push(point);
        }

        Ok(Self { points, range })
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn range(&self) -> f32 {
        self.range
    }
}

fn sample_outside<R: Rng + ?Sized>(half: f32, radius: f32, rng: &mut R) -> Option<Point3> {
    for _ in 0..MAX_DRAWS_PER_PARTICLE {
        let point = Point3::new(
            rng.gen_range(-half..half),
            rng.gen_range(-half..half),
            rng.gen_range(-half..half),
        );
        if point.length() >= radius {
            return Some(point);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_points_avoid_exclusion_sphere() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = ParticleField::generate(1000, DEFAULT_RANGE, DEFAULT_EXCLUSION_RADIUS, &mut rng)
            .unwrap();
        assert_eq!(field.len(), 1000);
        let half = DEFAULT_RANGE / 2.0;
        for point in field.points() {
            assert!(point.length() >= DEFAULT_EXCLUSION_RADIUS);
            assert!(point.x.abs() <= half && point.y.abs() <= half && point.z.abs() <= half);
        }
    }

    #[test]
    fn test_impossible_field_errors_instead_of_spinning() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = ParticleField::generate(10, 2.0, 2.0, &mut rng).unwrap_err();
        assert!(matches!(err, SceneError::UnplaceableParticles { .. }));
    }

    #[test]
    fn test_invalid_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for range in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                ParticleField::generate(1, range, 1.0, &mut rng),
                Err(SceneError::InvalidRange(_))
            ));
        }
    }

    #[test]
    fn test_empty_field_is_fine() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::generate(0, 4.0, 1.0, &mut rng).unwrap();
        assert!(field.is_empty());
    }

    #[test]
    fn test_rotation_preserves_length() {
        let point = Point3::new(1.0, -2.0, 3.0);
        let rotated = point.rotated(0.7, -1.3);
        assert!((point.length() - rotated.length()).abs() < 1e-4);
        assert_eq!(point.rotated(0.0, 0.0), point);
    }
}
