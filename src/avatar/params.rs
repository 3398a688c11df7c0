use crate::mood::Mood;
use crate::theme::theme_definition;
use crate::types::ThemeMode;

/// Sinusoidal scale oscillation: `1 + sin(t * frequency) * amplitude`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub amplitude: f32,
    pub frequency: f32,
}

const PROCESSING_PULSE: Pulse = Pulse {
    amplitude: 0.05,
    frequency: 5.0,
};

const BREATHING_PULSE: Pulse = Pulse {
    amplitude: 0.02,
    frequency: 0.5,
};

const ORB_SPIN_X: f32 = 0.1;
const ORB_SPIN_Y: f32 = 0.15;
const FIELD_SPIN: f32 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct AvatarParams {
    pub base_color: &'static str,
    pub emissive_intensity: f32,
    pub wireframe: bool,
    pub rim_intensity: f32,
    pub pulse: Pulse,
    pub processing: bool,
    pub background: &'static str,
    pub particle_color: &'static str,
    pub particle_opacity: f32,
    pub particle_count: usize,
    pub particle_size: f32,
}

impl AvatarParams {
    pub fn derive(theme: ThemeMode, mood: Mood, processing: bool, particle_count: usize) -> Self {
        let emissive_intensity = if processing {
            1.5
        } else {
            match mood {
                Mood::Excited => 1.2,
                Mood::Angry => 1.0,
                Mood::Happy => 0.8,
                Mood::Neutral => 0.6,
                Mood::Sad => 0.4,
            }
        };

        Self {
            base_color: mood.color(),
            emissive_intensity,
            wireframe: matches!(mood, Mood::Sad | Mood::Neutral),
            rim_intensity: if processing { 0.8 } else { 0.4 },
            pulse: if processing {
                PROCESSING_PULSE
            } else {
                BREATHING_PULSE
            },
            processing,
            background: match theme {
                ThemeMode::Dark => "#0a0a0a",
                ThemeMode::Light => "#1a1a1a",
            },
            particle_color: theme_definition(theme).particle_color,
            particle_opacity: if processing { 0.8 } else { 0.6 },
            particle_count,
            particle_size: 0.02,
        }
    }

    /// Field rotation about (x, y) after `elapsed` seconds.
    pub fn field_rotation(&self, elapsed: f32) -> (f32, f32) {
        (elapsed * FIELD_SPIN, elapsed * FIELD_SPIN * 0.6)
    }
}

/// Orb pose and glow for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbFrame {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
    pub rim_intensity: f32,
}

impl OrbFrame {
    pub fn at(params: &AvatarParams, elapsed: f32) -> Self {
        let scale = 1.0 + (elapsed * params.pulse.frequency).sin() * params.pulse.amplitude;
        let rim_intensity = if params.processing {
            params.rim_intensity + (elapsed * 3.0).sin() * 0.2
        } else {
            params.rim_intensity
        };
        Self {
            rotation_x: elapsed * ORB_SPIN_X,
            rotation_y: elapsed * ORB_SPIN_Y,
            scale,
            rim_intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emissive_table() {
        let expected = [
            (Mood::Excited, 1.2),
            (Mood::Angry, 1.0),
            (Mood::Happy, 0.8),
            (Mood::Neutral, 0.6),
            (Mood::Sad, 0.4),
        ];
        for (mood, intensity) in expected {
            let params = AvatarParams::derive(ThemeMode::Dark, mood, false, 10);
            assert_eq!(params.emissive_intensity, intensity, "{mood}");
            assert_eq!(params.base_color, mood.color());
        }
    }

    #[test]
    fn test_processing_overrides_mood() {
        for mood in Mood::ALL {
            let params = AvatarParams::derive(ThemeMode::Light, mood, true, 10);
            assert_eq!(params.emissive_intensity, 1.5);
            assert_eq!(params.pulse, PROCESSING_PULSE);
            assert_eq!(params.rim_intensity, 0.8);
        }
    }

    #[test]
    fn test_wireframe_only_for_subdued_moods() {
        let wired: Vec<_> = Mood::ALL
            .into_iter()
            .filter(|mood| AvatarParams::derive(ThemeMode::Dark, *mood, false, 0).wireframe)
            .collect();
        assert_eq!(wired, vec![Mood::Neutral, Mood::Sad]);
    }

    #[test]
    fn test_particle_colour_follows_theme() {
        let dark = AvatarParams::derive(ThemeMode::Dark, Mood::Happy, false, 0);
        let light = AvatarParams::derive(ThemeMode::Light, Mood::Happy, false, 0);
        assert_eq!(dark.particle_color, "#ffffff");
        assert_eq!(light.particle_color, "#000000");
    }

    #[test]
    fn test_scale_stays_within_pulse_amplitude() {
        for processing in [false, true] {
            let params = AvatarParams::derive(ThemeMode::Dark, Mood::Neutral, processing, 0);
            let amp = params.pulse.amplitude;
            for step in 0..600 {
                let frame = OrbFrame::at(&params, step as f32 / 60.0);
                assert!(frame.scale >= 1.0 - amp - f32::EPSILON);
                assert!(frame.scale <= 1.0 + amp + f32::EPSILON);
            }
        }
    }

    #[test]
    fn test_idle_rim_is_steady() {
        let params = AvatarParams::derive(ThemeMode::Dark, Mood::Happy, false, 0);
        assert_eq!(OrbFrame::at(&params, 0.3).rim_intensity, 0.4);
        assert_eq!(OrbFrame::at(&params, 9.1).rim_intensity, 0.4);
    }

    #[test]
    fn test_rotation_advances_with_time() {
        let params = AvatarParams::derive(ThemeMode::Dark, Mood::Happy, false, 0);
        let frame = OrbFrame::at(&params, 10.0);
        assert!((frame.rotation_x - 1.0).abs() < 1e-5);
        assert!((frame.rotation_y - 1.5).abs() < 1e-5);
    }
}
