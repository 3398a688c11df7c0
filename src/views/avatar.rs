use crate::avatar::{
    AvatarParams, Camera, DEFAULT_EXCLUSION_RADIUS, DEFAULT_RANGE, FALLBACK_MESSAGE, ParticleField,
    Scene, Viewport,
};
use crate::config::AppConfig;
use crate::timer;
use crate::ui::{use_mood, use_theme};
use dioxus::prelude::*;
use std::time::Duration;

pub const ORB_VIEWPORT: Viewport = Viewport::new(480.0, 360.0);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const MERIDIANS: usize = 8;
const PARALLELS: usize = 7;

/// The animated orb. Scene failures render a fallback message instead of
/// taking down the page.
#[component]
pub fn Avatar(processing: bool, #[props(default = ORB_VIEWPORT)] viewport: Viewport) -> Element {
    rsx! {
        div { class: "avatar",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    tracing::warn!(?errors, "avatar scene failed");
                    rsx! {
                        div { class: "avatar-fallback", "{FALLBACK_MESSAGE}" }
                    }
                },
                OrbCanvas { processing, viewport }
            }
        }
    }
}

/// Seconds since mount, advanced once per frame until the component unmounts.
fn use_frame_clock() -> Signal<f32> {
    let mut elapsed = use_signal(|| 0.0f32);
    use_future(move || async move {
        let step = FRAME_INTERVAL.as_secs_f32();
        loop {
            timer::sleep(FRAME_INTERVAL).await;
            elapsed.with_mut(|t| *t += step);
        }
    });
    elapsed
}

#[component]
fn OrbCanvas(processing: bool, viewport: Viewport) -> Element {
    let theme = use_theme();
    let mood = use_mood();
    let particle_count = use_context::<AppConfig>().particle_count;
    let field = use_signal(move || {
        ParticleField::generate(
            particle_count,
            DEFAULT_RANGE,
            DEFAULT_EXCLUSION_RADIUS,
            &mut rand::thread_rng(),
        )
    });
    let elapsed = use_frame_clock();

    let params = AvatarParams::derive(
        theme.read().mode(),
        mood.read().mood(),
        processing,
        particle_count,
    );
    let field = field.read();
    let field = field.as_ref().map_err(Clone::clone)?;
    let scene = Scene::new(viewport, Camera::default(), &params, field)?;
    let frame = scene.frame(elapsed());

    let orb = frame.orb;
    let glow_radius = orb.radius * 1.02;
    let inner_radius = orb.radius * 0.98;
    let core_opacity = (params.emissive_intensity / 1.5 * 0.45).clamp(0.05, 0.6);
    let rim_opacity = orb.rim_intensity.clamp(0.0, 1.0);
    let outlines = if params.wireframe {
        let mut outlines = orb.meridians(MERIDIANS);
        outlines.extend(orb.parallels(PARALLELS));
        outlines
    } else {
        Vec::new()
    };
    let view_box = format!("0 0 {} {}", viewport.width, viewport.height);

    rsx! {
        svg {
            class: "orb-canvas",
            "viewBox": "{view_box}",
            "preserveAspectRatio": "xMidYMid slice",
            role: "img",
            "aria-label": "Neura avatar",
            rect { width: "100%", height: "100%", fill: params.background }
            for (i, particle) in frame.particles.iter().enumerate() {
                circle {
                    key: "{i}",
                    cx: "{particle.x}",
                    cy: "{particle.y}",
                    r: "{particle.size}",
                    fill: params.particle_color,
                    "fill-opacity": "{particle.opacity}",
                }
            }
            circle {
                cx: "{orb.cx}",
                cy: "{orb.cy}",
                r: "{glow_radius}",
                fill: params.base_color,
                "fill-opacity": "0.08",
            }
            circle {
                cx: "{orb.cx}",
                cy: "{orb.cy}",
                r: "{orb.radius}",
                fill: "#05050d",
                "fill-opacity": "0.85",
                stroke: params.base_color,
                "stroke-opacity": "{rim_opacity}",
                "stroke-width": "3",
            }
            circle {
                cx: "{orb.cx}",
                cy: "{orb.cy}",
                r: "{inner_radius}",
                fill: params.base_color,
                "fill-opacity": "{core_opacity}",
            }
            for (i, outline) in outlines.iter().enumerate() {
                ellipse {
                    key: "wire-{i}",
                    cx: "{outline.cx}",
                    cy: "{outline.cy}",
                    rx: "{outline.rx}",
                    ry: "{outline.ry}",
                    fill: "none",
                    stroke: params.base_color,
                    "stroke-opacity": "0.5",
                    "stroke-width": "1",
                }
            }
        }
    }
}
