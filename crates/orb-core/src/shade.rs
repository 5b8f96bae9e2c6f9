use glam::{Vec2, Vec3, Vec4};

use crate::lights::lights_at;

// ---------------------------------------------------------------------------
// Scene constants
// ---------------------------------------------------------------------------

/// Sphere center, in view space. The camera looks down +z from z = 0.
pub const SPHERE_CENTER: Vec3 = Vec3::new(0.0, 0.0, 3.0);
pub const SPHERE_RADIUS: f32 = 1.0;

/// Fixed view direction: orthographic rays, one per pixel, all parallel.
const VIEW_DIR: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Color for pixels whose ray misses the sphere. Matches the clear color the
/// driver uses, so the silhouette composites seamlessly.
pub const BACKGROUND: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

// ---------------------------------------------------------------------------
// The per-pixel procedure
// ---------------------------------------------------------------------------

/// Map a pixel position (origin bottom-left, y-up) to the centered,
/// aspect-correct view plane: height spans [-1, 1], width spans ±aspect.
pub fn normalized_coord(frag_coord: Vec2, resolution: Vec2) -> Vec2 {
    2.0 * (frag_coord - 0.5 * resolution) / resolution.y
}

/// Distance λ along the ray `P + λ·view` to the sphere, using only the XY
/// offset from the sphere center (valid because the rays are axis-aligned).
/// `None` when the pixel lies outside the sphere's silhouette.
pub fn intersect(uv: Vec2) -> Option<f32> {
    let offset = uv - SPHERE_CENTER.truncate();
    let disc = SPHERE_RADIUS * SPHERE_RADIUS - offset.length_squared();
    if disc < 0.0 {
        None
    } else {
        Some(disc.sqrt() + SPHERE_CENTER.z)
    }
}

/// Logistic fade-in: 0 at launch, exactly 0.5 at t = 1 s, ~1 from t ≈ 2 s.
pub fn fade_in(time: f32) -> f32 {
    1.0 / (1.0 + (-(4.0 * time - 4.0)).exp())
}

/// Shade one pixel. Pure: identical inputs always produce identical output.
///
/// `frag_coord` is the pixel position with a bottom-left origin, `resolution`
/// the surface size in pixels, `time` seconds since the session started.
/// Output is RGBA; the alpha channel mirrors the red channel.
pub fn shade(frag_coord: Vec2, resolution: Vec2, time: f32) -> Vec4 {
    let uv = normalized_coord(frag_coord, resolution);

    let Some(lambda) = intersect(uv) else {
        return BACKGROUND;
    };

    let p = uv.extend(0.0);
    let q = p + lambda * VIEW_DIR;
    let n = (q - SPHERE_CENTER).normalize();

    // Unclamped Lambertian sum over the rig: no ambient, no specular,
    // overlapping lights may push channels past 1.0.
    let mut col = Vec3::ZERO;
    for light in lights_at(time) {
        col += light.color * n.dot(light.direction).max(0.0);
    }

    Vec4::new(col.x, col.y, col.z, col.x) * fade_in(time)
}
