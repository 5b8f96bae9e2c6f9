//! The orb shader and its build-time validation.
//!
//! wgpu panics (or raises an uncaptured error) on a bad shader module, so the
//! WGSL is run through naga's front-end first; a failure comes back as a
//! `ShaderError` carrying the full compiler diagnostic, and initialization
//! halts without creating any GPU resources.

use thiserror::Error;

/// Vertex passthrough plus the per-pixel sphere shading. The fragment stage
/// is the WGSL twin of `orb_core::shade::shade` and must stay in lockstep
/// with it (the tests in `orb-core` are the reference for the math).
pub const SHADER_WGSL: &str = r#"
struct Uniforms {
    resolution: vec2<f32>,
    time: f32,
    _pad: f32,
};

@group(0) @binding(0) var<uniform> u: Uniforms;

@vertex
fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 0.0, 1.0);
}

const SPHERE_CENTER: vec3<f32> = vec3<f32>(0.0, 0.0, 3.0);
const SPHERE_RADIUS: f32 = 1.0;
// Matches the render pass clear color.
const BACKGROUND: vec4<f32> = vec4<f32>(0.0, 1.0, 0.0, 1.0);

@fragment
fn fs_main(@builtin(position) pos: vec4<f32>) -> @location(0) vec4<f32> {
    // The framebuffer origin is top-left y-down; flip to bottom-left y-up
    // before the uv mapping so the math matches orb-core.
    let frag = vec2<f32>(pos.x, u.resolution.y - pos.y);
    let uv = 2.0 * (frag - 0.5 * u.resolution) / u.resolution.y;

    // Ray P + lambda*view against the sphere, XY offset only (rays are all
    // parallel to the view axis). Negative discriminant = silhouette miss.
    let offset = uv - SPHERE_CENTER.xy;
    let disc = SPHERE_RADIUS * SPHERE_RADIUS - dot(offset, offset);
    if disc < 0.0 {
        return BACKGROUND;
    }
    let lambda = sqrt(disc) + SPHERE_CENTER.z;

    let p = vec3<f32>(uv, 0.0);
    let q = p + lambda * vec3<f32>(0.0, 0.0, 1.0);
    let n = normalize(q - SPHERE_CENTER);

    var dirs = array<vec3<f32>, 3>(
        normalize(vec3<f32>(cos(u.time), sin(u.time), 1.0)),
        normalize(vec3<f32>(5.0 * sin(0.2 * u.time), 3.0, -0.3)),
        normalize(vec3<f32>(0.0, sin(0.217 * u.time), -cos(0.217 * u.time))),
    );
    var colors = array<vec3<f32>, 3>(
        vec3<f32>(1.0, 0.0, 0.0),
        vec3<f32>(0.0, 1.0, 0.0),
        vec3<f32>(0.0, 0.0, 1.0),
    );

    // Unclamped Lambertian accumulation.
    var col = vec3<f32>(0.0);
    for (var i = 0; i < 3; i++) {
        col += colors[i] * max(0.0, dot(n, dirs[i]));
    }

    let fade = 1.0 / (1.0 + exp(-(4.0 * u.time - 4.0)));
    return vec4<f32>(col, col.x) * fade;
}
"#;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader compilation failed:\n{0}")]
    Parse(String),
    #[error("shader validation failed:\n{0}")]
    Validate(String),
}

/// Parse and validate a WGSL module, preserving the compiler's diagnostic
/// text on failure.
pub fn validate(source: &str) -> Result<naga::Module, ShaderError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| ShaderError::Parse(e.emit_to_string(source)))?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(&module)
    .map_err(|e| ShaderError::Validate(e.emit_to_string(source)))?;

    Ok(module)
}
