use orb_core::FrameState;

/// All per-frame data uploaded to the GPU as a single uniform buffer.
/// Must match the `Uniforms` struct in the WGSL shader.
/// `repr(C)` + `bytemuck` ensures safe casting to `&[u8]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: f32, // keep 16-byte size/alignment
}

impl From<&FrameState> for Uniforms {
    fn from(state: &FrameState) -> Self {
        Self {
            resolution: state.resolution.to_array(),
            time: state.time,
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn uniforms_are_sixteen_bytes() {
        // The WGSL uniform block is vec2<f32> + f32 + f32.
        assert_eq!(std::mem::size_of::<Uniforms>(), 16);
    }

    #[test]
    fn uniforms_mirror_frame_state() {
        let mut state = FrameState::new(1280, 720);
        state.tick(3.5, 1280, 720);
        let u = Uniforms::from(&state);
        assert_eq!(u.resolution, [1280.0, 720.0]);
        assert_eq!(u.time, 3.5);
        assert_eq!(Vec2::from(u.resolution), state.resolution);
    }
}
