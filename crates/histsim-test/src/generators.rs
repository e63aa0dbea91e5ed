//! Deterministic test images
//!
//! All generators are pure functions of their arguments so that
//! regression values stay stable across runs.

use histsim_core::{Image, Result};

/// Uniform grayscale image with every sample set to `val`
pub fn uniform_gray(identifier: &str, w: u32, h: u32, val: u8) -> Result<Image> {
    Image::gray(identifier, w, h, vec![val; (w * h) as usize])
}

/// Grayscale gradient, 0..255 across the width
pub fn gradient_gray(identifier: &str, w: u32, h: u32) -> Result<Image> {
    let mut data = Vec::with_capacity((w * h) as usize);
    for _ in 0..h {
        for x in 0..w {
            data.push(((x as f32 / w as f32) * 255.0) as u8);
        }
    }
    Image::gray(identifier, w, h, data)
}

/// Uniform color image with every pixel set to `(r, g, b)`
pub fn uniform_rgb(identifier: &str, w: u32, h: u32, r: u8, g: u8, b: u8) -> Result<Image> {
    let data = [r, g, b].repeat((w * h) as usize);
    Image::rgb(identifier, w, h, data)
}

/// Pseudo-random grayscale noise from a linear congruential sequence
pub fn noise_gray(identifier: &str, w: u32, h: u32, seed: u32) -> Result<Image> {
    Image::gray(identifier, w, h, lcg_bytes(seed, (w * h) as usize))
}

/// Pseudo-random color noise from a linear congruential sequence
pub fn noise_rgb(identifier: &str, w: u32, h: u32, seed: u32) -> Result<Image> {
    Image::rgb(identifier, w, h, lcg_bytes(seed, (w * h * 3) as usize))
}

fn lcg_bytes(seed: u32, n: usize) -> Vec<u8> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use histsim_core::Channel;

    #[test]
    fn test_noise_is_deterministic() {
        let a = noise_rgb("n_1", 8, 8, 7).unwrap();
        let b = noise_rgb("n_2", 8, 8, 7).unwrap();
        assert_eq!(a.buffer().as_slice(), b.buffer().as_slice());

        let c = noise_rgb("n_3", 8, 8, 8).unwrap();
        assert_ne!(a.buffer().as_slice(), c.buffer().as_slice());
    }

    #[test]
    fn test_uniform_rgb_samples() {
        let img = uniform_rgb("u_1", 3, 2, 1, 2, 3).unwrap();
        assert_eq!(img.buffer().sample(2, 1, Channel::Blue), Some(3));
        assert_eq!(img.buffer().len(), 18);
    }

    #[test]
    fn test_gradient_range() {
        let img = gradient_gray("g_1", 256, 1).unwrap();
        assert_eq!(img.buffer().sample(0, 0, Channel::Gray), Some(0));
        assert_eq!(img.buffer().sample(255, 0, Channel::Gray), Some(254));
    }
}
