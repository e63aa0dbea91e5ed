//! Distance heuristic regression test
//!
//! Symmetry and identity of both heuristics over generated images.

use histsim_core::{Channel, DistanceHeuristic, Image, euclidean_distance, square_chi};
use histsim_test::{RegParams, generators};

fn corpus() -> Vec<Image> {
    vec![
        generators::noise_gray("noise_1", 16, 16, 1).unwrap(),
        generators::noise_gray("noise_2", 16, 16, 2).unwrap(),
        generators::gradient_gray("grad_1", 32, 4).unwrap(),
        generators::uniform_gray("flat_1", 8, 8, 128).unwrap(),
    ]
}

// ========================================================================
// Test: distance(A, B) == distance(B, A)
// ========================================================================

#[test]
fn heuristic_reg_symmetry() {
    let mut rp = RegParams::new("heuristic_symmetry");

    let images = corpus();
    for a in &images {
        for b in &images {
            for h in DistanceHeuristic::ALL {
                let ab = a.distance_to(b.pdf(), h).unwrap();
                let ba = b.distance_to(a.pdf(), h).unwrap();
                rp.compare_values(
                    *ab.get(Channel::Gray).unwrap(),
                    *ba.get(Channel::Gray).unwrap(),
                    1e-12,
                );
            }
        }
    }

    let c1 = generators::noise_rgb("c_1", 9, 7, 3).unwrap();
    let c2 = generators::noise_rgb("c_2", 9, 7, 4).unwrap();
    for h in DistanceHeuristic::ALL {
        let ab = h.compute(c1.pdf(), c2.pdf()).unwrap();
        let ba = h.compute(c2.pdf(), c1.pdf()).unwrap();
        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            rp.compare_values(
                *ab.get(channel).unwrap(),
                *ba.get(channel).unwrap(),
                1e-12,
            );
        }
    }

    assert!(rp.cleanup(), "heuristic_reg symmetry tests failed");
}

// ========================================================================
// Test: distance(A, A) == 0
// ========================================================================

#[test]
fn heuristic_reg_identity() {
    let mut rp = RegParams::new("heuristic_identity");

    let color = generators::noise_rgb("c_1", 12, 12, 9).unwrap();
    for img in corpus().iter().chain(std::iter::once(&color)) {
        for d in [
            euclidean_distance(img.pdf(), img.pdf()).unwrap(),
            square_chi(img.pdf(), img.pdf()).unwrap(),
        ] {
            for (_, value) in d.iter() {
                rp.compare_values(0.0, *value, 1e-12);
            }
        }
    }

    assert!(rp.cleanup(), "heuristic_reg identity tests failed");
}

// ========================================================================
// Test: distinct distributions are strictly positive
// ========================================================================

#[test]
fn heuristic_reg_positive() {
    let mut rp = RegParams::new("heuristic_positive");

    let a = generators::noise_gray("noise_1", 16, 16, 1).unwrap();
    let b = generators::uniform_gray("flat_1", 16, 16, 128).unwrap();
    for h in DistanceHeuristic::ALL {
        let d = *a.distance_to(b.pdf(), h).unwrap().get(Channel::Gray).unwrap();
        rp.compare_values(1.0, if d > 0.0 { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "heuristic_reg positivity tests failed");
}
