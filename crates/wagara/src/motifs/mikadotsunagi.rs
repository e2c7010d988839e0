//! Mikadotsunagi (interlocking triangles): the triangle outline plus a
//! smaller rotated triangle joining points a third of the way along each
//! edge.

use super::util::{corners, line, next};
use crate::surface::Surface;

/// Where the inner triangle meets the edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MikadotsunagiConfig {
    pub lo: f64,
    pub hi: f64,
}

impl Default for MikadotsunagiConfig {
    fn default() -> Self {
        Self { lo: 1.0 / 3.0, hi: 2.0 / 3.0 }
    }
}

pub fn draw_mikadotsunagi(surface: &mut dyn Surface, radius: f64, config: &MikadotsunagiConfig) {
    let corners = corners(radius);
    let thirds: [_; 3] = std::array::from_fn(|i| corners[i].lerp(corners[next(i)], config.lo));
    let two_thirds: [_; 3] = std::array::from_fn(|i| corners[i].lerp(corners[next(i)], config.hi));

    for i in 0..3 {
        line(surface, corners[i], corners[next(i)]);
        line(surface, thirds[i], two_thirds[next(i)]);
    }
}
