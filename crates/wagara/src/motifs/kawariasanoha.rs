//! Kawariasanoha (variant hemp leaf): yaeasa's kites, joined to each other
//! by an inner triangle instead of reaching for the far corner.

use super::util::{corners, intersections, line, next};
use super::yaeasa::InnerRatioConfig;
use crate::surface::Surface;

pub fn draw_kawariasanoha(surface: &mut dyn Surface, radius: f64, config: &InnerRatioConfig) {
    let points = corners(radius);
    let meets = intersections(&points, config.inner_ratio);

    for i in 0..3 {
        line(surface, points[i], points[next(i)]);
        line(surface, points[i], meets[i]);
        line(surface, points[next(i)], meets[i]);
        line(surface, meets[i], meets[next(i)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;

    #[test]
    fn draws_twelve_lines() {
        let mut canvas = Canvas::new();
        draw_kawariasanoha(&mut canvas, 10.0, &InnerRatioConfig::default());
        assert_eq!(canvas.shapes().len(), 12);
    }
}
