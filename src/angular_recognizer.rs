/*
 * The $1 Unistroke Recognizer (rust version)
 *
 * Reimplemented in rust from the original authors' JavaScript code.
 *
 * Original authors:
 *
 * 	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 *	    Andrew D. Wilson, Ph.D.
 *	    Microsoft Research
 *	    One Microsoft Way
 *	    Redmond, WA 98052
 *	    awilson@microsoft.com
 *
 *	    Yang Li, Ph.D.
 *	    Department of Computer Science and Engineering
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    yangli@cs.washington.edu
 *
 * The academic publication for the $1 recognizer, and what should be
 * used to cite it, is:
 *
 *	Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *	  libraries, toolkits or training: A $1 recognizer for user
 *	  interface prototypes. Proceedings of the ACM Symposium on User
 *	  Interface Software and Technology (UIST '07). Newport, Rhode
 *	  Island (October 7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 * The Protractor enhancement was separately published by Yang Li and is
 * what should be used to cite the fast matcher:
 *
 *	Li, Y. (2010). Protractor: A fast and accurate gesture recognizer.
 *	  Proceedings of the ACM Conference on Human Factors in Computing
 *	  Systems (CHI '10). Atlanta, Georgia (April 10-15, 2010).
 *	  New York: ACM Press, pp. 2169-2172.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2007-2011, Jacob O. Wobbrock, Andrew D. Wilson and
 * Yang Li. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University of Washington nor Microsoft,
 *      nor the names of its contributors may be used to endorse or promote
 *      products derived from this software without specific prior written
 *      permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D.
 * Wilson OR Yang Li BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::geometry;
use crate::point::Point;
use crate::template::{Template, SQUARE_SIZE};

/// Half-width of the rotation search window, in degrees
pub const ANGLE_RANGE: f32 = 45.0;
/// Tolerance at which the golden-section search stops, in degrees
pub const ANGLE_PRECISION: f32 = 2.0;

/// Computes the distance between a query and a stored template as the
/// minimum mean point-to-point distance over rotations of the query in
/// [-ANGLE_RANGE, +ANGLE_RANGE]. This is the classic $1 matcher; lower
/// is more similar.
pub fn distance(query: &Template, template: &Template) -> f32 {
    distance_at_best_angle(
        &query.points,
        &template.points,
        -ANGLE_RANGE.to_radians(),
        ANGLE_RANGE.to_radians(),
        ANGLE_PRECISION.to_radians(),
    )
}

/// Converts a winning distance into a score in [0, 1]. The distance is
/// normalized by the half-diagonal of the canonical square, so 1 is a
/// perfect match and very poor matches clamp to 0.
pub fn score(distance: f32) -> f32 {
    let half_diagonal = 0.5 * (2.0 * SQUARE_SIZE * SQUARE_SIZE).sqrt();
    (1.0 - distance / half_diagonal).max(0.0)
}

/// Golden-section search for the rotation of `points` minimizing the
/// path distance to `template_points`, over the bracket [a, b] narrowed
/// down to `threshold` radians.
fn distance_at_best_angle(
    points: &[Point],
    template_points: &[Point],
    mut a: f32,
    mut b: f32,
    threshold: f32,
) -> f32 {
    let phi: f32 = 0.5 * (-1.0 + 5.0_f32.sqrt());
    let mut x1 = phi * a + (1.0 - phi) * b;
    let mut f1 = distance_at_angle(points, template_points, x1);
    let mut x2 = (1.0 - phi) * a + phi * b;
    let mut f2 = distance_at_angle(points, template_points, x2);

    while (b - a).abs() > threshold {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = phi * a + (1.0 - phi) * b;
            f1 = distance_at_angle(points, template_points, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - phi) * a + phi * b;
            f2 = distance_at_angle(points, template_points, x2);
        }
    }
    f1.min(f2)
}

/// Evaluates the path distance after rotating `points` by `radians`
/// about their own centroid
fn distance_at_angle(points: &[Point], template_points: &[Point], radians: f32) -> f32 {
    let rotated = geometry::rotate_by(points, radians);
    path_distance(&rotated, template_points)
}

/// Mean Euclidean distance between corresponding points; both paths have
/// the sampling resolution of the pipeline, in path order
fn path_distance(a: &[Point], b: &[Point]) -> f32 {
    let mut d = 0.0;
    for (p, q) in a.iter().zip(b.iter()) {
        d += geometry::euclidean_distance(p, q);
    }
    d / a.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_stroke(cx: f32, cy: f32, r: f32, n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let a = i as f32 / n as f32 * std::f32::consts::TAU;
                Point::new(cx + r * a.cos(), cy + r * a.sin())
            })
            .collect()
    }

    fn zigzag_stroke() -> Vec<Point> {
        (0..10)
            .map(|i| Point::new(i as f32 * 20.0, if i % 2 == 0 { 0.0 } else { 60.0 }))
            .collect()
    }

    #[test]
    fn identical_templates_have_near_zero_distance() {
        let t = Template::new("c", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();
        let q = Template::new("", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();
        // the search stops within ANGLE_PRECISION of the optimum, so the
        // distance is small but not zero even for identical shapes
        let d = distance(&q, &t);
        assert!(d < 3.0, "distance {d}");
        assert!(score(d) > 0.98);
    }

    #[test]
    fn dissimilar_shapes_are_farther_than_similar_ones() {
        let circle = Template::new("c", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();
        let zigzag = Template::new("z", &zigzag_stroke()).unwrap();
        let query = Template::new("", &circle_stroke(50.0, 50.0, 40.0, 64)).unwrap();
        assert!(distance(&query, &circle) < distance(&query, &zigzag));
    }

    #[test]
    fn small_rotation_is_searched_away() {
        let base = zigzag_stroke();
        let template = Template::new("z", &base).unwrap();
        // rotate the raw stroke by 20 degrees around its centroid
        let rotated = geometry::rotate_by(&base, 20.0_f32.to_radians());
        let query = Template::new("", &rotated).unwrap();
        let d = distance(&query, &template);
        assert!(score(d) > 0.9, "score {}", score(d));
    }

    #[test]
    fn score_clamps_at_zero() {
        assert_eq!(score(1.0e6), 0.0);
        assert!((score(0.0) - 1.0).abs() < 1e-6);
    }
}
