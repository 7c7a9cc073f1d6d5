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

use crate::point::Point;

/// Axis-aligned bounding box of a point sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Computes the Euclidean distance between two points
pub fn euclidean_distance(a: &Point, b: &Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Computes the path length for an array of points, i.e. the sum of
/// distances between consecutive points
pub fn path_length(points: &[Point]) -> f32 {
    let mut length = 0.0;
    for i in 1..points.len() {
        length += euclidean_distance(&points[i - 1], &points[i]);
    }
    length
}

/// Computes the centroid for a non-empty array of points
pub fn centroid(points: &[Point]) -> Point {
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in points {
        cx += p.x;
        cy += p.y;
    }
    let n = points.len() as f32;
    Point::new(cx / n, cy / n)
}

/// Computes the axis-aligned bounding box for a non-empty array of points
pub fn bounding_box(points: &[Point]) -> Rect {
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for p in points {
        if p.x < min_x { min_x = p.x; }
        if p.y < min_y { min_y = p.y; }
        if p.x > max_x { max_x = p.x; }
        if p.y > max_y { max_y = p.y; }
    }
    Rect {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Rotates every point by `radians` around the centroid of the array
pub fn rotate_by(points: &[Point], radians: f32) -> Vec<Point> {
    let c = centroid(points);
    let (sin, cos) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - c.x;
            let dy = p.y - c.y;
            Point::new(dx * cos - dy * sin + c.x, dx * sin + dy * cos + c.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance_is_hypotenuse() {
        let d = euclidean_distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn path_length_sums_segments() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        assert!((path_length(&points) - 20.0).abs() < 1e-5);
    }

    #[test]
    fn path_length_of_single_point_is_zero() {
        assert_eq!(path_length(&[Point::new(3.0, 7.0)]), 0.0);
    }

    #[test]
    fn centroid_is_arithmetic_mean() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        let c = centroid(&points);
        assert!((c.x - 2.0).abs() < 1e-6);
        assert!((c.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn bounding_box_spans_extremes() {
        let points = [
            Point::new(-1.0, 2.0),
            Point::new(5.0, -3.0),
            Point::new(2.0, 7.0),
        ];
        let b = bounding_box(&points);
        assert_eq!(b.x, -1.0);
        assert_eq!(b.y, -3.0);
        assert!((b.width - 6.0).abs() < 1e-6);
        assert!((b.height - 10.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_by_quarter_turn_about_centroid() {
        let points = [Point::new(-1.0, 0.0), Point::new(1.0, 0.0)];
        let rotated = rotate_by(&points, std::f32::consts::FRAC_PI_2);
        // centroid is the origin, so the segment ends up vertical
        assert!(rotated[0].x.abs() < 1e-6);
        assert!((rotated[0].y - -1.0).abs() < 1e-6);
        assert!(rotated[1].x.abs() < 1e-6);
        assert!((rotated[1].y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_preserves_pairwise_distances() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(5.0, -2.0),
        ];
        let rotated = rotate_by(&points, 0.7);
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                let before = euclidean_distance(&points[i], &points[j]);
                let after = euclidean_distance(&rotated[i], &rotated[j]);
                assert!((before - after).abs() < 1e-4);
            }
        }
    }
}
