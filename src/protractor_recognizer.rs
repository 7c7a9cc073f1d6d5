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

use crate::template::Template;

/// Computes the Protractor distance between a query and a stored
/// template from their precomputed unit vectors. The optimal rotation is
/// solved in closed form instead of searched, so a comparison is O(N)
/// with no iteration; the price is reduced accuracy for large rotations.
/// Lower is more similar.
pub fn distance(query: &Template, template: &Template) -> f32 {
    optimal_cosine_distance(&template.vector, &query.vector)
}

/// Converts a Protractor distance (an angle between unit vectors) into a
/// score in [0, 1], clamped at 0.
pub fn score(distance: f32) -> f32 {
    (1.0 - distance).max(0.0)
}

/// Closed-form minimum angular distance between two unit vectors over
/// all rotations of one of them
fn optimal_cosine_distance(v1: &[f32], v2: &[f32]) -> f32 {
    let mut a = 0.0;
    let mut b = 0.0;
    let mut i = 0;
    while i < v1.len() {
        a += v1[i] * v2[i] + v1[i + 1] * v2[i + 1];
        b += v1[i] * v2[i + 1] - v1[i + 1] * v2[i];
        i += 2;
    }
    // a degenerate all-zero vector would divide 0 by 0 here
    let angle = if a != 0.0 {
        (b / a).atan()
    } else {
        std::f32::consts::FRAC_PI_2
    };
    // float error can push the cosine a hair outside [-1, 1]
    (a * angle.cos() + b * angle.sin()).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

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
    fn identical_vectors_have_near_zero_distance() {
        let t = Template::new("c", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();
        let q = Template::new("", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();
        let d = distance(&q, &t);
        // acos is steep near 1, so even tiny float error shows up here
        assert!(d < 1e-2, "distance {d}");
        assert!(score(d) > 0.99);
    }

    #[test]
    fn scale_and_translation_do_not_change_the_distance() {
        let t = Template::new("c", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();
        let q = Template::new("", &circle_stroke(500.0, 500.0, 40.0, 64)).unwrap();
        assert!(distance(&q, &t) < 5e-2);
    }

    #[test]
    fn dissimilar_shapes_are_farther_than_similar_ones() {
        let circle = Template::new("c", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();
        let zigzag = Template::new("z", &zigzag_stroke()).unwrap();
        let query = Template::new("", &circle_stroke(30.0, -20.0, 70.0, 64)).unwrap();
        assert!(distance(&query, &circle) < distance(&query, &zigzag));
    }

    #[test]
    fn distance_is_never_negative() {
        let a = Template::new("a", &zigzag_stroke()).unwrap();
        let b = Template::new("b", &circle_stroke(0.0, 0.0, 50.0, 64)).unwrap();
        assert!(distance(&a, &b) >= 0.0);
        assert!(score(distance(&a, &b)) >= 0.0);
    }
}
