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

use crate::{geometry, point::Point};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

/// Number of points on the gesture path after resampling
pub const SAMPLING_RESOLUTION: usize = 64;
/// Side of the square every gesture is scaled to
pub const SQUARE_SIZE: f32 = 250.0;

/// Error raised when a raw stroke cannot be turned into a template.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A stroke needs at least two points to define a path.
    #[error("a stroke must contain at least 2 points")]
    TooFewPoints,
}

/// Implements a gesture as a canonical unistroke template.
/// Templates are normalized with respect to sampling resolution, start
/// orientation, scale and position, so any two of them are directly
/// comparable point by point. A unit vector of the flattened coordinates
/// is derived for the Protractor matcher.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Template {
    /// Gesture class; empty for a transient query
    pub name: String,
    /// Gesture points (normalized)
    pub points: Vec<Point>,
    /// Flattened unit vector of the points, recomputed on import
    #[cfg_attr(feature = "serde", serde(skip))]
    pub vector: Vec<f32>,
}

impl Template {
    /// Constructs a new template by running the normalization pipeline
    /// on a raw stroke: resample, rotate so the indicative angle is zero,
    /// scale to a fixed square, translate the centroid to the origin and
    /// derive the unit vector.
    pub fn new(name: &str, points: &[Point]) -> Result<Self, TemplateError> {
        if points.len() < 2 {
            return Err(TemplateError::TooFewPoints);
        }
        let pts = Self::resample(points, SAMPLING_RESOLUTION);
        let radians = Self::indicative_angle(&pts);
        let pts = geometry::rotate_by(&pts, -radians);
        let pts = Self::scale_to_square(&pts, SQUARE_SIZE);
        let pts = Self::translate_to_origin(&pts);
        let vector = Self::vectorize(&pts);
        Ok(Self {
            name: name.into(),
            points: pts,
            vector,
        })
    }

    /// Resamples the array of points into n points equally spaced along
    /// the path. Interpolated points are inserted back into the working
    /// sequence so they seed the next interval; the caller's stroke is
    /// left untouched.
    fn resample(points: &[Point], n: usize) -> Vec<Point> {
        let interval = geometry::path_length(points) / (n as f32 - 1.0);
        let mut work = points.to_vec();
        let mut new_points = Vec::with_capacity(n);
        new_points.push(work[0]);

        let mut d = 0.0;
        let mut i = 1;
        while i < work.len() && new_points.len() < n {
            let dist = geometry::euclidean_distance(&work[i - 1], &work[i]);
            // zero-length segments contribute nothing to the accumulator
            if dist > 0.0 && (d + dist) >= interval {
                let t = (interval - d) / dist;
                let q = Point::new(
                    work[i - 1].x + t * (work[i].x - work[i - 1].x),
                    work[i - 1].y + t * (work[i].y - work[i - 1].y),
                );
                new_points.push(q);
                work.insert(i, q);
                d = 0.0;
            } else {
                d += dist;
            }
            i += 1;
        }
        // sometimes we fall a rounding-error short of adding the last point,
        // so add it if so; a zero-length path never crosses an interval and
        // is padded with its endpoint the same way
        while new_points.len() < n {
            new_points.push(points[points.len() - 1]);
        }
        new_points
    }

    /// Computes the angle from the first point to the centroid
    fn indicative_angle(points: &[Point]) -> f32 {
        let c = geometry::centroid(points);
        (c.y - points[0].y).atan2(c.x - points[0].x)
    }

    /// Performs scale normalization so the bounding box becomes a
    /// `size` x `size` square; x and y scale independently. An axis with
    /// zero extent is left unscaled so a perfectly straight stroke cannot
    /// introduce non-finite coordinates.
    fn scale_to_square(points: &[Point], size: f32) -> Vec<Point> {
        let b = geometry::bounding_box(points);
        points
            .iter()
            .map(|p| {
                let x = if b.width > 0.0 { p.x * (size / b.width) } else { p.x };
                let y = if b.height > 0.0 { p.y * (size / b.height) } else { p.y };
                Point::new(x, y)
            })
            .collect()
    }

    /// Translates the array of points so its centroid sits at the origin
    fn translate_to_origin(points: &[Point]) -> Vec<Point> {
        let c = geometry::centroid(points);
        points
            .iter()
            .map(|p| Point::new(p.x - c.x, p.y - c.y))
            .collect()
    }

    /// Flattens the points into an interleaved x,y array normalized to
    /// unit magnitude, the representation used by the Protractor matcher
    fn vectorize(points: &[Point]) -> Vec<f32> {
        let mut vector = Vec::with_capacity(points.len() * 2);
        for p in points {
            vector.push(p.x);
            vector.push(p.y);
        }
        let magnitude = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for v in &mut vector {
                *v /= magnitude;
            }
        }
        vector
    }
}
