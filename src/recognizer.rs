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

use std::time::{Duration, Instant};

use crate::point::Point;
use crate::store::TemplateStore;
use crate::template::Template;
use crate::{angular_recognizer, protractor_recognizer};
use log::debug;

/// Name reported when no stored template could be matched
pub const NO_MATCH_NAME: &str = "No match";

/// Matching algorithm used for a whole recognition call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Matcher {
    /// Golden-section search over rotations, the classic $1 matcher
    #[default]
    AngularSearch,
    /// Closed-form cosine distance over unit vectors (Protractor)
    FastCosine,
}

/// Outcome of a recognition call.
#[derive(Clone, Debug, PartialEq)]
pub struct RecognitionResult {
    /// Best-matching gesture name, or [`NO_MATCH_NAME`]
    pub name: String,
    /// Confidence in [0, 1]; 0 means no usable match
    pub score: f32,
    /// Wall-clock time spent in the call
    pub elapsed: Duration,
}

impl RecognitionResult {
    pub fn is_match(&self) -> bool {
        self.name != NO_MATCH_NAME
    }

    fn no_match(start: Instant) -> Self {
        Self {
            name: NO_MATCH_NAME.into(),
            score: 0.0,
            elapsed: start.elapsed(),
        }
    }
}

/// Classifies a raw stroke against every template in the store with the
/// selected matcher and returns the best-matching name with a score in
/// [0, 1].
///
/// A stroke of fewer than 2 points or an empty store yields the defined
/// no-match result rather than an error. Ties go to the earliest-added
/// template, so recognition is deterministic.
pub fn recognize(store: &TemplateStore, points: &[Point], matcher: Matcher) -> RecognitionResult {
    let start = Instant::now();
    if points.len() < 2 {
        debug!("stroke of {} point(s) is too short to recognize", points.len());
        return RecognitionResult::no_match(start);
    }
    let query = match Template::new("", points) {
        Ok(query) => query,
        Err(e) => {
            debug!("stroke could not be normalized: {e}");
            return RecognitionResult::no_match(start);
        }
    };

    let mut best: Option<(&Template, f32)> = None;
    for template in store.templates() {
        let d = match matcher {
            Matcher::AngularSearch => angular_recognizer::distance(&query, template),
            Matcher::FastCosine => protractor_recognizer::distance(&query, template),
        };
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((template, d));
        }
    }

    match best {
        None => {
            debug!("template store is empty, nothing to match against");
            RecognitionResult::no_match(start)
        }
        Some((template, d)) => {
            let score = match matcher {
                Matcher::AngularSearch => angular_recognizer::score(d),
                Matcher::FastCosine => protractor_recognizer::score(d),
            };
            debug!(
                "best match {:?} at distance {d:.3} (score {score:.3})",
                template.name
            );
            RecognitionResult {
                name: template.name.clone(),
                score,
                elapsed: start.elapsed(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;

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
    fn short_strokes_never_match() {
        let mut store = TemplateStore::new();
        store.add("circle", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();
        let empty: &[Point] = &[];
        let single: &[Point] = &[Point::new(4.0, 2.0)];
        for matcher in [Matcher::AngularSearch, Matcher::FastCosine] {
            for stroke in [empty, single] {
                let result = recognize(&store, stroke, matcher);
                assert_eq!(result.name, NO_MATCH_NAME);
                assert_eq!(result.score, 0.0);
                assert!(!result.is_match());
            }
        }
    }

    #[test]
    fn empty_store_never_matches() {
        let store = TemplateStore::new();
        for matcher in [Matcher::AngularSearch, Matcher::FastCosine] {
            let result = recognize(&store, &zigzag_stroke(), matcher);
            assert_eq!(result.name, NO_MATCH_NAME);
            assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn circle_is_recognized_across_scale_and_translation() {
        let mut store = TemplateStore::new();
        store.add("circle", &circle_stroke(100.0, 100.0, 100.0, 64)).unwrap();
        store.add("zigzag", &zigzag_stroke()).unwrap();

        let query = circle_stroke(540.0, 540.0, 40.0, 64);
        let result = recognize(&store, &query, Matcher::AngularSearch);
        assert_eq!(result.name, "circle");
        assert!(result.score > 0.85, "score {}", result.score);

        let result = recognize(&store, &query, Matcher::FastCosine);
        assert_eq!(result.name, "circle");
        assert!(result.score > 0.85, "score {}", result.score);
    }

    #[test]
    fn rotated_stroke_is_recognized() {
        let base = zigzag_stroke();
        let mut store = TemplateStore::new();
        store.add("zigzag", &base).unwrap();
        store.add("circle", &circle_stroke(0.0, 0.0, 80.0, 64)).unwrap();

        let rotated = geometry::rotate_by(&base, 30.0_f32.to_radians());
        let result = recognize(&store, &rotated, Matcher::AngularSearch);
        assert_eq!(result.name, "zigzag");
        assert!(result.score > 0.9, "score {}", result.score);
    }

    #[test]
    fn ties_favor_the_earliest_added_template() {
        let stroke = circle_stroke(0.0, 0.0, 90.0, 64);
        let mut store = TemplateStore::new();
        store.add("first", &stroke).unwrap();
        store.add("second", &stroke).unwrap();
        for matcher in [Matcher::AngularSearch, Matcher::FastCosine] {
            let result = recognize(&store, &stroke, matcher);
            assert_eq!(result.name, "first");
        }
    }

    #[test]
    fn straight_query_prefers_the_line_template() {
        let mut store = TemplateStore::new();
        let horizontal: Vec<Point> = (0..=10)
            .map(|i| Point::new(i as f32 * 10.0, 40.0))
            .collect();
        store.add("line", &horizontal).unwrap();
        store.add("circle", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();

        let vertical: Vec<Point> = (0..=10)
            .map(|i| Point::new(300.0, i as f32 * 15.0))
            .collect();
        let result = recognize(&store, &vertical, Matcher::AngularSearch);
        assert_eq!(result.name, "line");
        assert!(result.score > 0.0);
    }

    #[test]
    fn result_reports_elapsed_time() {
        let mut store = TemplateStore::new();
        store.add("circle", &circle_stroke(0.0, 0.0, 100.0, 64)).unwrap();
        let result = recognize(&store, &circle_stroke(0.0, 0.0, 50.0, 64), Matcher::FastCosine);
        // bounded, CPU-only computation; just check the clock was read
        assert!(result.elapsed < Duration::from_secs(5));
    }

    #[test]
    fn default_matcher_is_the_angular_search() {
        assert_eq!(Matcher::default(), Matcher::AngularSearch);
    }
}
