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
use crate::template::{Template, TemplateError};
use log::{debug, trace};

/// An ordered collection of named canonical templates.
///
/// Insertion order is preserved and names are not unique: a gesture class
/// is usually taught with several example strokes, and every example
/// competes independently during matching. External callers interact only
/// through these operations; the template list itself is not exposed for
/// mutation.
#[derive(Clone, Debug, Default)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Read-only view of the stored templates, in insertion order
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Normalizes a raw stroke and appends it under `name`. Returns how
    /// many templates now share that name (1-based), so callers can spot
    /// duplicates.
    pub fn add(&mut self, name: &str, points: &[Point]) -> Result<usize, TemplateError> {
        let template = Template::new(name, points)?;
        self.templates.push(template);
        let count = self.templates.iter().filter(|t| t.name == name).count();
        debug!("added gesture {name:?}, {count} example(s) stored");
        Ok(count)
    }

    /// Removes every template whose name equals `name`; a no-op if none
    /// match.
    pub fn remove_by_name(&mut self, name: &str) {
        let before = self.templates.len();
        self.templates.retain(|t| t.name != name);
        debug!(
            "removed {} template(s) named {name:?}",
            before - self.templates.len()
        );
    }

    /// Empties the store
    pub fn clear(&mut self) {
        self.templates.clear();
    }

    /// Distinct gesture names, in first-seen order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for t in &self.templates {
            if !names.iter().any(|n| *n == t.name) {
                names.push(t.name.clone());
            }
        }
        names
    }

    /// All templates sharing `name`, in insertion order
    pub fn templates_by_name(&self, name: &str) -> Vec<&Template> {
        self.templates.iter().filter(|t| t.name == name).collect()
    }

    /// Deep snapshot of every template, safe to serialize; later mutation
    /// of the store leaves the snapshot untouched and vice versa.
    pub fn export_all(&self) -> Vec<Template> {
        self.templates.clone()
    }

    /// Replaces the whole store with the given templates. Each entry is
    /// re-run through the normalization pipeline, which is idempotent on
    /// already-canonical points and keeps the vector derivation
    /// consistent. Entries with an empty name or too few points are
    /// skipped; import is best-effort, never all-or-nothing.
    pub fn import_all(&mut self, templates: &[Template]) {
        self.clear();
        for t in templates {
            if t.name.is_empty() {
                trace!("skipping unnamed template on import");
                continue;
            }
            if let Err(e) = self.add(&t.name, &t.points) {
                trace!("skipping template {:?} on import: {e}", t.name);
            }
        }
    }
}
