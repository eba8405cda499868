/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source offsets attached to tokens and errors.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 *
 * License:
 * This file is part of the MINIFRONT project.
 *
 * MINIFRONT is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::Serialize;

/// A half-open range of **character** offsets `[start, end)` within the
/// analyzed line.
///
/// Offsets count `char`s, not bytes, so a position reported to the user
/// lines up with what they typed even when the line contains non-ASCII
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span, used for "end of input" locations.
    pub const fn point(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_empty() {
        let span = Span::point(4);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(span.start, 4);
    }

    #[test]
    fn len_counts_offsets() {
        assert_eq!(Span::new(2, 5).len(), 3);
        assert!(!Span::new(2, 5).is_empty());
    }
}
