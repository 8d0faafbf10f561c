// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the errors that might occur while loading or solving
//! a test cover instance.

/// This enumeration simply groups the kind of errors that might occur when 
/// reading an instance from file or when solving it. There can be io errors 
/// (file unavailable ?), format errors (e.g. the file is not an instance but
/// contains the text of your next paper), instances which admit no solution at
/// all, or a failure of the relaxation oracle.
///
/// # Note:
/// The infeasibility of the relaxation at some branch node is *not* an error:
/// the node is simply pruned. Only the infeasibility of the root is fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The file was not properly formatted.
    #[error("ill formed instance: {0}")]
    MalformedInstance(String),
    /// No test reacts differently to the two given diseases.
    #[error("diseases {0} and {1} are not distinguished by any test")]
    Indistinguishable(usize, usize),
    /// The root relaxation admits no feasible solution
    #[error("the root relaxation is infeasible")]
    InfeasibleRelaxation,
    /// The relaxation oracle failed for some other reason
    #[error("relaxation oracle failed: {0}")]
    Oracle(String),
}
