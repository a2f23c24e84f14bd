//! Error types for host surface setup.
//!
//! The simulation itself cannot fail. The only failure is not getting a
//! drawable surface from the host page, which callers treat as fatal.

use std::fmt;

/// Errors that can occur while acquiring the drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// The document has no `<body>` to attach the canvas to.
    NoBody,
    /// A DOM call failed; carries the JS error text.
    Dom(String),
    /// The canvas refused to hand out a 2D context.
    NoContext,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NoWindow => write!(f, "No window available"),
            SurfaceError::NoDocument => write!(f, "Window has no document"),
            SurfaceError::NoBody => write!(f, "Document has no body element"),
            SurfaceError::Dom(msg) => write!(f, "DOM operation failed: {}", msg),
            SurfaceError::NoContext => write!(f, "Canvas 2D context unavailable"),
        }
    }
}

impl std::error::Error for SurfaceError {}
