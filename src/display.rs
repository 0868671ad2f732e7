//! Rendering of paths in terms of vertex payloads.

use std::fmt::{self, Display};

use crate::graph::DirectedGraph;
use crate::{Error, Result, VertexId};

/// Message printed in place of an empty path
pub const NO_PATH_MESSAGE: &str = "No path exists!";

/// Default separator placed between consecutive vertices
pub const DEFAULT_SEPARATOR: &str = " -> ";

/// Formats a path by mapping each id to its payload
///
/// Build it with [`PathDisplay::new`], which checks every id up front, so
/// formatting itself cannot fail on a missing vertex.
#[derive(Debug)]
pub struct PathDisplay<'a, T> {
    graph: &'a DirectedGraph<T>,
    path: &'a [VertexId],
    separator: &'a str,
}

impl<'a, T> PathDisplay<'a, T> {
    pub fn new(graph: &'a DirectedGraph<T>, path: &'a [VertexId]) -> Result<Self> {
        if let Some(&missing) = path.iter().find(|&&id| graph.vertex(id).is_none()) {
            return Err(Error::InvalidVertex(missing));
        }
        Ok(PathDisplay {
            graph,
            path,
            separator: DEFAULT_SEPARATOR,
        })
    }

    pub fn with_separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }
}

impl<T: Display> Display for PathDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str(NO_PATH_MESSAGE);
        }
        for (i, &id) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(self.separator)?;
            }
            // Ids were validated in `new`
            let vertex = self.graph.vertex(id).ok_or(fmt::Error)?;
            write!(f, "{}", vertex.data)?;
        }
        Ok(())
    }
}

/// Renders `path` with `separator`, or [`NO_PATH_MESSAGE`] when it is empty
pub fn render_path<T: Display>(
    graph: &DirectedGraph<T>,
    path: &[VertexId],
    separator: &str,
) -> Result<String> {
    Ok(PathDisplay::new(graph, path)?
        .with_separator(separator)
        .to_string())
}
