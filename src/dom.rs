//! Thin query layer over a parsed HTML document.
//!
//! The injectors only need a handful of operations: descend by CSS path,
//! take element children, slice, filter, read an attribute and collect text.
//! `Selection` provides exactly those, so extractor code never touches the
//! `scraper` API directly.

use crate::injector::{InjectError, Result};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// A parsed page
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Every element in the document matching `css`, in document order
    pub fn find(&self, css: &str) -> Result<Selection<'_>> {
        let selector = compile(css)?;
        Ok(Selection {
            nodes: self.html.select(&selector).collect(),
        })
    }
}

/// An ordered, duplicate-free set of elements
#[derive(Clone, Default)]
pub struct Selection<'a> {
    nodes: Vec<ElementRef<'a>>,
}

impl<'a> Selection<'a> {
    /// Descendants of any node in the selection that match `css`
    pub fn find(&self, css: &str) -> Result<Selection<'a>> {
        let selector = compile(css)?;
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();

        for scope in &self.nodes {
            for element in scope.select(&selector) {
                if element.id() != scope.id() && seen.insert(element.id()) {
                    nodes.push(element);
                }
            }
        }

        Ok(Selection { nodes })
    }

    /// Element children of every node in the selection
    pub fn children(&self) -> Selection<'a> {
        let nodes = self
            .nodes
            .iter()
            .flat_map(|node| node.children().filter_map(ElementRef::wrap))
            .collect();
        Selection { nodes }
    }

    /// Nodes in the half-open range `start..end`, clamped to the selection
    pub fn slice(&self, start: usize, end: usize) -> Selection<'a> {
        let end = end.min(self.nodes.len());
        let start = start.min(end);
        Selection {
            nodes: self.nodes[start..end].to_vec(),
        }
    }

    pub fn filter<F>(&self, mut predicate: F) -> Selection<'a>
    where
        F: FnMut(&ElementRef<'a>) -> bool,
    {
        Selection {
            nodes: self.nodes.iter().copied().filter(|n| predicate(n)).collect(),
        }
    }

    /// Attribute value of the first node
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.nodes.first().and_then(|node| node.value().attr(name))
    }

    /// Text of every node and its descendants, concatenated
    pub fn text(&self) -> String {
        self.nodes.iter().flat_map(|node| node.text()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| InjectError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}
