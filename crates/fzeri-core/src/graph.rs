//! Statement-level graph model.
//!
//! This is deliberately small: IRIs and literals are all the schedaF mapping
//! ever produces, so there are no blank nodes, language tags or named graphs.
//! Serialization into concrete RDF syntaxes lives in `fzeri-rdf`.

use crate::vocab::{rdf, rdfs, Link};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// Terms
// ============================================================================

/// An addressable graph resource (always an absolute IRI).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn from_iri(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a path segment (`<self>/<segment>`).
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}/{segment}", self.0))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    /// `None` means a plain `xsd:string` literal.
    pub datatype: Option<String>,
}

impl Literal {
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Object {
    Node(NodeId),
    Literal(Literal),
}

impl Object {
    pub fn as_node(&self) -> Option<&NodeId> {
        match self {
            Object::Node(node) => Some(node),
            Object::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Object::Node(_) => None,
            Object::Literal(lit) => Some(lit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Statement {
    pub subject: NodeId,
    pub predicate: String,
    pub object: Object,
}

impl Statement {
    pub fn new(subject: NodeId, predicate: impl Into<String>, object: Object) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

// ============================================================================
// Emitter
// ============================================================================

/// Append-only statement buffer handed to mappers.
///
/// Mappers never retract; every helper only pushes. [`Emitter::link`] is the
/// only way to state a CRM relation that has an inverse, and it always writes
/// both directions.
#[derive(Debug, Default)]
pub struct Emitter {
    statements: Vec<Statement>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed(&mut self, node: &NodeId, class: &str) {
        self.relate(node, rdf::TYPE, &NodeId::from_iri(class));
    }

    pub fn relate(&mut self, subject: &NodeId, predicate: &str, object: &NodeId) {
        self.statements.push(Statement::new(
            subject.clone(),
            predicate,
            Object::Node(object.clone()),
        ));
    }

    /// State `subject -forward-> object` and `object -inverse-> subject`.
    pub fn link(&mut self, subject: &NodeId, link: Link, object: &NodeId) {
        self.relate(subject, link.forward, object);
        self.relate(object, link.inverse, subject);
    }

    pub fn literal(&mut self, subject: &NodeId, predicate: &str, text: &str) {
        self.statements.push(Statement::new(
            subject.clone(),
            predicate,
            Object::Literal(Literal::plain(text)),
        ));
    }

    pub fn typed_literal(&mut self, subject: &NodeId, predicate: &str, lexical: &str, datatype: &str) {
        self.statements.push(Statement::new(
            subject.clone(),
            predicate,
            Object::Literal(Literal::typed(lexical, datatype)),
        ));
    }

    pub fn label(&mut self, subject: &NodeId, text: &str) {
        self.literal(subject, rdfs::LABEL, text);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }
}

// ============================================================================
// Graph
// ============================================================================

/// A set of statements with deterministic (sorted) iteration order.
///
/// Exact duplicates collapse on insert, so re-emitting a shared node (a
/// collection mentioned by many records) is harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    statements: BTreeSet<Statement>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the statement was not already present.
    pub fn insert(&mut self, statement: Statement) -> bool {
        self.statements.insert(statement)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    pub fn objects<'a>(
        &'a self,
        subject: &'a NodeId,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Object> + 'a {
        self.statements
            .iter()
            .filter(move |s| &s.subject == subject && s.predicate == predicate)
            .map(|s| &s.object)
    }

    pub fn has_edge(&self, subject: &NodeId, predicate: &str, object: &NodeId) -> bool {
        self.statements.contains(&Statement::new(
            subject.clone(),
            predicate,
            Object::Node(object.clone()),
        ))
    }

    pub fn has_literal(&self, subject: &NodeId, predicate: &str, text: &str) -> bool {
        self.objects(subject, predicate)
            .any(|o| matches!(o, Object::Literal(lit) if lit.lexical == text))
    }

    pub fn instances_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.statements
            .iter()
            .filter(move |s| {
                s.predicate == rdf::TYPE
                    && matches!(&s.object, Object::Node(n) if n.as_str() == class)
            })
            .map(|s| &s.subject)
    }

    /// Every distinct subject, sorted.
    pub fn subjects(&self) -> BTreeSet<&NodeId> {
        self.statements.iter().map(|s| &s.subject).collect()
    }
}

impl Extend<Statement> for Graph {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        self.statements.extend(iter);
    }
}

impl FromIterator<Statement> for Graph {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Statement;
    type IntoIter = std::collections::btree_set::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
