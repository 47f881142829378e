//! In-memory RDF model.
//!
//! A [`Graph`] is an insertion-ordered set of [`Triple`]s plus a prefix
//! binding table. It only grows: the mapper adds triples, the serializers
//! read them. Prefix bindings are cosmetic and never change the triple set.

use std::collections::HashSet;

/// The object position of a triple: an IRI or a plain string literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Absolute IRI.
    Iri(String),
    /// Plain (`xsd:string`) literal.
    Literal(String),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a plain literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(value.into())
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    /// Returns the lexical form if this term is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Term::Literal(value) => Some(value),
            Term::Iri(_) => None,
        }
    }
}

/// A single RDF statement. Subject and predicate are always IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject IRI.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: Term,
}

/// An insertion-ordered RDF triple set with prefix bindings.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: Option<String>,
    prefixes: Vec<(String, String)>,
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl Graph {
    /// Creates an empty, unnamed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph identified by `iri` (used as the TriG graph name).
    #[must_use]
    pub fn named(iri: impl Into<String>) -> Self {
        Self {
            name: Some(iri.into()),
            ..Self::default()
        }
    }

    /// Returns the graph name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Binds `prefix` to `namespace`. Rebinding a prefix replaces its namespace.
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        match self.prefixes.iter_mut().find(|(p, _)| p == prefix) {
            Some(entry) => entry.1 = namespace.to_owned(),
            None => self
                .prefixes
                .push((prefix.to_owned(), namespace.to_owned())),
        }
    }

    /// Returns the prefix bindings in binding order.
    #[must_use]
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Adds a triple. Returns `false` if it was already present.
    pub fn add(&mut self, subject: &str, predicate: &str, object: Term) -> bool {
        let triple = Triple {
            subject: subject.to_owned(),
            predicate: predicate.to_owned(),
            object,
        };
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Returns true if the graph holds the given triple.
    #[must_use]
    pub fn contains(&self, subject: &str, predicate: &str, object: &Term) -> bool {
        self.seen.contains(&Triple {
            subject: subject.to_owned(),
            predicate: predicate.to_owned(),
            object: object.clone(),
        })
    }

    /// All triples in insertion order.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Objects of every triple matching `subject` and `predicate`.
    pub fn objects<'a, 's>(
        &'a self,
        subject: &'s str,
        predicate: &'s str,
    ) -> impl Iterator<Item = &'a Term> + 's
    where
        'a: 's,
    {
        self.triples
            .iter()
            .filter(move |t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Distinct subjects in order of first appearance.
    #[must_use]
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| t.subject.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_triples_are_ignored() {
        let mut g = Graph::new();
        assert!(g.add("urn:s", "urn:p", Term::literal("o")));
        assert!(!g.add("urn:s", "urn:p", Term::literal("o")));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn iri_and_literal_objects_differ() {
        let mut g = Graph::new();
        g.add("urn:s", "urn:p", Term::literal("urn:o"));
        g.add("urn:s", "urn:p", Term::iri("urn:o"));
        assert_eq!(g.len(), 2);
        assert!(g.contains("urn:s", "urn:p", &Term::iri("urn:o")));
    }

    #[test]
    fn subjects_keep_first_appearance_order() {
        let mut g = Graph::new();
        g.add("urn:b", "urn:p", Term::literal("1"));
        g.add("urn:a", "urn:p", Term::literal("2"));
        g.add("urn:b", "urn:q", Term::literal("3"));
        assert_eq!(g.subjects(), vec!["urn:b", "urn:a"]);
    }

    #[test]
    fn rebinding_prefix_replaces_namespace() {
        let mut g = Graph::new();
        g.bind("ex", "urn:one/");
        g.bind("ex", "urn:two/");
        assert_eq!(g.prefixes(), &[("ex".to_owned(), "urn:two/".to_owned())]);
    }
}
