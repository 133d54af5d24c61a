//! Document model: classes, properties and inheritance-aware lookup.
//!
//! A [`Document`] owns its top-level [`Member`]s; a [`ClassNode`] owns its
//! body. Inheritance is a name resolved while parsing: a class declared as
//! `class B : A` keeps the name `A` together with a shared handle to the class
//! `A` that was in scope at that point.
//!
//! ## Lookup
//!
//! [`ClassNode::lookup`] returns the first member with the requested name in
//! the class's own body and falls back to the parent chain.
//!
//! ```rust
//! let doc = armaconfig::from_str("class A { x = 1; }; class B : A { y = 2; };").unwrap();
//! let b = doc.lookup("B").unwrap().as_class().unwrap();
//!
//! assert_eq!(b.lookup("x").unwrap().value().and_then(|v| v.as_i64()), Some(1));
//! assert!(b.lookup("z").is_err());
//! ```

use crate::{ConfigMap, Error, Result, Value};
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// One `name = value;` or `name[] = {...};` statement.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyNode {
    pub name: String,
    pub value: Value,
}

impl PropertyNode {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        PropertyNode {
            name: name.into(),
            value,
        }
    }
}

/// A resolved `: Parent` clause.
#[derive(Clone, Debug, PartialEq)]
pub struct Parent {
    pub name: String,
    pub class: Arc<ClassNode>,
}

/// A `class Name : Parent { ... };` block.
///
/// Dropping a class releases its parent chain iteratively, so long
/// inheritance chains do not recurse once per ancestor.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassNode {
    pub name: String,
    pub parent: Option<Parent>,
    pub body: Vec<Member>,
    ancestors: usize,
}

/// A statement inside a class body or at document level.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    Class(Arc<ClassNode>),
    Property(PropertyNode),
}

/// The top-level statements of one parsed input, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub members: Vec<Member>,
}

fn find<'a>(members: &'a [Member], name: &str) -> Option<&'a Member> {
    members.iter().find(|member| member.name() == name)
}

fn encode_members(members: &[Member], map: &mut ConfigMap) {
    for member in members {
        map.insert(member.name().to_string(), member.to_value());
    }
}

impl ClassNode {
    pub fn new(name: impl Into<String>, parent: Option<Parent>, body: Vec<Member>) -> Self {
        let ancestors = parent.as_ref().map_or(0, |p| p.class.ancestors + 1);
        ClassNode {
            name: name.into(),
            parent,
            body,
            ancestors,
        }
    }

    /// Number of classes above this one in its inheritance chain.
    #[must_use]
    pub fn ancestors(&self) -> usize {
        self.ancestors
    }

    #[must_use]
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.name.as_str())
    }

    #[must_use]
    pub fn parent(&self) -> Option<&ClassNode> {
        self.parent.as_ref().map(|p| p.class.as_ref())
    }

    /// Finds a member by name, searching this class first and then its parents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MemberNotFound`] when no class in the chain declares `name`.
    pub fn lookup(&self, name: &str) -> Result<&Member> {
        let mut class = self;
        loop {
            if let Some(member) = find(&class.body, name) {
                return Ok(member);
            }
            match class.parent() {
                Some(parent) => class = parent,
                None => return Err(Error::member_not_found(name)),
            }
        }
    }

    /// Structural encoding: inherited entries first, then this class's own
    /// entries in declaration order, replacing inherited ones of the same name.
    #[must_use]
    pub fn to_map(&self) -> ConfigMap {
        let mut chain = vec![self];
        let mut class = self;
        while let Some(parent) = class.parent() {
            chain.push(parent);
            class = parent;
        }

        let mut map = ConfigMap::with_capacity(self.body.len());
        for class in chain.into_iter().rev() {
            encode_members(&class.body, &mut map);
        }
        map
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }
}

impl Drop for ClassNode {
    fn drop(&mut self) {
        let mut next = self.parent.take().map(|p| p.class);
        while let Some(class) = next {
            next = match Arc::try_unwrap(class) {
                Ok(mut class) => class.parent.take().map(|p| p.class),
                Err(_) => None,
            };
        }
    }
}

impl Member {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Member::Class(class) => &class.name,
            Member::Property(property) => &property.name,
        }
    }

    #[must_use]
    pub fn as_class(&self) -> Option<&ClassNode> {
        match self {
            Member::Class(class) => Some(class.as_ref()),
            Member::Property(_) => None,
        }
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyNode> {
        match self {
            Member::Property(property) => Some(property),
            Member::Class(_) => None,
        }
    }

    /// The value of a property member, `None` for classes.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.as_property().map(|p| &p.value)
    }

    /// Looks up `name` inside this member.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAClass`] for properties and
    /// [`Error::MemberNotFound`] when the class chain has no such member.
    pub fn lookup(&self, name: &str) -> Result<&Member> {
        match self {
            Member::Class(class) => class.lookup(name),
            Member::Property(property) => Err(Error::NotAClass(property.name.clone())),
        }
    }

    /// Structural encoding of this member alone.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Member::Class(class) => class.to_value(),
            Member::Property(property) => property.value.clone(),
        }
    }
}

impl Document {
    pub fn new(members: Vec<Member>) -> Self {
        Document { members }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// Finds a top-level member by name; the first declaration wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MemberNotFound`] if no top-level member has that name.
    pub fn lookup(&self, name: &str) -> Result<&Member> {
        find(&self.members, name).ok_or_else(|| Error::member_not_found(name))
    }

    /// Follows a chain of names through nested classes.
    ///
    /// ```rust
    /// let doc = armaconfig::from_str(
    ///     "class Missions { class Mission_1 { template = \"co10.Altis\"; }; };",
    /// ).unwrap();
    /// let template = doc.lookup_path(&["Missions", "Mission_1", "template"]).unwrap();
    /// assert_eq!(template.value().and_then(|v| v.as_str()), Some("co10.Altis"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::MemberNotFound`] for a missing step and
    /// [`Error::NotAClass`] when a step other than the last is a property.
    pub fn lookup_path(&self, path: &[&str]) -> Result<&Member> {
        let (first, rest) = path
            .split_first()
            .ok_or_else(|| Error::custom("empty lookup path"))?;
        rest.iter()
            .try_fold(self.lookup(first)?, |member, name| member.lookup(name))
    }

    /// Structural encoding of the whole document.
    #[must_use]
    pub fn to_map(&self) -> ConfigMap {
        let mut map = ConfigMap::with_capacity(self.members.len());
        encode_members(&self.members, &mut map);
        map
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Value::Object(self.to_map()).serialize(serializer)
    }
}

impl Serialize for ClassNode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl Serialize for PropertyNode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

impl Serialize for Member {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(name: &str, value: impl Into<Value>) -> Member {
        Member::Property(PropertyNode::new(name, value.into()))
    }

    fn class(name: &str, parent: Option<&Arc<ClassNode>>, body: Vec<Member>) -> Arc<ClassNode> {
        let parent = parent.map(|p| Parent {
            name: p.name.clone(),
            class: Arc::clone(p),
        });
        Arc::new(ClassNode::new(name, parent, body))
    }

    #[test]
    fn test_lookup_own_body_first_match() {
        let a = class("A", None, vec![property("x", 1), property("x", 2)]);
        assert_eq!(a.lookup("x").unwrap().value(), Some(&Value::from(1)));
    }

    #[test]
    fn test_lookup_through_parent_chain() {
        let a = class("A", None, vec![property("x", 1)]);
        let b = class("B", Some(&a), vec![property("y", 2)]);
        let c = class("C", Some(&b), vec![]);

        assert_eq!(c.lookup("x").unwrap().value(), Some(&Value::from(1)));
        assert_eq!(c.lookup("y").unwrap().value(), Some(&Value::from(2)));
        assert_eq!(c.lookup("z"), Err(Error::MemberNotFound("z".into())));
    }

    #[test]
    fn test_lookup_child_shadows_parent() {
        let a = class("A", None, vec![property("x", 1)]);
        let b = class("B", Some(&a), vec![property("x", 5)]);
        assert_eq!(b.lookup("x").unwrap().value(), Some(&Value::from(5)));
    }

    #[test]
    fn test_to_map_overlays_parent() {
        let a = class("A", None, vec![property("x", 1), property("y", 1)]);
        let b = class("B", Some(&a), vec![property("y", 2), property("z", 3)]);

        let map = b.to_map();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["x", "y", "z"]);
        assert_eq!(map.get("y"), Some(&Value::from(2)));
    }

    #[test]
    fn test_ancestor_count() {
        let a = class("A", None, vec![]);
        let b = class("B", Some(&a), vec![]);
        let c = class("C", Some(&b), vec![]);
        assert_eq!(a.ancestors(), 0);
        assert_eq!(c.ancestors(), 2);
    }

    #[test]
    fn test_long_chain_to_map_and_drop() {
        let mut last = class("C0", None, vec![property("x", 0)]);
        for i in 1..50_000 {
            let name = format!("C{}", i);
            last = class(&name, Some(&last), vec![property("x", i)]);
        }

        let map = last.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("x"), Some(&Value::from(49_999)));
        assert_eq!(last.lookup("x").unwrap().value(), Some(&Value::from(49_999)));
        drop(last);
    }

    #[test]
    fn test_to_map_nested_class() {
        let inner = class("Inner", None, vec![property("v", "text")]);
        let outer = class("Outer", None, vec![Member::Class(inner)]);

        let map = outer.to_map();
        let inner_map = map.get("Inner").and_then(Value::as_object).unwrap();
        assert_eq!(inner_map.get("v"), Some(&Value::from("text")));
    }

    #[test]
    fn test_member_lookup_on_property_fails() {
        let member = property("x", 1);
        assert_eq!(member.lookup("y"), Err(Error::NotAClass("x".into())));
    }

    #[test]
    fn test_document_lookup_path() {
        let inner = class("Inner", None, vec![property("v", 7)]);
        let outer = class("Outer", None, vec![Member::Class(inner)]);
        let doc = Document::new(vec![Member::Class(outer)]);

        let v = doc.lookup_path(&["Outer", "Inner", "v"]).unwrap();
        assert_eq!(v.value(), Some(&Value::from(7)));
        assert!(matches!(
            doc.lookup_path(&["Outer", "Inner", "v", "w"]),
            Err(Error::NotAClass(_))
        ));
        assert!(matches!(
            doc.lookup_path(&["Missing"]),
            Err(Error::MemberNotFound(_))
        ));
        assert!(doc.lookup_path(&[]).is_err());
    }
}
