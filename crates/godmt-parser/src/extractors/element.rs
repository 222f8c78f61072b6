//! Cross-declaration lookups: element-kind resolution and the by-value
//! recursion guard. Both walk the declaration index with a visited set.

use std::collections::{HashMap, HashSet};

use crate::ast::TypeExpr;
use crate::index::DeclIndex;
use crate::types::OmissionReason;

use super::Extractor;

impl<'a> Extractor<'a> {
    /// Resolve the kind of an array/slice element.
    ///
    /// Named types declared in this file are followed transitively through
    /// slices, arrays, maps, pointers and aliases. Resolution stops at a
    /// struct declaration (its name), an anonymous struct (`struct`), or a
    /// name not declared here (builtin or external, kept as written).
    pub(super) fn element_kind(&self, elem: &TypeExpr) -> Result<String, OmissionReason> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = elem;
        loop {
            match current {
                TypeExpr::Named(name) => {
                    let Some(spec) = self.index.type_spec(name) else {
                        return Ok(name.clone());
                    };
                    if !seen.insert(name.as_str()) {
                        return Err(OmissionReason::AliasCycle { name: name.clone() });
                    }
                    match &spec.ty {
                        TypeExpr::Struct(_) | TypeExpr::Other { .. } => return Ok(name.clone()),
                        underlying => current = underlying,
                    }
                }
                TypeExpr::Qualified { name, .. } => return Ok(name.clone()),
                TypeExpr::Pointer(inner) => current = &**inner,
                TypeExpr::Array { elem, .. } => current = &**elem,
                TypeExpr::Map { value, .. } => current = &**value,
                TypeExpr::Struct(_) => return Ok("struct".to_string()),
                TypeExpr::Other { .. } => {
                    return Err(OmissionReason::UnsupportedType {
                        shape: current.shape().to_string(),
                    });
                }
            }
        }
    }

    /// The declared struct that `ty` embeds by value and that contains
    /// `owner`, directly or through a chain of by-value fields.
    ///
    /// Pointers, slices and maps break the chain; fixed arrays do not.
    pub(super) fn recursive_member<'t>(
        &mut self,
        ty: &'t TypeExpr,
        owner: &str,
    ) -> Option<&'t str> {
        let root = by_value_root(ty)?;
        if root == owner {
            return Some(root);
        }
        if !self.by_value.reaching.contains_key(owner) {
            let reached = self.reaching(owner);
            self.by_value.reaching.insert(owner.to_string(), reached);
        }
        self.by_value
            .reaching
            .get(owner)
            .is_some_and(|reached| reached.contains(root))
            .then_some(root)
    }

    /// Every declared name that contains `owner` by value.
    fn reaching(&mut self, owner: &str) -> HashSet<&'a str> {
        let index = &self.index;
        let containers = self
            .by_value
            .containers
            .get_or_insert_with(|| by_value_containers(index));

        let mut reached: HashSet<&'a str> = HashSet::new();
        let mut stack: Vec<&'a str> = containers.get(owner).cloned().unwrap_or_default();
        while let Some(name) = stack.pop() {
            if reached.insert(name)
                && let Some(parents) = containers.get(name)
            {
                stack.extend(parents.iter().copied());
            }
        }
        reached
    }
}

/// By-value containment of the file's structs, stored in reverse: each
/// name maps to the declarations holding it by value. Built on first use;
/// the per-owner sets are then computed once each.
#[derive(Debug, Default)]
pub(super) struct ByValueReach<'a> {
    containers: Option<HashMap<&'a str, Vec<&'a str>>>,
    reaching: HashMap<String, HashSet<&'a str>>,
}

fn by_value_containers<'a>(index: &DeclIndex<'a>) -> HashMap<&'a str, Vec<&'a str>> {
    let mut containers: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
    for name in index.type_names() {
        let Some(fields) = index.struct_fields(name) else {
            continue;
        };
        let mut members = Vec::new();
        for field in fields {
            collect_by_value(&field.ty, &mut members);
        }
        for member in members {
            containers.entry(member).or_default().push(name);
        }
    }
    containers
}

fn by_value_root(ty: &TypeExpr) -> Option<&str> {
    match ty {
        TypeExpr::Named(name) => Some(name),
        TypeExpr::Array { len: Some(_), elem } => by_value_root(elem),
        _ => None,
    }
}

fn collect_by_value<'t>(ty: &'t TypeExpr, out: &mut Vec<&'t str>) {
    match ty {
        TypeExpr::Named(name) => out.push(name),
        TypeExpr::Array { len: Some(_), elem } => collect_by_value(elem, out),
        TypeExpr::Struct(fields) => {
            for field in fields {
                collect_by_value(&field.ty, out);
            }
        }
        _ => {}
    }
}
