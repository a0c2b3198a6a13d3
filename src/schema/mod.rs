//! Static schema of the C# syntax graph.
//!
//! The schema describes, for every [`NodeKind`]:
//!
//! - its single supertype (the hierarchy is rooted at [`NodeKind::Base`])
//! - the scalar and composite attributes it declares
//! - the edge slots it declares, each with containment/reference kind,
//!   cardinality and target kind
//!
//! ## Design
//!
//! The raw tables in `csharp` list only what each kind declares itself.
//! [`Schema`] indexes them once into per-kind plans so lookups during a
//! traversal are plain slice accesses:
//!
//! ```text
//! Schema
//! ├── ancestors[kind]         root-first supertype chain
//! ├── slots[kind]             inherited slots first, then own slots
//! ├── attribute_groups[kind]  ancestor-to-descendant attribute groups
//! └── by_name                 FxHashMap<&str, NodeKind>
//! ```

mod csharp;
mod kind;

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

pub use kind::NodeKind;

// ============================================================================
// DESCRIPTORS
// ============================================================================

/// Top-level category of a kind; used as the XML namespace prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindGroup {
    Base,
    Expression,
    Statement,
    Structure,
}

impl KindGroup {
    /// Namespace prefix, e.g. `expression`.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Expression => "expression",
            Self::Statement => "statement",
            Self::Structure => "structure",
        }
    }

    pub const ALL: [KindGroup; 4] = [
        KindGroup::Base,
        KindGroup::Expression,
        KindGroup::Statement,
        KindGroup::Structure,
    ];
}

/// Primitive type of a scalar attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrType {
    String,
    Integer,
    Boolean,
}

impl std::fmt::Display for AttrType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        })
    }
}

/// A scalar attribute declared by a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttrDef {
    pub name: &'static str,
    pub ty: AttrType,
    /// Whether rendered values must be escaped for the target format.
    pub escaped: bool,
}

impl AttrDef {
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            ty: AttrType::String,
            escaped: true,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            ty: AttrType::Integer,
            escaped: false,
        }
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            ty: AttrType::Boolean,
            escaped: false,
        }
    }
}

/// Shape of a composite attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeType {
    /// File name plus start/end line and column.
    SourcePosition,
}

/// A composite (structured) attribute, rendered as a nested block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeDef {
    pub name: &'static str,
    pub ty: CompositeType,
}

impl CompositeDef {
    pub const fn source_position(name: &'static str) -> Self {
        Self {
            name,
            ty: CompositeType::SourcePosition,
        }
    }
}

/// Whether an edge is part of the tree backbone or a non-owning link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// The target is owned by the source; its parent is the source.
    Containment,
    /// A cross-reference; never traversed into.
    Reference,
}

/// How many targets a slot holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly one target is expected.
    Single,
    /// Zero or one target.
    Optional,
    /// Ordered sequence of targets.
    Sequence,
}

impl Cardinality {
    pub fn is_sequence(self) -> bool {
        matches!(self, Self::Sequence)
    }
}

/// A named edge position declared by a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotDef {
    /// Kind that declares the slot.
    pub owner: NodeKind,
    pub name: &'static str,
    pub kind: EdgeKind,
    pub cardinality: Cardinality,
    /// Targets must be this kind or one of its descendants.
    pub target: NodeKind,
}

impl SlotDef {
    pub const fn containment(owner: NodeKind, name: &'static str, target: NodeKind) -> Self {
        Self {
            owner,
            name,
            kind: EdgeKind::Containment,
            cardinality: Cardinality::Optional,
            target,
        }
    }

    pub const fn reference(owner: NodeKind, name: &'static str, target: NodeKind) -> Self {
        Self {
            owner,
            name,
            kind: EdgeKind::Reference,
            cardinality: Cardinality::Optional,
            target,
        }
    }

    /// Mark the slot as requiring exactly one target.
    pub const fn one(self) -> Self {
        Self {
            cardinality: Cardinality::Single,
            ..self
        }
    }

    /// Mark the slot as an ordered sequence.
    pub const fn many(self) -> Self {
        Self {
            cardinality: Cardinality::Sequence,
            ..self
        }
    }

    pub fn is_containment(&self) -> bool {
        self.kind == EdgeKind::Containment
    }

    /// Wrapper element name, e.g. `IfStatementSyntax_Condition`.
    pub fn qualified_name(&self) -> String {
        format!("{}_{}", self.owner.name(), self.name)
    }
}

/// Table row describing one kind.
#[derive(Clone, Copy, Debug)]
pub struct KindDef {
    pub kind: NodeKind,
    pub name: &'static str,
    pub group: KindGroup,
    pub supertype: Option<NodeKind>,
    pub is_abstract: bool,
    /// Scalar attributes declared by this kind only.
    pub attributes: &'static [AttrDef],
    /// Composite attributes declared by this kind only.
    pub composites: &'static [CompositeDef],
}

impl KindDef {
    pub const fn new(
        kind: NodeKind,
        name: &'static str,
        group: KindGroup,
        supertype: Option<NodeKind>,
        is_abstract: bool,
    ) -> Self {
        Self {
            kind,
            name,
            group,
            supertype,
            is_abstract,
            attributes: &[],
            composites: &[],
        }
    }

    pub const fn with_attributes(self, attributes: &'static [AttrDef]) -> Self {
        Self { attributes, ..self }
    }

    pub const fn with_composites(self, composites: &'static [CompositeDef]) -> Self {
        Self { composites, ..self }
    }
}

/// Attributes contributed by one kind of an ancestor chain.
#[derive(Clone, Copy, Debug)]
pub struct AttrGroup {
    pub owner: NodeKind,
    pub attributes: &'static [AttrDef],
    pub composites: &'static [CompositeDef],
}

// ============================================================================
// SCHEMA
// ============================================================================

static CSHARP: LazyLock<Schema> =
    LazyLock::new(|| Schema::index(&csharp::KIND_DEFS, csharp::SLOT_DEFS));

/// Indexed view over the kind and slot tables.
#[derive(Debug)]
pub struct Schema {
    kinds: &'static [KindDef],
    all_slots: &'static [SlotDef],
    by_name: FxHashMap<&'static str, NodeKind>,
    ancestors: Vec<Box<[NodeKind]>>,
    slots: Vec<Box<[&'static SlotDef]>>,
    attribute_groups: Vec<Box<[AttrGroup]>>,
}

impl Schema {
    /// The C# syntax graph schema, indexed on first use.
    pub fn csharp() -> &'static Schema {
        &CSHARP
    }

    fn index(kinds: &'static [KindDef], all_slots: &'static [SlotDef]) -> Self {
        let by_name = kinds.iter().map(|def| (def.name, def.kind)).collect();

        let ancestors: Vec<Box<[NodeKind]>> = kinds
            .iter()
            .map(|def| {
                let mut chain = Vec::new();
                let mut current = def.supertype;
                // Bounded so a malformed table cannot loop; `defects` reports it.
                while let Some(kind) = current {
                    if chain.len() >= kinds.len() {
                        break;
                    }
                    chain.push(kind);
                    current = kinds.get(kind.index()).and_then(|d| d.supertype);
                }
                chain.reverse();
                chain.into_boxed_slice()
            })
            .collect();

        let mut own: Vec<Vec<&'static SlotDef>> = vec![Vec::new(); kinds.len()];
        for slot in all_slots {
            if let Some(list) = own.get_mut(slot.owner.index()) {
                list.push(slot);
            }
        }

        let mut slots = Vec::with_capacity(kinds.len());
        let mut attribute_groups = Vec::with_capacity(kinds.len());
        for def in kinds {
            let chain = ancestors[def.kind.index()].iter().copied().chain([def.kind]);

            let mut kind_slots = Vec::new();
            let mut groups = Vec::new();
            for kind in chain {
                kind_slots.extend(own[kind.index()].iter().copied());
                let owner = &kinds[kind.index()];
                if !owner.attributes.is_empty() || !owner.composites.is_empty() {
                    groups.push(AttrGroup {
                        owner: kind,
                        attributes: owner.attributes,
                        composites: owner.composites,
                    });
                }
            }
            slots.push(kind_slots.into_boxed_slice());
            attribute_groups.push(groups.into_boxed_slice());
        }

        tracing::debug!(
            kinds = kinds.len(),
            slots = all_slots.len(),
            "indexed syntax graph schema"
        );

        Self {
            kinds,
            all_slots,
            by_name,
            ancestors,
            slots,
            attribute_groups,
        }
    }

    /// Table row of a kind.
    pub fn kind_def(&self, kind: NodeKind) -> &KindDef {
        &self.kinds[kind.index()]
    }

    pub fn supertype(&self, kind: NodeKind) -> Option<NodeKind> {
        self.kind_def(kind).supertype
    }

    pub fn group(&self, kind: NodeKind) -> KindGroup {
        self.kind_def(kind).group
    }

    /// Element name used by the XML rendering, e.g. `statement:IfStatementSyntax`.
    pub fn tag_name(&self, kind: NodeKind) -> String {
        let def = self.kind_def(kind);
        format!("{}:{}", def.group.prefix(), def.name)
    }

    /// Supertype chain of `kind`, root first, excluding `kind` itself.
    pub fn ancestors(&self, kind: NodeKind) -> &[NodeKind] {
        &self.ancestors[kind.index()]
    }

    /// True when `kind` is `ancestor` or derives from it.
    pub fn is_a(&self, kind: NodeKind, ancestor: NodeKind) -> bool {
        kind == ancestor || self.ancestors(kind).contains(&ancestor)
    }

    /// True when nodes of `kind` carry a source position.
    pub fn is_positioned(&self, kind: NodeKind) -> bool {
        self.is_a(kind, NodeKind::Positioned)
    }

    /// Edge slots of `kind` in traversal order.
    pub fn slots(&self, kind: NodeKind) -> &[&'static SlotDef] {
        &self.slots[kind.index()]
    }

    /// Look up a slot by name, searching inherited slots too.
    pub fn slot(&self, kind: NodeKind, name: &str) -> Option<&'static SlotDef> {
        self.slots(kind).iter().copied().find(|slot| slot.name == name)
    }

    /// Attribute groups of `kind`, ancestor to descendant.
    pub fn attribute_groups(&self, kind: NodeKind) -> &[AttrGroup] {
        &self.attribute_groups[kind.index()]
    }

    /// Look up a scalar attribute by name, searching inherited groups too.
    pub fn attribute(&self, kind: NodeKind, name: &str) -> Option<&'static AttrDef> {
        self.attribute_groups(kind)
            .iter()
            .flat_map(|group| group.attributes.iter())
            .find(|attr| attr.name == name)
    }

    pub fn kind_by_name(&self, name: &str) -> Option<NodeKind> {
        self.by_name.get(name).copied()
    }

    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.kinds.iter().map(|def| def.kind)
    }

    pub fn concrete_kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.kinds
            .iter()
            .filter(|def| !def.is_abstract)
            .map(|def| def.kind)
    }

    /// Every slot of the table, in declaration order.
    pub fn all_slots(&self) -> &'static [SlotDef] {
        self.all_slots
    }

    /// Consistency problems of the tables; empty for a well-formed schema.
    pub fn defects(&self) -> Vec<String> {
        let mut defects = Vec::new();

        for (i, def) in self.kinds.iter().enumerate() {
            if def.kind.index() != i {
                defects.push(format!("{} is stored at row {i}", def.name));
            }
            match def.supertype {
                None if def.kind != NodeKind::Base => {
                    defects.push(format!("{} has no supertype", def.name));
                }
                Some(sup) if !self.kind_def(sup).is_abstract => {
                    defects.push(format!("{} derives from concrete {}", def.name, sup));
                }
                _ => {}
            }
            let chain = self.ancestors(def.kind);
            if def.kind != NodeKind::Base && chain.first() != Some(&NodeKind::Base) {
                defects.push(format!("{} is not rooted at Base", def.name));
            }
            if chain.contains(&def.kind) {
                defects.push(format!("{} is its own ancestor", def.name));
            }

            let slots = self.slots(def.kind);
            for (j, slot) in slots.iter().enumerate() {
                if slots[..j].iter().any(|other| other.name == slot.name) {
                    defects.push(format!("{} declares slot {} twice", def.name, slot.name));
                }
            }

            let mut seen = Vec::new();
            for group in self.attribute_groups(def.kind) {
                for attr in group.attributes {
                    if seen.contains(&attr.name) {
                        defects.push(format!("{} declares {} twice", def.name, attr.name));
                    }
                    seen.push(attr.name);
                }
            }
        }

        for slot in self.all_slots {
            if !self.is_positioned(slot.target) {
                defects.push(format!("{} targets unpositioned {}", slot.qualified_name(), slot.target));
            }
        }

        defects
    }
}
