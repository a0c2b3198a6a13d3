/// Identifier of a node in a [`Graph`](crate::graph::Graph).
///
/// Ids are assigned by the front-end and are unique within one graph.
/// `0` is the null id: it names no node and stands for "no parent".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize), serde(transparent))]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NULL: NodeId = NodeId(0);

    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Renders as `id<N>`, the identifier convention of the XML dump.
impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(NodeId::new(42).to_string(), "id42");
        assert_eq!(NodeId::NULL.to_string(), "id0");
    }

    #[test]
    fn test_null() {
        assert!(NodeId::NULL.is_null());
        assert!(NodeId::default().is_null());
        assert!(!NodeId::from(7).is_null());
    }
}
