//! In-memory OPC package assembled before being written to disk.
use crate::ooxml::opc::part::BlobPart;
use crate::ooxml::opc::rel::Relationships;

/// An Open Packaging Convention package held in memory.
///
/// Parts are kept in insertion order; adding a part whose partname already
/// exists replaces the earlier one.
#[derive(Debug, Default)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package
    parts: Vec<BlobPart>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part, replacing any part with the same partname.
    pub fn add_part(&mut self, part: BlobPart) {
        match self
            .parts
            .iter_mut()
            .find(|p| p.partname() == part.partname())
        {
            Some(existing) => *existing = part,
            None => self.parts.push(part),
        }
    }

    /// Add a package-level relationship, returning its rId.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }

    /// Get the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Iterate over all parts.
    pub fn iter_parts(&self) -> impl Iterator<Item = &BlobPart> {
        self.parts.iter()
    }

    /// Number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}
