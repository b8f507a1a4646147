//! Relationship-related objects for OPC packages.
//!
//! Relationships connect a source (the package or a part) to target parts.
//! Only internal relationships are produced by this writer.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's base URI
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source.
///
/// Relationships keep their insertion order so that `rId` numbering and the
/// serialized `.rels` part are deterministic.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or add a relationship to a target part and return its rId.
    ///
    /// If a relationship of the given type to the target already exists,
    /// its rId is returned; otherwise a new one is created with the next rId.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref: target_ref.to_string(),
        });
        r_id
    }

    /// Get an iterator over all relationships.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Get the number of relationships in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to the XML of a .rels part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in self.iter() {
            xml.push_str(r#"<Relationship Id=""#);
            xml.push_str(&escape_xml(&rel.r_id));
            xml.push_str(r#"" Type=""#);
            xml.push_str(&escape_xml(&rel.reltype));
            xml.push_str(r#"" Target=""#);
            xml.push_str(&escape_xml(&rel.target_ref));
            xml.push_str(r#""/>"#);
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_get_or_add_numbers_sequentially() {
        let mut rels = Relationships::new();
        assert_eq!(rels.get_or_add(rt::WORKSHEET, "worksheets/sheet1.xml"), "rId1");
        assert_eq!(rels.get_or_add(rt::STYLES, "styles.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_get_or_add_reuses_existing() {
        let mut rels = Relationships::new();
        let first = rels.get_or_add(rt::STYLES, "styles.xml");
        let second = rels.get_or_add(rt::STYLES, "styles.xml");
        assert_eq!(first, second);
        assert_eq!(rels.len(), 1);
        let rel = rels.iter().find(|rel| rel.r_id() == first).unwrap();
        assert_eq!(rel.target_ref(), "styles.xml");
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new();
        rels.get_or_add(rt::OFFICE_DOCUMENT, "xl/workbook.xml");
        let xml = rels.to_xml();
        assert!(xml.contains(r#"<Relationship Id="rId1""#));
        assert!(xml.contains(r#"Target="xl/workbook.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}
