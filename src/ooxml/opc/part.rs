//! Parts of an OPC package.
//!
//! A part is a named blob with a content type and its own relationships.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A part that stores its serialized content as bytes.
#[derive(Debug)]
pub struct BlobPart {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    /// The binary content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl BlobPart {
    /// Create a new BlobPart.
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels: Relationships::new(),
        }
    }

    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the content of this part.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a relationship to another part, returning its rId.
    ///
    /// `target_ref` is relative to this part's base URI.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }
}
