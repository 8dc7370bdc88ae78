//! PDF post-processing
//!
//! printpdf writes uncompressed streams, a random document ID and the
//! current time into every file. `finalize_pdf` compresses the streams and
//! pins everything time- or run-dependent so the same case always yields the
//! same bytes.

use std::io::Cursor;

use lopdf::{Document, Object};

/// Fixed timestamp written to the Info dictionary
pub const FIXED_PDF_DATE: &str = "D:20000101000000Z";

/// Compress streams and strip run-dependent metadata
pub fn finalize_pdf(raw: Vec<u8>) -> Result<Vec<u8>, String> {
    let mut doc = Document::load_mem(&raw)
        .map_err(|e| format!("Failed to parse generated PDF: {}", e))?;

    normalize_metadata(&mut doc);
    doc.prune_objects();
    doc.compress();
    save(&mut doc)
}

fn normalize_metadata(doc: &mut Document) {
    doc.trailer.remove(b"ID");

    if let Ok(info_id) = doc.trailer.get(b"Info").and_then(Object::as_reference) {
        if let Ok(info) = doc.get_object_mut(info_id).and_then(Object::as_dict_mut) {
            for key in [&b"CreationDate"[..], &b"ModDate"[..]] {
                if info.has(key) {
                    info.set(key, Object::string_literal(FIXED_PDF_DATE));
                }
            }
        }
    }

    // The XMP packet carries its own timestamps and instance ID
    if let Ok(root_id) = doc.trailer.get(b"Root").and_then(Object::as_reference) {
        if let Ok(catalog) = doc.get_object_mut(root_id).and_then(Object::as_dict_mut) {
            catalog.remove(b"Metadata");
        }
    }
}

fn save(doc: &mut Document) -> Result<Vec<u8>, String> {
    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| format!("Failed to save PDF: {}", e))?;
    Ok(output.into_inner())
}
