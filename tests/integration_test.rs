use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};

use lopdf::content::Content;
use lopdf::{Document, Object};

use control_operativo_pdf::merge::PageMerger;
use control_operativo_pdf::model::{CaseDocument, DocumentType, FinalDisposition, Sex};
use control_operativo_pdf::render::StaticAssetResolver;
use control_operativo_pdf::{generate_report, render_case, CaseRecord, MergeError, Settings};

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture() -> CaseDocument {
    let path = fixtures_path().join("caso_laboral.json");
    let content = fs::read_to_string(&path).expect("Failed to read case fixture");
    serde_json::from_str(&content).expect("Failed to parse case fixture")
}

/// Counts calls and never produces output
struct CountingMerger {
    calls: AtomicUsize,
}

impl PageMerger for CountingMerger {
    fn merge_files(&self, _inputs: &[PathBuf], _output: &Path) -> Result<(), MergeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(MergeError::Unavailable("counting only".to_string()))
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Every string shown on a page, in content-stream order
fn page_strings(bytes: &[u8], page_number: u32) -> Vec<Vec<u8>> {
    let mut doc = Document::load_mem(bytes).expect("Failed to load PDF");
    doc.decompress();
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let content = doc.get_page_content(page_id).expect("Missing page content");
    let content = Content::decode(&content).expect("Failed to decode content");

    let mut strings = Vec::new();
    for op in content.operations {
        match op.operator.as_str() {
            "Tj" | "'" => {
                for operand in &op.operands {
                    if let Object::String(s, _) = operand {
                        strings.push(s.clone());
                    }
                }
            }
            "TJ" => {
                for operand in &op.operands {
                    if let Object::Array(items) = operand {
                        let joined: Vec<u8> = items
                            .iter()
                            .filter_map(|item| match item {
                                Object::String(s, _) => Some(s.clone()),
                                _ => None,
                            })
                            .flatten()
                            .collect();
                        strings.push(joined);
                    }
                }
            }
            _ => {}
        }
    }
    strings
}

fn page_text(bytes: &[u8], page_number: u32) -> String {
    page_strings(bytes, page_number)
        .iter()
        .map(|s| String::from_utf8_lossy(s).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes)
        .expect("Failed to load PDF")
        .get_pages()
        .len()
}

#[test]
fn test_parse_case_fixture() {
    let doc = load_fixture();

    assert_eq!(doc.case.id, 128);
    assert_eq!(doc.case.sex, Sex::Female);
    assert_eq!(doc.case.document_type, DocumentType::CitizenId);
    assert_eq!(
        doc.case.disposition,
        Some(FinalDisposition::ConciliationRequest)
    );
    assert!(doc.case.advisor_opinion.is_empty());
    assert_eq!(doc.attachments.len(), 2);
    assert_eq!(doc.attachments[0].mime_type, "application/pdf");
}

#[test]
fn test_render_fixture_has_two_pages() {
    let doc = load_fixture();
    let pdf_bytes = render_case(&doc.case, &Settings::default(), &StaticAssetResolver::none())
        .expect("Failed to render case");

    assert!(!pdf_bytes.is_empty());
    assert!(pdf_bytes.starts_with(b"%PDF"));
    assert_eq!(page_count(&pdf_bytes), 2);
}

#[test]
fn test_empty_case_has_two_pages() {
    let pdf_bytes = render_case(
        &CaseRecord::default(),
        &Settings::default(),
        &StaticAssetResolver::none(),
    )
    .expect("Failed to render empty case");

    assert_eq!(page_count(&pdf_bytes), 2);
}

#[test]
fn test_long_description_still_two_pages() {
    let mut doc = load_fixture();
    doc.case.case_description = "palabra ".repeat(1250);
    doc.case.student_opinion = "concepto ".repeat(500);
    doc.case.consultant_name = "Nombre ".repeat(40);
    assert!(doc.case.case_description.len() >= 10_000);

    let pdf_bytes = render_case(&doc.case, &Settings::default(), &StaticAssetResolver::none())
        .expect("Failed to render long case");

    assert_eq!(page_count(&pdf_bytes), 2);
}

#[test]
fn test_render_is_deterministic() {
    let doc = load_fixture();
    let settings = Settings::default();
    let first = render_case(&doc.case, &settings, &StaticAssetResolver::none())
        .expect("Failed to render case");
    let second = render_case(&doc.case, &settings, &StaticAssetResolver::none())
        .expect("Failed to render case");

    assert_eq!(first, second);
}

#[test]
fn test_first_page_checkboxes() {
    let doc = load_fixture();
    let pdf_bytes = render_case(&doc.case, &Settings::default(), &StaticAssetResolver::none())
        .expect("Failed to render case");
    let text = page_text(&pdf_bytes, 1);

    assert!(text.contains("Femenino [x]"));
    assert!(text.contains("Masculino [ ]"));
    assert!(text.contains("[x] C.C."));
    assert!(text.contains("[ ] T.I."));
    // Sex and document type only
    assert_eq!(text.matches("[x]").count(), 2);
    assert!(text.contains("Reclamo laboral."));
    assert!(text.contains("I. DATOS DEL USUARIO"));
    // Section V closes the page
    assert!(!text.contains("Estado resultado"));
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_accents_are_single_byte() {
    let doc = load_fixture();
    let pdf_bytes = render_case(&doc.case, &Settings::default(), &StaticAssetResolver::none())
        .expect("Failed to render case");

    for page in [1, 2] {
        for shown in page_strings(&pdf_bytes, page) {
            assert!(
                !shown.contains(&0xC3),
                "UTF-8 lead byte in {:?}",
                String::from_utf8_lossy(&shown)
            );
        }
    }

    let first: Vec<u8> = page_strings(&pdf_bytes, 1).concat();
    assert!(contains_bytes(&first, b"G\xF3mez"));
    assert!(contains_bytes(&first, b"JUR\xCDDICA"));
    assert!(contains_bytes(&first, b"Pe\xF1a"));
}

#[test]
fn test_second_page_declarations() {
    let doc = load_fixture();
    let pdf_bytes = render_case(&doc.case, &Settings::default(), &StaticAssetResolver::none())
        .expect("Failed to render case");
    let text = page_text(&pdf_bytes, 2);

    assert!(text.contains("Firma del Usuario"));
    assert!(text.contains("Calle 6C No. 94I - 25"));
    // Case data stays on the first page
    assert!(!text.contains("Reclamo laboral."));
}

#[test]
fn test_case_number_badge() {
    let doc = load_fixture();
    let settings = Settings {
        show_case_number: true,
        ..Default::default()
    };
    let pdf_bytes = render_case(&doc.case, &settings, &StaticAssetResolver::none())
        .expect("Failed to render case");

    assert!(page_text(&pdf_bytes, 1).contains("PDF #128"));
    assert!(page_text(&pdf_bytes, 2).contains("PDF #128"));

    let plain = render_case(&doc.case, &Settings::default(), &StaticAssetResolver::none())
        .expect("Failed to render case");
    assert!(!page_text(&plain, 1).contains("PDF #"));
    assert!(!page_text(&plain, 2).contains("PDF #"));
}

#[test]
fn test_png_crest_is_embedded() {
    let doc = load_fixture();
    let png = fs::read(fixtures_path().join("escudo.png")).expect("Failed to read crest fixture");
    let pdf_bytes = render_case(
        &doc.case,
        &Settings::default(),
        &StaticAssetResolver::raster(png),
    )
    .expect("Failed to render case with PNG crest");

    assert_eq!(page_count(&pdf_bytes), 2);
    assert!(!page_text(&pdf_bytes, 1).contains("UCMC"));
}

#[test]
fn test_svg_crest_is_embedded() {
    let doc = load_fixture();
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="120" viewBox="0 0 100 120"><rect x="0" y="0" width="100" height="120" fill="#003366"/></svg>"##;
    let pdf_bytes = render_case(
        &doc.case,
        &Settings::default(),
        &StaticAssetResolver::svg(svg),
    )
    .expect("Failed to render case with crest");

    assert_eq!(page_count(&pdf_bytes), 2);
    // The drawn fallback is not used when a crest is embedded
    assert!(!page_text(&pdf_bytes, 1).contains("UCMC"));
}

#[test]
fn test_generate_report_with_missing_attachments() {
    let doc = load_fixture();
    let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
    let settings = Settings {
        temp_dir: temp.path().to_path_buf(),
        ..Default::default()
    };
    let merger = CountingMerger {
        calls: AtomicUsize::new(0),
    };

    let report = generate_report(
        &doc.case,
        &doc.attachments,
        &settings,
        &StaticAssetResolver::none(),
        &merger,
    )
    .expect("Failed to generate report");

    // Nothing eligible exists on disk, so the merger is never invoked
    assert_eq!(merger.calls.load(Ordering::SeqCst), 0);

    let unmerged = render_case(&doc.case, &settings, &StaticAssetResolver::none())
        .expect("Failed to render case");
    assert_eq!(report.bytes, unmerged);
    assert_eq!(report.headers.content_type, "application/pdf");
    assert_eq!(
        report.headers.content_disposition,
        "attachment; filename=control_operativo_128.pdf"
    );
    assert_eq!(report.headers.content_length, report.bytes.len());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_writes_report() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = temp.path().join("salida.pdf");

    let status = Command::new(env!("CARGO_BIN_EXE_control-operativo-pdf"))
        .arg(fixtures_path().join("caso_laboral.json"))
        .arg("-o")
        .arg(&output)
        .arg("--no-merge")
        .arg("--crest")
        .arg(temp.path().join("no_crest.svg"))
        .status()
        .expect("Failed to run control-operativo-pdf");

    assert!(status.success());
    let pdf_bytes = fs::read(&output).expect("Output PDF not written");
    assert!(pdf_bytes.starts_with(b"%PDF"));
    assert_eq!(page_count(&pdf_bytes), 2);
}

#[test]
fn test_cli_rejects_invalid_json() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
    let input = temp.path().join("roto.json");
    fs::write(&input, "{ not json").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_control-operativo-pdf"))
        .arg(&input)
        .arg("--no-merge")
        .status()
        .expect("Failed to run control-operativo-pdf");

    assert!(!status.success());
    assert!(!temp.path().join("control_operativo_0.pdf").exists());
}
