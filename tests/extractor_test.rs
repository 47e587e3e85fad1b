/// End-to-end pipeline tests over the library API
///
/// These tests run the full stream: extraction, decode, validation,
/// filename allocation, and HTML rendering into a temp directory
mod common;

use std::fs;

use export_formatter::{HtmlRenderer, process_file};
use serde_json::json;

use common::{DumpBuilder, file_names, workspace};

#[test]
fn test_single_titled_record_produces_one_document() {
    let (dir, out) = workspace();
    let input = DumpBuilder::new()
        .title("Main Office Firewall")
        .record(&json!({
            "name": "fw-01",
            "questions": [{"question": "Q1", "answer": "A1"}]
        }))
        .blank()
        .write(dir.path());

    let renderer = HtmlRenderer::new(None);
    let summary = process_file(&input, &out, &renderer).unwrap();

    assert_eq!(summary.documents_created, 1);
    assert_eq!(summary.decode_failures, 0);
    assert_eq!(summary.rejected_records, 0);

    let document = fs::read_to_string(out.join("Main Office Firewall.html")).unwrap();
    assert!(document.contains("<h1>Main Office Firewall</h1>"));
    assert!(document.contains("<td>Q1</td><td>A1</td>"));
}

#[test]
fn test_record_without_preceding_title_is_untitled() {
    let (dir, out) = workspace();
    let input = DumpBuilder::new().record(&json!({"name": "fw-01"})).write(dir.path());

    let renderer = HtmlRenderer::new(None);
    let summary = process_file(&input, &out, &renderer).unwrap();

    assert_eq!(summary.documents_created, 1);
    assert_eq!(file_names(&out), vec!["Untitled.html"]);

    // The sentinel title also becomes the document heading
    let document = fs::read_to_string(out.join("Untitled.html")).unwrap();
    assert!(document.contains("<h1>Untitled</h1>"));
}

#[test]
fn test_title_is_consumed_by_each_record() {
    let (dir, out) = workspace();
    let input = DumpBuilder::new()
        .title("First Device")
        .record(&json!({"name": "a"}))
        .record(&json!({"name": "b"}))
        .write(dir.path());

    let renderer = HtmlRenderer::new(None);
    process_file(&input, &out, &renderer).unwrap();

    // The second record must not inherit the first record's title
    assert_eq!(file_names(&out), vec!["First Device.html", "Untitled.html"]);
}

#[test]
fn test_malformed_record_does_not_halt_the_run() {
    let (dir, out) = workspace();
    let input = DumpBuilder::new()
        .title("Good One")
        .record(&json!({"name": "a"}))
        .title("Bad One")
        .raw_line("{")
        .raw_line("  \"name\": \"unterminated")
        .raw_line("}")
        .title("Good Two")
        .record(&json!({"name": "b"}))
        .write(dir.path());

    let renderer = HtmlRenderer::new(None);
    let summary = process_file(&input, &out, &renderer).unwrap();

    assert_eq!(summary.documents_created, 2);
    assert_eq!(summary.decode_failures, 1);
    assert_eq!(file_names(&out), vec!["Good One.html", "Good Two.html"]);
}

#[test]
fn test_rejected_records_produce_no_files() {
    let (dir, out) = workspace();
    let input = DumpBuilder::new()
        .title("Empty Fragment")
        .record(&json!({}))
        .title("Company Without Questions")
        .record(&json!({"company": {"name": "Acme"}, "questions": []}))
        .write(dir.path());

    let renderer = HtmlRenderer::new(None);
    let summary = process_file(&input, &out, &renderer).unwrap();

    assert_eq!(summary.documents_created, 0);
    assert_eq!(summary.rejected_records, 2);
    assert!(file_names(&out).is_empty());
}

#[test]
fn test_duplicate_titles_number_files_in_first_seen_order() {
    let (dir, out) = workspace();
    let input = DumpBuilder::new()
        .title("Switch")
        .record(&json!({"name": "first"}))
        .title("Switch")
        .record(&json!({"name": "second"}))
        .write(dir.path());

    let renderer = HtmlRenderer::new(None);
    let summary = process_file(&input, &out, &renderer).unwrap();

    assert_eq!(summary.documents_created, 2);
    assert_eq!(file_names(&out), vec!["Switch.html", "Switch_1.html"]);

    let first = fs::read_to_string(out.join("Switch.html")).unwrap();
    let second = fs::read_to_string(out.join("Switch_1.html")).unwrap();
    assert!(first.contains("first"));
    assert!(second.contains("second"));
}

#[test]
fn test_inline_records_with_trailing_commas() {
    let (dir, out) = workspace();
    let input = DumpBuilder::new()
        .title("Device A")
        .inline_record(&json!({"name": "a"}))
        .title("Device B")
        .inline_record(&json!({"name": "b"}))
        .write(dir.path());

    let renderer = HtmlRenderer::new(None);
    let summary = process_file(&input, &out, &renderer).unwrap();

    assert_eq!(summary.documents_created, 2);
    assert_eq!(summary.decode_failures, 0);
}

#[test]
fn test_rerun_on_fresh_output_dir_reproduces_contents() {
    let (dir, _) = workspace();
    let input = DumpBuilder::new()
        .title("Device")
        .record(&json!({
            "name": "fw-01",
            "company": {"name": "Acme"},
            "questions": [{"question": "Port", "answer": "443"}]
        }))
        .write(dir.path());

    let renderer = HtmlRenderer::new(None);
    let out_a = dir.path().join("out_a");
    let out_b = dir.path().join("out_b");
    process_file(&input, &out_a, &renderer).unwrap();
    process_file(&input, &out_b, &renderer).unwrap();

    assert_eq!(file_names(&out_a), file_names(&out_b));
    let doc_a = fs::read_to_string(out_a.join("Device.html")).unwrap();
    let doc_b = fs::read_to_string(out_b.join("Device.html")).unwrap();
    assert_eq!(doc_a, doc_b);
}

#[test]
fn test_noise_between_records_is_ignored() {
    let (dir, out) = workspace();
    let long_noise = "x".repeat(200);
    let input = DumpBuilder::new()
        .raw_line("=== EXPORT 2024-06-01 ===")
        .blank()
        .raw_line(&long_noise)
        .title("Real Title")
        .record(&json!({"name": "a"}))
        .write(dir.path());

    let renderer = HtmlRenderer::new(None);
    let summary = process_file(&input, &out, &renderer).unwrap();

    assert_eq!(summary.documents_created, 1);
    // The over-length noise line must not displace the real title
    assert_eq!(file_names(&out), vec!["Real Title.html"]);
}

#[test]
fn test_metadata_and_notes_flow_through_to_document() {
    let (dir, out) = workspace();
    let input = DumpBuilder::new()
        .title("Full Record")
        .record(&json!({
            "name": "fw-01",
            "company": {"name": "Acme"},
            "site": {"name": "HQ"},
            "type": {"name": "Firewall"},
            "status": {"name": "Active"},
            "notes": "general <info>",
            "vendorNotes": "vendor & co",
            "questions": [{"question": "Model", "answer": "X-200"}]
        }))
        .write(dir.path());

    let renderer = HtmlRenderer::new(None);
    process_file(&input, &out, &renderer).unwrap();

    let document = fs::read_to_string(out.join("Full Record.html")).unwrap();
    assert!(document.contains("<th>Company:</th><td>Acme</td>"));
    assert!(document.contains("<th>Site:</th><td>HQ</td>"));
    assert!(document.contains("<th>Type:</th><td>Firewall</td>"));
    assert!(document.contains("<th>Status:</th><td>Active</td>"));
    assert!(document.contains("<b>General:</b> general &lt;info&gt;"));
    assert!(document.contains("<b>Vendor:</b> vendor &amp; co"));
    assert!(document.contains("<td>Model</td><td>X-200</td>"));
}
