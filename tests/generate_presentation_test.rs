use pretty_assertions::assert_eq;
use slidegen::{
    create_presentation_from_json, handle_post, PptxBackend, ThemeConfig, Warning,
};
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipArchive;

const KICKOFF: &str = r#"[
    {"type": "title", "title": "Kickoff\nSub", "date": "2026-10-18", "notes": "Open with the goal"},
    {"type": "agenda", "title": "Agenda", "items": ["A", "B", "C"]}
]"#;

const FOLDER_ID: &str = "1AbCdEfGhIjKlMnOpQrStUvWxYz";

fn read_part(path: &Path, name: &str) -> String {
    let file = fs::File::open(path).expect("Failed to open PPTX");
    let mut archive = ZipArchive::new(file).expect("Failed to read PPTX as zip");
    let mut part = archive.by_name(name).expect("Missing PPTX part");
    let mut content = String::new();
    part.read_to_string(&mut content).expect("Failed to read part");
    content
}

fn part_names(path: &Path) -> Vec<String> {
    let file = fs::File::open(path).expect("Failed to open PPTX");
    let archive = ZipArchive::new(file).expect("Failed to read PPTX as zip");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

#[test]
fn test_kickoff_deck_is_written() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut backend = PptxBackend::new(temp_dir.path().join("out"), temp_dir.path());

    let report =
        create_presentation_from_json(&mut backend, &ThemeConfig::default(), KICKOFF, None)
            .expect("generation failed");

    assert_eq!(report.title, "Kickoff");
    assert_eq!(report.surface_count, 2);
    assert!(report.url.starts_with("file://"));

    let path = backend.path_of(&report.deck_id).expect("deck path").to_path_buf();
    assert!(path.exists());

    let names = part_names(&path);
    assert!(names.contains(&"ppt/slides/slide1.xml".to_string()));
    assert!(names.contains(&"ppt/slides/slide2.xml".to_string()));
    assert!(!names.contains(&"ppt/slides/slide3.xml".to_string()));
    assert!(names.contains(&"ppt/notesSlides/notesSlide1.xml".to_string()));

    let presentation = read_part(&path, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));

    let title_slide = read_part(&path, "ppt/slides/slide1.xml");
    assert!(title_slide.contains("<a:t>Kickoff</a:t>"));
    assert!(!title_slide.contains("© Google Inc."));

    let agenda_slide = read_part(&path, "ppt/slides/slide2.xml");
    for item in ["A", "B", "C"] {
        assert!(agenda_slide.contains(&format!("<a:t>{}</a:t>", item)));
    }
    assert!(agenda_slide.contains("© Google Inc."));
    assert!(agenda_slide.contains(r#"<a:latin typeface="Noto Sans JP"/>"#));

    let notes = read_part(&path, "ppt/notesSlides/notesSlide1.xml");
    assert!(notes.contains("Open with the goal"));
}

#[test]
fn test_settings_change_the_package() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut backend = PptxBackend::new(temp_dir.path(), temp_dir.path());
    let settings = r##"{"themeColor": "#0F3460", "fontFamily": "Biz UDMincho", "footerText": ""}"##;

    let report =
        create_presentation_from_json(&mut backend, &ThemeConfig::default(), KICKOFF, Some(settings))
            .expect("generation failed");
    let path = backend.path_of(&report.deck_id).expect("deck path").to_path_buf();

    let agenda_slide = read_part(&path, "ppt/slides/slide2.xml");
    assert!(agenda_slide.contains(r#"<a:srgbClr val="0F3460"/>"#));
    assert!(agenda_slide.contains(r#"typeface="Biz UDMincho""#));
    assert!(!agenda_slide.contains(r#"name="Footer""#));
}

#[test]
fn test_deck_is_moved_into_folder() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let folder = temp_dir.path().join("folders").join(FOLDER_ID);
    fs::create_dir_all(&folder).expect("Failed to create folder");

    let mut backend = PptxBackend::new(temp_dir.path().join("out"), temp_dir.path().join("folders"));
    let settings = format!(
        r#"{{"outputFolderUrl": "https://drive.google.com/drive/folders/{}"}}"#,
        FOLDER_ID
    );
    let report =
        create_presentation_from_json(&mut backend, &ThemeConfig::default(), KICKOFF, Some(&settings))
            .expect("generation failed");

    assert!(report.warnings.is_empty());
    let path = backend.path_of(&report.deck_id).expect("deck path");
    assert!(path.starts_with(&folder));
    assert!(report.url.contains(FOLDER_ID));
    assert_eq!(fs::read_dir(temp_dir.path().join("out")).unwrap().count(), 0);
}

#[test]
fn test_missing_folder_leaves_deck_in_place() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut backend = PptxBackend::new(temp_dir.path().join("out"), temp_dir.path().join("folders"));
    let settings = format!(r#"{{"outputFolderUrl": "{}"}}"#, FOLDER_ID);

    let report =
        create_presentation_from_json(&mut backend, &ThemeConfig::default(), KICKOFF, Some(&settings))
            .expect("placement failures are not fatal");

    assert!(matches!(
        report.warnings.as_slice(),
        [Warning::PlacementFailed { folder_id, .. }] if folder_id == FOLDER_ID
    ));
    let path = backend.path_of(&report.deck_id).expect("deck path");
    assert!(path.starts_with(temp_dir.path().join("out")));
}

#[test]
fn test_post_writes_a_deck() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut backend = PptxBackend::new(temp_dir.path(), temp_dir.path());
    let body = format!(r#"{{"slides": {}, "settings": {{"presetName": "Corporate"}}}}"#, KICKOFF);

    let response = handle_post(&mut backend, &ThemeConfig::default(), &body);
    assert!(response.success, "{:?}", response.error);
    assert!(response.url.unwrap_or_default().ends_with(".pptx"));
}

#[test]
fn test_unwritable_output_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("file");
    fs::write(&blocker, "not a directory").expect("Failed to write file");
    let mut backend = PptxBackend::new(blocker.join("out"), temp_dir.path());

    let err = create_presentation_from_json(&mut backend, &ThemeConfig::default(), KICKOFF, None)
        .unwrap_err();
    assert!(err.to_string().starts_with("Slide generation failed: "));
}
