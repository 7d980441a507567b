use super::*;
use crate::deck::FOOTER_ELEMENT;
use crate::records::{AgendaSlide, ClosingSlide, CompareSlide, SectionSlide, TitleSlide};
use pretty_assertions::assert_eq;

fn title(text: &str) -> Record {
    Record::Known(SlideRecord::Title(TitleSlide {
        title: text.to_string(),
        date: Some("2026-10-18".to_string()),
        notes: None,
    }))
}

fn agenda(items: &[&str]) -> Record {
    Record::Known(SlideRecord::Agenda(AgendaSlide {
        title: "Agenda".to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }))
}

fn section(no: u32) -> Record {
    Record::Known(SlideRecord::Section(SectionSlide {
        title: format!("Part {}", no),
        section_no: Some(no),
        notes: None,
    }))
}

fn run(records: &[Record], options: &GenerateOptions) -> (MemoryBackend, GenerationReport) {
    let mut backend = MemoryBackend::new();
    let report = generate(&mut backend, &ThemeConfig::default(), records, options)
        .expect("generation should succeed");
    (backend, report)
}

fn saved(backend: &MemoryBackend, report: &GenerationReport) -> Deck {
    backend.deck(&report.deck_id).expect("deck should be saved")
}

#[test]
fn test_one_surface_per_record_without_leading_title() {
    let records = vec![agenda(&["A"]), section(1), section(2)];
    let (backend, report) = run(&records, &GenerateOptions::default());

    assert_eq!(report.surface_count, 3);
    let deck = saved(&backend, &report);
    assert_eq!(deck.len(), 3);
    assert!(deck.surfaces.iter().all(|s| !s.is_blank()));
    assert!(deck.surfaces.iter().all(Surface::has_footer));
}

#[test]
fn test_kickoff_example() {
    let records = vec![title("Kickoff\nSub"), agenda(&["A", "B", "C"])];
    let (backend, report) = run(&records, &GenerateOptions::default());

    assert_eq!(report.title, "Kickoff");
    assert_eq!(report.surface_count, 2);
    assert!(report.warnings.is_empty());

    let deck = saved(&backend, &report);
    assert_eq!(deck.title, "Kickoff");
    assert!(!deck.surfaces[0].has_footer());
    assert!(deck.surfaces[1].has_footer());

    let offsets: Vec<f64> = (1..=3)
        .map(|n| {
            deck.surfaces[1]
                .element(&format!("Item {}", n))
                .expect("agenda item")
                .bounds
                .y
        })
        .collect();
    assert!(offsets[0] < offsets[1] && offsets[1] < offsets[2]);
    let first_gap = offsets[1] - offsets[0];
    let second_gap = offsets[2] - offsets[1];
    assert!((first_gap - second_gap).abs() < 1e-9);
}

#[test]
fn test_title_in_later_position_gets_footer() {
    let records = vec![section(1), title("Late")];
    let (backend, report) = run(&records, &GenerateOptions::default());
    let deck = saved(&backend, &report);
    assert!(deck.surfaces.iter().all(Surface::has_footer));
}

#[test]
fn test_empty_footer_disables_stamps() {
    let options = GenerateOptions {
        settings: Some(ThemeSettings {
            footer_text: Some(String::new()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let records = vec![title("Deck"), agenda(&["A"]), section(1)];
    let (backend, report) = run(&records, &options);
    let deck = saved(&backend, &report);
    assert!(deck.surfaces.iter().all(|s| s.element(FOOTER_ELEMENT).is_none()));
}

#[test]
fn test_custom_footer_text() {
    let options = GenerateOptions {
        settings: Some(ThemeSettings {
            footer_text: Some("ACME Confidential".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let (backend, report) = run(&[section(1)], &options);
    let deck = saved(&backend, &report);
    let footer = deck.surfaces[0].element(FOOTER_ELEMENT).expect("footer");
    assert_eq!(
        footer.text.as_ref().map(|t| t.text.as_str()),
        Some("ACME Confidential")
    );
}

#[test]
fn test_unknown_tag_is_skipped() {
    let records = parse_records(
        r#"[{"type": "agenda", "title": "A", "items": ["x"]},
            {"type": "chart", "data": [1, 2]},
            {"type": "closing"}]"#,
    )
    .unwrap();
    let (backend, report) = run(&records, &GenerateOptions::default());

    assert_eq!(
        report.warnings,
        vec![
            Warning::UnknownRecord {
                index: 1,
                tag: "chart".to_string()
            },
            Warning::LeadingBlankKept { skipped: 1 },
        ]
    );
    // Two rendered surfaces plus the blank one do not exceed three records
    let deck = saved(&backend, &report);
    assert_eq!(deck.len(), 3);
    assert!(deck.surfaces[0].element("Title").is_none());
    assert!(deck.surfaces[0].has_footer());
    assert!(deck.surfaces[2].element("Message").is_some());
}

#[test]
fn test_invalid_record_is_reported() {
    let records = parse_records(r#"[{"type": "agenda", "items": "not a list"}]"#).unwrap();
    let (_, report) = run(&records, &GenerateOptions::default());
    assert!(matches!(
        report.warnings.as_slice(),
        [
            Warning::InvalidRecord { index: 0, .. },
            Warning::LeadingBlankKept { skipped: 1 }
        ]
    ));
}

#[test]
fn test_no_blank_warning_when_nothing_is_skipped() {
    let (_, report) = run(&[title("Deck"), section(1)], &GenerateOptions::default());
    assert!(!report
        .warnings
        .iter()
        .any(|w| matches!(w, Warning::LeadingBlankKept { .. })));
}

#[test]
fn test_mistyped_optional_fields_still_render() {
    let records = parse_records(
        r#"[{"type": "title", "title": "Kickoff", "date": 20260401},
            {"type": "section", "title": "Part", "sectionNo": "2"}]"#,
    )
    .unwrap();
    let (backend, report) = run(&records, &GenerateOptions::default());

    assert_eq!(report.title, "Kickoff");
    assert_eq!(report.surface_count, 2);
    let incomplete: Vec<(usize, &str)> = report
        .warnings
        .iter()
        .filter_map(|w| match w {
            Warning::IncompleteRecord { index, tag, .. } => Some((*index, tag.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(incomplete, vec![(0, "title"), (1, "section")]);
    assert_eq!(report.warnings.len(), 2);

    let deck = saved(&backend, &report);
    assert!(!deck.surfaces[0].has_footer());
    assert!(deck.surfaces[0].element("Title").is_some());
    assert!(deck.surfaces[0].element("Date").is_none());
    assert!(deck.surfaces[1].element("Section Number").is_none());
    assert!(deck.surfaces[1].has_footer());
}

#[test]
fn test_partial_record_yields_incomplete_warning() {
    let records = vec![Record::Known(SlideRecord::Compare(CompareSlide {
        title: "Before / After".to_string(),
        left_title: "Before".to_string(),
        left_items: vec!["Manual".to_string()],
        ..Default::default()
    }))];
    let (backend, report) = run(&records, &GenerateOptions::default());

    assert_eq!(report.surface_count, 1);
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, Warning::IncompleteRecord { tag, .. } if tag == "compare")));
    let deck = saved(&backend, &report);
    assert!(deck.surfaces[0].element("Left Items").is_some());
}

#[test]
fn test_settings_reach_generators() {
    let options = GenerateOptions {
        settings: Some(ThemeSettings {
            theme_color: Some("#E94560".to_string()),
            font_family: Some("M PLUS Rounded 1c".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let (backend, report) = run(&[title("Deck"), agenda(&["A", "B"])], &options);
    let deck = saved(&backend, &report);

    for surface in &deck.surfaces {
        for element in &surface.elements {
            if let Some(run) = &element.text {
                assert_eq!(run.font_family, "M PLUS Rounded 1c");
            }
        }
    }
    let heading = deck.surfaces[1].element("Title").and_then(|e| e.text.as_ref());
    assert_eq!(heading.map(|t| t.color.to_hex()), Some("E94560".to_string()));
}

#[test]
fn test_base_theme_is_not_mutated() {
    let base = ThemeConfig::default();
    let mut backend = MemoryBackend::new();
    let options = GenerateOptions {
        settings: Some(ThemeSettings {
            footer_text: Some(String::new()),
            ..Default::default()
        }),
        ..Default::default()
    };
    generate(&mut backend, &base, &[section(1)], &options).unwrap();
    assert_eq!(base, ThemeConfig::default());

    let report = generate(&mut backend, &base, &[section(1)], &GenerateOptions::default()).unwrap();
    assert!(saved(&backend, &report).surfaces[0].has_footer());
}

#[test]
fn test_invalid_color_fails_before_backend() {
    let mut backend = MemoryBackend::new();
    let options = GenerateOptions {
        settings: Some(ThemeSettings {
            theme_color: Some("blue".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(generate(&mut backend, &ThemeConfig::default(), &[section(1)], &options).is_err());
    assert_eq!(backend.deck_count(), 0);
}

#[test]
fn test_fatal_backend_errors_propagate() {
    let mut backend = MemoryBackend::new();
    backend.fail_create();
    let err = generate(&mut backend, &ThemeConfig::default(), &[section(1)], &GenerateOptions::default())
        .unwrap_err();
    assert!(matches!(err, SlideError::BackendError { .. }));

    let mut backend = MemoryBackend::new();
    backend.fail_save();
    assert!(generate(&mut backend, &ThemeConfig::default(), &[section(1)], &GenerateOptions::default()).is_err());
}

#[test]
fn test_placement_into_known_folder() {
    let folder_id = "1AbCdEfGhIjKlMnOpQrStUvWxYz";
    let mut backend = MemoryBackend::new().with_folder(folder_id);
    let options = GenerateOptions {
        settings: Some(ThemeSettings {
            output_folder_url: Some(format!("https://drive.google.com/drive/folders/{}", folder_id)),
            ..Default::default()
        }),
        ..Default::default()
    };
    let report = generate(&mut backend, &ThemeConfig::default(), &[section(1)], &options).unwrap();
    assert!(report.warnings.is_empty());
    assert_eq!(backend.folder_of(&report.deck_id).as_deref(), Some(folder_id));
}

#[test]
fn test_placement_failures_are_warnings() {
    let unknown = GenerateOptions {
        settings: Some(ThemeSettings {
            output_folder_url: Some("https://drive.google.com/drive/folders/1ZZZZZZZZZZZZZZZZZZZZZZZZZZ".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let (backend, report) = run(&[section(1)], &unknown);
    assert_eq!(report.url, format!("memory://decks/{}", report.deck_id));
    assert!(matches!(report.warnings.as_slice(), [Warning::PlacementFailed { .. }]));
    assert_eq!(backend.folder_of(&report.deck_id), None);

    let no_id = GenerateOptions {
        settings: Some(ThemeSettings {
            output_folder_url: Some("https://example.com/folders/short".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let (_, report) = run(&[section(1)], &no_id);
    assert!(matches!(report.warnings.as_slice(), [Warning::FolderIdNotFound { .. }]));
}

#[test]
fn test_failed_move_keeps_original_url() {
    let folder_id = "1AbCdEfGhIjKlMnOpQrStUvWxYz";
    let mut backend = MemoryBackend::new().with_folder(folder_id);
    backend.fail_move();
    let options = GenerateOptions {
        settings: Some(ThemeSettings {
            output_folder_url: Some(folder_id.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let report = generate(&mut backend, &ThemeConfig::default(), &[section(1)], &options).unwrap();
    assert_eq!(report.url, format!("memory://decks/{}", report.deck_id));
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn test_explicit_title_wins() {
    let options = GenerateOptions {
        title: Some("Board Review".to_string()),
        ..Default::default()
    };
    let (_, report) = run(&[title("Kickoff")], &options);
    assert_eq!(report.title, "Board Review");

    let (_, report) = run(&[section(1)], &GenerateOptions::default());
    assert_eq!(report.title, generate::FALLBACK_TITLE);
}

#[test]
fn test_empty_record_array_drops_blank_surface() {
    let (backend, report) = run(&[], &GenerateOptions::default());
    assert_eq!(report.surface_count, 0);
    assert!(saved(&backend, &report).is_empty());
}

#[test]
fn test_notes_reach_notes_channel() {
    let records = vec![Record::Known(SlideRecord::Closing(ClosingSlide {
        notes: Some("Thank the team".to_string()),
    }))];
    let (backend, report) = run(&records, &GenerateOptions::default());
    let deck = saved(&backend, &report);
    assert_eq!(deck.surfaces[0].notes.as_deref(), Some("Thank the team"));
    assert!(deck.surfaces[0].texts().all(|t| t != "Thank the team"));
}

#[test]
fn test_sample_deck_renders_every_template() {
    let records: Vec<Record> = sample_records().into_iter().map(Record::from).collect();
    let (_, report) = run(&records, &GenerateOptions::default());
    assert_eq!(report.surface_count, records.len());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}
