// ABOUTME: Slide record types for the slidegen application
// ABOUTME: The tagged union of the twelve slide templates and how incoming JSON maps onto it

use crate::errors::{Result, SlideError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgendaSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompareSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    pub left_title: String,
    pub right_title: String,
    pub left_items: Vec<String>,
    pub right_items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PyramidLevel {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PyramidSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    pub levels: Vec<PyramidLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Title plus description; shared by the card-style templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardItem {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulletCardsSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    pub items: Vec<CardItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriangleSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    pub items: Vec<CardItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderCardsSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    pub items: Vec<CardItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleItem {
    pub label: String,
    pub sub_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    pub items: Vec<CycleItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepUpSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    pub items: Vec<CardItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClosingSlide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One slide of the catalog, tagged by `type` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SlideRecord {
    Title(TitleSlide),
    Agenda(AgendaSlide),
    Section(SectionSlide),
    Compare(CompareSlide),
    Pyramid(PyramidSlide),
    BulletCards(BulletCardsSlide),
    Process(ProcessSlide),
    Triangle(TriangleSlide),
    HeaderCards(HeaderCardsSlide),
    Cycle(CycleSlide),
    StepUp(StepUpSlide),
    Closing(ClosingSlide),
}

/// Wire tags of every known template
pub const SLIDE_TYPES: [&str; 12] = [
    "title",
    "agenda",
    "section",
    "compare",
    "pyramid",
    "bulletCards",
    "process",
    "triangle",
    "headerCards",
    "cycle",
    "stepUp",
    "closing",
];

impl SlideRecord {
    pub fn tag(&self) -> &'static str {
        match self {
            SlideRecord::Title(_) => "title",
            SlideRecord::Agenda(_) => "agenda",
            SlideRecord::Section(_) => "section",
            SlideRecord::Compare(_) => "compare",
            SlideRecord::Pyramid(_) => "pyramid",
            SlideRecord::BulletCards(_) => "bulletCards",
            SlideRecord::Process(_) => "process",
            SlideRecord::Triangle(_) => "triangle",
            SlideRecord::HeaderCards(_) => "headerCards",
            SlideRecord::Cycle(_) => "cycle",
            SlideRecord::StepUp(_) => "stepUp",
            SlideRecord::Closing(_) => "closing",
        }
    }

    pub fn notes(&self) -> Option<&str> {
        let notes = match self {
            SlideRecord::Title(s) => &s.notes,
            SlideRecord::Agenda(s) => &s.notes,
            SlideRecord::Section(s) => &s.notes,
            SlideRecord::Compare(s) => &s.notes,
            SlideRecord::Pyramid(s) => &s.notes,
            SlideRecord::BulletCards(s) => &s.notes,
            SlideRecord::Process(s) => &s.notes,
            SlideRecord::Triangle(s) => &s.notes,
            SlideRecord::HeaderCards(s) => &s.notes,
            SlideRecord::Cycle(s) => &s.notes,
            SlideRecord::StepUp(s) => &s.notes,
            SlideRecord::Closing(s) => &s.notes,
        };
        notes.as_deref()
    }
}

/// One entry of the incoming record array
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Known(SlideRecord),
    /// Usable record after dropping optional fields of the wrong type
    Partial {
        slide: SlideRecord,
        ignored: Vec<String>,
    },
    /// Tag outside the catalog (or no tag at all)
    Unknown { tag: String },
    /// Known tag whose fields have the wrong shape
    Invalid { tag: String, reason: String },
}

impl Record {
    /// Classify a JSON value; never fails, so one bad entry cannot sink the array
    pub fn from_value(value: Value) -> Self {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if !SLIDE_TYPES.contains(&tag.as_str()) {
            return Record::Unknown { tag };
        }

        let (value, ignored) = drop_mistyped_optionals(&tag, value);
        match serde_json::from_value::<SlideRecord>(value) {
            Ok(slide) if ignored.is_empty() => Record::Known(slide),
            Ok(slide) => Record::Partial { slide, ignored },
            Err(e) => Record::Invalid {
                tag,
                reason: e.to_string(),
            },
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Record::Known(slide) | Record::Partial { slide, .. } => slide.tag(),
            Record::Unknown { tag } | Record::Invalid { tag, .. } => tag,
        }
    }

    pub fn as_slide(&self) -> Option<&SlideRecord> {
        match self {
            Record::Known(slide) | Record::Partial { slide, .. } => Some(slide),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Text,
    Count,
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            _ if value.is_null() => true,
            FieldKind::Text => value.is_string(),
            FieldKind::Count => value.as_u64().map_or(false, |n| n <= u64::from(u32::MAX)),
        }
    }
}

/// Optional fields a template can live without
fn optional_fields(tag: &str) -> &'static [(&'static str, FieldKind)] {
    match tag {
        "title" => &[("date", FieldKind::Text), ("notes", FieldKind::Text)],
        "section" => &[("sectionNo", FieldKind::Count), ("notes", FieldKind::Text)],
        "headerCards" => &[
            ("subhead", FieldKind::Text),
            ("columns", FieldKind::Count),
            ("notes", FieldKind::Text),
        ],
        "cycle" => &[
            ("subhead", FieldKind::Text),
            ("centerText", FieldKind::Text),
            ("notes", FieldKind::Text),
        ],
        "closing" => &[("notes", FieldKind::Text)],
        _ => &[("subhead", FieldKind::Text), ("notes", FieldKind::Text)],
    }
}

/// Remove optional fields whose JSON type is wrong and say which ones went
fn drop_mistyped_optionals(tag: &str, mut value: Value) -> (Value, Vec<String>) {
    let mut ignored = Vec::new();
    if let Value::Object(fields) = &mut value {
        for (key, kind) in optional_fields(tag) {
            if fields.get(*key).map_or(false, |v| !kind.accepts(v)) {
                fields.remove(*key);
                ignored.push(format!("{} has the wrong type and was ignored", key));
            }
        }
    }
    (value, ignored)
}

impl From<SlideRecord> for Record {
    fn from(slide: SlideRecord) -> Self {
        Record::Known(slide)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Record::from_value)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Record::Known(slide) | Record::Partial { slide, .. } => slide.serialize(serializer),
            Record::Unknown { tag } | Record::Invalid { tag, .. } => {
                serde_json::json!({ "type": tag }).serialize(serializer)
            }
        }
    }
}

/// Parse a JSON array of slide records
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(items) => Ok(items.into_iter().map(Record::from_value).collect()),
        other => Err(SlideError::InputError(format!(
            "expected a JSON array of slide records, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Built-in demo deck covering every template
pub fn sample_records() -> Vec<SlideRecord> {
    let card = |title: &str, desc: &str| CardItem {
        title: title.to_string(),
        desc: desc.to_string(),
    };
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        SlideRecord::Title(TitleSlide {
            title: "New Hire Orientation\nTaking the first step".to_string(),
            date: Some("2026.04.01".to_string()),
            notes: Some("Welcome everyone, and congratulations on joining.".to_string()),
        }),
        SlideRecord::Agenda(AgendaSlide {
            title: "Today's Program".to_string(),
            subhead: Some("An overview of the training".to_string()),
            items: strings(&[
                "The professional mindset",
                "Business etiquette basics",
                "Communication that keeps work moving",
                "The work cycle and time management",
                "Reflection and goal setting",
            ]),
            notes: None,
        }),
        SlideRecord::Section(SectionSlide {
            title: "The Professional Mindset".to_string(),
            section_no: Some(1),
            notes: None,
        }),
        SlideRecord::Compare(CompareSlide {
            title: "Student vs. Professional".to_string(),
            subhead: None,
            left_title: "Student".to_string(),
            right_title: "Professional".to_string(),
            left_items: strings(&["You pay to learn", "Results are your own"]),
            right_items: strings(&["You are paid to deliver", "Results belong to the team"]),
            notes: None,
        }),
        SlideRecord::Pyramid(PyramidSlide {
            title: "Levels of Trust".to_string(),
            subhead: None,
            levels: vec![
                PyramidLevel {
                    title: "Leadership".to_string(),
                    description: "Others follow your judgement".to_string(),
                },
                PyramidLevel {
                    title: "Reliability".to_string(),
                    description: "You deliver what you promise".to_string(),
                },
                PyramidLevel {
                    title: "Basics".to_string(),
                    description: "Greetings, punctuality, tidiness".to_string(),
                },
            ],
            notes: None,
        }),
        SlideRecord::BulletCards(BulletCardsSlide {
            title: "Three Habits".to_string(),
            subhead: None,
            items: vec![
                card("Report", "Share results before you are asked"),
                card("Contact", "Pass on facts promptly"),
                card("Consult", "Ask early when unsure"),
            ],
            notes: None,
        }),
        SlideRecord::Process(ProcessSlide {
            title: "The Work Cycle".to_string(),
            subhead: None,
            steps: strings(&["Plan", "Do", "Check", "Act"]),
            notes: None,
        }),
        SlideRecord::Triangle(TriangleSlide {
            title: "Balanced Growth".to_string(),
            subhead: None,
            items: vec![
                card("Skill", "What you can do"),
                card("Will", "What you want to do"),
                card("Role", "What is expected of you"),
            ],
            notes: None,
        }),
        SlideRecord::HeaderCards(HeaderCardsSlide {
            title: "Support Channels".to_string(),
            subhead: None,
            columns: Some(3),
            items: vec![
                card("Mentor", "Weekly one-on-one"),
                card("HR", "Benefits and paperwork"),
                card("IT", "Accounts and equipment"),
            ],
            notes: None,
        }),
        SlideRecord::Cycle(CycleSlide {
            title: "PDCA".to_string(),
            subhead: None,
            items: vec![
                CycleItem {
                    label: "Plan".to_string(),
                    sub_label: "Set goals".to_string(),
                },
                CycleItem {
                    label: "Do".to_string(),
                    sub_label: "Execute".to_string(),
                },
                CycleItem {
                    label: "Check".to_string(),
                    sub_label: "Measure".to_string(),
                },
                CycleItem {
                    label: "Act".to_string(),
                    sub_label: "Improve".to_string(),
                },
            ],
            center_text: Some("Continuous improvement".to_string()),
            notes: None,
        }),
        SlideRecord::StepUp(StepUpSlide {
            title: "Your First Year".to_string(),
            subhead: None,
            items: vec![
                card("Month 1", "Learn the basics"),
                card("Month 3", "Own small tasks"),
                card("Month 12", "Lead a project"),
            ],
            notes: None,
        }),
        SlideRecord::Closing(ClosingSlide { notes: None }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_record_parses() {
        let record = Record::from_value(json!({
            "type": "compare",
            "title": "A vs B",
            "leftTitle": "A",
            "rightTitle": "B",
            "leftItems": ["a1"],
            "rightItems": ["b1", "b2"],
            "notes": "say this"
        }));
        let slide = record.as_slide().expect("compare should parse");
        assert_eq!(slide.tag(), "compare");
        assert_eq!(slide.notes(), Some("say this"));
        match slide {
            SlideRecord::Compare(c) => assert_eq!(c.right_items.len(), 2),
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_default() {
        let record = Record::from_value(json!({ "type": "agenda" }));
        assert_eq!(
            record,
            Record::Known(SlideRecord::Agenda(AgendaSlide::default()))
        );
    }

    #[test]
    fn test_unknown_and_missing_tags() {
        assert_eq!(
            Record::from_value(json!({ "type": "bogus" })),
            Record::Unknown {
                tag: "bogus".to_string()
            }
        );
        assert_eq!(Record::from_value(json!({ "title": "x" })).tag(), "");
    }

    #[test]
    fn test_wrong_field_type_is_invalid() {
        let record = Record::from_value(json!({ "type": "process", "steps": 3 }));
        assert!(matches!(record, Record::Invalid { ref tag, .. } if tag == "process"));
    }

    #[test]
    fn test_mistyped_optional_field_keeps_record() {
        let record = Record::from_value(json!({
            "type": "title",
            "title": "Kickoff",
            "date": 20260401
        }));
        match record {
            Record::Partial { slide, ignored } => {
                assert_eq!(
                    slide,
                    SlideRecord::Title(TitleSlide {
                        title: "Kickoff".to_string(),
                        ..Default::default()
                    })
                );
                assert_eq!(ignored, vec!["date has the wrong type and was ignored"]);
            }
            other => panic!("unexpected record {:?}", other),
        }

        let section = Record::from_value(json!({ "type": "section", "title": "Part", "sectionNo": "2" }));
        assert!(matches!(section, Record::Partial { ref ignored, .. } if ignored.len() == 1));
        assert_eq!(section.as_slide().map(SlideRecord::tag), Some("section"));
    }

    #[test]
    fn test_null_optional_is_absent() {
        let record = Record::from_value(json!({ "type": "cycle", "centerText": null }));
        assert!(matches!(record, Record::Known(_)));
    }

    #[test]
    fn test_required_list_of_wrong_type_stays_invalid() {
        let record = Record::from_value(json!({ "type": "agenda", "subhead": 1, "items": "x" }));
        assert!(matches!(record, Record::Invalid { .. }));
    }

    #[test]
    fn test_parse_records_requires_array() {
        assert!(matches!(
            parse_records(r#"{"type":"title"}"#),
            Err(SlideError::InputError(_))
        ));
        assert!(matches!(parse_records("[{"), Err(SlideError::InputError(_))));
        assert_eq!(parse_records("[]").unwrap().len(), 0);
    }

    #[test]
    fn test_sample_covers_catalog() {
        let tags: Vec<&str> = sample_records().iter().map(|s| s.tag()).collect();
        assert_eq!(tags, SLIDE_TYPES.to_vec());
    }

    #[test]
    fn test_wire_round_trip_keeps_tag() {
        let json = serde_json::to_value(Record::from(SlideRecord::StepUp(StepUpSlide::default())))
            .unwrap();
        assert_eq!(json["type"], "stepUp");
    }
}
