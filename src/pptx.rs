// ABOUTME: PPTX backend for the slidegen application
// ABOUTME: Writes decks as PowerPoint packages and places them into folder directories

use crate::backend::{new_deck_id, DeckService, Folder, PlacementService};
use crate::deck::{Align, Deck, Element, ElementKind, ShapeKind, Surface, TextRun};
use crate::errors::{Result, SlideError};
use crate::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, TEXT_INSET};
use log::{debug, info};
use quick_xml::escape::escape;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;
use zip::{write::FileOptions, ZipWriter};

const EMU_PER_POINT: f64 = 12700.0;

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CLR_MAP: &str = r#"bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink""#;
const EMPTY_GROUP: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

/// Stores decks as `.pptx` files in `output_dir`; folders are sub-directories of `folder_root`
pub struct PptxBackend {
    output_dir: PathBuf,
    folder_root: PathBuf,
    saved: HashMap<String, PathBuf>,
}

impl PptxBackend {
    pub fn new(output_dir: impl Into<PathBuf>, folder_root: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            folder_root: folder_root.into(),
            saved: HashMap::new(),
        }
    }

    /// Where a saved deck currently lives
    pub fn path_of(&self, deck_id: &str) -> Option<&Path> {
        self.saved.get(deck_id).map(PathBuf::as_path)
    }
}

impl DeckService for PptxBackend {
    fn create_deck(&mut self, title: &str) -> Result<Deck> {
        fs::create_dir_all(&self.output_dir).map_err(|e| SlideError::BackendError {
            message: format!("cannot create output directory {:?}", self.output_dir),
            source: Some(Box::new(e)),
        })?;
        Ok(Deck::new(new_deck_id(), title))
    }

    fn save_deck(&mut self, deck: &Deck) -> Result<String> {
        let path = self
            .output_dir
            .join(format!("{}_{}.pptx", file_stem(&deck.title), deck.id));
        write_pptx(deck, &path)?;
        let url = file_url(&path)?;
        self.saved.insert(deck.id.clone(), path);
        Ok(url)
    }
}

impl PlacementService for PptxBackend {
    fn get_folder_by_id(&self, id: &str) -> Result<Folder> {
        let dir = self.folder_root.join(id);
        if !dir.is_dir() {
            return Err(SlideError::FolderNotFound(id.to_string()));
        }
        Ok(Folder {
            id: id.to_string(),
            location: dir.to_string_lossy().to_string(),
        })
    }

    fn move_file(&mut self, file_id: &str, folder: &Folder) -> Result<String> {
        let source = self
            .saved
            .get(file_id)
            .cloned()
            .ok_or_else(|| SlideError::DeckNotFound(file_id.to_string()))?;
        let file_name = source
            .file_name()
            .ok_or_else(|| SlideError::PathNotFoundError(source.clone()))?;
        let target = Path::new(&folder.location).join(file_name);

        fs::rename(&source, &target)?;
        info!("Moved {:?} to {:?}", source, target);
        let url = file_url(&target)?;
        self.saved.insert(file_id.to_string(), target);
        Ok(url)
    }
}

fn file_url(path: &Path) -> Result<String> {
    let absolute = fs::canonicalize(path)?;
    Url::from_file_path(&absolute)
        .map(|u| u.to_string())
        .map_err(|_| SlideError::backend(format!("cannot build a URL for {:?}", absolute)))
}

/// File-system friendly version of a deck title
fn file_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(40)
        .collect();
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "deck".to_string()
    } else {
        stem.to_string()
    }
}

fn emu(points: f64) -> i64 {
    (points * EMU_PER_POINT).round() as i64
}

/// Write a deck as a PowerPoint package
pub fn write_pptx(deck: &Deck, output_file: &Path) -> Result<()> {
    info!(
        "Writing PPTX with {} slides to {:?}",
        deck.len(),
        output_file
    );

    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(output_file)?;
    let mut zip = ZipWriter::new(file);
    let count = deck.len();

    part(&mut zip, "[Content_Types].xml", &content_types(deck))?;
    part(
        &mut zip,
        "_rels/.rels",
        &relationships(&[
            ("rId1", "officeDocument", "ppt/presentation.xml".to_string()),
            (
                "rId2",
                "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
                "docProps/core.xml".to_string(),
            ),
            ("rId3", "extended-properties", "docProps/app.xml".to_string()),
        ]),
    )?;
    part(
        &mut zip,
        "docProps/app.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>slidegen</Application>
    <Slides>{}</Slides>
</Properties>"#,
            count
        ),
    )?;
    part(
        &mut zip,
        "docProps/core.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>slidegen</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
            escape(&deck.title),
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
        ),
    )?;

    // Slides take rId1..rIdN; master, notes master and theme follow
    let mut pres_rels: Vec<(String, &str, String)> = (1..=count)
        .map(|i| (format!("rId{}", i), "slide", format!("slides/slide{}.xml", i)))
        .collect();
    pres_rels.push((
        format!("rId{}", count + 1),
        "slideMaster",
        "slideMasters/slideMaster1.xml".to_string(),
    ));
    pres_rels.push((
        format!("rId{}", count + 2),
        "notesMaster",
        "notesMasters/notesMaster1.xml".to_string(),
    ));
    pres_rels.push((
        format!("rId{}", count + 3),
        "theme",
        "theme/theme1.xml".to_string(),
    ));
    let pres_rels: Vec<(&str, &str, String)> = pres_rels
        .iter()
        .map(|(id, kind, target)| (id.as_str(), *kind, target.clone()))
        .collect();
    part(&mut zip, "ppt/_rels/presentation.xml.rels", &relationships(&pres_rels))?;
    part(&mut zip, "ppt/presentation.xml", &presentation_xml(count))?;

    part(&mut zip, "ppt/slideMasters/slideMaster1.xml", &slide_master_xml())?;
    part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &relationships(&[
            ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml".to_string()),
            ("rId2", "theme", "../theme/theme1.xml".to_string()),
        ]),
    )?;
    part(&mut zip, "ppt/slideLayouts/slideLayout1.xml", &slide_layout_xml())?;
    part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &relationships(&[(
            "rId1",
            "slideMaster",
            "../slideMasters/slideMaster1.xml".to_string(),
        )]),
    )?;
    part(&mut zip, "ppt/notesMasters/notesMaster1.xml", &notes_master_xml())?;
    part(
        &mut zip,
        "ppt/notesMasters/_rels/notesMaster1.xml.rels",
        &relationships(&[("rId1", "theme", "../theme/theme2.xml".to_string())]),
    )?;
    part(&mut zip, "ppt/theme/theme1.xml", &theme_xml("slidegen"))?;
    part(&mut zip, "ppt/theme/theme2.xml", &theme_xml("slidegen notes"))?;

    for (i, surface) in deck.surfaces.iter().enumerate() {
        let n = i + 1;
        let mut rels = vec![(
            "rId1",
            "slideLayout",
            "../slideLayouts/slideLayout1.xml".to_string(),
        )];
        if surface.notes.is_some() {
            rels.push(("rId2", "notesSlide", format!("../notesSlides/notesSlide{}.xml", n)));
        }
        part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", n),
            &relationships(&rels),
        )?;
        part(&mut zip, &format!("ppt/slides/slide{}.xml", n), &slide_xml(surface))?;

        if let Some(notes) = &surface.notes {
            part(
                &mut zip,
                &format!("ppt/notesSlides/notesSlide{}.xml", n),
                &notes_xml(notes),
            )?;
            part(
                &mut zip,
                &format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", n),
                &relationships(&[
                    ("rId1", "notesMaster", "../notesMasters/notesMaster1.xml".to_string()),
                    ("rId2", "slide", format!("../slides/slide{}.xml", n)),
                ]),
            )?;
        }
    }

    zip.finish()?;
    info!("PPTX file created at {:?}", output_file);
    Ok(())
}

fn part<W: Write + std::io::Seek>(zip: &mut ZipWriter<W>, name: &str, body: &str) -> Result<()> {
    debug!("Adding PPTX part {}", name);
    zip.start_file(name, FileOptions::default())?;
    zip.write_all(body.as_bytes())?;
    Ok(())
}

fn content_types(deck: &Deck) -> String {
    const PML: &str = "application/vnd.openxmlformats-officedocument.presentationml";
    let mut overrides = vec![
        ("/ppt/presentation.xml".to_string(), format!("{}.presentation.main+xml", PML)),
        ("/ppt/slideMasters/slideMaster1.xml".to_string(), format!("{}.slideMaster+xml", PML)),
        ("/ppt/slideLayouts/slideLayout1.xml".to_string(), format!("{}.slideLayout+xml", PML)),
        ("/ppt/notesMasters/notesMaster1.xml".to_string(), format!("{}.notesMaster+xml", PML)),
        ("/ppt/theme/theme1.xml".to_string(), "application/vnd.openxmlformats-officedocument.theme+xml".to_string()),
        ("/ppt/theme/theme2.xml".to_string(), "application/vnd.openxmlformats-officedocument.theme+xml".to_string()),
        ("/docProps/core.xml".to_string(), "application/vnd.openxmlformats-package.core-properties+xml".to_string()),
        ("/docProps/app.xml".to_string(), "application/vnd.openxmlformats-officedocument.extended-properties+xml".to_string()),
    ];
    for (i, surface) in deck.surfaces.iter().enumerate() {
        overrides.push((format!("/ppt/slides/slide{}.xml", i + 1), format!("{}.slide+xml", PML)));
        if surface.notes.is_some() {
            overrides.push((
                format!("/ppt/notesSlides/notesSlide{}.xml", i + 1),
                format!("{}.notesSlide+xml", PML),
            ));
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    {}
</Types>"#,
        overrides
            .iter()
            .map(|(name, kind)| format!(r#"<Override PartName="{}" ContentType="{}"/>"#, name, kind))
            .collect::<Vec<_>>()
            .join("\n    ")
    )
}

/// Relationship part; short kinds expand to the officeDocument relationship namespace
fn relationships(entries: &[(&str, &str, String)]) -> String {
    let body = entries
        .iter()
        .map(|(id, kind, target)| {
            let kind = if kind.starts_with("http") {
                kind.to_string()
            } else {
                format!("{}/{}", REL_NS, kind)
            };
            format!(
                r#"    <Relationship Id="{}" Type="{}" Target="{}"/>"#,
                id, kind, target
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
{}
</Relationships>"#,
        body
    )
}

fn presentation_xml(count: usize) -> String {
    let slide_ids = (1..=count)
        .map(|i| format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 255 + i, i))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation {ns}>
    <p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId{master}"/></p:sldMasterIdLst>
    <p:notesMasterIdLst><p:notesMasterId r:id="rId{notes}"/></p:notesMasterIdLst>
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        ns = NS,
        master = count + 1,
        notes = count + 2,
        slide_ids = slide_ids,
        cx = emu(CANVAS_WIDTH),
        cy = emu(CANVAS_HEIGHT),
    )
}

fn slide_master_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster {ns}><p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>{group}</p:spTree></p:cSld><p:clrMap {clr}/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#,
        ns = NS,
        group = EMPTY_GROUP,
        clr = CLR_MAP
    )
}

fn slide_layout_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout {ns} type="blank" preserve="1"><p:cSld name="Blank"><p:spTree>{group}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#,
        ns = NS,
        group = EMPTY_GROUP
    )
}

fn notes_master_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notesMaster {ns}><p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>{group}</p:spTree></p:cSld><p:clrMap {clr}/></p:notesMaster>"#,
        ns = NS,
        group = EMPTY_GROUP,
        clr = CLR_MAP
    )
}

fn theme_xml(name: &str) -> String {
    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let line = r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#;
    let effect = r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#;
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="{name}"><a:themeElements>
<a:clrScheme name="{name}"><a:dk1><a:srgbClr val="000000"/></a:dk1><a:lt1><a:srgbClr val="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="333333"/></a:dk2><a:lt2><a:srgbClr val="F5F6F8"/></a:lt2><a:accent1><a:srgbClr val="4285F4"/></a:accent1><a:accent2><a:srgbClr val="1B2A4A"/></a:accent2><a:accent3><a:srgbClr val="0F3460"/></a:accent3><a:accent4><a:srgbClr val="E94560"/></a:accent4><a:accent5><a:srgbClr val="757575"/></a:accent5><a:accent6><a:srgbClr val="34A853"/></a:accent6><a:hlink><a:srgbClr val="1155CC"/></a:hlink><a:folHlink><a:srgbClr val="6611CC"/></a:folHlink></a:clrScheme>
<a:fontScheme name="{name}"><a:majorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme>
<a:fmtScheme name="{name}"><a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst><a:lnStyleLst>{line}{line}{line}</a:lnStyleLst><a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst><a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst></a:fmtScheme>
</a:themeElements></a:theme>"#,
        name = escape(name),
        fill = fill,
        line = line,
        effect = effect
    )
}

fn slide_xml(surface: &Surface) -> String {
    let shapes = surface
        .elements
        .iter()
        .enumerate()
        .map(|(i, element)| shape_xml(i + 2, element))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {ns}>
    <p:cSld>
        <p:spTree>
            {group}
{shapes}
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr>
        <a:masterClrMapping/>
    </p:clrMapOvr>
</p:sld>"#,
        ns = NS,
        group = EMPTY_GROUP,
        shapes = shapes
    )
}

fn preset_geometry(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Text | ElementKind::Shape(ShapeKind::Rectangle) => "rect",
        ElementKind::Shape(ShapeKind::RoundRectangle) => "roundRect",
        ElementKind::Shape(ShapeKind::Ellipse) => "ellipse",
        ElementKind::Shape(ShapeKind::Triangle) => "triangle",
        ElementKind::Shape(ShapeKind::Trapezoid) => "trapezoid",
        ElementKind::Shape(ShapeKind::Chevron) => "chevron",
    }
}

fn shape_xml(id: usize, element: &Element) -> String {
    let fill = match element.fill {
        Some(color) => format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex()),
        None => "<a:noFill/>".to_string(),
    };
    let line = match element.outline {
        Some(color) => format!(
            r#"<a:ln w="12700"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
            color.to_hex()
        ),
        None => "<a:ln><a:noFill/></a:ln>".to_string(),
    };
    let text_box = if element.kind == ElementKind::Text {
        r#" txBox="1""#
    } else {
        ""
    };
    let b = &element.bounds;

    format!(
        r#"            <p:sp>
                <p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr{text_box}/><p:nvPr/></p:nvSpPr>
                <p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="{geom}"><a:avLst/></a:prstGeom>{fill}{line}</p:spPr>
                {body}
            </p:sp>"#,
        id = id,
        name = escape(&element.name),
        text_box = text_box,
        x = emu(b.x),
        y = emu(b.y),
        cx = emu(b.width),
        cy = emu(b.height),
        geom = preset_geometry(element.kind),
        fill = fill,
        line = line,
        body = text_body(element.text.as_ref()),
    )
}

fn text_body(run: Option<&TextRun>) -> String {
    let inset = emu(TEXT_INSET);
    let paragraphs = match run {
        Some(run) => run
            .text
            .split('\n')
            .map(|line| paragraph_xml(line, run))
            .collect::<Vec<_>>()
            .join(""),
        None => r#"<a:p><a:endParaRPr lang="en-US"/></a:p>"#.to_string(),
    };
    format!(
        r#"<p:txBody><a:bodyPr wrap="square" lIns="{i}" tIns="{i}" rIns="{i}" bIns="{i}" anchor="ctr"><a:noAutofit/></a:bodyPr><a:lstStyle/>{p}</p:txBody>"#,
        i = inset,
        p = paragraphs
    )
}

fn paragraph_xml(line: &str, run: &TextRun) -> String {
    let align = match run.align {
        Align::Left => "l",
        Align::Center => "ctr",
    };
    let font = escape(&run.font_family);
    format!(
        r#"<a:p><a:pPr algn="{align}"/><a:r><a:rPr lang="ja-JP" sz="{size}" b="{bold}"><a:solidFill><a:srgbClr val="{color}"/></a:solidFill><a:latin typeface="{font}"/><a:ea typeface="{font}"/></a:rPr><a:t>{text}</a:t></a:r></a:p>"#,
        align = align,
        size = (run.font_size * 100.0).round() as i64,
        bold = if run.bold { 1 } else { 0 },
        color = run.color.to_hex(),
        font = font,
        text = escape(line),
    )
}

fn notes_xml(notes: &str) -> String {
    let paragraphs = notes
        .split('\n')
        .map(|line| format!(r#"<a:p><a:r><a:rPr lang="ja-JP"/><a:t>{}</a:t></a:r></a:p>"#, escape(line)))
        .collect::<Vec<_>>()
        .join("");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notes {ns}><p:cSld><p:spTree>{group}<p:sp><p:nvSpPr><p:cNvPr id="2" name="Notes Placeholder"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody></p:sp></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:notes>"#,
        ns = NS,
        group = EMPTY_GROUP,
        paragraphs = paragraphs
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Rect, Rgb};

    fn text_element(name: &str, text: &str) -> Element {
        Element {
            name: name.to_string(),
            kind: ElementKind::Text,
            bounds: Rect::new(10.0, 20.0, 100.0, 30.0),
            fill: None,
            outline: None,
            text: Some(TextRun {
                text: text.to_string(),
                font_family: "Noto Sans JP".to_string(),
                font_size: 14.0,
                color: Rgb::TEXT,
                bold: true,
                align: Align::Center,
            }),
        }
    }

    #[test]
    fn test_emu_conversion() {
        assert_eq!(emu(CANVAS_WIDTH), 9144000);
        assert_eq!(emu(CANVAS_HEIGHT), 5143500);
    }

    #[test]
    fn test_shape_xml_escapes_and_styles() {
        let xml = shape_xml(2, &text_element("Title", "R&D <2026>"));
        assert!(xml.contains("R&amp;D &lt;2026&gt;"));
        assert!(xml.contains(r#"txBox="1""#));
        assert!(xml.contains(r#"sz="1400" b="1""#));
        assert!(xml.contains(r#"algn="ctr""#));
        assert!(xml.contains(r#"<a:latin typeface="Noto Sans JP"/>"#));
        assert!(xml.contains(r#"<a:off x="127000" y="254000"/>"#));
    }

    #[test]
    fn test_filled_shape_without_text() {
        let element = Element {
            name: "Node 1".to_string(),
            kind: ElementKind::Shape(ShapeKind::Ellipse),
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            fill: Some(Rgb::new(0x42, 0x85, 0xF4)),
            outline: None,
            text: None,
        };
        let xml = shape_xml(3, &element);
        assert!(xml.contains(r#"prst="ellipse""#));
        assert!(xml.contains(r#"<a:srgbClr val="4285F4"/>"#));
        assert!(xml.contains("<a:endParaRPr"));
    }

    #[test]
    fn test_multiline_text_becomes_paragraphs() {
        let body = text_body(Some(text_element("Items", "• a\n• b").text.as_ref().unwrap()));
        assert_eq!(body.matches("<a:p>").count(), 2);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Kickoff: Q3/Q4"), "Kickoff__Q3_Q4");
        assert_eq!(file_stem("///"), "deck");
    }
}
