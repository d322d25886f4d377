//! One-page A4 PDF rendering with the built-in Type1 Helvetica fonts, so
//! no font files are needed on disk.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use trialyx_common::{RegistryError, Result};
use trialyx_registry::reference::PicoScheme;

const A4_WIDTH: i64 = 595;
const A4_HEIGHT: i64 = 842;
const MARGIN_X: i64 = 50;
const TITLE_Y: i64 = A4_HEIGHT - 50;
const BODY_START_Y: i64 = A4_HEIGHT - 100;
const LINE_STEP: i64 = 30;

/// Render a bold title followed by one body line per entry.
fn key_value_page(title: &str, lines: &[String]) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
            "F2" => bold_font_id,
        },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F2".into(), 14.into()]),
        Operation::new("Td", vec![MARGIN_X.into(), TITLE_Y.into()]),
        Operation::new("Tj", vec![Object::string_literal(title)]),
        Operation::new("ET", vec![]),
    ];
    let mut y = BODY_START_Y;
    for line in lines {
        operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![MARGIN_X.into(), y.into()]),
            Operation::new("Tj", vec![Object::string_literal(line.as_str())]),
            Operation::new("ET", vec![]),
        ]);
        y -= LINE_STEP;
    }

    let content = Content { operations };
    let encoded = content
        .encode()
        .map_err(|e| RegistryError::Export(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), A4_WIDTH.into(), A4_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RegistryError::Export(e.to_string()))?;
    Ok(bytes)
}

/// PICO scheme as a key-value table page.
pub fn pico_pdf(molecule: &str, pathology: &str, pico: &PicoScheme) -> Result<Vec<u8>> {
    let lines: Vec<String> = pico
        .rows()
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect();
    key_value_page(&format!("Esquema PICO - {} / {}", molecule, pathology), &lines)
}

/// Trial export cover page: molecule headline, pathology line, note line.
pub fn trials_export_pdf(molecule: &str, pathology: Option<&str>) -> Result<Vec<u8>> {
    let lines = vec![
        format!("Patología: {}", pathology.unwrap_or("No especificada")),
        "Este es un ejemplo de exportación en PDF.".to_string(),
    ];
    key_value_page(&format!("Exportación de Ensayos - {}", molecule), &lines)
}
