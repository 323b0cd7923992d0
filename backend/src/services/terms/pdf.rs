use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use common::model::document as doc;
use common::model::term::TermRecord;
use genpdf::elements::{Break, Image as PdfImage, LinearLayout, Paragraph};
use genpdf::style::{Color, Style, StyledString};
use genpdf::Document;
use image::imageops::FilterType;
use image::{load_from_memory, DynamicImage, GenericImageView};
use png::{BitDepth as PngBitDepth, ColorType as PngColorType, Encoder as PngEncoder};
use std::error::Error;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const PAGE_WIDTH_INCH: f64 = 8.5;
const MARGIN_MM: f64 = 10.0;
const IMAGE_DPI: f64 = 150.0;

// On-screen signature boxes are 500x200 CSS px; the trimmed ink is capped to
// roughly that footprint in the document.
const SIGNATURE_MAX_WIDTH_PX: f64 = 300.0;
const SIGNATURE_MAX_HEIGHT_PX: f64 = 120.0;

/// Header blue, the same #004481 the portal uses.
const TITLE_COLOR: Color = Color::Rgb(0, 68, 129);

/// Entry point for the HTTP handler: renders the posted record and returns
/// the PDF bytes for inline display.
pub async fn process(payload: actix_web::web::Json<TermRecord>) -> impl actix_web::Responder {
    match render_term_pdf(&payload) {
        Ok(bytes) => actix_web::HttpResponse::Ok()
            .content_type("application/pdf")
            .body(bytes),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("PDF generation failed: {}", e)),
    }
}

/// Load the font family (adjust path/name if needed).
fn load_font() -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>, Box<dyn Error>> {
    // Try to load Arial (if the Arial family TTFs were added to ./fonts).
    // If that fails, fall back to LiberationSans located in the same directory.
    if let Ok(family) = genpdf::fonts::from_files("./fonts", "Arial", None) {
        return Ok(family);
    }
    genpdf::fonts::from_files("./fonts", "LiberationSans", None).map_err(Into::into)
}

/// Configure a genpdf Document with font, margins, and the company header
/// repeated on every page.
fn configure_document() -> Result<Document, Box<dyn Error>> {
    let font_family = load_font()?;
    let mut document = Document::new(font_family);
    document.set_title("Termo de Responsabilidade");
    document.set_font_size(10);
    document.set_line_spacing(1.2);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    decorator.set_header(|_page| {
        let mut header = LinearLayout::vertical();
        header.push(Paragraph::new(StyledString::new(
            doc::EMPREGADOR,
            Style::new().bold().with_font_size(16).with_color(TITLE_COLOR),
        )));
        header.push(Paragraph::new(StyledString::new(
            format!("{} - {}", doc::ENDERECO_EMPREGADOR, doc::CNPJ_EMPREGADOR),
            Style::new().with_font_size(8),
        )));
        header.push(Break::new(1));
        header
    });
    document.set_page_decorator(decorator);
    Ok(document)
}

fn section_title(document: &mut Document, title: &str) {
    document.push(Paragraph::new(StyledString::new(
        title,
        Style::new().bold().with_font_size(12).with_color(TITLE_COLOR),
    )));
}

fn labeled_field(document: &mut Document, label: &str, value: &str) {
    let mut p = Paragraph::new(StyledString::new(
        format!("{}: ", label),
        Style::new().bold(),
    ));
    p.push(field_or_blank(value));
    document.push(p);
}

fn bullet_item(document: &mut Document, text: &str) {
    let mut p = Paragraph::new("");
    p.push(StyledString::new("• ", Style::new()));
    p.push(text);
    let mut layout = LinearLayout::vertical();
    layout.push(p);
    document.push(layout);
}

fn field_or_blank(value: &str) -> String {
    if value.is_empty() {
        doc::CAMPO_VAZIO.to_string()
    } else {
        value.to_string()
    }
}

/// `dd/mm/aaaa` from the record's ISO-8601 `data`.
fn format_date(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    let mut parts = date_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) if !day.is_empty() => {
            format!("{}/{}/{}", day, month, year)
        }
        _ => iso.to_string(),
    }
}

/// Decodes a `data:image/png;base64,...` payload into raw image bytes.
/// Bare base64 without the data-URL prefix is accepted too.
fn decode_signature(payload: &str) -> Option<Vec<u8>> {
    let encoded = match payload.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => payload,
    };
    BASE64.decode(encoded).ok()
}

/// Embeds a signature image: rescales it to the signature box preserving
/// aspect ratio, flattens transparency over white, writes a temporary PNG,
/// and pushes it into the document.
fn push_signature_image(
    document: &mut Document,
    bytes: &[u8],
    temp_files: &mut Vec<NamedTempFile>,
) -> Result<(), Box<dyn Error>> {
    let margin_in = MARGIN_MM / 25.4_f64;
    let content_width_in = PAGE_WIDTH_INCH - 2.0 * margin_in;
    let content_target_px = content_width_in * IMAGE_DPI;

    // Convert CSS px -> image pixels at IMAGE_DPI assuming 96 CSS px per inch
    let css_to_px = IMAGE_DPI / 96.0;
    let max_width_target_px = SIGNATURE_MAX_WIDTH_PX * css_to_px;
    let max_height_target_px = SIGNATURE_MAX_HEIGHT_PX * css_to_px;

    let img = load_from_memory(bytes)?;
    let (orig_w, orig_h) = img.dimensions();
    let orig_w_f = orig_w as f64;
    let orig_h_f = orig_h as f64;

    // Final scale is the most restrictive of content width and box limits.
    let scale = (content_target_px / orig_w_f)
        .min(max_width_target_px / orig_w_f)
        .min(max_height_target_px / orig_h_f)
        .min(1.0);

    let resized: DynamicImage = if scale >= 1.0 {
        img
    } else {
        let new_w = (orig_w_f * scale).max(1.0).round() as u32;
        let new_h = (orig_h_f * scale).max(1.0).round() as u32;
        img.resize(new_w, new_h, FilterType::Lanczos3)
    };

    // Flatten alpha channel over white background and convert to RGB
    let rgba = resized.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut background = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]));
    image::imageops::overlay(&mut background, &rgba, 0, 0);
    let rgb_image = DynamicImage::ImageRgba8(background).to_rgb8();
    let raw = rgb_image.into_raw();

    let mut tmp = NamedTempFile::new()?;
    {
        let file = tmp.as_file_mut();
        let mut encoder = PngEncoder::new(file, w, h);
        encoder.set_color(PngColorType::Rgb);
        encoder.set_depth(PngBitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&raw)?;
    }

    let path: PathBuf = tmp.path().to_path_buf();
    let mut img_elem = PdfImage::from_path(path)?;
    img_elem.set_dpi(IMAGE_DPI);
    temp_files.push(tmp);
    document.push(img_elem);
    Ok(())
}

/// Pushes a signature slot: the label, then the image or the waiting note.
fn push_signature_block(
    document: &mut Document,
    label: &str,
    payload: &str,
    waiting: &str,
    temp_files: &mut Vec<NamedTempFile>,
) -> Result<(), Box<dyn Error>> {
    document.push(Paragraph::new(StyledString::new(label, Style::new().bold())));
    match decode_signature(payload) {
        Some(bytes) if !payload.is_empty() => {
            push_signature_image(document, &bytes, temp_files)?;
        }
        _ => {
            document.push(Paragraph::new(StyledString::new(
                waiting,
                Style::new().italic(),
            )));
        }
    }
    document.push(Break::new(1));
    Ok(())
}

/// Renders the full responsibility term for `termo` and returns the PDF
/// bytes. The section sequence mirrors the on-screen preview.
pub fn render_term_pdf(termo: &TermRecord) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut document = configure_document()?;

    // Keep temporary files alive until rendering finishes
    let mut temp_files: Vec<NamedTempFile> = Vec::new();

    section_title(&mut document, doc::SECAO_PARTES);
    labeled_field(&mut document, "EMPREGADOR", doc::EMPREGADOR);
    document.push(Paragraph::new(doc::ENDERECO_EMPREGADOR));
    document.push(Paragraph::new(doc::CNPJ_EMPREGADOR));
    document.push(Break::new(1));

    labeled_field(&mut document, "FUNCIONÁRIO", &termo.nome_funcionario);
    labeled_field(&mut document, "Cargo", &termo.cargo);
    labeled_field(&mut document, "CPF", &termo.cpf);
    labeled_field(&mut document, "Endereço", &termo.endereco_funcionario);
    document.push(Break::new(1));

    section_title(&mut document, doc::SECAO_OBJETO);
    document.push(Paragraph::new(doc::OBJETO));
    document.push(Break::new(1));

    section_title(&mut document, doc::SECAO_EQUIPAMENTO);
    labeled_field(&mut document, "Tipo", &termo.tipo_equipamento);
    labeled_field(&mut document, "Marca", &termo.marca);
    labeled_field(&mut document, "Modelo", &termo.modelo);
    labeled_field(&mut document, "Número de Série", &termo.numero_serie);
    labeled_field(&mut document, "Acessórios", &termo.acessorios);
    document.push(Break::new(1));

    section_title(&mut document, doc::SECAO_RESPONSABILIDADES);
    for item in doc::RESPONSABILIDADES {
        bullet_item(&mut document, item);
    }
    document.push(Break::new(1));

    section_title(&mut document, doc::SECAO_PENALIDADES);
    document.push(Paragraph::new(doc::PENALIDADES));
    document.push(Break::new(1));

    section_title(&mut document, doc::SECAO_DISPOSICOES);
    document.push(Paragraph::new(doc::DISPOSICOES_FINAIS));
    document.push(Break::new(1));

    section_title(&mut document, doc::SECAO_DECLARACAO);
    document.push(Paragraph::new(doc::DECLARACAO));
    document.push(Break::new(1));

    document.push(Paragraph::new(format!(
        "Local e Data: {}",
        format_date(&termo.data)
    )));
    document.push(Break::new(1));

    push_signature_block(
        &mut document,
        "Assinatura do Representante do EMPREGADOR:",
        &termo.assinatura_tecnico,
        "Aguardando assinatura do técnico.",
        &mut temp_files,
    )?;
    push_signature_block(
        &mut document,
        "Assinatura do FUNCIONÁRIO:",
        &termo.assinatura_usuario,
        "Aguardando assinatura do funcionário.",
        &mut temp_files,
    )?;

    document.push(Paragraph::new(StyledString::new(
        doc::RODAPE,
        Style::new().with_font_size(8),
    )));

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;

    // temp_files dropped and cleaned up here
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_extracts_day_month_year() {
        assert_eq!(format_date("2025-02-21T12:34:56.000Z"), "21/02/2025");
        assert_eq!(format_date("2025-02-21"), "21/02/2025");
    }

    #[test]
    fn format_date_passes_through_unparseable_input() {
        assert_eq!(format_date("hoje"), "hoje");
    }

    #[test]
    fn decode_signature_strips_data_url_prefix() {
        let encoded = BASE64.encode(b"png-bytes");
        let payload = format!("data:image/png;base64,{}", encoded);
        assert_eq!(decode_signature(&payload), Some(b"png-bytes".to_vec()));
    }

    #[test]
    fn decode_signature_accepts_bare_base64() {
        let encoded = BASE64.encode(b"raw");
        assert_eq!(decode_signature(&encoded), Some(b"raw".to_vec()));
    }

    #[test]
    fn decode_signature_rejects_garbage() {
        assert_eq!(decode_signature("not base64 at all!!!"), None);
    }
}
