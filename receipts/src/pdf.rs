mod metrics;

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use crate::config::Config;
use crate::error::ReceiptError;
use crate::model::Receipt;
use crate::utils::format_minor_units;

impl From<lopdf::Error> for ReceiptError {
    fn from(e: lopdf::Error) -> Self {
        ReceiptError::Pdf(e)
    }
}

// Геометрия страницы A4 в миллиметрах, сетка макета на 12 колонок
const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_LEFT: f32 = 10.0;
const MARGIN_TOP: f32 = 15.0;
const MARGIN_RIGHT: f32 = 10.0;
const CONTENT_W: f32 = PAGE_W - MARGIN_LEFT - MARGIN_RIGHT;
const COL_W: f32 = CONTENT_W / 12.0;

// подвал фиксированной высоты прижат к нижнему краю каждой страницы
const FOOTER_H: f32 = 50.0;
const FOOTER_TOP: f32 = PAGE_H - 10.0 - FOOTER_H;

const MM_TO_PT: f32 = 72.0 / 25.4;
const PT_TO_MM: f32 = 25.4 / 72.0;

// подложка шапки таблицы: серый 200 из 255
const TABLE_GRAY: f32 = 200.0 / 255.0;

const ITEM_ROW_H: f32 = 6.0;

// колонки таблицы платежей: (начало в колонках сетки, ширина в колонках)
const TABLE_GRID: [(usize, usize); 5] = [(0, 1), (1, 2), (3, 2), (5, 5), (10, 2)];

/// Горизонтальное выравнивание текста в колонке
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Начертания базового семейства Helvetica
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

impl FontStyle {
    fn resource_name(self) -> &'static str {
        match self {
            FontStyle::Normal => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Italic => "F3",
        }
    }
}

/// Рендерит одну квитанцию в PDF-документ.
///
/// Документ возвращается без сжатия потоков, сжимает его [`save`].
pub fn render(cfg: &Config, receipt: &Receipt) -> Result<Document, ReceiptError> {
    let mut page = PageBuilder::new(cfg)?;
    page.page_chrome();

    // заголовок квитанции
    if let Some(title) = cfg.receipt_title.as_deref() {
        page.cell(title, 24.0, FontStyle::Bold, Align::Center, 0, 12, 6.0);
    }
    page.advance(10.0);

    // номер и дата по краям одной строки
    page.cell(
        &format!("Receipt #: {}", receipt.number),
        12.0,
        FontStyle::Bold,
        Align::Left,
        0,
        3,
        10.0,
    );
    page.cell(
        &format!("Date: {}", cfg.receipt_date),
        12.0,
        FontStyle::Bold,
        Align::Right,
        9,
        3,
        10.0,
    );
    page.advance(15.0);

    // легальная строка суммы прописью
    let sentence = receipt.amount_sentence();
    let lines = wrap_text(&sentence, CONTENT_W, FontStyle::Normal, 10.0);
    for (i, line) in lines.iter().enumerate() {
        page.cell(line, 10.0, FontStyle::Normal, Align::Left, 0, 12, 15.0 + i as f32 * 4.5);
    }
    page.advance(20.0 + lines.len().saturating_sub(1) as f32 * 4.5);

    if let Some(title) = cfg.items_table_title.as_deref() {
        let line = format!("{title} in {}", cfg.receipt_year);
        page.cell(&line, 10.0, FontStyle::Bold, Align::Center, 0, 12, 10.0);
    }
    page.advance(20.0);

    page.table_header();

    for item in &receipt.items {
        page.ensure_room(ITEM_ROW_H);
        page.table_cell(&item.seq.to_string(), FontStyle::Normal, 0);
        page.table_cell(&item.date.format("%m/%d/%Y").to_string(), FontStyle::Normal, 1);
        page.table_cell(&item.project_code, FontStyle::Normal, 2);
        page.table_cell(&item.project_name, FontStyle::Normal, 3);
        page.table_cell(&format_minor_units(item.amount), FontStyle::Normal, 4);
        page.advance(ITEM_ROW_H);
        page.row_line();
    }

    // итоговая строка с отступом от таблицы
    page.ensure_room(ITEM_ROW_H + 1.0);
    page.advance(1.0);
    let total_text = match cfg.total_text.as_deref() {
        Some(t) => format!("{t} for {}", cfg.receipt_year),
        None => format!("Total for {}", cfg.receipt_year),
    };
    page.table_cell(&total_text, FontStyle::Bold, 3);
    page.table_cell(&format_minor_units(receipt.deductible_total), FontStyle::Bold, 4);
    page.advance(ITEM_ROW_H);
    page.row_line();

    page.into_document()
}

/// Сохраняет документ, сжимая потоки содержимого
pub fn save(mut doc: Document, path: &Path) -> Result<(), ReceiptError> {
    doc.compress();
    doc.save(path)?;
    Ok(())
}

/// Постраничный сборщик содержимого поверх lopdf.
///
/// Координаты — миллиметры от левого верхнего угла, как в макете;
/// в PDF-пространство (пункты, начало внизу) переводятся при записи операций.
struct PageBuilder<'a> {
    cfg: &'a Config,
    logo: Option<Vec<u8>>,
    ops: Vec<Operation>,
    pages: Vec<Vec<Operation>>,
    /// отступ от верха страницы до текущей строки макета, мм
    cursor: f32,
}

impl<'a> PageBuilder<'a> {
    fn new(cfg: &'a Config) -> Result<Self, ReceiptError> {
        let logo = match cfg.org_logo.as_deref() {
            Some(b64) => Some(BASE64.decode(b64.trim())?),
            None => None,
        };

        Ok(PageBuilder {
            cfg,
            logo,
            ops: Vec::new(),
            pages: Vec::new(),
            cursor: MARGIN_TOP,
        })
    }

    /// Шапка и подвал страницы; курсор остаётся под шапкой
    fn page_chrome(&mut self) {
        self.cursor = MARGIN_TOP;
        self.draw_header();
        self.draw_footer();
    }

    fn draw_header(&mut self) {
        let cfg = self.cfg;

        // логотип занимает три левые колонки, реквизиты организации правее
        if let Some(name) = cfg.org_name.as_deref() {
            self.cell(name, 16.0, FontStyle::Bold, Align::Center, 3, 9, 0.0);
        }
        if let Some(address) = cfg.org_address.as_deref() {
            let line = match cfg.org_ein.as_deref() {
                Some(ein) => format!("{address}. EIN: {ein}"),
                None => address.to_string(),
            };
            self.cell(&line, 10.0, FontStyle::Bold, Align::Center, 3, 9, 8.0);
        }
        if let Some(email) = cfg.org_email.as_deref() {
            self.cell(&format!("Email: {email}"), 10.0, FontStyle::Bold, Align::Center, 3, 9, 12.0);
        }
        if let Some(website) = cfg.org_website.as_deref() {
            self.cell(
                &format!("Website: {website}"),
                10.0,
                FontStyle::Bold,
                Align::Center,
                3,
                9,
                16.0,
            );
        }

        self.cursor += 20.0;
    }

    fn draw_footer(&mut self) {
        let cfg = self.cfg;

        if let Some(name) = cfg.treasurer_name.as_deref() {
            let org = cfg.org_name.as_deref().unwrap_or_default();

            self.text_at(name, 10.0, FontStyle::Bold, Align::Left, FOOTER_TOP + 12.0);
            self.text_at(
                &format!("Treasurer, {org}"),
                10.0,
                FontStyle::Bold,
                Align::Left,
                FOOTER_TOP + 18.0,
            );
            if let Some(phone) = cfg.treasurer_phone.as_deref() {
                self.text_at(
                    &format!("Phone: {phone}"),
                    10.0,
                    FontStyle::Bold,
                    Align::Left,
                    FOOTER_TOP + 22.0,
                );
            }
            if let Some(email) = cfg.treasurer_email.as_deref() {
                self.text_at(
                    &format!("Email: {email}"),
                    10.0,
                    FontStyle::Bold,
                    Align::Left,
                    FOOTER_TOP + 26.0,
                );
            }
        }

        let lower = FOOTER_TOP + 30.0;
        if let Some(text) = cfg.footer1_text.as_deref() {
            self.text_at(text, 8.0, FontStyle::Italic, Align::Center, lower + 10.0);
        }
        if let Some(text) = cfg.footer2_text.as_deref() {
            self.text_at(text, 8.0, FontStyle::Italic, Align::Center, lower + 14.0);
        }
        if let Some(text) = cfg.footer3_text.as_deref() {
            self.text_at(text, 8.0, FontStyle::Italic, Align::Center, lower + 18.0);
        }
    }

    /// Шапка таблицы платежей на серой подложке
    fn table_header(&mut self) {
        self.fill_rect(MARGIN_LEFT, self.cursor, CONTENT_W, 7.0, TABLE_GRAY);

        let columns = self.cfg.table_columns.clone();
        for (title, (col, span)) in columns.iter().zip(TABLE_GRID) {
            self.cell(title, 9.0, FontStyle::Bold, Align::Left, col, span, 1.5);
        }

        self.cursor += 7.0;
    }

    /// Ячейка строки таблицы платежей по индексу колонки макета
    fn table_cell(&mut self, text: &str, style: FontStyle, table_col: usize) {
        let (col, span) = TABLE_GRID[table_col];
        self.cell(text, 8.0, style, Align::Left, col, span, 1.0);
    }

    /// Разделительная линия под строкой таблицы
    fn row_line(&mut self) {
        let y = (PAGE_H - self.cursor) * MM_TO_PT;

        self.ops.push(Operation::new("G", vec![TABLE_GRAY.into()]));
        self.ops.push(Operation::new("w", vec![0.5_f32.into()]));
        self.ops.push(Operation::new("m", vec![(MARGIN_LEFT * MM_TO_PT).into(), y.into()]));
        self.ops.push(Operation::new(
            "l",
            vec![((PAGE_W - MARGIN_RIGHT) * MM_TO_PT).into(), y.into()],
        ));
        self.ops.push(Operation::new("S", vec![]));
        self.ops.push(Operation::new("G", vec![0.0_f32.into()]));
    }

    fn advance(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Перенос страницы, когда строка не помещается над подвалом
    fn ensure_room(&mut self, needed: f32) {
        if self.cursor + needed > FOOTER_TOP {
            let ops = std::mem::take(&mut self.ops);
            self.pages.push(ops);
            self.page_chrome();
        }
    }

    /// Текст в ячейке сетки: колонка и ширина в колонках, отступ от текущей строки
    fn cell(
        &mut self,
        text: &str,
        size: f32,
        style: FontStyle,
        align: Align,
        col: usize,
        span: usize,
        top: f32,
    ) {
        let x = MARGIN_LEFT + col as f32 * COL_W;
        let width = span as f32 * COL_W;
        let y = self.cursor + top;
        self.put_text(text, size, style, align, x, width, y);
    }

    /// Текст на всю ширину содержимого на абсолютной высоте макета
    fn text_at(&mut self, text: &str, size: f32, style: FontStyle, align: Align, y: f32) {
        self.put_text(text, size, style, align, MARGIN_LEFT, CONTENT_W, y);
    }

    fn put_text(
        &mut self,
        text: &str,
        size: f32,
        style: FontStyle,
        align: Align,
        x: f32,
        width: f32,
        y: f32,
    ) {
        if text.is_empty() {
            return;
        }

        let bytes = encode_win_ansi(text);
        let text_w = metrics::text_width(&bytes, style, size) * PT_TO_MM;
        let tx = match align {
            Align::Left => x,
            Align::Center => x + (width - text_w) / 2.0,
            Align::Right => x + width - text_w,
        };
        // базовая линия: верх строки макета плюс высота кегля
        let baseline = y + size * PT_TO_MM;

        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![style.resource_name().into(), size.into()],
        ));
        self.ops.push(Operation::new(
            "Td",
            vec![(tx * MM_TO_PT).into(), ((PAGE_H - baseline) * MM_TO_PT).into()],
        ));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(bytes, StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, gray: f32) {
        self.ops.push(Operation::new("g", vec![gray.into()]));
        self.ops.push(Operation::new(
            "re",
            vec![
                (x * MM_TO_PT).into(),
                ((PAGE_H - y - h) * MM_TO_PT).into(),
                (w * MM_TO_PT).into(),
                (h * MM_TO_PT).into(),
            ],
        ));
        self.ops.push(Operation::new("f", vec![]));
        self.ops.push(Operation::new("g", vec![0.0_f32.into()]));
    }

    fn into_document(mut self) -> Result<Document, ReceiptError> {
        let last = std::mem::take(&mut self.ops);
        self.pages.push(last);

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_regular = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let font_bold = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let font_italic = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Oblique",
            "Encoding" => "WinAnsiEncoding",
        });

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_regular,
                "F2" => font_bold,
                "F3" => font_italic,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        let mut page_ids = Vec::new();
        for ops in std::mem::take(&mut self.pages) {
            let content = Content { operations: ops };
            let stream_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => stream_id,
            });
            kids.push(page_id.into());
            page_ids.push(page_id);
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    (PAGE_W * MM_TO_PT).into(),
                    (PAGE_H * MM_TO_PT).into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        // логотип повторяется в шапке каждой страницы
        if let Some(png) = self.logo.take() {
            let image = lopdf::xobject::image_from(png)?;

            let w = 3.0 * COL_W * 0.8;
            let h = 16.0;
            let x = MARGIN_LEFT + 3.0 * COL_W * 0.1;
            let y_top = MARGIN_TOP + 2.0;

            for &page_id in &page_ids {
                doc.insert_image(
                    page_id,
                    image.clone(),
                    (x * MM_TO_PT, (PAGE_H - y_top - h) * MM_TO_PT),
                    (w * MM_TO_PT, h * MM_TO_PT),
                )?;
            }
        }

        Ok(doc)
    }
}

// WinAnsi совпадает с Latin-1 на нужном нам диапазоне; прочее печатается как '?'
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7e | 0xa0..=0xff => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// Грубый перенос по словам под заданную ширину (мм)
fn wrap_text(text: &str, width_mm: f32, style: FontStyle, size: f32) -> Vec<String> {
    let max_pt = width_mm * MM_TO_PT;

    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };

        if line.is_empty() || metrics::text_width(&encode_win_ansi(&candidate), style, size) <= max_pt {
            line = candidate;
        } else {
            lines.push(line);
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_degrades_outside_latin1() {
        assert_eq!(encode_win_ansi("Receipt"), b"Receipt".to_vec());
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(encode_win_ansi("Фонд"), vec![b'?', b'?', b'?', b'?']);
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        let lines = wrap_text("short sentence", CONTENT_W, FontStyle::Normal, 10.0);
        assert_eq!(lines, vec!["short sentence".to_string()]);
    }

    #[test]
    fn wrap_breaks_long_text_between_words() {
        let text = "word ".repeat(60);
        let lines = wrap_text(&text, 40.0, FontStyle::Normal, 10.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
    }
}
