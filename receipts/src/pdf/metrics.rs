//! Метрики базового семейства Helvetica (AFM, тысячные доли кегля).
//!
//! Таблицы покрывают печатаемый ASCII (32..=126); этого хватает для
//! выравнивания по центру и правому краю без встраивания шрифтов.

use super::FontStyle;

const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Ширина закодированной строки в пунктах для начертания и кегля
pub(super) fn text_width(bytes: &[u8], style: FontStyle, size: f32) -> f32 {
    let table = match style {
        FontStyle::Bold => &HELVETICA_BOLD,
        // у Oblique метрики прямого начертания
        FontStyle::Normal | FontStyle::Italic => &HELVETICA,
    };

    let units: u32 = bytes.iter().map(|&b| char_units(table, b) as u32).sum();
    units as f32 * size / 1000.0
}

fn char_units(table: &[u16; 95], b: u8) -> u16 {
    match b {
        0x20..=0x7e => table[(b - 0x20) as usize],
        // за пределами таблицы берём среднюю ширину цифры
        _ => 556,
    }
}
