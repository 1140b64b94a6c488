use receipts::num2words::convert;

/// Обратный разбор словесной записи.
///
/// Понимает ровно тот словарь, который порождает `convert`:
/// регистр слов, дефисные составные и слова масштаба.
fn parse_words(phrase: &str) -> i64 {
    let mut negative = false;
    let mut total: i64 = 0;
    let mut group: i64 = 0;

    for token in phrase.split([' ', '-']) {
        match token {
            "negative" => negative = true,
            "zero" => {}
            "Hundred" => group *= 100,
            "Thousand" => {
                total += group * 1_000;
                group = 0;
            }
            "Million" => {
                total += group * 1_000_000;
                group = 0;
            }
            "Billion" => {
                total += group * 1_000_000_000;
                group = 0;
            }
            "Trillion" => {
                total += group * 1_000_000_000_000;
                group = 0;
            }
            "Quadrillion" => {
                total += group * 1_000_000_000_000_000;
                group = 0;
            }
            "Quintillion" => {
                total += group * 1_000_000_000_000_000_000;
                group = 0;
            }
            other => group += unit_value(other),
        }
    }

    let value = total + group;
    if negative { -value } else { value }
}

fn unit_value(token: &str) -> i64 {
    match token {
        "One" => 1,
        "Two" => 2,
        "Three" => 3,
        "Four" => 4,
        "Five" => 5,
        "Six" => 6,
        "Seven" => 7,
        "Eight" => 8,
        "Nine" => 9,
        "Ten" => 10,
        "Eleven" => 11,
        "Twelve" => 12,
        "Thirteen" => 13,
        "Fourteen" => 14,
        "Fifteen" => 15,
        "Sixteen" => 16,
        "Seventeen" => 17,
        "Eighteen" => 18,
        "Nineteen" => 19,
        "Twenty" => 20,
        "Thirty" => 30,
        "Forty" => 40,
        "Fifty" => 50,
        "Sixty" => 60,
        "Seventy" => 70,
        "Eighty" => 80,
        "Ninety" => 90,
        _ => panic!("unexpected token: {token}"),
    }
}

#[test]
fn roundtrip_reference_values() {
    for n in [
        0,
        -5,
        15,
        42,
        100,
        123,
        1000,
        1_000_001,
        1_999_999_999,
        -1_000_000,
    ] {
        assert_eq!(parse_words(&convert(n)), n, "value {n}");
    }
}

#[test]
fn roundtrip_group_boundaries() {
    for n in [
        999,
        1_000,
        999_999,
        1_000_000,
        999_999_999,
        1_000_000_000,
        999_999_999_999,
        1_000_000_000_000,
        i64::MAX,
        i64::MIN + 1,
    ] {
        assert_eq!(parse_words(&convert(n)), n, "value {n}");
    }
}

#[test]
fn roundtrip_broad_sampled_range() {
    // детерминированный LCG вместо rand: прогон воспроизводим
    let mut state: u64 = 0x243F_6A88_85A3_08D3;

    for _ in 0..5000 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);

        let n = ((state >> 11) % 2_000_000_000) as i64 - 1_000_000_000;
        assert_eq!(parse_words(&convert(n)), n, "value {n}");
    }
}
