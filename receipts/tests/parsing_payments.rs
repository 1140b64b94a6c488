use receipts::{PaymentsData, ProjectsData};
use std::{fs::File, io::BufReader, path::PathBuf};

fn fixture_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel)
}

fn parse_payments_fixture() -> PaymentsData {
    let path = fixture_path("payments.csv");
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("failed to open payments fixture {path:?}: {e}"));
    let reader = BufReader::new(file);

    PaymentsData::parse(reader).expect("failed to parse payments fixture")
}

fn parse_projects_fixture() -> ProjectsData {
    let path = fixture_path("projects.csv");
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("failed to open projects fixture {path:?}: {e}"));
    let reader = BufReader::new(file);

    ProjectsData::parse(reader).expect("failed to parse projects fixture")
}

#[test]
fn payments_fixture_parses_all_rows() {
    let payments = parse_payments_fixture();

    assert_eq!(payments.len(), 5);
}

#[test]
fn groups_follow_donor_key_order() {
    let groups = parse_payments_fixture().by_donor();

    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, ["D001", "D002", "D003"]);

    // журнал в фикстуре намеренно не отсортирован
    assert_eq!(groups["D001"].len(), 3);
    assert_eq!(groups["D002"].len(), 1);
    assert_eq!(groups["D003"].len(), 1);
}

#[test]
fn amounts_are_parsed_as_exact_cents() {
    let groups = parse_payments_fixture().by_donor();

    // сумма с разделителем тысяч
    assert_eq!(groups["D003"][0].amount, 120_000);
    // сумма без дробной части
    assert_eq!(groups["D002"][0].amount, 50_000);
    assert_eq!(groups["D001"][1].amount, 10_050);
}

#[test]
fn deductible_flag_is_read_per_row() {
    let groups = parse_payments_fixture().by_donor();

    let flags: Vec<bool> = groups["D001"].iter().map(|p| p.deductible).collect();
    assert_eq!(flags, [true, true, false]);
}

#[test]
fn projects_fixture_maps_codes_to_names() {
    let projects = parse_projects_fixture();

    assert_eq!(projects.len(), 3);
    assert_eq!(projects.name("P2"), "Building Fund");
    assert_eq!(projects.name("P9"), "");
}

#[test]
fn short_payment_row_is_an_error() {
    let result = PaymentsData::parse("D001,John Smith,01/15/2024\n".as_bytes());

    assert!(result.is_err(), "row without amount columns must not parse");
}

#[test]
fn bad_amount_is_an_error() {
    let result = PaymentsData::parse("D001,John Smith,01/15/2024,P1,ten,Y\n".as_bytes());

    assert!(result.is_err(), "non-numeric amount must not parse");
}

#[test]
fn blank_rows_are_skipped() {
    let data = PaymentsData::parse("D001,John,01/15/2024,P1,1.00,Y\n,,,,,\n".as_bytes())
        .expect("blank row should be skipped, not fail");

    assert_eq!(data.len(), 1);
}
