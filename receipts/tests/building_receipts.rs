use receipts::{PaymentsData, ProjectsData, build_receipts};
use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

fn fixture_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel)
}

fn build_fixture_receipts() -> Vec<receipts::Receipt> {
    let payments_file = File::open(fixture_path("payments.csv")).expect("payments fixture");
    let payments = PaymentsData::parse(BufReader::new(payments_file))
        .expect("failed to parse payments fixture");

    let projects_file = File::open(fixture_path("projects.csv")).expect("projects fixture");
    let projects = ProjectsData::parse(BufReader::new(projects_file))
        .expect("failed to parse projects fixture");

    build_receipts(payments.by_donor(), &projects, 100001)
}

#[test]
fn one_receipt_per_donor_numbered_in_key_order() {
    let receipts = build_fixture_receipts();

    assert_eq!(receipts.len(), 3);

    let numbers: Vec<u32> = receipts.iter().map(|r| r.number).collect();
    assert_eq!(numbers, [100001, 100002, 100003]);

    let names: Vec<&str> = receipts.iter().map(|r| r.donor_name.as_str()).collect();
    assert_eq!(names, ["John Smith", "Ann O'Neil", "Mary Jones"]);
}

#[test]
fn non_deductible_payment_is_absent_from_receipt() {
    let receipts = build_fixture_receipts();
    let john = &receipts[0];

    // в журнале у John три платежа, из них один невычитаемый
    assert_eq!(john.items.len(), 2);
    assert_eq!(john.total, 35_050);
    assert_eq!(john.deductible_total, 35_050);
    assert!(john.items.iter().all(|i| i.project_code != "P3"));
}

#[test]
fn line_items_carry_project_names() {
    let receipts = build_fixture_receipts();
    let john = &receipts[0];

    assert_eq!(john.items[0].project_name, "General Fund");
    assert_eq!(john.items[1].project_name, "Building Fund");
}

#[test]
fn amount_sentence_matches_total() {
    let receipts = build_fixture_receipts();

    assert_eq!(
        receipts[0].amount_sentence(),
        "Payment received from John Smith in the amount of \
         Three Hundred Fifty Dollars and Fifty Cents \
         for Sponsored Projects listed below."
    );
    assert_eq!(
        receipts[2].amount_sentence(),
        "Payment received from Mary Jones in the amount of \
         One Thousand Two Hundred Dollars \
         for Sponsored Projects listed below."
    );
}

#[test]
fn output_paths_are_numbered_and_sanitized() {
    let receipts = build_fixture_receipts();
    let folder = Path::new("out");

    assert_eq!(
        receipts[0].output_path(folder),
        PathBuf::from("out/100001-JohnSmith.pdf")
    );
    assert_eq!(
        receipts[1].output_path(folder),
        PathBuf::from("out/100002-AnnONeil.pdf")
    );
}
