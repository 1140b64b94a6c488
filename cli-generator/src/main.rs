use std::path::PathBuf;
use clap::Parser;
use receipts::{Config, PaymentsData, ProjectsData, ReceiptError, build_receipts, pdf};
use std::fs::{self, File};
use std::io::BufReader;
use std::process;


#[derive(Parser, Debug)]
#[command(
    name = "cli_generator",
    version,
    about = "Формирует PDF-квитанции о пожертвованиях из журнала платежей.",
    long_about = None,
)]
struct Args {
    /// Файл конфигурации
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Печатать квитанции в stdout вместо записи PDF
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), ReceiptError> {
    let args = Args::parse();

    if !args.config.exists() {
        eprintln!("config file does not exist: {}", args.config.display());
        process::exit(1)
    }

    let config = Config::load(&args.config)?;

    let projects_file = File::open(&config.projects_file).unwrap_or_else(|err| {
        eprintln!(
            "failed to open projects file {}: {err}",
            config.projects_file.display()
        );
        process::exit(1);
    });
    let projects = ProjectsData::parse(BufReader::new(projects_file))?;

    let payments_file = File::open(&config.payments_file).unwrap_or_else(|err| {
        eprintln!(
            "failed to open payments file {}: {err}",
            config.payments_file.display()
        );
        process::exit(1);
    });
    let payments = PaymentsData::parse(BufReader::new(payments_file))?;

    let receipts = build_receipts(payments.by_donor(), &projects, config.receipt_start_number);

    if args.dry_run {
        for receipt in &receipts {
            println!("{receipt}");
            println!();
        }
        return Ok(());
    }

    fs::create_dir_all(&config.output_folder)?;

    for receipt in &receipts {
        let doc = pdf::render(&config, receipt)?;
        let path = receipt.output_path(&config.output_folder);
        pdf::save(doc, &path)?;
        println!("wrote {}", path.display());
    }

    println!("{} receipt(s) generated", receipts.len());

    Ok(())
}
