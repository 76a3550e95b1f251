mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_calculate_consumer_loan() {
    let mut cmd = Command::new(cargo_bin!("loancalc"));
    cmd.args([
        "calculate",
        "--loan",
        "Crédito de Consumo",
        "--amount",
        "5000000",
        "--years",
        "1",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"monthly_payment\": \"$465,568.87\""))
        .stdout(predicate::str::contains("\"annual_interest_rate\": \"21.00%\""))
        .stdout(predicate::str::contains("\"month\": 12"))
        .stdout(predicate::str::contains("\"month\": 13").not())
        .stdout(predicate::str::contains("\"remaining_balance\": \"$0.00\""));
}

#[test]
fn test_calculate_with_rate_override_as_csv() {
    let mut cmd = Command::new(cargo_bin!("loancalc"));
    cmd.args([
        "--format",
        "csv",
        "calculate",
        "--loan",
        "Libranza",
        "--amount",
        "6000000",
        "--years",
        "2",
        "--rate",
        "0",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "principal,total_payment,total_interest,monthly_payment,annual_interest_rate,num_payments,final_payment_date\n\
             6000000.00,6000000.00,0.00,250000.00,0,24,",
        ))
        .stdout(predicate::str::contains(
            "\n\nmonth,due_date,monthly_payment,principal_paid,interest_paid,remaining_balance\n",
        ))
        .stdout(predicate::str::contains(",250000.00,250000.00,0"))
        .stdout(predicate::str::contains("\n24,"));
}

#[test]
fn test_calculate_out_of_range() {
    let mut cmd = Command::new(cargo_bin!("loancalc"));
    cmd.args([
        "calculate",
        "--loan",
        "Crédito de Consumo",
        "--amount",
        "30000000",
        "--years",
        "1",
    ]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Requested amount $30,000,000.00 is not within the allowed range",
        ))
        .stderr(predicate::str::contains("$25,000,000.00"));
}

#[test]
fn test_calculate_zero_term() {
    let mut cmd = Command::new(cargo_bin!("loancalc"));
    cmd.args([
        "calculate",
        "--loan",
        "Crédito de Consumo",
        "--amount",
        "5000000",
        "--years",
        "0",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Loan term must be at least one year"));
}

#[test]
fn test_calculate_negative_rate() {
    let mut cmd = Command::new(cargo_bin!("loancalc"));
    cmd.args([
        "calculate",
        "--loan",
        "Crédito de Consumo",
        "--amount",
        "5000000",
        "--years",
        "1",
        "--rate",
        "-0.05",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn test_calculate_unknown_product() {
    let mut cmd = Command::new(cargo_bin!("loancalc"));
    cmd.args(["calculate", "--loan", "Tarjeta", "--amount", "1", "--years", "1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Loan product 'Tarjeta' not found"));
}

#[test]
fn test_list_and_search_builtin_catalog() {
    Command::new(cargo_bin!("loancalc"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Libranza"))
        .stdout(predicate::str::contains("Microcrédito para Negocio"));

    Command::new(cargo_bin!("loancalc"))
        .args(["search", "VIVIENDA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hipotecario Vivienda"))
        .stdout(predicate::str::contains("Libranza").not());

    Command::new(cargo_bin!("loancalc"))
        .args(["search", "tarjeta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No loan found matching name 'tarjeta'"));
}

#[test]
fn test_show_missing_loan() {
    Command::new(cargo_bin!("loancalc"))
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Loan with id 99 not found"));
}

#[test]
fn test_catalog_file_mutations_are_written_back() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::write_catalog(dir.path()).unwrap();

    Command::new(cargo_bin!("loancalc"))
        .arg("--catalog")
        .arg(&catalog)
        .args([
            "create", "--name", "Crédito Rotativo", "--min", "1000000", "--max", "8000000",
            "--rate", "0.27",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Crédito Rotativo"));

    let written = std::fs::read_to_string(&catalog).unwrap();
    assert!(written.contains("6,Crédito Rotativo,1000000,8000000,0.27"));

    Command::new(cargo_bin!("loancalc"))
        .arg("--catalog")
        .arg(&catalog)
        .args(["update", "1", "--rate", "0.17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"annual_interest_rate\": \"0.17\""));

    Command::new(cargo_bin!("loancalc"))
        .arg("--catalog")
        .arg(&catalog)
        .args(["delete", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan with id 5 deleted successfully"));

    let written = std::fs::read_to_string(&catalog).unwrap();
    assert!(written.contains("1,Libranza,5000000,50000000,0.17"));
    assert!(!written.contains("Crédito Educativo"));

    Command::new(cargo_bin!("loancalc"))
        .arg("--catalog")
        .arg(&catalog)
        .args(["calculate", "--loan", "Crédito Rotativo", "--amount", "2000000", "--years", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"annual_interest_rate\": \"27.00%\""));
}

#[test]
fn test_invalid_update_leaves_catalog_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::write_catalog(dir.path()).unwrap();
    let before = std::fs::read_to_string(&catalog).unwrap();

    Command::new(cargo_bin!("loancalc"))
        .arg("--catalog")
        .arg(&catalog)
        .args(["update", "1", "--max", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    assert_eq!(std::fs::read_to_string(&catalog).unwrap(), before);
}

#[test]
fn test_empty_update_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::write_catalog(dir.path()).unwrap();
    let before = std::fs::read_to_string(&catalog).unwrap();

    Command::new(cargo_bin!("loancalc"))
        .arg("--catalog")
        .arg(&catalog)
        .args(["update", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least one field"));

    assert_eq!(std::fs::read_to_string(&catalog).unwrap(), before);
}

#[test]
fn test_catalog_with_highest_id_loads() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.csv");
    std::fs::write(
        &catalog,
        "id,name,minimum_amount,maximum_amount,annual_interest_rate\n\
         4294967295,Libranza,5000000,50000000,0.165\n",
    )
    .unwrap();

    Command::new(cargo_bin!("loancalc"))
        .arg("--catalog")
        .arg(&catalog)
        .args(["show", "4294967295"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Libranza"));

    Command::new(cargo_bin!("loancalc"))
        .arg("--catalog")
        .arg(&catalog)
        .args(["create", "--name", "Otro", "--min", "1", "--max", "2", "--rate", "0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no loan ids left"));
}

#[test]
fn test_calculate_rejects_terms_over_thirty_years() {
    Command::new(cargo_bin!("loancalc"))
        .args([
            "calculate",
            "--loan",
            "Libranza",
            "--amount",
            "6000000",
            "--years",
            "31",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--years"));
}
