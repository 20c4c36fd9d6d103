//! Tests for command formatting.

use super::*;
use std::fs;
use tempfile::TempDir;

const INPUT_HEADER: &str = "№,Telegram Name,Access Token,Refresh Token,Proxy,Auth TG Query Link";

fn cell(text: &str) -> Cell {
    Cell::from(text)
}

#[test]
fn test_add_account_with_all_fields() {
    let (name, at, rt, proxy) = (cell("alice"), cell("AT1"), cell("RT1"), cell("1.2.3.4:1080"));
    let record = AccountRecord {
        telegram_name: Some(&name),
        access_token: Some(&at),
        refresh_token: Some(&rt),
        proxy: Some(&proxy),
        auth_tg_query_link: None,
    };

    assert_eq!(
        format_add_account(&record),
        "/addaccount alice AT1 RT1 -120 socks5://1.2.3.4:1080"
    );
    assert_eq!(format_provider_token(&record), "");
}

#[test]
fn test_add_account_strips_whitespace() {
    let (name, at, rt, proxy) = (
        cell("  bob "),
        cell("\tAT2"),
        cell("RT2  "),
        cell(" 10.0.0.1:9050 "),
    );
    let record = AccountRecord {
        telegram_name: Some(&name),
        access_token: Some(&at),
        refresh_token: Some(&rt),
        proxy: Some(&proxy),
        auth_tg_query_link: None,
    };

    assert_eq!(
        format_add_account(&record),
        "/addaccount bob AT2 RT2 -120 socks5://10.0.0.1:9050"
    );
}

#[test]
fn test_add_account_empty_when_any_field_missing() {
    let (name, at, rt, proxy, nan) = (cell("a"), cell("b"), cell("c"), cell("d"), cell("NaN"));
    let full = AccountRecord {
        telegram_name: Some(&name),
        access_token: Some(&at),
        refresh_token: Some(&rt),
        proxy: Some(&proxy),
        auth_tg_query_link: None,
    };

    let without_name = AccountRecord { telegram_name: None, ..full };
    let nan_token = AccountRecord { access_token: Some(&nan), ..full };
    let empty = cell("");
    let empty_refresh = AccountRecord { refresh_token: Some(&empty), ..full };
    let without_proxy = AccountRecord { proxy: None, ..full };

    assert!(!format_add_account(&full).is_empty());
    assert_eq!(format_add_account(&without_name), "");
    assert_eq!(format_add_account(&nan_token), "");
    assert_eq!(format_add_account(&empty_refresh), "");
    assert_eq!(format_add_account(&without_proxy), "");
}

#[test]
fn test_provider_token() {
    let (name, link) = (cell(" carol "), cell("https://t.me/app?startapp=x "));
    let record = AccountRecord {
        telegram_name: Some(&name),
        auth_tg_query_link: Some(&link),
        ..AccountRecord::default()
    };

    assert_eq!(
        format_provider_token(&record),
        "/providertoken carol https://t.me/app?startapp=x"
    );
    // The add command needs tokens and proxy, which are absent here.
    assert_eq!(format_add_account(&record), "");
}

#[test]
fn test_provider_token_empty_without_name() {
    let link = cell("query");
    let record = AccountRecord {
        auth_tg_query_link: Some(&link),
        ..AccountRecord::default()
    };

    assert_eq!(format_provider_token(&record), "");
}

#[test]
fn test_integer_cells_are_coerced_to_text() {
    let (name, at, rt, proxy) = (Cell::Integer(42), cell("a"), cell("r"), cell("h:1"));
    let record = AccountRecord {
        telegram_name: Some(&name),
        access_token: Some(&at),
        refresh_token: Some(&rt),
        proxy: Some(&proxy),
        auth_tg_query_link: None,
    };

    assert_eq!(format_add_account(&record), "/addaccount 42 a r -120 socks5://h:1");
}

#[test]
fn test_augment_appends_columns_and_keeps_originals() {
    let mut table = Table::new([
        "№",
        "Telegram Name",
        "Access Token",
        "Refresh Token",
        "Proxy",
        "Auth TG Query Link",
    ]);
    table.push_row(vec![
        cell("1"),
        cell("alice"),
        cell("AT1"),
        cell("RT1"),
        cell("1.2.3.4:1080"),
        cell(""),
    ]);
    table.push_row(vec![cell("2"), cell("bob"), cell(""), cell(""), cell(""), cell("link")]);
    let original = table.clone();

    let summary = augment(&mut table).unwrap();

    assert_eq!(
        summary,
        FormatSummary {
            rows: 2,
            add_commands: 1,
            provider_commands: 1
        }
    );
    assert_eq!(&table.headers()[..6], original.headers());
    assert_eq!(table.headers()[6], ADD_COMMAND);
    assert_eq!(table.headers()[7], PROVIDER_TOKEN_COMMAND);
    for (row, before) in table.rows().iter().zip(original.rows()) {
        assert_eq!(&row[..6], before.as_slice());
    }
    assert_eq!(
        table.rows()[0][6],
        cell("/addaccount alice AT1 RT1 -120 socks5://1.2.3.4:1080")
    );
    assert_eq!(table.rows()[0][7], cell(""));
    assert_eq!(table.rows()[1][6], cell(""));
    assert_eq!(table.rows()[1][7], cell("/providertoken bob link"));
}

#[test]
fn test_summary_flags_tables_without_any_command() {
    let mut table = Table::new([
        "Telegram Name",
        "Access Token",
        "Refresh Token",
        "Proxy",
        "Auth TG Query Link",
    ]);
    let empty = augment(&mut table.clone()).unwrap();
    assert!(!empty.nothing_derived());

    table.push_row(vec![cell("a"), cell(""), cell(""), cell(""), cell("")]);
    let blank = augment(&mut table.clone()).unwrap();
    assert!(blank.nothing_derived());

    table.push_row(vec![cell("b"), cell(""), cell(""), cell(""), cell("link")]);
    let partial = augment(&mut table).unwrap();
    assert!(!partial.nothing_derived());
    assert_eq!(partial.provider_commands, 1);
}

#[test]
fn test_augment_is_stable_on_its_own_output() {
    let mut table = Table::new([
        "Telegram Name",
        "Access Token",
        "Refresh Token",
        "Proxy",
        "Auth TG Query Link",
    ]);
    table.push_row(vec![cell("a"), cell("b"), cell("c"), cell("d"), cell("e")]);

    augment(&mut table).unwrap();
    let once = table.clone();
    augment(&mut table).unwrap();

    assert_eq!(table, once);
    assert_eq!(table.headers().len(), 7);
}

#[test]
fn test_augment_reports_all_missing_columns() {
    let mut table = Table::new(["Telegram Name", "Access Token"]);

    let err = augment(&mut table).unwrap_err();

    assert!(matches!(err, PrepError::SchemaError(_)));
    let message = err.to_string();
    assert!(message.contains("'Refresh Token'"));
    assert!(message.contains("'Proxy'"));
    assert!(message.contains("'Auth TG Query Link'"));
    assert!(!message.contains("'Access Token'"));
}

#[test]
fn test_process_csv_to_csv() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("accounts.csv");
    let output = temp_dir.path().join("output.csv");
    fs::write(
        &input,
        format!(
            "{INPUT_HEADER}\n\
             1,alice,AT1,RT1,1.2.3.4:1080,\n\
             2,bob,,,,https://link\n\
             3,,AT3,RT3,5.6.7.8:1080,https://other\n"
        ),
    )
    .unwrap();

    let summary = process(&input, &output).unwrap();

    assert_eq!(summary.rows, 3);
    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        format!("{INPUT_HEADER},Telegram Add Command,Telegram Provider Token")
    );
    assert_eq!(
        lines[1],
        "1,alice,AT1,RT1,1.2.3.4:1080,,/addaccount alice AT1 RT1 -120 socks5://1.2.3.4:1080,"
    );
    assert_eq!(lines[2], "2,bob,,,,https://link,,/providertoken bob https://link");
    assert_eq!(lines[3], "3,,AT3,RT3,5.6.7.8:1080,https://other,,");
    assert!(!content.contains('\r'));
    assert!(content.ends_with('\n'));
}

#[test]
fn test_process_does_not_modify_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("accounts.csv");
    let output = temp_dir.path().join("output.csv");
    let original = format!("{INPUT_HEADER}\n1,alice,AT1,RT1,1.2.3.4:1080,link\n");
    fs::write(&input, &original).unwrap();

    process(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&input).unwrap(), original);
}

#[test]
fn test_process_passes_null_markers_through() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("accounts.csv");
    let output = temp_dir.path().join("output.csv");
    fs::write(&input, format!("{INPUT_HEADER}\n1,alice,NULL,RT1,h:1,NaN\n")).unwrap();

    process(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().nth(1).unwrap(), "1,alice,NULL,RT1,h:1,NaN,,");
}

#[test]
fn test_process_missing_input_is_read_error_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("accounts.csv");
    let output = temp_dir.path().join("output.csv");

    let err = process(&input, &output).unwrap_err();

    assert!(matches!(err, PrepError::ReadError(_)));
    assert!(!output.exists());
}

#[test]
fn test_process_schema_error_keeps_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("accounts.csv");
    let output = temp_dir.path().join("output.csv");
    fs::write(&input, "Telegram Name,Proxy\nalice,h:1\n").unwrap();
    fs::write(&output, "previous run").unwrap();

    let err = process(&input, &output).unwrap_err();

    assert!(matches!(err, PrepError::SchemaError(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run");
}

#[test]
fn test_process_xlsx_input_to_csv_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("accounts.xlsx");
    let output = temp_dir.path().join("output.csv");

    let mut table = Table::new([
        "Telegram Name",
        "Access Token",
        "Refresh Token",
        "Proxy",
        "Auth TG Query Link",
    ]);
    table.push_row(vec![cell("dave"), cell("AT"), cell("RT"), cell("h:2"), cell("q")]);
    write_table(&input, &table, DEFAULT_SHEET_NAME).unwrap();

    let summary = process(&input, &output).unwrap();

    assert_eq!(summary.add_commands, 1);
    assert_eq!(summary.provider_commands, 1);
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("/addaccount dave AT RT -120 socks5://h:2"));
    assert!(content.contains("/providertoken dave q"));
}

#[test]
fn test_process_xlsx_keeps_numeric_cells_numeric() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("accounts.xlsx");
    let output = temp_dir.path().join("output.xlsx");

    let mut table = Table::new([
        "№",
        "Phone Number",
        "Telegram Name",
        "Access Token",
        "Refresh Token",
        "Proxy",
        "Auth TG Query Link",
    ]);
    table.push_row(vec![
        Cell::Integer(1),
        Cell::Integer(15550001),
        cell("erin"),
        cell("AT"),
        cell("RT"),
        cell("h:3"),
        cell(""),
    ]);
    write_table(&input, &table, DEFAULT_SHEET_NAME).unwrap();

    process(&input, &output).unwrap();

    let book = umya_spreadsheet::reader::xlsx::read(&output).unwrap();
    let sheet = book.get_sheet(&0).unwrap();
    assert_eq!(sheet.get_cell((1, 2)).unwrap().get_data_type(), "n");
    assert_eq!(sheet.get_cell((2, 2)).unwrap().get_data_type(), "n");
    assert_eq!(sheet.get_cell((3, 2)).unwrap().get_data_type(), "s");
    assert_eq!(sheet.get_value((1, 2)), "1");
    assert_eq!(sheet.get_value((2, 2)), "15550001");
    assert_eq!(
        sheet.get_value((8, 2)),
        "/addaccount erin AT RT -120 socks5://h:3"
    );
}
