//! Tests for row splitting

use super::super::tokenizer::{RawRow, split_rows};

#[test]
fn test_split_rows_preserves_order_and_header() {
    let rows = split_rows("h1,h2\na,b\nc,d", ',');

    let texts: Vec<&str> = rows.iter().map(|r| r.text).collect();
    assert_eq!(texts, vec!["h1,h2", "a,b", "c,d"]);
}

#[test]
fn test_split_rows_drops_blank_lines() {
    let rows = split_rows("header\n\n   \nrow\n\t\n", ',');

    assert_eq!(
        rows,
        vec![
            RawRow {
                line_number: 1,
                text: "header"
            },
            RawRow {
                line_number: 4,
                text: "row"
            },
        ]
    );
}

#[test]
fn test_split_rows_strips_carriage_returns() {
    let rows = split_rows("header\r\n1,Tapalpa\r\n", ',');

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].text, "1,Tapalpa");
}

#[test]
fn test_split_rows_empty_input() {
    assert!(split_rows("", ',').is_empty());
    assert!(split_rows("\n\n  \n", ',').is_empty());
}

#[test]
fn test_split_rows_keeps_trailing_tab_delimiter() {
    let rows = split_rows("h\n1\tTapalpa\t19.95\t-103.77\tnota\t2h\thttp://r\t\r\n", '\t');

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].text, "1\tTapalpa\t19.95\t-103.77\tnota\t2h\thttp://r\t");
}
