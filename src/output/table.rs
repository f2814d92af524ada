//! Table output formatting

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Columns, object::Rows},
};

/// Format rows as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format a single record as a two-column FIELD / VALUE table
pub fn format_record(fields: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    for (name, value) in fields {
        builder.push_record([name.to_string(), value.clone()]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct RecipeRow {
        #[tabled(rename = "ID")]
        id: u64,
        #[tabled(rename = "TITLE")]
        title: String,
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<RecipeRow> = vec![];
        assert_eq!(format_table(&items), "No results found.");
    }

    #[test]
    fn test_format_table_rows_and_headers() {
        let items = vec![
            RecipeRow {
                id: 1,
                title: "Sopa de pollo".to_string(),
            },
            RecipeRow {
                id: 2,
                title: "Arroz con leche".to_string(),
            },
        ];

        let result = format_table(&items);

        assert!(result.contains("TITLE"));
        assert!(result.contains("Sopa de pollo"));
        assert!(result.contains("Arroz con leche"));
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_record() {
        let result = format_record(&[
            ("ID", "716429".to_string()),
            ("Title", "Pasta con ajo".to_string()),
        ]);

        assert!(result.contains("716429"));
        assert!(result.contains("Pasta con ajo"));
        assert!(result.contains("╭"));
    }
}
