use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use feed_cli::convert::{ConvertResult, ConvertStatus};
use feed_model::{DOCUMENTATION_LINK, FeedError};

pub fn print_summary(result: &ConvertResult) {
    match &result.status {
        ConvertStatus::Written { items } => {
            println!("XML file created!");
            let mut table = Table::new();
            apply_table_style(&mut table);
            table.set_header(vec![
                header_cell("Source"),
                header_cell("Output"),
                header_cell("Items"),
            ]);
            table.add_row(vec![
                Cell::new(result.source.display()),
                Cell::new(result.output.display()),
                Cell::new(items),
            ]);
            println!("{table}");
        }
        ConvertStatus::Rejected(FeedError::UnsupportedFields { fields }) => {
            eprintln!("error: There are fields in the table that we do not support:");
            let mut table = Table::new();
            apply_table_style(&mut table);
            table.set_header(vec![header_cell("Column")]);
            for field in fields {
                table.add_row(vec![Cell::new(field).fg(Color::Red)]);
            }
            eprintln!("{table}");
            eprintln!("Please check the documentation at: {DOCUMENTATION_LINK}");
        }
        ConvertStatus::Rejected(error) => {
            eprintln!("error: {error}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
