use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use edugroup_cli::types::RunResult;
use edugroup_core::GroupingMode;
use edugroup_output::group_label;

pub fn print_summary(result: &RunResult) {
    match result.mode {
        GroupingMode::BySubject => println!("Mode: by subject"),
        GroupingMode::FixedCount(count) => println!("Mode: fixed count ({count})"),
    }
    println!("Seed: {}", result.seed);
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Size"),
        header_cell("Students"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (index, group) in result.groups.iter().enumerate() {
        let students = if group.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(group.students().join(", "))
        };
        table.add_row(vec![Cell::new(group_label(index)), size_cell(group.len()), students]);
    }
    table.add_row(vec![
        Cell::new("Total")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.summary.student_count).add_attribute(Attribute::Bold),
        dim_cell(format!(
            "{} groups, sizes {}-{}",
            result.summary.group_count, result.summary.smallest, result.summary.largest
        )),
    ]);
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn size_cell(size: usize) -> Cell {
    if size == 0 {
        Cell::new(size).fg(Color::Yellow)
    } else {
        Cell::new(size)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
