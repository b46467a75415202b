//! Terminal tables for studies, segment tabs, and question projections.

use chrono::NaiveDate;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_model::StudyDocument;
use survey_segments::{
    BarChart, ChartDatum, Heatmap, QuestionProjection, QuestionTable, Rgb, SegmentColumn,
    StudyView, TableBody, derive_columns,
};
use survey_studies::{VisualStatus, format_date, visual_status};

pub fn study_list_table(studies: &[&StudyDocument], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Title"),
        header_cell("Status"),
        header_cell("Started"),
        header_cell("Ended"),
        header_cell("Respondents"),
        header_cell("Keywords"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    for study in studies {
        table.add_row(vec![
            dim_cell(&study.id),
            Cell::new(&study.title),
            status_cell(&visual_status(study, today)),
            Cell::new(format_date(study.started.as_deref())),
            Cell::new(format_date(study.ended.as_deref())),
            study
                .respondents
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(study.keywords.join(", ")),
        ]);
    }
    table
}

pub fn tag_table(tags: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Keyword")]);
    apply_table_style(&mut table);
    for tag in tags {
        table.add_row(vec![Cell::new(tag)]);
    }
    table
}

/// Tabs of the view's current catalog, the open one highlighted.
pub fn segment_table(view: &StudyView<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tab"),
        header_cell("Kind"),
        header_cell("Key"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);

    let study_data = view.study().and_then(|study| study.study_data.as_ref());
    for tab in view.catalog() {
        let columns = study_data
            .and_then(|data| data.get(&tab.parent_key))
            .map(|segment| derive_columns(tab, segment).len())
            .unwrap_or_default();
        let name = if view.active_key() == Some(tab.key.as_str()) {
            Cell::new(&tab.name)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&tab.name)
        };
        table.add_row(vec![
            name,
            Cell::new(tab.kind.name()),
            dim_cell(&tab.key),
            count_cell(columns),
        ]);
    }
    table
}

/// Title and table for one question projection.
pub fn projection_table(projection: &QuestionProjection, placeholder: &str) -> (String, Table) {
    match projection {
        QuestionProjection::Table(question) => (question.question.clone(), question_grid(question, placeholder)),
        QuestionProjection::Chart(chart) => (chart.question.clone(), bar_chart_table(chart)),
        QuestionProjection::Totals { question, data } => (question.clone(), totals_table(data)),
        QuestionProjection::Heatmap(heatmap) => (heatmap.question.clone(), heatmap_table(heatmap)),
    }
}

fn question_grid(question: &QuestionTable, placeholder: &str) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    match &question.body {
        TableBody::Grid { columns, rows } => {
            table.set_header(response_header(columns));
            for row in rows {
                let mut cells = vec![Cell::new(&row.option)];
                cells.extend(row.cells.iter().map(|cell| {
                    if cell.is_missing() {
                        dim_cell(placeholder)
                    } else {
                        Cell::new(cell.render(placeholder))
                    }
                }));
                table.add_row(cells);
            }
            right_align_from(&mut table, 1);
        }
        TableBody::Options { options } => {
            table.set_header(vec![header_cell("Response"), header_cell("Total")]);
            for option in options {
                let total = option
                    .total
                    .as_ref()
                    .map_or_else(|| dim_cell("-"), |total| Cell::new(total.to_string()));
                table.add_row(vec![Cell::new(&option.option), total]);
            }
            align_column(&mut table, 1, CellAlignment::Right);
        }
        TableBody::Empty => {
            table.set_header(vec![header_cell("Response")]);
            table.add_row(vec![dim_cell("No columns or options for this question.")]);
        }
    }
    table
}

fn bar_chart_table(chart: &BarChart) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let mut header = vec![header_cell("Response")];
    header.extend(chart.bars.iter().map(|bar| {
        let cell = Cell::new(&bar.name).add_attribute(Attribute::Bold);
        match bar.fill.parse::<Rgb>() {
            Ok(color) => cell.fg(rgb(color)),
            Err(_) => cell,
        }
    }));
    table.set_header(header);
    for record in &chart.records {
        let mut cells = vec![Cell::new(&record.name)];
        cells.extend(chart.bars.iter().map(|bar| {
            Cell::new(record.values.get(&bar.data_key).copied().unwrap_or(0.0))
        }));
        table.add_row(cells);
    }
    right_align_from(&mut table, 1);
    table
}

fn totals_table(data: &[ChartDatum]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Response"), header_cell("Total")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for datum in data {
        table.add_row(vec![Cell::new(&datum.name), Cell::new(datum.value)]);
    }
    table
}

/// Options as rows, columns as columns; unresolved cells stay blank.
fn heatmap_table(heatmap: &Heatmap) -> Table {
    let mut options: Vec<&str> = Vec::new();
    let mut headers: Vec<&str> = Vec::new();
    for cell in &heatmap.cells {
        if !options.contains(&cell.x.as_str()) {
            options.push(&cell.x);
        }
        if !headers.contains(&cell.y.as_str()) {
            headers.push(&cell.y);
        }
    }

    let mut table = Table::new();
    apply_table_style(&mut table);
    let mut header = vec![header_cell("Response")];
    header.extend(headers.iter().map(|label| header_cell(label)));
    table.set_header(header);

    for option in &options {
        let mut row = vec![Cell::new(option)];
        row.extend(headers.iter().map(|label| {
            heatmap
                .cells
                .iter()
                .find(|cell| cell.x == *option && cell.y == *label)
                .map_or_else(
                    || dim_cell(""),
                    |cell| {
                        Cell::new(cell.value)
                            .bg(rgb(cell.color))
                            .fg(Color::Black)
                    },
                )
        }));
        table.add_row(row);
    }
    if options.is_empty() {
        table.add_row(vec![dim_cell("No data available for this question.")]);
    }
    right_align_from(&mut table, 1);
    table
}

fn response_header(columns: &[SegmentColumn]) -> Vec<Cell> {
    let mut header = vec![header_cell("Response")];
    header.extend(
        columns
            .iter()
            .map(|column| header_cell(&format!("{} ({})", column.header, column.count))),
    );
    header
}

fn status_cell(status: &VisualStatus) -> Cell {
    let cell = Cell::new(status.label());
    match status {
        VisualStatus::Completed => cell.fg(Color::Green),
        VisualStatus::Ongoing => cell.fg(Color::Yellow),
        VisualStatus::Scheduled => cell.fg(Color::Blue),
        VisualStatus::Other(_) => cell.fg(Color::DarkGrey),
    }
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn right_align_from(table: &mut Table, first: usize) {
    for index in first..table.column_count() {
        align_column(table, index, CellAlignment::Right);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
