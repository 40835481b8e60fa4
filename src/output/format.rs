use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// Styling for the providers table
#[derive(Debug, Clone, Copy)]
pub(super) struct RowStyle {
    pub(super) use_color: bool,
}

impl RowStyle {
    pub(super) fn header(self, text: &str) -> Cell {
        let cell = Cell::new(text).add_attribute(Attribute::Bold);
        if self.use_color {
            cell.fg(Color::Cyan)
        } else {
            cell
        }
    }

    /// Cell in a provider row; the selected row is bold and green
    pub(super) fn cell(self, text: &str, selected: bool) -> Cell {
        let cell = Cell::new(text);
        if !selected {
            return cell;
        }
        let cell = cell.add_attribute(Attribute::Bold);
        if self.use_color {
            cell.fg(Color::Green)
        } else {
            cell
        }
    }
}

/// UTF-8 bordered table with a single-line header separator (├─┼─┤)
pub(super) fn providers_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
    table
}
