use crate::domain::model::Report;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Renders a report as an ASCII grid with the title embedded in the top
/// border. Columns are sized to the widest cell; cells are left-aligned.
pub fn render(report: &Report) -> String {
    let mut grid: Vec<[String; 4]> = vec![HEADERS.map(str::to_string)];
    for row in &report.rows {
        grid.push([
            row.language.clone(),
            row.stats.vacancies_found.to_string(),
            row.stats.vacancies_processed.to_string(),
            row.stats.average_salary.to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &grid {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    // Widen the last column when the title would outgrow the border, so the
    // top line always closes with the grid.
    let span: usize = 1 + widths.iter().map(|w| w + 3).sum::<usize>();
    let needed = report.title.chars().count() + 2;
    if span < needed {
        widths[3] += needed - span;
    }

    let border = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let top = {
        let mut line = String::from("+");
        line.push_str(&report.title);
        let used = line.chars().count();
        line.extend(border.chars().skip(used));
        line
    };

    let mut lines = vec![top];
    for (i, row) in grid.iter().enumerate() {
        let mut line = String::from("|");
        for (width, cell) in widths.into_iter().zip(row.iter()) {
            line.push_str(&format!(" {cell:<width$} |"));
        }
        lines.push(line);
        if i == 0 {
            lines.push(border.clone());
        }
    }
    lines.push(border);

    lines.join("\n")
}
