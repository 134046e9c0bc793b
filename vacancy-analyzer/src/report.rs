//! Plain-text rendering of the language stats

use crate::models::StatsTable;

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Найдено вакансий",
    "Обработано вакансий",
    "Средняя зарплата",
];
/// Shown in place of an average when no salary could be estimated
const NO_DATA: &str = "-";

#[derive(Clone, Copy)]
enum Justify {
    Left,
    Right,
}

const JUSTIFY: [Justify; 4] = [Justify::Left, Justify::Left, Justify::Left, Justify::Right];

fn width(cell: &str) -> usize {
    cell.chars().count()
}

fn border(widths: &[usize], title: Option<&str>) -> String {
    let line = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let line = format!("+{}+", line);
    match title {
        // the title replaces the start of the top border when it fits inside it
        Some(title) if width(title) + 2 <= width(&line) => {
            let rest = line.chars().skip(width(title) + 1).collect::<String>();
            format!("+{}{}", title, rest)
        }
        _ => line,
    }
}

fn row(cells: &[String], widths: &[usize]) -> String {
    let cells = cells
        .iter()
        .zip(widths)
        .zip(JUSTIFY)
        .map(|((cell, &w), justify)| match justify {
            Justify::Left => format!(" {:<w$} ", cell, w = w),
            Justify::Right => format!(" {:>w$} ", cell, w = w),
        })
        .collect::<Vec<_>>()
        .join("|");
    format!("|{}|", cells)
}

/// Render the stats as an ascii table with `title` set into its top border
pub fn format_table(stats: &StatsTable, title: &str) -> String {
    let header = HEADER.map(String::from).to_vec();
    let rows = stats
        .iter()
        .map(|stats| {
            vec![
                stats.language.clone(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats
                    .average_salary
                    .map(|average| average.to_string())
                    .unwrap_or_else(|| NO_DATA.to_owned()),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = header.iter().map(|cell| width(cell)).collect::<Vec<_>>();
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(width(cell));
        }
    }

    let separator = border(&widths, None);
    let mut lines = vec![border(&widths, Some(title)), row(&header, &widths), separator.clone()];
    lines.extend(rows.iter().map(|cells| row(cells, &widths)));
    lines.push(separator);
    lines.join("\n")
}
