//! ASCII table rendering for result sets, sized to the terminal.

use terminal_size::{terminal_size, Width};

fn get_terminal_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).max(20)
    } else {
        120
    }
}

fn build_separator(widths: &[usize]) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.push_str(&"-".repeat(w + 2));
        s.push('+');
    }
    s
}

fn build_row(cells: &[&str], widths: &[usize]) -> String {
    let mut s = String::from("|");
    for (cell, w) in cells.iter().zip(widths.iter()) {
        s.push(' ');
        s.push_str(cell);
        if cell.len() < *w {
            s.push_str(&" ".repeat(w - cell.len()));
        }
        s.push_str(" |");
    }
    s
}

fn fit_line_to_width(line: &str, termw: usize) -> String {
    if line.len() <= termw {
        line.to_string()
    } else {
        line.chars().take(termw).collect()
    }
}

/// Print headers and rows as a bordered table, truncating lines to the
/// detected terminal width. Rows shorter than the header are padded.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let termw = get_terminal_width();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let sep = build_separator(&widths);
    println!("{}", fit_line_to_width(&sep, termw));
    println!("{}", fit_line_to_width(&build_row(headers, &widths), termw));
    println!("{}", fit_line_to_width(&sep, termw));
    let empty = String::new();
    for row in rows {
        let cells: Vec<&str> = (0..widths.len())
            .map(|i| row.get(i).unwrap_or(&empty).as_str())
            .collect();
        println!("{}", fit_line_to_width(&build_row(&cells, &widths), termw));
    }
    println!("{}", fit_line_to_width(&sep, termw));
    println!("{} row(s)", rows.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_matches_widths() {
        assert_eq!(build_separator(&[3, 1]), "+-----+---+");
    }

    #[test]
    fn row_pads_cells() {
        assert_eq!(build_row(&["ab", "c"], &[4, 1]), "| ab   | c |");
    }

    #[test]
    fn fit_truncates() {
        assert_eq!(fit_line_to_width("abcdef", 4), "abcd");
        assert_eq!(fit_line_to_width("abc", 4), "abc");
    }
}
