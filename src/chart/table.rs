//! Terminal table of a sweep

use crate::sweep::Comparison;

/// Height column plus one seconds column per series
pub fn render_table(comparison: &Comparison) -> String {
    let mut header = format!("{:>8}", "height");
    for series in &comparison.series {
        header.push_str(&format!(" | {:>14}", series.builder.label()));
    }

    let mut lines = vec![header.clone(), "-".repeat(header.len())];
    for (row, height) in comparison.heights.iter().enumerate() {
        let mut line = format!("{height:>8}");
        for series in &comparison.series {
            match series.times_secs.get(row) {
                Some(secs) => line.push_str(&format!(" | {secs:>14.3e}")),
                None => line.push_str(&format!(" | {:>14}", "-")),
            }
        }
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::Series;
    use crate::tree::Builder;

    #[test]
    fn test_table_layout() {
        let comparison = Comparison {
            heights: vec![1, 2],
            series: vec![
                Series {
                    builder: Builder::Recursive,
                    times_secs: vec![1e-6, 2e-6],
                },
                Series {
                    builder: Builder::Iterative,
                    times_secs: vec![3e-6],
                },
            ],
        };
        let table = render_table(&comparison);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Recursive"));
        assert!(lines[0].contains("Iterative"));
        assert!(lines[2].contains("1.000e-6"));
        assert!(lines[3].trim_end().ends_with('-'));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }
}
